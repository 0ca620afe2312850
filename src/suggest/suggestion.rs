//! Suggestion types shared by the engine, the search state and rendering

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Kind of entity a suggestion points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionType {
    Article,
    NewCar,
    UsedCar,
    Photo,
    Video,
    Popular,
    CarMake,
    CarModel,
    AiSuggestion,
}

impl SuggestionType {
    /// Order in which groups appear in a suggestion list
    pub const GROUP_ORDER: [SuggestionType; 9] = [
        SuggestionType::AiSuggestion,
        SuggestionType::NewCar,
        SuggestionType::UsedCar,
        SuggestionType::CarMake,
        SuggestionType::CarModel,
        SuggestionType::Article,
        SuggestionType::Video,
        SuggestionType::Photo,
        SuggestionType::Popular,
    ];

    /// Position of this type in [`Self::GROUP_ORDER`]
    pub fn group_rank(&self) -> usize {
        Self::GROUP_ORDER
            .iter()
            .position(|t| t == self)
            .unwrap_or(Self::GROUP_ORDER.len())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::Article => "article",
            SuggestionType::NewCar => "newCar",
            SuggestionType::UsedCar => "usedCar",
            SuggestionType::Photo => "photo",
            SuggestionType::Video => "video",
            SuggestionType::Popular => "popular",
            SuggestionType::CarMake => "carMake",
            SuggestionType::CarModel => "carModel",
            SuggestionType::AiSuggestion => "aiSuggestion",
        }
    }

    /// Header shown above the group in the dropdown
    pub fn group_label(&self) -> &'static str {
        match self {
            SuggestionType::Article => "Articles",
            SuggestionType::NewCar => "New Cars",
            SuggestionType::UsedCar => "Used Cars",
            SuggestionType::Photo => "Photos",
            SuggestionType::Video => "Videos",
            SuggestionType::Popular => "Popular Searches",
            SuggestionType::CarMake => "Makes",
            SuggestionType::CarModel => "Models",
            SuggestionType::AiSuggestion => "Ask the Assistant",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SuggestionType::AiSuggestion => Color::Magenta,
            SuggestionType::NewCar | SuggestionType::UsedCar => Color::Green,
            SuggestionType::CarMake | SuggestionType::CarModel => Color::Cyan,
            SuggestionType::Article => Color::Yellow,
            SuggestionType::Video | SuggestionType::Photo => Color::Blue,
            SuggestionType::Popular => Color::Gray,
        }
    }

    /// Whether the entity can be stored in the garage
    pub fn is_vehicle(&self) -> bool {
        matches!(
            self,
            SuggestionType::NewCar | SuggestionType::UsedCar | SuggestionType::CarModel
        )
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in the suggestion dropdown
///
/// Only `id`, `text` and `suggestion_type` are always present; the remaining
/// fields depend on the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Unique within one suggestion list, `<prefix>-<source id>`
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
}

impl Suggestion {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        suggestion_type: SuggestionType,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            suggestion_type,
            image_url: None,
            category: None,
            price: None,
            date: None,
            duration: None,
            make_id: None,
            model_id: None,
            ai_response: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_category(mut self, category: Option<impl Into<String>>) -> Self {
        self.category = category.map(Into::into);
        self
    }

    pub fn with_price(mut self, dollars: Option<u32>) -> Self {
        self.price = dollars.map(format_price);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_make_id(mut self, make_id: impl Into<String>) -> Self {
        self.make_id = Some(make_id.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_ai_response(mut self, response: impl Into<String>) -> Self {
        self.ai_response = Some(response.into());
        self
    }

    /// Catalog id of the underlying entity (the id without its type prefix)
    pub fn source_id(&self) -> &str {
        self.id
            .split_once('-')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.id)
    }

    /// Secondary detail shown to the right of the text in the dropdown
    pub fn detail(&self) -> Option<&str> {
        self.price
            .as_deref()
            .or(self.duration.as_deref())
            .or(self.date.as_deref())
            .or(self.category.as_deref())
    }
}

/// Format whole dollars as "$27,345"
pub fn format_price(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
