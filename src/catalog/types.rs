use serde::{Deserialize, Serialize};

/// A vehicle manufacturer and the models it sells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarMake {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub models: Vec<CarModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarModel {
    pub id: String,
    pub name: String,
    pub year: u16,
    pub image: String,
    /// Base price in whole dollars
    #[serde(default)]
    pub msrp: Option<u32>,
    #[serde(default)]
    pub body_style: Option<String>,
    #[serde(default)]
    pub mpg: Option<String>,
}

impl CarModel {
    /// Display name in "year make model" form, e.g. "2025 Honda Civic"
    pub fn full_name(&self, make: &CarMake) -> String {
        format!("{} {} {}", self.year, make.name, self.name)
    }
}

/// A new or used car for sale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub id: String,
    pub title: String,
    pub image_url: String,
    /// Asking price in whole dollars
    pub price: u32,
    #[serde(default)]
    pub mileage: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub category: String,
    /// Publication date as shown to readers (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub image_url: String,
    /// Running time as "m:ss"
    pub duration: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// The whole in-memory content catalog
///
/// Every list is kept in catalog order; scans rely on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub car_makes: Vec<CarMake>,
    #[serde(default)]
    pub new_cars: Vec<CarListing>,
    #[serde(default)]
    pub used_cars: Vec<CarListing>,
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}
