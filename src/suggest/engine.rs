//! Suggestion aggregation
//!
//! Scans each catalog section in catalog order into its own bounded bucket,
//! then concatenates the buckets in [`SuggestionType::GROUP_ORDER`] and cuts
//! the result to the global limit. A later group can be dropped entirely by
//! the global cut even when it never reached its own limit; results are not
//! relevance-ranked.

use std::collections::HashSet;
use std::sync::Arc;

use memchr::memmem;

use super::ai_templates::ai_suggestions;
use super::popular::popular_searches;
use super::suggestion::{Suggestion, SuggestionType};
use crate::catalog::{CatalogError, ContentStore};

/// Caps applied while building a suggestion list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Length of the final list
    pub max_total: usize,
    /// Per catalog type
    pub per_type: usize,
    /// Assistant suggestions
    pub ai: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_total: 15,
            per_type: 3,
            ai: 2,
        }
    }
}

/// Suggestion engine bound to a content store
pub struct SuggestionEngine {
    store: Arc<dyn ContentStore>,
    limits: SuggestionLimits,
}

impl SuggestionEngine {
    pub fn new(store: Arc<dyn ContentStore>, limits: SuggestionLimits) -> Self {
        Self { store, limits }
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    pub fn compute(&self, query: &str) -> Vec<Suggestion> {
        compute_suggestions(self.store.as_ref(), query, &self.limits)
    }
}

/// Build the suggestion list for `query`
///
/// Blank queries return the popular searches without touching the store.
/// Store failures are logged and produce an empty list.
pub fn compute_suggestions(
    store: &dyn ContentStore,
    query: &str,
    limits: &SuggestionLimits,
) -> Vec<Suggestion> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return popular_searches();
    }
    let query_lower = trimmed.to_lowercase();

    let scan = match CatalogScan::run(store, &query_lower, limits.per_type) {
        Ok(scan) => scan,
        Err(e) => {
            log::warn!("Suggestion lookup failed for {:?}: {}", trimmed, e);
            return Vec::new();
        }
    };

    let ai = ai_suggestions(trimmed, &query_lower, !scan.is_empty(), limits.ai);

    let suggestions: Vec<Suggestion> = ai
        .into_iter()
        .chain(scan.into_ordered())
        .take(limits.max_total)
        .collect();

    log::debug!(
        "{} suggestions for {:?}",
        suggestions.len(),
        trimmed
    );
    suggestions
}

/// Case-insensitive containment; `needle_lower` must already be lowercase
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    memmem::find(haystack.to_lowercase().as_bytes(), needle_lower.as_bytes()).is_some()
}

/// Collector that silently drops anything past its capacity
///
/// A suggestion whose id was already emitted by any bucket of the same scan
/// is skipped and does not count against the capacity.
struct Bucket {
    items: Vec<Suggestion>,
    cap: usize,
}

impl Bucket {
    fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    fn push(&mut self, suggestion: Suggestion, seen: &mut HashSet<String>) {
        if self.is_full() || !seen.insert(suggestion.id.clone()) {
            return;
        }
        self.items.push(suggestion);
    }
}

struct CatalogScan {
    new_cars: Bucket,
    used_cars: Bucket,
    makes: Bucket,
    models: Bucket,
    articles: Bucket,
    videos: Bucket,
    photos: Bucket,
}

impl CatalogScan {
    fn run(store: &dyn ContentStore, query: &str, per_type: usize) -> Result<Self, CatalogError> {
        let mut scan = Self {
            new_cars: Bucket::new(per_type),
            used_cars: Bucket::new(per_type),
            makes: Bucket::new(per_type),
            models: Bucket::new(per_type),
            articles: Bucket::new(per_type),
            videos: Bucket::new(per_type),
            photos: Bucket::new(per_type),
        };
        let mut seen = HashSet::new();

        // Make-major: a make's models are visited before the next make, so
        // the model cap is exhausted by whichever makes come first.
        for make in store.car_makes()? {
            if !scan.makes.is_full() && contains_ci(&make.name, query) {
                scan.makes.push(
                    Suggestion::new(format!("make-{}", make.id), &make.name, SuggestionType::CarMake)
                        .with_image_url(&make.image)
                        .with_make_id(&make.id),
                    &mut seen,
                );
            }
            for model in &make.models {
                if scan.models.is_full() {
                    break;
                }
                let full_name = model.full_name(make);
                if contains_ci(&full_name, query) || contains_ci(&model.name, query) {
                    scan.models.push(
                        Suggestion::new(
                            format!("model-{}/{}", make.id, model.id),
                            full_name,
                            SuggestionType::CarModel,
                        )
                        .with_image_url(&model.image)
                        .with_make_id(&make.id)
                        .with_model_id(&model.id)
                        .with_price(model.msrp)
                        .with_category(model.body_style.as_deref()),
                        &mut seen,
                    );
                }
            }
        }

        for (listings, bucket, prefix, kind) in [
            (store.new_cars()?, &mut scan.new_cars, "new", SuggestionType::NewCar),
            (store.used_cars()?, &mut scan.used_cars, "used", SuggestionType::UsedCar),
        ] {
            for car in listings.iter().filter(|c| contains_ci(&c.title, query)) {
                if bucket.is_full() {
                    break;
                }
                bucket.push(
                    Suggestion::new(format!("{}-{}", prefix, car.id), &car.title, kind)
                        .with_image_url(&car.image_url)
                        .with_price(Some(car.price))
                        .with_category(car.location.as_deref()),
                    &mut seen,
                );
            }
        }

        for article in store.articles()?.iter().filter(|a| contains_ci(&a.title, query)) {
            if scan.articles.is_full() {
                break;
            }
            scan.articles.push(
                Suggestion::new(
                    format!("article-{}", article.id),
                    &article.title,
                    SuggestionType::Article,
                )
                .with_image_url(&article.image_url)
                .with_category(Some(article.category.as_str()))
                .with_date(&article.date),
                &mut seen,
            );
        }

        for video in store.videos()?.iter().filter(|v| contains_ci(&v.title, query)) {
            if scan.videos.is_full() {
                break;
            }
            scan.videos.push(
                Suggestion::new(format!("video-{}", video.id), &video.title, SuggestionType::Video)
                    .with_image_url(&video.image_url)
                    .with_duration(&video.duration)
                    .with_category(video.category.as_deref()),
                &mut seen,
            );
        }

        for photo in store.photos()?.iter().filter(|p| contains_ci(&p.title, query)) {
            if scan.photos.is_full() {
                break;
            }
            scan.photos.push(
                Suggestion::new(format!("photo-{}", photo.id), &photo.title, SuggestionType::Photo)
                    .with_image_url(&photo.image_url)
                    .with_category(photo.category.as_deref()),
                &mut seen,
            );
        }

        Ok(scan)
    }

    fn is_empty(&self) -> bool {
        [
            &self.new_cars,
            &self.used_cars,
            &self.makes,
            &self.models,
            &self.articles,
            &self.videos,
            &self.photos,
        ]
        .iter()
        .all(|b| b.items.is_empty())
    }

    /// Buckets concatenated in group order (assistant suggestions excluded)
    fn into_ordered(self) -> impl Iterator<Item = Suggestion> {
        self.new_cars
            .items
            .into_iter()
            .chain(self.used_cars.items)
            .chain(self.makes.items)
            .chain(self.models.items)
            .chain(self.articles.items)
            .chain(self.videos.items)
            .chain(self.photos.items)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
