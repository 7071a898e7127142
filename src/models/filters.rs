use serde::{Deserialize, Serialize};

/// Bounds of the price slider, in whole currency units.
pub const PRICE_FLOOR: u32 = 0;
pub const PRICE_CEILING: u32 = 50_000;
/// Minimum distance kept between the two slider handles.
pub const MIN_PRICE_GAP: u32 = 1_000;

/// Sort order applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Rating, high to low.
    #[default]
    Rating,
    /// Price, low to high.
    Price,
    /// Recently added — descending id, since ids grow with recency.
    Recent,
    /// Unrecognized sort value: the filtered order is left untouched.
    Unspecified,
}

impl SortBy {
    /// Parse a wire value; anything unrecognized sorts nothing.
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => SortBy::Rating,
            "price" => SortBy::Price,
            "recent" => SortBy::Recent,
            _ => SortBy::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Rating => "rating",
            SortBy::Price => "price",
            SortBy::Recent => "recent",
            SortBy::Unspecified => "unspecified",
        }
    }
}

/// The full set of user-chosen query/sort parameters for one browsing session.
///
/// Always fully populated — `default()` is the documented reset state
/// (`location: ""`, `priceRange: [0, 50000]`, `minRating: 0`, `styles: []`,
/// `sortBy: rating`). A field at its default means "no constraint".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub location: String,
    pub price_range: (u32, u32),
    pub min_rating: f64,
    pub styles: Vec<String>,
    pub sort_by: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            price_range: (PRICE_FLOOR, PRICE_CEILING),
            min_rating: 0.0,
            styles: Vec::new(),
            sort_by: SortBy::Rating,
        }
    }
}

impl FilterState {
    /// Restore the documented defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp a requested price range the way the slider input does: both
    /// handles stay inside `[PRICE_FLOOR, PRICE_CEILING]` and the lower handle
    /// keeps at least `MIN_PRICE_GAP` below the upper one. `min <= max` holds
    /// on every path.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        let max = max.clamp(PRICE_FLOOR, PRICE_CEILING);
        let min = min.min(max.saturating_sub(MIN_PRICE_GAP));
        self.price_range = (min, max);
    }

    /// Canonical key fragment for this filter combination, used by the
    /// listing cache.
    pub fn fingerprint(&self) -> String {
        format!(
            "{}|{}|{}-{}|{}|{}|{}",
            self.search.to_lowercase(),
            self.location.to_lowercase(),
            self.price_range.0,
            self.price_range.1,
            self.min_rating,
            self.styles.join(","),
            self.sort_by.as_str(),
        )
    }
}
