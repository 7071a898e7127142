pub mod filters;
pub mod inquiries;
pub mod photographers;

use serde::Deserialize;

use crate::directory::reveal::PAGE_SIZE;
use crate::models::filters::{FilterState, PRICE_CEILING, PRICE_FLOOR, SortBy};

/// Query parameters accepted by `GET /api/photographers`.
///
/// Every field is optional; missing fields fall back to the documented
/// Filter State defaults so the engine always runs on a fully-populated state.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub min_rating: Option<f64>,
    /// Comma-separated style tags, e.g. `styles=Outdoor,Candid`.
    pub styles: Option<String>,
    pub sort_by: Option<String>,
    /// How many results the client has revealed so far.
    pub visible: Option<usize>,
}

impl BrowseQuery {
    /// Build the fully-populated filter state this query describes.
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState::default();
        if let Some(search) = &self.search {
            state.search = search.clone();
        }
        if let Some(location) = &self.location {
            state.location = location.clone();
        }
        state.set_price_range(
            self.min_price.unwrap_or(PRICE_FLOOR),
            self.max_price.unwrap_or(PRICE_CEILING),
        );
        if let Some(min_rating) = self.min_rating {
            state.min_rating = min_rating.max(0.0);
        }
        if let Some(styles) = &self.styles {
            state.styles = styles
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(sort_by) = &self.sort_by {
            state.sort_by = SortBy::parse(sort_by);
        }
        state
    }

    pub fn visible(&self) -> usize {
        self.visible.unwrap_or(PAGE_SIZE)
    }
}
