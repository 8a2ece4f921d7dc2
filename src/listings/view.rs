//! Listing View
//!
//! The browse page's state: the listings last fetched from the backend plus whatever filters
//! the visitor has picked.

use tracing::debug;

use crate::listings::{
    Listing,
    criteria::FilterCriteria,
    filter::{available_makes, filter_listings},
};

/// Source listings and the active criteria.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    listings: Vec<Listing>,
    criteria: FilterCriteria,
}

impl ListingView {
    /// Start a session over the given listings with no filters.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            criteria: FilterCriteria::default(),
        }
    }

    /// Replace the source listings after a refetch. Active criteria are kept.
    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        debug!(
            previous = self.listings.len(),
            current = listings.len(),
            "listings refreshed"
        );

        self.listings = listings;
    }

    /// Every listing, filtered or not.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Active criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the active criteria.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "listing criteria changed");

        self.criteria = criteria;
    }

    /// Update just the search term.
    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.criteria.search_term = search_term.into();
    }

    /// Drop every filter, as happens when the visitor navigates away.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Listings matching the active criteria, in source order.
    pub fn visible(&self) -> Vec<&Listing> {
        filter_listings(&self.listings, &self.criteria)
    }

    /// Makes offered by the make filter, taken from the unfiltered listings.
    pub fn available_makes(&self) -> Vec<&str> {
        available_makes(&self.listings)
    }

    /// Number of source listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if there are no source listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Number of listings matching the active criteria.
    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::listings::listing;

    use super::*;

    fn view() -> ListingView {
        ListingView::new(vec![
            listing("1", "Toyota", "Corolla", "Austin", 18_000),
            listing("2", "Honda", "Civic", "Dallas", 21_000),
            listing("3", "Toyota", "Camry", "Dallas", 26_000),
        ])
    }

    #[test]
    fn starts_unfiltered() {
        let view = view();

        assert_eq!(view.len(), 3);
        assert_eq!(view.visible_count(), 3);
        assert!(view.criteria().is_empty());
    }

    #[test]
    fn makes_ignore_active_filters() {
        let mut view = view();
        view.set_criteria(FilterCriteria {
            make: Some("Honda".to_string()),
            ..FilterCriteria::default()
        });

        assert_eq!(view.visible_count(), 1);
        assert_eq!(view.available_makes(), vec!["Honda", "Toyota"]);
    }

    #[test]
    fn search_term_narrows_view() {
        let mut view = view();
        view.set_search_term("dallas");

        let models: Vec<&str> = view.visible().iter().map(|l| l.model.as_str()).collect();

        assert_eq!(models, vec!["Civic", "Camry"]);
    }

    #[test]
    fn refresh_keeps_criteria() {
        let mut view = view();
        view.set_search_term("toyota");

        view.replace_listings(vec![listing("9", "Toyota", "Yaris", "Austin", 9_000)]);

        assert_eq!(view.criteria().search_term, "toyota");
        assert_eq!(view.visible_count(), 1);
    }

    #[test]
    fn reset_clears_criteria() {
        let mut view = view();
        view.set_search_term("honda");
        view.reset();

        assert_eq!(view.visible_count(), 3);
    }

    #[test]
    fn empty_view() {
        let view = ListingView::default();

        assert!(view.is_empty());
        assert!(view.visible().is_empty());
        assert!(view.available_makes().is_empty());
    }
}
