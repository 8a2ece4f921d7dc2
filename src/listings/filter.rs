//! Listing Filter
//!
//! Criteria are compiled into a short, fixed-order list of predicates which are then
//! applied to each listing in a single pass. Output order always follows input order.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::listings::{Listing, criteria::FilterCriteria};

/// A single compiled filter predicate.
pub type Predicate<'c> = Box<dyn Fn(&Listing) -> bool + 'c>;

/// Build the predicates for the given criteria, in evaluation order: search term, make,
/// price range, fuel type, transmission. Unset criteria contribute nothing.
pub fn predicates(criteria: &FilterCriteria) -> SmallVec<[Predicate<'_>; 5]> {
    let mut predicates: SmallVec<[Predicate<'_>; 5]> = SmallVec::new();

    if !criteria.search_term.is_empty() {
        let needle = criteria.search_term.to_lowercase();

        predicates.push(Box::new(move |listing| {
            [&listing.make, &listing.model, &listing.location]
                .into_iter()
                .any(|field| contains_ignore_case(field, &needle))
        }));
    }

    if let Some(make) = criteria.make.as_deref() {
        predicates.push(Box::new(move |listing| listing.make == make));
    }

    if let Some(range) = criteria.price_range {
        predicates.push(Box::new(move |listing| range.contains(listing.price)));
    }

    if let Some(fuel_type) = criteria.fuel_type {
        predicates.push(Box::new(move |listing| listing.fuel_type == fuel_type));
    }

    if let Some(transmission) = criteria.transmission {
        predicates.push(Box::new(move |listing| listing.transmission == transmission));
    }

    predicates
}

/// Case-insensitive substring check against an already lowercased needle.
///
/// ASCII text is compared in place; anything else falls back to a lowercased copy.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }

    haystack.to_lowercase().contains(needle)
}

/// Check a single listing against the criteria.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    predicates(criteria)
        .iter()
        .all(|predicate| predicate(listing))
}

/// Return the listings matching every set criterion, in their original order.
///
/// Empty criteria return every listing.
pub fn filter_listings<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let predicates = predicates(criteria);

    listings
        .into_iter()
        .filter(|&listing| predicates.iter().all(|predicate| predicate(listing)))
        .collect()
}

/// Distinct makes across `listings`, sorted.
///
/// Pass the full source collection here rather than a filtered view, so picking one filter
/// doesn't remove the options for the others.
pub fn available_makes<'a, I>(listings: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .map(|listing| listing.make.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        fixtures::listings::listing,
        listings::{FuelType, Transmission, criteria::PriceRange},
    };

    use super::*;

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|listing| listing.id.to_string()).collect()
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("1", "Toyota", "Corolla", "Austin", 18_000),
            listing("2", "Honda", "Civic", "Toyotaville", 21_000),
            listing("3", "BMW", "X5", "Dallas", 55_000),
            listing("4", "Audi", "A4", "Houston", 32_000),
        ]
    }

    #[test]
    fn case_insensitive_contains() {
        assert!(contains_ignore_case("Toyota City", "city"));
        assert!(contains_ignore_case("BMW", "bm"));
        assert!(contains_ignore_case("BMW", ""));
        assert!(!contains_ignore_case("BMW", "audi"));
        assert!(!contains_ignore_case("A4", "a45"));
        assert!(contains_ignore_case("Škoda", "ško"));
        assert!(!contains_ignore_case("Škoda", "ška"));
    }

    #[test]
    fn no_criteria_means_no_predicates() {
        assert!(predicates(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn every_criterion_adds_a_predicate() -> TestResult {
        let criteria = FilterCriteria {
            search_term: "x".to_string(),
            make: Some("BMW".to_string()),
            price_range: Some(PriceRange::between(1, 2)?),
            fuel_type: Some(FuelType::Diesel),
            transmission: Some(Transmission::Manual),
        };

        assert_eq!(predicates(&criteria).len(), 5);

        Ok(())
    }

    #[test]
    fn search_matches_model_case_insensitively() {
        let listings = sample();
        let criteria = FilterCriteria {
            search_term: "CIVIC".to_string(),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["2"]);
    }

    #[test]
    fn search_term_is_not_trimmed() {
        let listings = sample();
        let criteria = FilterCriteria {
            search_term: " x5".to_string(),
            ..FilterCriteria::default()
        };

        assert!(filter_listings(&listings, &criteria).is_empty());
    }

    #[test]
    fn make_is_exact() {
        let listings = sample();
        let criteria = FilterCriteria {
            make: Some("bmw".to_string()),
            ..FilterCriteria::default()
        };

        assert!(filter_listings(&listings, &criteria).is_empty());
    }

    #[test]
    fn bounded_price_range() -> TestResult {
        let listings = sample();
        let criteria = FilterCriteria {
            price_range: Some(PriceRange::between(20_000, 40_000)?),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["2", "4"]);

        Ok(())
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let mut listings = sample();
        if let Some(first) = listings.first_mut() {
            first.transmission = Transmission::Manual;
        }

        let criteria = FilterCriteria {
            search_term: "toyota".to_string(),
            transmission: Some(Transmission::Automatic),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&filter_listings(&listings, &criteria)), vec!["2"]);
    }

    #[test]
    fn matches_single_listing() {
        let listing = listing("1", "Toyota", "Corolla", "Austin", 18_000);
        let criteria = FilterCriteria {
            fuel_type: Some(FuelType::Electric),
            ..FilterCriteria::default()
        };

        assert!(matches(&listing, &FilterCriteria::default()));
        assert!(!matches(&listing, &criteria));
    }

    #[test]
    fn makes_are_sorted_and_distinct() {
        let mut listings = sample();
        listings.push(listing("5", "BMW", "M3", "Austin", 60_000));

        assert_eq!(available_makes(&listings), vec!["Audi", "BMW", "Honda", "Toyota"]);
    }

    #[test]
    fn makes_of_empty_collection() {
        assert!(available_makes(&Vec::<Listing>::new()).is_empty());
    }
}
