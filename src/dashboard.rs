//! Admin Dashboard
//!
//! Headline counts and the purchase request list shown to admins.

use rustc_hash::FxHashMap;

use crate::{
    ids::ListingId,
    listings::Listing,
    requests::PurchaseRequest,
};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// Every listing, whatever its status
    pub total_listings: usize,

    /// Listings still open for requests
    pub available_listings: usize,

    /// Requests waiting for a decision
    pub pending_requests: usize,

    /// Every request
    pub total_requests: usize,
}

impl DashboardStats {
    /// Count listings and requests.
    pub fn collect(listings: &[Listing], requests: &[PurchaseRequest]) -> Self {
        Self {
            total_listings: listings.len(),
            available_listings: listings.iter().filter(|l| l.is_available()).count(),
            pending_requests: requests.iter().filter(|r| r.is_pending()).count(),
            total_requests: requests.len(),
        }
    }
}

/// A purchase request next to the listing it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestRow<'a> {
    /// The request
    pub request: &'a PurchaseRequest,

    /// The listing, or `None` if it has since been deleted
    pub listing: Option<&'a Listing>,
}

/// Pair each request with its listing, keeping request order.
pub fn request_rows<'a>(
    listings: &'a [Listing],
    requests: &'a [PurchaseRequest],
) -> Vec<RequestRow<'a>> {
    let by_id: FxHashMap<&ListingId, &Listing> =
        listings.iter().map(|listing| (&listing.id, listing)).collect();

    requests
        .iter()
        .map(|request| RequestRow {
            request,
            listing: by_id.get(&request.car_id).copied(),
        })
        .collect()
}
