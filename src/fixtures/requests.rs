//! Purchase Request Fixtures

use jiff::Timestamp;
use serde::Deserialize;

use crate::{
    ids::{ListingId, RequestId, UserId},
    requests::{PurchaseRequest, RequestStatus},
};

/// Wrapper for purchase requests in YAML
#[derive(Debug, Deserialize)]
pub struct RequestsFixture {
    /// Requests, newest first
    pub requests: Vec<PurchaseRequest>,
}

/// Build a request for `car_id` with placeholder contact details.
pub fn request(id: &str, car_id: &str, status: RequestStatus) -> PurchaseRequest {
    PurchaseRequest {
        id: RequestId::new(id),
        car_id: ListingId::new(car_id),
        user_id: UserId::new("buyer"),
        user_name: "Sam Buyer".to_string(),
        user_email: "sam@example.com".to_string(),
        user_phone: "555-0100".to_string(),
        message: String::new(),
        status,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
