//! Purchase Requests
//!
//! Requests are only ever changed by the backend. This module decides whether a change is
//! allowed and builds the payload describing it.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    auth::AuthState,
    ids::{ListingId, RequestId, UserId},
    listings::Listing,
};

/// Errors raised when drafting or moderating a purchase request.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    /// The current session isn't allowed to do this.
    #[error("Not permitted for the current session")]
    NotPermitted,

    /// A contact phone number is required.
    #[error("A contact phone number is required")]
    MissingPhone,

    /// The request has already been approved or rejected.
    #[error("Request has already been {0}")]
    AlreadyDecided(RequestStatus),
}

/// Purchase request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Waiting for an admin
    Pending,

    /// Accepted by an admin
    Approved,

    /// Declined by an admin
    Rejected,
}

impl RequestStatus {
    /// Name as stored by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Approve
    Approve,

    /// Reject
    Reject,
}

impl From<Decision> for RequestStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approve => RequestStatus::Approved,
            Decision::Reject => RequestStatus::Rejected,
        }
    }
}

/// A purchase request row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    /// Request id
    pub id: RequestId,

    /// Listing the request is for
    pub car_id: ListingId,

    /// Requesting user
    pub user_id: UserId,

    /// Contact name
    pub user_name: String,

    /// Contact email
    pub user_email: String,

    /// Contact phone
    pub user_phone: String,

    /// Optional note to the seller; empty when none was given
    #[serde(default)]
    pub message: String,

    /// Status
    pub status: RequestStatus,

    /// Created at
    pub created_at: Timestamp,
}

/// Status update to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    /// Request to update
    #[serde(skip)]
    pub request_id: RequestId,

    /// New status
    pub status: RequestStatus,
}

impl PurchaseRequest {
    /// Check if the request still needs a decision.
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Build the status change for a decision.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::AlreadyDecided`] unless the request is pending.
    pub fn decide(&self, decision: Decision) -> Result<StatusChange, RequestError> {
        if !self.is_pending() {
            return Err(RequestError::AlreadyDecided(self.status));
        }

        Ok(StatusChange {
            request_id: self.id.clone(),
            status: decision.into(),
        })
    }
}

/// Decide a request on behalf of the current session.
///
/// # Errors
///
/// - [`RequestError::NotPermitted`]: the session isn't an admin.
/// - [`RequestError::AlreadyDecided`]: the request isn't pending.
pub fn moderate(
    auth: &AuthState,
    request: &PurchaseRequest,
    decision: Decision,
) -> Result<StatusChange, RequestError> {
    if !auth.can_moderate() {
        return Err(RequestError::NotPermitted);
    }

    request.decide(decision)
}

/// Delete payload for a listing taken down by an admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRemoval {
    /// Listing to delete
    pub listing_id: ListingId,
}

/// Take a listing down on behalf of the current session. Requests that point at it stay
/// behind and show up without a listing on the dashboard.
///
/// # Errors
///
/// Returns [`RequestError::NotPermitted`] unless the session is an admin.
pub fn remove_listing(auth: &AuthState, listing: &Listing) -> Result<ListingRemoval, RequestError> {
    if !auth.can_moderate() {
        return Err(RequestError::NotPermitted);
    }

    Ok(ListingRemoval {
        listing_id: listing.id.clone(),
    })
}

/// Insert payload for a new purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPurchaseRequest {
    /// Listing the request is for
    pub car_id: ListingId,

    /// Requesting user
    pub user_id: UserId,

    /// Contact name
    pub user_name: String,

    /// Contact email
    pub user_email: String,

    /// Contact phone
    pub user_phone: String,

    /// Note to the seller
    pub message: String,

    /// Always pending on creation
    pub status: RequestStatus,
}

impl NewPurchaseRequest {
    /// Draft a request from the signed-in user for a listing.
    ///
    /// # Errors
    ///
    /// - [`RequestError::NotPermitted`]: the session may not request this listing.
    /// - [`RequestError::MissingPhone`]: `phone` is blank.
    pub fn draft(
        auth: &AuthState,
        listing: &Listing,
        phone: &str,
        message: &str,
    ) -> Result<Self, RequestError> {
        let user = auth
            .user
            .as_ref()
            .filter(|_| auth.can_request_purchase(listing))
            .ok_or(RequestError::NotPermitted)?;

        let phone = phone.trim();

        if phone.is_empty() {
            return Err(RequestError::MissingPhone);
        }

        Ok(Self {
            car_id: listing.id.clone(),
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            user_phone: phone.to_string(),
            message: message.trim().to_string(),
            status: RequestStatus::Pending,
        })
    }
}
