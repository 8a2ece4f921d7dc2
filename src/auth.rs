//! Auth
//!
//! Signed-in user as reported by the authentication provider, and the role checks the
//! marketplace pages use to decide which actions to offer.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ids::UserId, listings::Listing};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Moderates listings and purchase requests
    Admin,

    /// Browses listings and requests purchases
    User,
}

/// User profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: UserId,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Role
    pub role: Role,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Created at
    pub created_at: Timestamp,
}

/// Current authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// Signed-in user, if any
    pub user: Option<User>,

    /// Whether the provider is still resolving the session
    pub loading: bool,
}

impl AuthState {
    /// Session for a signed-in user.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Role of the signed-in user.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Check if someone is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Only regular users may ask to buy, and only listings that are still available.
    pub fn can_request_purchase(&self, listing: &Listing) -> bool {
        self.role() == Some(Role::User) && listing.is_available()
    }

    /// Only admins see the dashboard, decide purchase requests and delete listings.
    pub fn can_moderate(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}
