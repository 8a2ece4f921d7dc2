//! User Fixtures

use jiff::Timestamp;

use crate::{
    auth::{Role, User},
    ids::UserId,
};

/// Build a user with the given id and role.
pub fn user(id: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        email: format!("{id}@example.com"),
        name: format!("User {id}"),
        role,
        avatar_url: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
