//! Showroom
//!
//! Client-side core of a storefront and a vehicle marketplace: a reducer-driven shopping cart,
//! a composable listing filter, and the role and moderation rules around purchase requests.
//! Storage, authentication and networking belong to the hosted backend; this crate only works
//! on values already fetched from it.

pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod display;
pub mod fixtures;
pub mod ids;
pub mod listings;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod report;
pub mod requests;
