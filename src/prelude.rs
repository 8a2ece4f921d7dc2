//! Showroom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{AuthState, Role, User},
    cart::{
        CartIntent, CartItem, CartState, reduce,
        store::{CartStore, ListenerKey},
    },
    dashboard::{DashboardStats, RequestRow, request_rows},
    fixtures::{Fixture, FixtureError},
    ids::{ListingId, ProductId, RequestId, TypedId, UserId},
    listings::{
        BodyType, FuelType, Listing, ListingStatus, Transmission,
        criteria::{CriteriaError, FilterCriteria, FilterForm, PriceRange},
        filter::{available_makes, filter_listings},
        view::ListingView,
    },
    pricing::{TotalPriceError, line_total, total_price},
    products::Product,
    requests::{
        Decision, ListingRemoval, NewPurchaseRequest, PurchaseRequest, RequestError,
        RequestStatus, StatusChange, moderate, remove_listing,
    },
};
