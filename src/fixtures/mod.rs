//! Fixtures
//!
//! Demo catalogs stored as YAML, laid out as `<base>/<category>/<set>.yml` where the category
//! is one of `products`, `listings` or `requests`.

use std::{fs, path::PathBuf};

use rustc_hash::{FxHashMap, FxHashSet};
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::info;

use crate::{
    cart::CartState,
    fixtures::{listings::ListingsFixture, products::ProductsFixture, requests::RequestsFixture},
    ids::{ListingId, ProductId, RequestId},
    listings::Listing,
    products::Product,
    requests::PurchaseRequest,
};

pub mod listings;
pub mod products;
pub mod requests;
pub mod users;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Same id used twice in one category
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products, keyed by id
    products: FxHashMap<ProductId, Product<'a>>,

    /// Listings in file order
    listings: Vec<Listing>,

    /// Purchase requests in file order
    requests: Vec<PurchaseRequest>,

    /// Currency shared by every product in the set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            listings: Vec::new(),
            requests: Vec::new(),
            currency: None,
        }
    }

    fn read(&self, category: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));

        Ok(fs::read_to_string(&file_path)?)
    }

    /// Load products from a YAML fixture file
    ///
    /// The set is validated in full before anything is merged, so a failed load leaves the
    /// fixture as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price is malformed, if an
    /// id is already loaded, or if products are priced in more than one currency.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(&self.read("products", name)?)?;

        let mut currency = self.currency;
        let mut loaded: FxHashMap<ProductId, Product<'a>> = FxHashMap::default();

        for (id, product_fixture) in fixture.products {
            if self.products.contains_key(id.as_str()) {
                return Err(FixtureError::DuplicateId(id));
            }

            let product = product_fixture.try_into_product(id)?;
            let product_currency = product.price.currency();

            match currency {
                Some(existing) if existing != product_currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        product_currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => currency = Some(product_currency),
            }

            loaded.insert(product.id.clone(), product);
        }

        self.currency = currency;
        self.products.extend(loaded);

        info!(set = name, products = self.products.len(), "loaded product fixtures");

        Ok(self)
    }

    /// Load listings from a YAML fixture file
    ///
    /// Nothing is merged unless the whole set is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a listing id repeats.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ListingsFixture = serde_norway::from_str(&self.read("listings", name)?)?;

        let mut seen: FxHashSet<&ListingId> = self.listings.iter().map(|l| &l.id).collect();

        for listing in &fixture.listings {
            if !seen.insert(&listing.id) {
                return Err(FixtureError::DuplicateId(listing.id.to_string()));
            }
        }

        self.listings.extend(fixture.listings);

        info!(set = name, listings = self.listings.len(), "loaded listing fixtures");

        Ok(self)
    }

    /// Load purchase requests from a YAML fixture file
    ///
    /// Nothing is merged unless the whole set is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a request id repeats.
    pub fn load_requests(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: RequestsFixture = serde_norway::from_str(&self.read("requests", name)?)?;

        let mut seen: FxHashSet<&RequestId> = self.requests.iter().map(|r| &r.id).collect();

        for request in &fixture.requests {
            if !seen.insert(&request.id) {
                return Err(FixtureError::DuplicateId(request.id.to_string()));
            }
        }

        self.requests.extend(fixture.requests);

        info!(set = name, requests = self.requests.len(), "loaded request fixtures");

        Ok(self)
    }

    /// Get a product by id
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, FixtureError> {
        self.products
            .get(id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get all products, sorted by id
    pub fn products(&self) -> Vec<&Product<'a>> {
        let mut products: Vec<&Product<'a>> = self.products.values().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    /// Get all listings
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Get all purchase requests
    pub fn requests(&self) -> &[PurchaseRequest] {
        &self.requests
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Create an empty cart in the product currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn cart(&self) -> Result<CartState<'a>, FixtureError> {
        Ok(CartState::new(self.currency()?))
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
