//! Cart
//!
//! The storefront cart is a plain value ([`CartState`]) moved through [`reduce`] by closed
//! [`CartIntent`]s. Every transition is total: unknown ids are no-ops and quantities are clamped
//! into range, so there is nothing to report back to the caller.

use std::num::NonZeroU32;

use rusty_money::iso::Currency;

use crate::{ids::ProductId, products::Product};

pub mod store;

/// A product in the cart together with how many of it were added.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem<'a> {
    product: Product<'a>,
    quantity: NonZeroU32,
}

impl<'a> CartItem<'a> {
    fn new(product: Product<'a>) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The product this line is for.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Quantity of the product, always at least one.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

/// Intents accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent<'a> {
    /// Add one of the product, appending a new line if it isn't in the cart yet.
    AddItem(Product<'a>),

    /// Drop the line for the product id.
    RemoveItem(ProductId),

    /// Set the quantity of a line. Zero or negative quantities remove the line.
    UpdateQuantity {
        /// Product id of the line to update
        id: ProductId,

        /// New quantity
        quantity: i64,
    },

    /// Remove every line.
    ClearCart,

    /// Flip cart visibility.
    ToggleCart,

    /// Show the cart.
    OpenCart,

    /// Hide the cart.
    CloseCart,
}

impl CartIntent<'_> {
    /// Intent name, as used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            CartIntent::AddItem(_) => "ADD_ITEM",
            CartIntent::RemoveItem(_) => "REMOVE_ITEM",
            CartIntent::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartIntent::ClearCart => "CLEAR_CART",
            CartIntent::ToggleCart => "TOGGLE_CART",
            CartIntent::OpenCart => "OPEN_CART",
            CartIntent::CloseCart => "CLOSE_CART",
        }
    }
}

/// Cart contents and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState<'a> {
    items: Vec<CartItem<'a>>,
    is_open: bool,
    currency: &'a Currency,
}

impl<'a> CartState<'a> {
    /// Create an empty, closed cart that totals in the given currency.
    pub fn new(currency: &'a Currency) -> Self {
        Self {
            items: Vec::new(),
            is_open: false,
            currency,
        }
    }

    /// Cart lines, in the order products were first added.
    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Whether the cart drawer is visible.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Currency totals are reported in.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for a product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem<'a>> {
        self.items.iter().find(|item| &item.product.id == id)
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Apply an intent, returning the next state.
    #[must_use]
    pub fn apply(self, intent: CartIntent<'a>) -> Self {
        reduce(self, intent)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.product.id == id)
    }

    fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.product.id != id);
    }
}

/// Cart transition function.
///
/// Takes the current state and an intent and produces the next state. Ids that aren't in the
/// cart leave it untouched, and `UpdateQuantity` with a quantity of zero or less is the same
/// as `RemoveItem`. Quantities beyond `u32::MAX` saturate.
pub fn reduce<'a>(mut state: CartState<'a>, intent: CartIntent<'a>) -> CartState<'a> {
    match intent {
        CartIntent::AddItem(product) => match state.position(&product.id) {
            Some(idx) => {
                if let Some(item) = state.items.get_mut(idx) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            None => state.items.push(CartItem::new(product)),
        },
        CartIntent::RemoveItem(id) => state.remove(&id),
        CartIntent::UpdateQuantity { id, quantity } => {
            match NonZeroU32::new(clamp_quantity(quantity)) {
                Some(quantity) => {
                    if let Some(item) = state.items.iter_mut().find(|item| item.product.id == id) {
                        item.quantity = quantity;
                    }
                }
                None => state.remove(&id),
            }
        }
        CartIntent::ClearCart => state.items.clear(),
        CartIntent::ToggleCart => state.is_open = !state.is_open,
        CartIntent::OpenCart => state.is_open = true,
        CartIntent::CloseCart => state.is_open = false,
    }

    state
}

fn clamp_quantity(quantity: i64) -> u32 {
    if quantity <= 0 {
        0
    } else {
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};

    use super::*;

    fn product(id: &str, minor: i64) -> Product<'static> {
        Product::new(
            id,
            format!("Product {id}"),
            Money::from_minor(minor, iso::USD),
            format!("https://img.example/{id}.jpg"),
        )
    }

    fn quantities(state: &CartState<'_>) -> Vec<(String, u32)> {
        state
            .items()
            .iter()
            .map(|item| (item.product().id.to_string(), item.quantity().get()))
            .collect()
    }

    #[test]
    fn new_cart_is_empty_and_closed() {
        let cart = CartState::new(iso::USD);

        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.currency(), iso::USD);
    }

    #[test]
    fn adding_same_product_twice_increments_quantity() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::AddItem(product("a", 100)));

        assert_eq!(quantities(&cart), vec![("a".to_string(), 2)]);
    }

    #[test]
    fn adding_does_not_open_cart() {
        let cart = CartState::new(iso::USD).apply(CartIntent::AddItem(product("a", 100)));

        assert!(!cart.is_open());
    }

    #[test]
    fn adding_preserves_first_insertion_order() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("b", 100)))
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::AddItem(product("b", 100)));

        assert_eq!(
            quantities(&cart),
            vec![("b".to_string(), 2), ("a".to_string(), 1)]
        );
    }

    #[test]
    fn removing_unknown_id_is_noop() {
        let cart = CartState::new(iso::USD).apply(CartIntent::AddItem(product("a", 100)));
        let after = cart.clone().apply(CartIntent::RemoveItem("zzz".into()));

        assert_eq!(after, cart);
    }

    #[test]
    fn update_quantity_sets_value() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::UpdateQuantity {
                id: "a".into(),
                quantity: 7,
            });

        assert_eq!(quantities(&cart), vec![("a".to_string(), 7)]);
    }

    #[test]
    fn update_quantity_to_zero_matches_remove() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::AddItem(product("b", 250)));

        let updated = cart.clone().apply(CartIntent::UpdateQuantity {
            id: "a".into(),
            quantity: 0,
        });
        let removed = cart.apply(CartIntent::RemoveItem("a".into()));

        assert_eq!(updated, removed);
    }

    #[test]
    fn negative_quantity_removes_line() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::UpdateQuantity {
                id: "a".into(),
                quantity: -3,
            });

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_for_unknown_id_is_noop() {
        let cart = CartState::new(iso::USD).apply(CartIntent::AddItem(product("a", 100)));
        let after = cart.clone().apply(CartIntent::UpdateQuantity {
            id: "missing".into(),
            quantity: 4,
        });

        assert_eq!(after, cart);
    }

    #[test]
    fn huge_quantities_saturate() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 1)))
            .apply(CartIntent::UpdateQuantity {
                id: "a".into(),
                quantity: i64::MAX,
            })
            .apply(CartIntent::AddItem(product("a", 1)));

        assert_eq!(quantities(&cart), vec![("a".to_string(), u32::MAX)]);
    }

    #[test]
    fn clear_cart_keeps_visibility() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::OpenCart)
            .apply(CartIntent::ClearCart);

        assert!(cart.is_empty());
        assert!(cart.is_open());
    }

    #[test]
    fn visibility_intents_only_touch_visibility() {
        let cart = CartState::new(iso::USD).apply(CartIntent::AddItem(product("a", 100)));

        let toggled = cart.clone().apply(CartIntent::ToggleCart);
        assert!(toggled.is_open());
        assert_eq!(toggled.items(), cart.items());

        let toggled_back = toggled.apply(CartIntent::ToggleCart);
        assert!(!toggled_back.is_open());

        let opened = toggled_back.apply(CartIntent::OpenCart).apply(CartIntent::OpenCart);
        assert!(opened.is_open());

        let closed = opened.apply(CartIntent::CloseCart);
        assert!(!closed.is_open());
        assert_eq!(closed.items(), cart.items());
    }

    #[test]
    fn total_item_count_sums_quantities() {
        let cart = CartState::new(iso::USD)
            .apply(CartIntent::AddItem(product("a", 100)))
            .apply(CartIntent::AddItem(product("b", 100)))
            .apply(CartIntent::UpdateQuantity {
                id: "b".into(),
                quantity: 4,
            });

        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn get_finds_line_by_id() {
        let cart = CartState::new(iso::USD).apply(CartIntent::AddItem(product("a", 100)));

        assert!(cart.get(&"a".into()).is_some());
        assert!(cart.get(&"b".into()).is_none());
    }

    #[test]
    fn intent_names() {
        assert_eq!(CartIntent::AddItem(product("a", 1)).name(), "ADD_ITEM");
        assert_eq!(CartIntent::ClearCart.name(), "CLEAR_CART");
        assert_eq!(CartIntent::CloseCart.name(), "CLOSE_CART");
    }
}
