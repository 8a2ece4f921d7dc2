//! Cart Store
//!
//! An owning cell around [`CartState`] that runs intents through [`reduce`] and tells
//! subscribers about the new state.

use std::fmt;

use slotmap::{SlotMap, new_key_type};
use tracing::debug;

use crate::cart::{CartIntent, CartState, reduce};

new_key_type! {
    /// Listener Key
    pub struct ListenerKey;
}

type Listener<'a> = Box<dyn FnMut(&CartState<'a>) + 'a>;

/// Holds the current cart and its listeners.
pub struct CartStore<'a> {
    state: CartState<'a>,
    listeners: SlotMap<ListenerKey, Listener<'a>>,
}

impl<'a> CartStore<'a> {
    /// Create a store holding the given state.
    pub fn new(state: CartState<'a>) -> Self {
        Self {
            state,
            listeners: SlotMap::with_key(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &CartState<'a> {
        &self.state
    }

    /// Consume the store, returning the current state.
    pub fn into_state(self) -> CartState<'a> {
        self.state
    }

    /// Register a listener, called after every dispatch that changes the state.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState<'a>) + 'a) -> ListenerKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Run an intent against the current state.
    ///
    /// Returns `true` if the state changed, in which case every listener has been called.
    pub fn dispatch(&mut self, intent: CartIntent<'a>) -> bool {
        let name = intent.name();
        let next = reduce(self.state.clone(), intent);
        let changed = next != self.state;

        self.state = next;

        debug!(
            intent = name,
            changed,
            lines = self.state.items().len(),
            items = self.state.total_item_count(),
            open = self.state.is_open(),
            "cart intent dispatched"
        );

        if changed {
            for listener in self.listeners.values_mut() {
                listener(&self.state);
            }
        }

        changed
    }
}

impl fmt::Debug for CartStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use rusty_money::{Money, iso};

    use crate::products::Product;

    use super::*;

    fn shoes() -> Product<'static> {
        Product::new("shoes", "Shoes", Money::from_minor(4999, iso::USD), "")
    }

    #[test]
    fn dispatch_updates_state() {
        let mut store = CartStore::new(CartState::new(iso::USD));

        assert!(store.dispatch(CartIntent::AddItem(shoes())));
        assert_eq!(store.state().total_item_count(), 1);
    }

    #[test]
    fn listeners_see_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::new(CartState::new(iso::USD));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.total_item_count()));

        store.dispatch(CartIntent::AddItem(shoes()));
        store.dispatch(CartIntent::AddItem(shoes()));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn listeners_not_called_when_nothing_changes() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = CartStore::new(CartState::new(iso::USD));

        let counter = Rc::clone(&calls);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(!store.dispatch(CartIntent::RemoveItem("missing".into())));
        assert!(!store.dispatch(CartIntent::CloseCart));
        assert!(!store.dispatch(CartIntent::ClearCart));

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = CartStore::new(CartState::new(iso::USD));

        let counter = Rc::clone(&calls);
        let key = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(CartIntent::OpenCart);
        assert!(store.unsubscribe(key));
        assert!(!store.unsubscribe(key));
        store.dispatch(CartIntent::CloseCart);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn into_state_returns_final_cart() {
        let mut store = CartStore::new(CartState::new(iso::USD));
        store.dispatch(CartIntent::ToggleCart);

        let state = store.into_state();

        assert!(state.is_open());
    }
}
