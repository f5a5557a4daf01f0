//! Durable cart store.
//!
//! Wraps a [`Cart`] with write-through persistence and change
//! notification. The in-memory cart is authoritative: every successful
//! mutation is persisted and broadcast to subscribers, and a failed
//! write degrades the session to in-memory-only instead of failing the
//! mutation.

use crate::{Storage, StoreError};
use bubble_commerce::cart::{AppliedPromo, Cart, LineItem};
use bubble_commerce::error::CommerceError;
use bubble_commerce::ids::LineItemId;
use bubble_commerce::money::Money;

/// Key the cart is stored under by default.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Callback invoked after every committed cart change.
pub type CartListener = Box<dyn Fn(&Cart) + Send>;

/// A cart with durable persistence.
pub struct CartStore<S: Storage> {
    storage: S,
    key: String,
    cart: Cart,
    dirty: bool,
    listeners: Vec<CartListener>,
}

impl<S: Storage> CartStore<S> {
    /// Open the store, restoring a persisted cart if one exists.
    ///
    /// A missing key starts a fresh cart for the session. A corrupt
    /// value is logged and discarded rather than failing the open, so a
    /// bad write can never lock a customer out of shopping.
    pub fn open(storage: S, session_id: impl Into<String>) -> Self {
        Self::open_with_key(storage, session_id, DEFAULT_CART_KEY)
    }

    /// Open the store under an explicit storage key.
    pub fn open_with_key(
        storage: S,
        session_id: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let session_id = session_id.into();

        let cart = match storage.read(&key) {
            Ok(Some(bytes)) => match serde_json::from_slice::<Cart>(&bytes) {
                Ok(cart) => {
                    tracing::debug!(key = %key, items = cart.unique_item_count(), "restored cart");
                    cart
                }
                Err(error) => {
                    tracing::warn!(key = %key, %error, "discarding corrupt cart data");
                    Cart::new(session_id)
                }
            },
            Ok(None) => Cart::new(session_id),
            Err(error) => {
                tracing::warn!(key = %key, %error, "cart restore failed, starting fresh");
                Cart::new(session_id)
            }
        };

        Self {
            storage,
            key,
            cart,
            dirty: false,
            listeners: Vec::new(),
        }
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Register a listener called after every committed change.
    pub fn subscribe(&mut self, listener: impl Fn(&Cart) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add an item, merging with an existing line for the same variant.
    pub fn add_item(&mut self, item: LineItem) -> Result<LineItemId, CommerceError> {
        let id = self.cart.add_item(item)?;
        self.commit();
        Ok(id)
    }

    /// Update a line's quantity. Zero or less removes the line.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        let changed = self.cart.update_quantity(line_item_id, quantity)?;
        if changed {
            self.commit();
        }
        Ok(changed)
    }

    /// Remove an item. No-op if absent.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let removed = self.cart.remove_item(line_item_id);
        if removed {
            self.commit();
        }
        removed
    }

    /// Clear all items and the applied promo.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Apply a promo to the cart, replacing any previous one.
    pub fn apply_promo(&mut self, promo: AppliedPromo) {
        self.cart.apply_promo(promo);
        self.commit();
    }

    /// Remove the applied promo. Returns whether one was applied.
    pub fn remove_promo(&mut self) -> bool {
        let removed = self.cart.remove_promo();
        if removed {
            self.commit();
        }
        removed
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.cart.subtotal()
    }

    /// Whether the last persist attempt failed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retry persisting the current cart state.
    ///
    /// Use after [`is_dirty`](Self::is_dirty) reports a failed write.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(&self.cart)?;
        self.storage.write(&self.key, &bytes)?;
        self.dirty = false;
        Ok(())
    }

    fn commit(&mut self) {
        self.persist();
        for listener in &self.listeners {
            listener(&self.cart);
        }
    }

    fn persist(&mut self) {
        if let Err(error) = self.flush() {
            tracing::warn!(key = %self.key, %error, "cart persist failed, keeping in-memory state");
            self.dirty = true;
        }
    }
}
