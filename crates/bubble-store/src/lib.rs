//! Durable cart persistence for the BubblePi storefront.
//!
//! The cart must survive reloads and restarts, so this crate provides a
//! [`CartStore`] that write-through-persists every cart mutation to a
//! pluggable [`Storage`] backend. Persistence failures are deliberately
//! recoverable: the in-memory cart stays authoritative and the store
//! flags itself dirty for a later [`CartStore::flush`].
//!
//! # Example
//!
//! ```rust,ignore
//! use bubble_store::{CartStore, FileStorage};
//!
//! let storage = FileStorage::new("/var/lib/bubblepi")?;
//! let mut store = CartStore::open(storage, "session-1");
//! store.add_item(item)?;
//! ```

mod cart_store;
mod error;
mod storage;

pub use cart_store::{CartListener, CartStore, DEFAULT_CART_KEY};
pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, Storage};
