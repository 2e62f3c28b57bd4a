//! Amine core - in-memory item registry with a validating add form.
//!
//! Items are added through [`ItemManager::submit`], which runs the draft
//! through [`ItemRegistry::validate`] before anything is appended, and removed
//! with [`ItemManager::delete`]. The collection keeps insertion order and ids
//! are never handed out twice.
//!
//! # Example
//!
//! ```
//! use amine_core::{Category, ItemManager};
//!
//! let mut manager = ItemManager::new();
//! manager.set_name("Pen");
//! manager.select_category(Some(Category::Stationary));
//! manager.set_price("5");
//! let id = manager.submit().unwrap();
//! assert_eq!(id.get(), 1);
//!
//! manager.set_name("pen");
//! manager.select_category(Some(Category::Kitchenware));
//! manager.set_price("1");
//! assert!(manager.submit().is_err());
//! assert_eq!(manager.error_message(), Some("Item must not be duplicated"));
//! assert_eq!(manager.items().len(), 1);
//! ```

mod category;
mod error;
mod item;
mod manager;
mod price;
mod registry;
pub mod view;

pub use category::Category;
pub use error::ValidationError;
pub use item::{Item, ItemDraft, ItemId, NewItem};
pub use manager::{FormField, ItemForm, ItemManager};
pub use price::Price;
pub use registry::ItemRegistry;
