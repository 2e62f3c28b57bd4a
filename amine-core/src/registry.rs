use tracing::{debug, info};

use crate::category::Category;
use crate::error::ValidationError;
use crate::item::{Item, ItemDraft, ItemId, NewItem};
use crate::price::Price;

/// Ordered in-memory item collection.
///
/// Items keep insertion order. Removal never reorders the remaining items and
/// never makes an id available again.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::FIRST,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next successful add will receive.
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Whether a current item has this name, ignoring case and surrounding
    /// whitespace.
    pub fn contains_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .any(|item| item.name.trim().to_lowercase() == wanted)
    }

    /// Checks a draft without touching the collection.
    ///
    /// Checks run in order: name present, name unique, category valid,
    /// price valid. The first failing check is returned.
    pub fn validate(&self, draft: &ItemDraft) -> Result<NewItem, ValidationError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.contains_name(name) {
            return Err(ValidationError::DuplicateName);
        }

        let category =
            Category::from_label(&draft.category).ok_or(ValidationError::MissingCategory)?;

        let price = Price::parse(&draft.price).ok_or(ValidationError::InvalidPrice)?;

        Ok(NewItem {
            name: name.to_string(),
            category,
            price,
        })
    }

    /// Validates the draft and appends it under the next id.
    pub fn add(&mut self, draft: &ItemDraft) -> Result<&Item, ValidationError> {
        let new_item = match self.validate(draft) {
            Ok(new_item) => new_item,
            Err(e) => {
                debug!(name = %draft.name, error = %e, "Rejected item draft");
                return Err(e);
            }
        };

        let id = self.next_id;
        self.next_id = id.next();
        self.items.push(new_item.into_item(id));

        let item = &self.items[self.items.len() - 1];
        info!(%id, name = %item.name, category = %item.category, price = %item.price, "Added item");
        Ok(item)
    }

    /// Removes the item with this id. Absent ids are a no-op.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        info!(%id, name = %removed.name, "Deleted item");
        Some(removed)
    }
}
