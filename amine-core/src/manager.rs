//! Stateful item form: registry, form inputs, focus and the error line.

use tracing::debug;

use crate::category::Category;
use crate::error::ValidationError;
use crate::item::{Item, ItemDraft, ItemId};
use crate::registry::ItemRegistry;

/// Input fields of the add form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Price,
    AddButton,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Category,
            FormField::Category => FormField::Price,
            FormField::Price => FormField::AddButton,
            FormField::AddButton => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::AddButton,
            FormField::Category => FormField::Name,
            FormField::Price => FormField::Category,
            FormField::AddButton => FormField::Price,
        }
    }
}

/// Current contents of the add form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: Option<Category>,
    pub price: String,
    pub focus: FormField,
}

impl ItemForm {
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.map(|c| c.label().to_string()).unwrap_or_default(),
            price: self.price.clone(),
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.category = None;
        self.price.clear();
        self.focus = FormField::Name;
    }
}

/// The item list together with its add form and error message.
#[derive(Debug, Clone, Default)]
pub struct ItemManager {
    registry: ItemRegistry,
    form: ItemForm,
    last_error: Option<String>,
}

impl ItemManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        self.registry.items()
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn focus(&self) -> FormField {
        self.form.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.form.focus = field;
    }

    pub fn error_message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn name_mut(&mut self) -> &mut String {
        &mut self.form.name
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.form.price = price.into();
    }

    pub fn price_mut(&mut self) -> &mut String {
        &mut self.form.price
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.form.category = category;
    }

    /// Steps through the selector: placeholder, then each category, wrapping.
    pub fn cycle_category(&mut self, forward: bool) {
        let options: Vec<Option<Category>> = std::iter::once(None)
            .chain(Category::ALL.into_iter().map(Some))
            .collect();
        let current = options
            .iter()
            .position(|o| *o == self.form.category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.form.category = options[next];
    }

    /// Adds an item from the current form.
    pub fn submit(&mut self) -> Result<ItemId, ValidationError> {
        let draft = self.form.to_draft();
        self.submit_draft(&draft)
    }

    /// Adds an item from an explicit draft.
    ///
    /// On success the form and error message are cleared and focus returns to
    /// the name field. On failure only the error message changes.
    pub fn submit_draft(&mut self, draft: &ItemDraft) -> Result<ItemId, ValidationError> {
        match self.registry.add(draft) {
            Ok(item) => {
                let id = item.id;
                self.form.clear();
                self.last_error = None;
                Ok(id)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Removes the item with this id, if any, and clears the error message.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.registry.remove(id);
        if removed.is_none() {
            debug!(%id, "Delete of unknown item ignored");
        }
        self.last_error = None;
        removed
    }
}
