use amine_core::{FormField, ItemManager};

use crate::text_field::TextCursor;

/// TUI state: the item manager plus cursor, row selection and focus that only
/// the terminal front end needs.
pub struct App {
    pub manager: ItemManager,
    pub name_cursor: TextCursor,
    pub price_cursor: TextCursor,
    /// Focus is on the item rows rather than the form.
    pub rows_focused: bool,
    pub selected_row: usize,
    pub icons: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(icons: bool) -> Self {
        Self {
            manager: ItemManager::new(),
            name_cursor: TextCursor::default(),
            price_cursor: TextCursor::default(),
            rows_focused: false,
            selected_row: 0,
            icons,
            should_quit: false,
        }
    }

    /// Focused form field, or `None` while the rows have focus.
    pub fn form_focus(&self) -> Option<FormField> {
        if self.rows_focused {
            None
        } else {
            Some(self.manager.focus())
        }
    }

    pub fn focus_next(&mut self) {
        if self.rows_focused {
            self.rows_focused = false;
            self.manager.set_focus(FormField::Name);
        } else if self.manager.focus() == FormField::AddButton && self.has_rows() {
            self.focus_rows();
        } else {
            self.manager.set_focus(self.manager.focus().next());
        }
    }

    pub fn focus_prev(&mut self) {
        if self.rows_focused {
            self.rows_focused = false;
            self.manager.set_focus(FormField::AddButton);
        } else if self.manager.focus() == FormField::Name && self.has_rows() {
            self.focus_rows();
        } else {
            self.manager.set_focus(self.manager.focus().prev());
        }
    }

    fn has_rows(&self) -> bool {
        !self.manager.items().is_empty()
    }

    fn focus_rows(&mut self) {
        self.rows_focused = true;
        let last = self.manager.items().len().saturating_sub(1);
        self.selected_row = self.selected_row.min(last);
    }

    pub fn submit(&mut self) {
        if self.manager.submit().is_ok() {
            self.name_cursor = TextCursor::default();
            self.price_cursor = TextCursor::default();
            self.rows_focused = false;
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.manager.cycle_category(forward);
    }

    /// Applies a cursor edit to the focused text field, if any.
    pub fn edit(&mut self, op: impl FnOnce(&mut TextCursor, &mut String)) {
        if self.rows_focused {
            return;
        }
        match self.manager.focus() {
            FormField::Name => op(&mut self.name_cursor, self.manager.name_mut()),
            FormField::Price => op(&mut self.price_cursor, self.manager.price_mut()),
            FormField::Category | FormField::AddButton => {}
        }
    }

    pub fn select_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected_row + 1 < self.manager.items().len() {
            self.selected_row += 1;
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.manager.items().get(self.selected_row).map(|i| i.id) else {
            return;
        };
        self.manager.delete(id);

        let len = self.manager.items().len();
        if len == 0 {
            self.rows_focused = false;
            self.selected_row = 0;
            self.manager.set_focus(FormField::Name);
        } else {
            self.selected_row = self.selected_row.min(len - 1);
        }
    }
}
