use amine_core::FormField;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

pub fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            handle_key(app, key);
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        _ => {}
    }

    match app.form_focus() {
        None => handle_rows_key(app, key),
        Some(FormField::Name | FormField::Price) => handle_text_key(app, key),
        Some(FormField::Category) => handle_category_key(app, key),
        Some(FormField::AddButton) => handle_button_key(app, key),
    }
}

fn handle_text_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => app.submit(),
        (KeyCode::Backspace, _) => app.edit(|cursor, text| cursor.backspace(text)),
        (KeyCode::Delete, _) => app.edit(|cursor, text| cursor.delete(text)),
        (KeyCode::Left, _) => app.edit(|cursor, text| cursor.left(text)),
        (KeyCode::Right, _) => app.edit(|cursor, text| cursor.right(text)),
        (KeyCode::Home, _) => app.edit(|cursor, _| cursor.home()),
        (KeyCode::End, _) => app.edit(|cursor, text| cursor.end(text)),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.edit(|cursor, text| cursor.insert(text, c));
        }
        _ => {}
    }
}

fn handle_category_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up => app.cycle_category(false),
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => app.cycle_category(true),
        _ => {}
    }
}

fn handle_button_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        app.submit();
    }
}

fn handle_rows_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Enter => app.delete_selected(),
        _ => {}
    }
}
