use amine_core::view::{COLUMNS, ItemRow};
use amine_core::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;

use super::app::App;
use crate::text_field::TextCursor;

const NAME_PLACEHOLDER: &str = "Item name";
const PRICE_PLACEHOLDER: &str = "0";
const CATEGORY_PLACEHOLDER: &str = "-- Select --";
const ADD_BUTTON: &str = "[ Add Item ]";

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Min(12),
    Constraint::Length(16),
    Constraint::Length(10),
    Constraint::Length(12),
];

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Error message
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_error(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Item Management")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(header, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(COLUMNS).style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = app
        .manager
        .items()
        .iter()
        .map(|item| {
            let row = ItemRow::new(item, app.icons);
            Row::new([
                Cell::from(row.id),
                Cell::from(row.name),
                Cell::from(row.category),
                Cell::from(row.price),
                Cell::from(Span::styled(row.action, Style::default().fg(Color::Red))),
            ])
        })
        .collect();

    // The input form is always the last row.
    rows.push(form_row(app));

    // Selecting the form row while the form has focus keeps it scrolled into
    // view; only item rows get the highlight.
    let (selected, highlight) = if app.rows_focused {
        (
            app.selected_row,
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )
    } else {
        (app.manager.items().len(), Style::default())
    };

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Items "))
        .row_highlight_style(highlight);

    let mut state = TableState::default().with_selected(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn form_row(app: &App) -> Row<'static> {
    let focus = app.form_focus();
    let form = app.manager.form();

    let name = text_input(
        &form.name,
        &app.name_cursor,
        NAME_PLACEHOLDER,
        focus == Some(FormField::Name),
    );
    let price = text_input(
        &form.price,
        &app.price_cursor,
        PRICE_PLACEHOLDER,
        focus == Some(FormField::Price),
    );

    let category_label = form
        .category
        .map(|c| c.label())
        .unwrap_or(CATEGORY_PLACEHOLDER);
    let category = if focus == Some(FormField::Category) {
        Line::from(Span::styled(format!("◀ {} ▶", category_label), focused_style()))
    } else {
        Line::from(category_label)
    };

    let button_style = if focus == Some(FormField::AddButton) {
        focused_style()
    } else {
        Style::default().fg(Color::Green)
    };
    let button = Line::from(Span::styled(ADD_BUTTON, button_style));

    Row::new([
        Cell::from(""),
        Cell::from(name),
        Cell::from(category),
        Cell::from(price),
        Cell::from(button),
    ])
}

fn focused_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

/// Renders a text field with an inline block cursor when focused.
fn text_input(
    text: &str,
    cursor: &TextCursor,
    placeholder: &str,
    focused: bool,
) -> Line<'static> {
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    if text.is_empty() {
        return if focused {
            Line::from(vec![
                Span::styled(" ", cursor_style),
                Span::styled(placeholder.to_string(), placeholder_style),
            ])
        } else {
            Line::from(Span::styled(placeholder.to_string(), placeholder_style))
        };
    }

    if !focused {
        return Line::from(text.to_string());
    }

    let column = cursor.column(text);
    let mut graphemes = text.graphemes(true);
    let before: String = graphemes.by_ref().take(column).collect();
    let at = graphemes.next().unwrap_or(" ").to_string();
    let after: String = graphemes.collect();

    Line::from(vec![
        Span::styled(before, focused_style()),
        Span::styled(at, cursor_style),
        Span::styled(after, focused_style()),
    ])
}

fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let message = app.manager.error_message().unwrap_or_default();
    let error = Paragraph::new(message.to_string()).style(Style::default().fg(Color::Red));

    frame.render_widget(error, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = match app.form_focus() {
        None => "↑/↓: Select  d/Del: Delete row  Tab: Next  Esc: Quit",
        Some(FormField::Category) => "←/→: Choose category  Tab: Next  Esc: Quit",
        Some(FormField::AddButton) => "Enter: Add item  Tab: Next  Esc: Quit",
        Some(FormField::Name | FormField::Price) => {
            "Enter: Add item  Tab: Next  Shift+Tab: Back  Esc: Quit"
        }
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
