use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use skipyard_core::model::EnrichedSkip;
use skipyard_core::validate::BookingField;

use crate::app::{App, BookingForm, FormFocus, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header with a cart badge once something is in the cart
    let summary = app.cart.summary();
    let header_text = if summary.total_items > 0 {
        format!(
            "Choose your skip size · Serving Hinckley, LE10 · Cart ({}) {}",
            summary.total_items,
            money(summary.grand_total)
        )
    } else {
        String::from("Choose your skip size · Serving Hinckley, LE10")
    };
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Skipyard"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::Catalog => draw_catalog(frame, app, *content_area),
        Screen::Cart => draw_cart(frame, app, *content_area),
        Screen::BookingForm => draw_booking(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::Catalog => "↑/↓ move · Enter/a add to cart · c cart · b book · r reload · q quit",
        Screen::Cart => "↑/↓ move · +/- quantity · d remove · x clear · Enter book · Esc back · q quit",
        Screen::BookingForm => "Tab/↑/↓ fields · type to edit · Enter submit · Esc close",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.status_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_catalog(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // skip table
            Constraint::Length(4), // description of the highlighted skip
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [table_area, description_area] = chunks else {
        return;
    };

    if app.is_loading && app.skips.is_empty() {
        let paragraph = Paragraph::new("Loading available skips…")
            .block(Block::default().borders(Borders::ALL).title("Available skips"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *table_area);
        return;
    }

    let rows = app.skips.iter().enumerate().map(|(index, skip)| {
        let in_cart = app.cart.quantity_of(skip.id());
        let availability = if skip.record.availability {
            "available"
        } else {
            "unavailable"
        };

        let mut style = if skip.record.availability {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if index == app.skip_list_index {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        Row::new(vec![
            Cell::from(skip.name.clone()),
            Cell::from(money(skip.total_price)),
            Cell::from(skip.record.delivery_time.clone()),
            Cell::from(availability),
            Cell::from(if in_cart > 0 {
                format!("x{in_cart}")
            } else {
                String::new()
            }),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(4),
    ];

    let title = format!("Available skips ({})", app.skips.len());
    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Skip", "Inc. VAT", "Delivery", "Status", "In cart"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, *table_area);

    let description = app
        .selected_skip()
        .map_or_else(String::new, selected_blurb);
    let paragraph = Paragraph::new(description)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, *description_area);
}

fn selected_blurb(skip: &EnrichedSkip) -> String {
    format!(
        "{} · {} + {} VAT = {} · {}",
        skip.description,
        money(skip.record.price_before_vat),
        money(skip.record.vat),
        money(skip.total_price),
        skip.image
    )
}

fn draw_cart(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // lines
            Constraint::Length(3), // summary
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [lines_area, summary_area] = chunks else {
        return;
    };

    if app.cart.is_empty() {
        let paragraph = Paragraph::new("Your cart is empty. Go back and add a skip.")
            .block(Block::default().borders(Borders::ALL).title("Cart"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, *lines_area);
    } else {
        let rows = app.cart.lines().iter().enumerate().map(|(index, line)| {
            let quantity = f64::from(line.quantity);
            let mut style = Style::default();
            if index == app.cart_list_index {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }

            Row::new(vec![
                Cell::from(line.skip.name.clone()),
                Cell::from(format!("x{}", line.quantity)),
                Cell::from(money(line.skip.total_price)),
                Cell::from(money(line.skip.total_price * quantity)),
            ])
            .style(style)
        });

        let column_widths = [
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Min(12),
        ];

        let table = Table::new(rows, column_widths)
            .header(
                Row::new(vec!["Skip", "Qty", "Unit inc. VAT", "Line total"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::ALL).title("Cart"))
            .column_spacing(1);

        frame.render_widget(table, *lines_area);
    }

    let summary = app.cart.summary();
    let summary_text = format!(
        "{} item(s) · Subtotal {} · VAT {} · Total {}",
        summary.total_items,
        money(summary.subtotal),
        money(summary.total_vat),
        money(summary.grand_total)
    );
    let paragraph = Paragraph::new(summary_text)
        .block(Block::default().borders(Borders::ALL).title("Summary"));
    frame.render_widget(paragraph, *summary_area);
}

fn draw_booking(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let summary = app.cart.summary();
    let title = format!(
        "Complete your booking · {} item(s) · {}",
        summary.total_items,
        money(summary.grand_total)
    );

    if app.workflow.is_submitting() {
        let paragraph = Paragraph::new("Submitting your booking…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(result) = app.workflow.succeeded() {
        let reference = result.booking_id.as_deref().unwrap_or("-");
        let text = format!(
            "Booking confirmed!\n\n{}\nReference: {reference}\n\nPress Enter or Esc to close.",
            result.message
        );
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // error banner (possibly empty)
            Constraint::Min(0),    // form fields
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [banner_area, form_area] = chunks else {
        return;
    };

    let banner = if let Some(message) = app.workflow.error() {
        Paragraph::new(message.to_owned()).style(Style::default().fg(Color::Red))
    } else if app.form.errors.is_empty() {
        Paragraph::new("Fill in your details and press Enter to book.")
    } else {
        Paragraph::new("Please fix the highlighted fields.").style(Style::default().fg(Color::Red))
    };
    frame.render_widget(
        banner.block(Block::default().borders(Borders::ALL)),
        *banner_area,
    );

    let rows = FormFocus::ALL.into_iter().map(|focus| {
        let (label, value) = field_row(&app.form, focus);
        let error = field_error(&app.form, focus).unwrap_or("");

        let mut style = Style::default();
        if focus == app.form.focus {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        Row::new(vec![
            Cell::from(label),
            Cell::from(value),
            Cell::from(error).style(Style::default().fg(Color::Red)),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(16),
        Constraint::Min(24),
        Constraint::Length(32),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Field", "Value", ""]).style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, *form_area);
}

fn field_row(form: &BookingForm, focus: FormFocus) -> (&'static str, String) {
    match focus {
        FormFocus::FirstName => ("First name", form.customer.first_name.clone()),
        FormFocus::LastName => ("Last name", form.customer.last_name.clone()),
        FormFocus::Email => ("Email", form.customer.email.clone()),
        FormFocus::Phone => ("Phone", form.customer.phone.clone()),
        FormFocus::Address => ("Address", form.customer.address.clone()),
        FormFocus::Postcode => ("Postcode", form.customer.postcode.clone()),
        FormFocus::DeliveryDate => ("Date (YYYY-MM-DD)", form.delivery_date_input.clone()),
        FormFocus::Notes => ("Notes", form.notes.clone()),
    }
}

fn field_error(form: &BookingForm, focus: FormFocus) -> Option<&'static str> {
    let field = match focus {
        FormFocus::FirstName => BookingField::FirstName,
        FormFocus::LastName => BookingField::LastName,
        FormFocus::Email => BookingField::Email,
        FormFocus::Phone => BookingField::Phone,
        FormFocus::Address => BookingField::Address,
        FormFocus::Postcode => BookingField::Postcode,
        FormFocus::DeliveryDate => BookingField::DeliveryDate,
        FormFocus::Notes => return None,
    };
    form.error_for(field)
}

fn money(value: f64) -> String {
    format!("£{value:.2}")
}
