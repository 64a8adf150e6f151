//! Terminal storefront: browse skip sizes, fill a cart, and book a delivery.

mod app;
mod input;
mod ui;

use std::{io, sync::Arc, time::Duration as StdDuration};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use skipyard_core::{booking::BookingWorkflow, catalog::CatalogService, validate::validate_booking_form};
use skipyard_provider_wewantwaste::{SimulatedBookingGateway, WeWantWasteCatalog};

use crate::app::App;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    // Opt-in logging to stderr; the alternate screen hides it unless the
    // output is redirected, so only install a subscriber when asked for.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    // HTTP + service setup
    let client = Client::builder().user_agent("skipyard/0.1").build()?;

    let catalog = Arc::new(CatalogService::new(Arc::new(WeWantWasteCatalog::new(
        client,
    ))));
    let workflow = BookingWorkflow::new(Arc::new(SimulatedBookingGateway::new()));

    // App state
    let app = App::new(catalog, workflow);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    // Initial catalog load; the loader falls back to static data on failure,
    // so this never errors out.
    load_catalog(terminal, &mut app).await?;

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::ReloadCatalog => {
                    // The key handler already ignores input while loading,
                    // so at most one load is in flight.
                    load_catalog(terminal, &mut app).await?;
                }
                Action::SubmitBooking => {
                    submit_booking(terminal, &mut app).await?;
                }
            }
        }
    }

    Ok(())
}

async fn load_catalog(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.is_loading = true;
    app.status_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    let catalog = Arc::clone(&app.catalog);
    app.skips = catalog.load().await;

    app.is_loading = false;
    if app.skip_list_index >= app.skips.len() {
        app.skip_list_index = app.skips.len().saturating_sub(1);
    }
    Ok(())
}

async fn submit_booking(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let today = Local::now().date_naive();
    let delivery_date = app.form.parsed_delivery_date();

    let errors = validate_booking_form(&app.form.customer, delivery_date, today);
    if !errors.is_empty() {
        app.form.errors = errors;
        return Ok(());
    }
    let Some(date) = delivery_date else {
        return Ok(());
    };
    app.form.errors.clear();

    // Snapshot the cart before handing it to the workflow.
    let lines = app.cart.lines().to_vec();
    let customer = app.form.customer.clone();
    let notes = {
        let trimmed = app.form.notes.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    };

    app.is_loading = true;
    terminal.draw(|frame| ui::draw(frame, app))?;

    app.workflow.submit(&lines, &customer, date, notes).await;

    app.is_loading = false;
    if app.workflow.succeeded().is_some() {
        // Clearing the cart on success is the caller's job.
        app.cart.clear();
        app.cart_list_index = 0;
    }
    Ok(())
}
