use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Action {
    None,
    Quit,
    /// Re-run `catalog.load()`
    ReloadCatalog,
    /// Validate the form and run `workflow.submit(...)`
    SubmitBooking,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Delete, Down, Enter, Esc, Left, Right, Tab, Up};

    // Global quit shortcuts; while the form is open, plain characters
    // belong to the focused input instead.
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if key.code == Char('q') && key.modifiers.is_empty() && app.screen != Screen::BookingForm {
        return Action::Quit;
    }

    // Ignore input while a load or submission is in flight.
    if app.is_loading || app.workflow.is_submitting() {
        return Action::None;
    }

    let mut action = Action::None;

    match app.screen {
        Screen::Catalog => match key.code {
            Up | Char('k') => {
                if app.skip_list_index > 0 {
                    app.skip_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.skip_list_index + 1 < app.skips.len() {
                    app.skip_list_index += 1;
                }
            }
            Enter | Char('a' | ' ') => {
                app.add_selected_to_cart();
            }
            Char('c') | Right | Tab => {
                if !app.cart.is_empty() {
                    app.status_message = None;
                    app.screen = Screen::Cart;
                }
            }
            Char('b') => {
                app.proceed_to_booking();
            }
            Char('r') => {
                action = Action::ReloadCatalog;
            }
            _ => {}
        },

        Screen::Cart => match key.code {
            Up | Char('k') => {
                if app.cart_list_index > 0 {
                    app.cart_list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.cart_list_index + 1 < app.cart.lines().len() {
                    app.cart_list_index += 1;
                }
            }
            Char('+' | '=') => {
                app.bump_current_cart_line(true);
            }
            Char('-') => {
                app.bump_current_cart_line(false);
            }
            Char('d') | Delete => {
                app.remove_current_cart_line();
            }
            Char('x') => {
                app.cart.clear();
            }
            Enter | Char('b') => {
                app.proceed_to_booking();
            }
            Left | Esc => {
                app.status_message = None;
                app.screen = Screen::Catalog;
            }
            _ => {}
        },

        Screen::BookingForm => {
            // Once an outcome is showing, only closing (or retrying after a
            // failure) makes sense.
            if app.workflow.succeeded().is_some() {
                if matches!(key.code, Enter | Esc) {
                    app.close_booking();
                }
                return Action::None;
            }

            match key.code {
                Esc => {
                    app.close_booking();
                }
                Tab | Down => {
                    app.form.focus = app.form.focus.next();
                }
                BackTab | Up => {
                    app.form.focus = app.form.focus.prev();
                }
                Enter => {
                    action = Action::SubmitBooking;
                }
                Backspace => {
                    app.form.focused_input_mut().pop();
                    app.form.clear_focused_error();
                }
                Char(character) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        app.form.focused_input_mut().push(character);
                        app.form.clear_focused_error();
                    }
                }
                _ => {}
            }
        }
    }
    action
}
