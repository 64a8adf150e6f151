use std::sync::Arc;

use chrono::NaiveDate;
use skipyard_core::{
    booking::BookingWorkflow,
    cart::CartStore,
    catalog::CatalogService,
    model::{CustomerDetails, EnrichedSkip},
    validate::{BookingField, FieldError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Catalog,
    Cart,
    BookingForm,
}

/// Booking form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormFocus {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    Postcode,
    DeliveryDate,
    Notes,
}

impl FormFocus {
    pub(crate) const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Postcode,
        Self::DeliveryDate,
        Self::Notes,
    ];

    pub(crate) fn next(self) -> Self {
        let index = Self::ALL.iter().position(|focus| *focus == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|focus| *focus == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Editable state of the booking form.
pub(crate) struct BookingForm {
    pub customer: CustomerDetails,
    /// Delivery date as typed, expected as YYYY-MM-DD.
    pub delivery_date_input: String,
    pub notes: String,
    pub focus: FormFocus,
    pub errors: Vec<FieldError>,
}

impl BookingForm {
    fn new() -> Self {
        Self {
            customer: CustomerDetails {
                // The storefront serves one area; prefill like the web form does.
                postcode: String::from("LE10"),
                ..CustomerDetails::default()
            },
            delivery_date_input: String::new(),
            notes: String::new(),
            focus: FormFocus::FirstName,
            errors: Vec::new(),
        }
    }

    pub(crate) fn parsed_delivery_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.delivery_date_input.trim(), "%Y-%m-%d").ok()
    }

    pub(crate) fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            FormFocus::FirstName => &mut self.customer.first_name,
            FormFocus::LastName => &mut self.customer.last_name,
            FormFocus::Email => &mut self.customer.email,
            FormFocus::Phone => &mut self.customer.phone,
            FormFocus::Address => &mut self.customer.address,
            FormFocus::Postcode => &mut self.customer.postcode,
            FormFocus::DeliveryDate => &mut self.delivery_date_input,
            FormFocus::Notes => &mut self.notes,
        }
    }

    pub(crate) fn error_for(&self, field: BookingField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Drop the error attached to the focused field once the user edits it.
    pub(crate) fn clear_focused_error(&mut self) {
        let field = match self.focus {
            FormFocus::FirstName => BookingField::FirstName,
            FormFocus::LastName => BookingField::LastName,
            FormFocus::Email => BookingField::Email,
            FormFocus::Phone => BookingField::Phone,
            FormFocus::Address => BookingField::Address,
            FormFocus::Postcode => BookingField::Postcode,
            FormFocus::DeliveryDate => BookingField::DeliveryDate,
            FormFocus::Notes => return,
        };
        self.errors.retain(|error| error.field != field);
    }
}

pub(crate) struct App {
    pub catalog: Arc<CatalogService>,
    pub workflow: BookingWorkflow,
    pub cart: CartStore,

    pub screen: Screen,
    pub skips: Vec<EnrichedSkip>,
    pub skip_list_index: usize,
    pub cart_list_index: usize,
    pub form: BookingForm,

    pub is_loading: bool,
    pub status_message: Option<String>,
}

impl App {
    pub(crate) fn new(catalog: Arc<CatalogService>, workflow: BookingWorkflow) -> Self {
        Self {
            catalog,
            workflow,
            cart: CartStore::new(),
            screen: Screen::Catalog,
            skips: Vec::new(),
            skip_list_index: 0,
            cart_list_index: 0,
            form: BookingForm::new(),
            is_loading: false,
            status_message: None,
        }
    }

    pub(crate) fn selected_skip(&self) -> Option<&EnrichedSkip> {
        self.skips.get(self.skip_list_index)
    }

    /// Add the highlighted skip to the cart, refusing unavailable ones.
    /// Availability gating lives here, not in the store.
    pub(crate) fn add_selected_to_cart(&mut self) {
        let Some(skip) = self.selected_skip().cloned() else {
            return;
        };

        if !skip.record.availability {
            self.status_message = Some(format!("{} is currently unavailable", skip.name));
            return;
        }

        self.status_message = Some(format!("{} added to cart", skip.name));
        self.cart.add(skip, 1);
    }

    pub(crate) fn remove_current_cart_line(&mut self) {
        let Some(line) = self.cart.lines().get(self.cart_list_index) else {
            return;
        };
        self.cart.remove(line.skip.id());
        self.clamp_cart_index();
    }

    pub(crate) fn bump_current_cart_line(&mut self, up: bool) {
        let Some(line) = self.cart.lines().get(self.cart_list_index) else {
            return;
        };
        let (id, quantity) = (line.skip.id(), line.quantity);

        // Decrementing past 1 removes the line, per the store contract.
        let new_quantity = if up {
            quantity.saturating_add(1)
        } else {
            quantity.saturating_sub(1)
        };
        self.cart.update_quantity(id, new_quantity);
        self.clamp_cart_index();
    }

    /// Open the booking modal over the current cart.
    pub(crate) fn proceed_to_booking(&mut self) {
        if self.cart.is_empty() {
            self.status_message = Some(String::from("Cart is empty, add a skip first"));
            return;
        }
        self.status_message = None;
        self.form.errors.clear();
        self.workflow.open();
        self.screen = Screen::BookingForm;
    }

    /// Close the booking modal and return to the cart (or catalog when the
    /// cart was cleared by a successful booking).
    pub(crate) fn close_booking(&mut self) {
        let succeeded = self.workflow.succeeded().is_some();
        self.workflow.close();
        if succeeded {
            self.form = BookingForm::new();
        }
        self.screen = if self.cart.is_empty() {
            Screen::Catalog
        } else {
            Screen::Cart
        };
    }

    fn clamp_cart_index(&mut self) {
        let len = self.cart.lines().len();
        if self.cart_list_index >= len {
            self.cart_list_index = len.saturating_sub(1);
        }
    }
}
