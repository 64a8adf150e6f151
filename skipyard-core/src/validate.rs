//! Validation rules for the booking form.
//!
//! These rules are part of the core contract and must pass before
//! [`crate::booking::BookingWorkflow::submit`] is invoked; the presentation
//! layer owns displaying the per-field messages.

use chrono::NaiveDate;

use crate::model::CustomerDetails;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Booking form field a validation error refers to.
pub enum BookingField {
    /// Customer given name.
    FirstName,
    /// Customer family name.
    LastName,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Delivery street address.
    Address,
    /// Delivery postcode.
    Postcode,
    /// Requested delivery date.
    DeliveryDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single per-field validation error.
pub struct FieldError {
    /// Field the error refers to.
    pub field: BookingField,
    /// Message to display next to the field.
    pub message: &'static str,
}

impl FieldError {
    fn new(field: BookingField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check the booking form against the core rules.
///
/// All six customer fields must be non-empty after trimming, the email must
/// look like an address (`\S+@\S+.\S+` shape), and the delivery date must be
/// set and strictly after `today`. Returns one error per offending field; an
/// empty list means the form may be submitted.
#[must_use]
pub fn validate_booking_form(
    customer: &CustomerDetails,
    delivery_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if customer.first_name.trim().is_empty() {
        errors.push(FieldError::new(
            BookingField::FirstName,
            "First name is required",
        ));
    }
    if customer.last_name.trim().is_empty() {
        errors.push(FieldError::new(
            BookingField::LastName,
            "Last name is required",
        ));
    }
    if customer.email.trim().is_empty() {
        errors.push(FieldError::new(BookingField::Email, "Email is required"));
    } else if !email_shape_ok(&customer.email) {
        errors.push(FieldError::new(BookingField::Email, "Email is invalid"));
    }
    if customer.phone.trim().is_empty() {
        errors.push(FieldError::new(
            BookingField::Phone,
            "Phone number is required",
        ));
    }
    if customer.address.trim().is_empty() {
        errors.push(FieldError::new(
            BookingField::Address,
            "Address is required",
        ));
    }
    if customer.postcode.trim().is_empty() {
        errors.push(FieldError::new(
            BookingField::Postcode,
            "Postcode is required",
        ));
    }

    match delivery_date {
        None => errors.push(FieldError::new(
            BookingField::DeliveryDate,
            "Delivery date is required",
        )),
        Some(date) if date <= today => errors.push(FieldError::new(
            BookingField::DeliveryDate,
            "Delivery date must be after today",
        )),
        Some(_) => {}
    }

    errors
}

/// Minimal email shape check: some whitespace-free token containing
/// `local@host.tail` with all three parts non-empty.
fn email_shape_ok(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        let Some((local, rest)) = token.split_once('@') else {
            return false;
        };
        let Some((host, tail)) = rest.rsplit_once('.') else {
            return false;
        };
        !local.is_empty() && !host.is_empty() && !tail.is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_customer() -> CustomerDetails {
        CustomerDetails {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            phone: "01455 000000".to_owned(),
            address: "1 Mill Lane".to_owned(),
            postcode: "LE10".to_owned(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    #[test]
    fn complete_form_passes() {
        let errors = validate_booking_form(&filled_customer(), Some(tomorrow()), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = validate_booking_form(&CustomerDetails::default(), None, today());

        let fields: Vec<BookingField> = errors.iter().map(|error| error.field).collect();
        assert_eq!(
            fields,
            vec![
                BookingField::FirstName,
                BookingField::LastName,
                BookingField::Email,
                BookingField::Phone,
                BookingField::Address,
                BookingField::Postcode,
                BookingField::DeliveryDate,
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut customer = filled_customer();
        customer.first_name = "   ".to_owned();

        let errors = validate_booking_form(&customer, Some(tomorrow()), today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().map(|error| error.field), Some(BookingField::FirstName));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["no-at-sign.com", "a@nodot", "a@ b.c", "@b.c", "a@b."] {
            let mut customer = filled_customer();
            customer.email = bad.to_owned();
            let errors = validate_booking_form(&customer, Some(tomorrow()), today());
            assert_eq!(
                errors.first().map(|error| error.message),
                Some("Email is invalid"),
                "expected {bad:?} to be rejected"
            );
        }

        for good in ["ada@example.com", "a@b.c", "first.last@sub.domain.co.uk"] {
            let mut customer = filled_customer();
            customer.email = good.to_owned();
            let errors = validate_booking_form(&customer, Some(tomorrow()), today());
            assert!(errors.is_empty(), "expected {good:?} to be accepted");
        }
    }

    #[test]
    fn delivery_date_must_be_after_today() {
        let errors = validate_booking_form(&filled_customer(), Some(today()), today());
        assert_eq!(
            errors.first().map(|error| error.message),
            Some("Delivery date must be after today")
        );

        let errors = validate_booking_form(&filled_customer(), Some(tomorrow()), today());
        assert!(errors.is_empty());
    }
}
