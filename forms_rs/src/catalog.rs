//! Every form on the site, as data.
//!
//! Each view instantiates one of these definitions instead of carrying its
//! own copy of the validate/submit/feedback logic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::feedback::Messages;
use crate::schema::{FieldKind, FieldSpec, FormSchema};
use crate::state::FormState;
use crate::submit::{Endpoint, ErrorBody, SuccessBody};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    pub schema: Arc<FormSchema>,
    pub endpoint: Endpoint,
    pub messages: Messages,
    pub submit_label: String,
    pub busy_label: String,
}

impl FormDefinition {
    fn new(schema: FormSchema, endpoint: Endpoint, messages: Messages) -> Self {
        Self {
            schema: Arc::new(schema),
            endpoint,
            messages,
            submit_label: "Submit".to_string(),
            busy_label: "Sending...".to_string(),
        }
    }

    fn labels(mut self, submit: &str, busy: &str) -> Self {
        self.submit_label = submit.to_string();
        self.busy_label = busy.to_string();
        self
    }

    pub fn new_state(&self) -> FormState {
        FormState::new(Arc::clone(&self.schema))
    }
}

const NETWORK_ERROR: &str = "Network error! Please try again.";

pub fn contact_form() -> FormDefinition {
    let schema = FormSchema::new()
        .field(FieldSpec::new("name", FieldKind::Text).required().label("Your Name"))
        .field(FieldSpec::new("email", FieldKind::Email).required().label("Your Email"))
        .field(
            FieldSpec::new("message", FieldKind::Text)
                .required()
                .label("Your Message")
                .multiline(),
        );
    FormDefinition::new(
        schema,
        Endpoint::post("/contact"),
        Messages::new("Message sent successfully!").transport(NETWORK_ERROR),
    )
    .labels("Send Message", "Sending...")
}

pub fn login_form() -> FormDefinition {
    let schema = FormSchema::new()
        .field(
            FieldSpec::new("email", FieldKind::Email)
                .required()
                .label("Email Address"),
        )
        .field(
            FieldSpec::new("password", FieldKind::password())
                .required()
                .label("Password"),
        )
        .field(FieldSpec::new("remember", FieldKind::Flag).label("Remember Me"))
        .field(
            FieldSpec::new("showPassword", FieldKind::Flag)
                .label("Show password")
                .ui_only(),
        );
    FormDefinition::new(
        schema,
        Endpoint::post("/login"),
        Messages::new("Login successful!").transport(NETWORK_ERROR),
    )
    .labels("Login", "Logging in...")
}

pub fn register_form() -> FormDefinition {
    let schema = FormSchema::new()
        .field(FieldSpec::new("name", FieldKind::Text).required().label("Full Name"))
        .field(
            FieldSpec::new("email", FieldKind::Email)
                .required()
                .label("Email Address"),
        )
        .field(FieldSpec::new("username", FieldKind::Text).required().label("Username"))
        .field(
            FieldSpec::new("password", FieldKind::password())
                .required()
                .label("Password"),
        )
        .field(
            FieldSpec::new("passwordConfirmation", FieldKind::confirm("password"))
                .required()
                .label("Confirm Password")
                .wire_name("password_confirmation"),
        );
    FormDefinition::new(
        schema,
        Endpoint::post("/register"),
        Messages::new("Registration successful!").transport(NETWORK_ERROR),
    )
    .labels("Register", "Creating account...")
}

pub fn forgot_password_form() -> FormDefinition {
    let schema = FormSchema::new().field(
        FieldSpec::new("email", FieldKind::Email)
            .required()
            .label("Email")
            .placeholder("Enter your email"),
    );
    FormDefinition::new(
        schema,
        Endpoint::post("/api/forgot-password")
            .success_body(SuccessBody::Json)
            .error_body(ErrorBody::Parse {
                fallback: "Something went wrong.".to_string(),
            }),
        Messages::new("Reset link sent to your email!")
            .transport("Network error, please try again."),
    )
    .labels("Send Reset Link", "Sending...")
}

pub fn reset_password_form() -> FormDefinition {
    let schema = FormSchema::new()
        .field(
            FieldSpec::new("email", FieldKind::Email)
                .required()
                .label("Email")
                .placeholder("Enter your email"),
        )
        .field(
            FieldSpec::new("password", FieldKind::password())
                .required()
                .label("New Password")
                .placeholder("New Password"),
        )
        .field(
            FieldSpec::new("passwordConfirmation", FieldKind::confirm("password"))
                .required()
                .label("Confirm Password")
                .placeholder("Confirm Password")
                .wire_name("password_confirmation"),
        );
    FormDefinition::new(
        schema,
        Endpoint::post("/api/reset-password")
            .success_body(SuccessBody::Json)
            .error_body(ErrorBody::Parse {
                fallback: "Something went wrong.".to_string(),
            }),
        Messages::new("Password reset successfully!")
            .transport("Network error, please try again."),
    )
    .labels("Reset Password", "Resetting...")
}

/// Booking details the payment form is opened with; sent, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentContext {
    pub user_id: String,
    pub user_name: String,
    pub tour_name: String,
    pub amount: f64,
}

pub fn payment_form() -> FormDefinition {
    let schema = FormSchema::new()
        .field(
            FieldSpec::new("cardNumber", FieldKind::Text)
                .required()
                .label("Card Number"),
        )
        .field(
            FieldSpec::new("expiry", FieldKind::Text)
                .required()
                .label("Expiry")
                .placeholder("MM/YY"),
        )
        // masked like a password, but without a length rule
        .field(
            FieldSpec::new("cvv", FieldKind::Password { min_len: 0 })
                .required()
                .label("CVV"),
        );
    FormDefinition::new(
        schema,
        Endpoint::post("/api/payment")
            .success_body(SuccessBody::Ignore)
            .error_body(ErrorBody::Fixed("Payment failed. Please try again.".to_string())),
        Messages::new("Payment successful! 🎉").transport("Network error. Try again."),
    )
    .labels("Pay", "Processing...")
}

/// Payment state carrying the booking context (`userId`, `tourName`, `amount`).
pub fn payment_state(definition: &FormDefinition, context: &PaymentContext) -> FormState {
    definition
        .new_state()
        .with_context("userId", json!(context.user_id))
        .with_context("tourName", json!(context.tour_name))
        .with_context("amount", json!(context.amount))
}

/// Profile personal-info editor. Saved locally; there is no endpoint.
pub fn profile_schema() -> Arc<FormSchema> {
    Arc::new(
        FormSchema::new()
            .field(FieldSpec::new("fullName", FieldKind::Text).required().label("Full Name"))
            .field(
                FieldSpec::new("email", FieldKind::Email)
                    .required()
                    .label("Email Address"),
            )
            .field(FieldSpec::new("phone", FieldKind::Text).label("Phone Number"))
            .field(FieldSpec::new("address", FieldKind::Text).label("Address")),
    )
}

/// Profile change-password modal. Validated locally; there is no endpoint.
pub fn change_password_schema() -> Arc<FormSchema> {
    Arc::new(
        FormSchema::new()
            .field(
                FieldSpec::new("currentPassword", FieldKind::Password { min_len: 0 })
                    .required()
                    .label("Current Password")
                    .placeholder("Enter current password"),
            )
            .field(
                FieldSpec::new("newPassword", FieldKind::password())
                    .required()
                    .label("New Password")
                    .placeholder("Enter new password"),
            )
            .field(
                FieldSpec::new("confirmNewPassword", FieldKind::confirm("newPassword"))
                    .required()
                    .label("Confirm New Password")
                    .placeholder("Confirm new password"),
            ),
    )
}
