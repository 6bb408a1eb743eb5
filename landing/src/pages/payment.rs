use crate::forms::{SchemaForm, use_form_with};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use travelworld_forms::catalog::{self, PaymentContext};
use travelworld_forms::content::ProfileData;

const DEFAULT_TOUR: &str = "Cox's Bazar Beach Tour";
const DEFAULT_AMOUNT: f64 = 5000.0;

/// Booking being paid for, from `?tour=..&amount=..`; the payer is the
/// signed-in (mocked) user.
fn booking() -> PaymentContext {
    let query = use_query_map().get_untracked();
    let profile = ProfileData::default();
    PaymentContext {
        user_id: profile.username,
        user_name: profile.full_name,
        tour_name: query.get("tour").unwrap_or_else(|| DEFAULT_TOUR.to_string()),
        amount: query
            .get("amount")
            .and_then(|amount| amount.parse().ok())
            .filter(|amount: &f64| amount.is_finite() && *amount > 0.0)
            .unwrap_or(DEFAULT_AMOUNT),
    }
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let context = booking();
    let definition = catalog::payment_form();
    let state = catalog::payment_state(&definition, &context);
    let form = use_form_with(definition, state);

    view! {
        <div class="payment-container">
            <div class="payment-card">
                <h2>"Complete " <span>"Payment"</span></h2>
                <p class="subtitle">"User: " <strong>{context.user_name.clone()}</strong></p>
                <div class="payment-details">
                    <p><strong>"Tour: "</strong>{context.tour_name.clone()}</p>
                    <p><strong>"Amount: "</strong>{format!("৳ {}", context.amount)}</p>
                </div>
                <SchemaForm form=form submit_label=format!("Pay ৳{}", context.amount) />
            </div>
        </div>
    }
}
