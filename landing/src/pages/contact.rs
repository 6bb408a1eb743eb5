use crate::forms::{SchemaForm, use_form};
use leptos::prelude::*;
use leptos_router::components::A;
use travelworld_forms::catalog;
use travelworld_forms::content::{LOCATION, SUPPORT_EMAIL, SUPPORT_PHONE};

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = use_form(catalog::contact_form());

    view! {
        <div class="contact-container">
            <div class="contact-info">
                <h1>"Contact TravelWorld ✈️"</h1>
                <ul class="contact-details">
                    <li>{format!("📍 {LOCATION}")}</li>
                    <li>{format!("📧 {SUPPORT_EMAIL}")}</li>
                    <li>{format!("📞 {SUPPORT_PHONE}")}</li>
                </ul>
                <A href="/home" attr:class="back-home">"← Back to Homepage"</A>
            </div>
            <div class="contact-form">
                <h2>"Send Us a Message"</h2>
                <p class="subtitle">"We’ll get back to you as soon as possible."</p>
                <SchemaForm form=form />
            </div>
        </div>
    }
}
