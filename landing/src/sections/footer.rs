use leptos::prelude::*;
use leptos_router::components::A;
use travelworld_forms::content::{LOCATION, SUPPORT_EMAIL, SUPPORT_PHONE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">"🌍"</span>
                    <span class="footer-title">"TravelWorld"</span>
                    <p class="footer-tagline">"Tours and guides across Bangladesh and beyond."</p>
                </div>
                <div class="footer-links">
                    <A href="/about" attr:class="footer-link">"About Us"</A>
                    <A href="/tourguide" attr:class="footer-link">"Tour Guides"</A>
                    <A href="/contact" attr:class="footer-link">"Contact"</A>
                </div>
                <div class="footer-contact">
                    <a href=format!("mailto:{SUPPORT_EMAIL}") class="footer-link">{SUPPORT_EMAIL}</a>
                    <span>{SUPPORT_PHONE}</span>
                    <span>{LOCATION}</span>
                </div>
                <p class="footer-copyright">
                    "Developed with 🌍 by The TravelWorld Team (c)2025 "
                </p>
            </div>
        </footer>
    }
}
