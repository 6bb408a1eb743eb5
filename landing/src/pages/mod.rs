// Site routes
// Developed with 🌍 by The TravelWorld Team (c)2025

mod about;
mod auth;
mod contact;
mod guides;
mod home;
mod payment;
mod profile;

pub use about::AboutPage;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage, ResetPasswordPage};
pub use contact::ContactPage;
pub use guides::{GuideDetailsPage, TourGuidesPage};
pub use home::HomePage;
pub use payment::PaymentPage;
pub use profile::ProfilePage;

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Page not found"</h1>
                <A href="/" attr:class="btn btn-primary">"← Back to Homepage"</A>
            </div>
        </section>
    }
}
