// TravelWorld site — Leptos 0.8 Edition
// Developed with 🌍 by The TravelWorld Team (c)2025

mod forms;
mod pages;
mod sections;
mod storage;
mod transport;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::{Footer, Nav, open_subscriptions};
use travelworld_forms::SiteConfig;

/// Embedded at build time; `TRAVELWORLD_API_BASE` overrides `api_base`.
const SITE_TOML: &str = include_str!("../site.toml");

fn site_config() -> SiteConfig {
    SiteConfig::load_from_str(SITE_TOML).with_api_base(option_env!("TRAVELWORLD_API_BASE"))
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = site_config();
    tracing::info!(api_base = %config.api_base, "starting TravelWorld site");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let subscriptions = open_subscriptions(&config);
    provide_context(config);
    let home = move || view! { <HomePage subscriptions=subscriptions /> };

    view! {
        <Router>
            <Nav />
            <main>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=home />
                    <Route path=path!("/home") view=home />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=RegisterPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/tourguide") view=TourGuidesPage />
                    <Route path=path!("/guide/:id") view=GuideDetailsPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/reset-password") view=ResetPasswordPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/payment") view=PaymentPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
