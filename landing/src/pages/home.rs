// Home page - hero, experience, services, testimonials, newsletter
use crate::sections::{ExperienceStats, Hero, Newsletter, Services, Subscriptions, Testimonials};
use leptos::prelude::*;

#[component]
pub fn HomePage(subscriptions: Subscriptions) -> impl IntoView {
    view! {
        <Hero />
        <Services />
        <ExperienceStats />
        <Testimonials />
        <Newsletter list=subscriptions />
    }
}
