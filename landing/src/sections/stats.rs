use std::time::Duration;

use leptos::prelude::*;
use travelworld_forms::content::{CountUp, Stats, format_thousands};

fn tick(count: CountUp, started_ms: f64, shown: WriteSignal<Stats>) {
    if shown.is_disposed() {
        return;
    }
    let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
    let elapsed = Duration::from_millis(elapsed_ms as u64);
    shown.set(count.at(elapsed));
    if !count.is_done(elapsed) {
        request_animation_frame(move || tick(count, started_ms, shown));
    }
}

#[component]
pub fn ExperienceStats() -> impl IntoView {
    let (shown, set_shown) = signal(Stats::default());
    tick(CountUp::default(), js_sys::Date::now(), set_shown);

    view! {
        <section class="experience">
            <div class="container experience-grid">
                <div class="experience-text">
                    <p class="section-eyebrow">"Experience"</p>
                    <h2 class="section-title">"With all our experience we will serve you"</h2>
                    <p class="section-description">
                        "Years of trips planned, guides trained and travellers brought home happy."
                    </p>
                </div>
                <div class="experience-counters">
                    <StatBox value=Signal::derive(move || shown.get().trips) label="Successful Trips" />
                    <StatBox value=Signal::derive(move || shown.get().clients) label="Regular Clients" />
                    <StatBox value=Signal::derive(move || shown.get().years) label="Years Experience" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatBox(value: Signal<u64>, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-box">
            <span class="stat-value">{move || format!("{}+", format_thousands(value.get()))}</span>
            <h6 class="stat-label">{label}</h6>
        </div>
    }
}
