use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <p class="hero-badge">"Explore. Discover. Travel."</p>
                    <h1 class="hero-title">
                        "Travelling opens the door to creating "
                        <span class="hero-title-accent">"memories"</span>
                    </h1>
                    <p class="hero-description">
                        "Hand-picked tours, local guides who know every street, "
                        "and support from the first click to the flight home."
                    </p>
                    <div class="hero-actions">
                        <A href="/tourguide" attr:class="btn btn-primary">"Find a Guide"</A>
                        <A href="/about" attr:class="btn btn-secondary">"Learn More →"</A>
                    </div>
                </div>
            </div>
        </section>
    }
}
