use crate::sections::Testimonials;
use leptos::prelude::*;
use leptos_router::components::A;
use travelworld_forms::content::home::TEAM;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-header about-hero">
            <div class="container">
                <h1 class="page-title">"About TravelWorld"</h1>
                <p class="page-description">
                    "Explore the world with trusted guides and unforgettable experiences."
                </p>
            </div>
        </section>

        <section class="about-goals">
            <div class="container goals-grid">
                <div class="goal-card">
                    <h2>"Our Mission"</h2>
                    <p>"Connect travelers with expert guides and create memorable journeys across the globe."</p>
                </div>
                <div class="goal-card">
                    <h2>"Our Vision"</h2>
                    <p>
                        "Be the most trusted travel platform offering personalized tours and "
                        "sustainable tourism experiences."
                    </p>
                </div>
            </div>
        </section>

        <section class="team">
            <div class="container">
                <h2 class="section-title">"Meet Our Team"</h2>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="team-card">
                                    <img src=member.photo alt=member.name />
                                    <h3>{member.name}</h3>
                                    <p>{member.role}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <Testimonials />

        <section class="cta">
            <div class="container">
                <h2>"Ready to Explore?"</h2>
                <A href="/tourguide" attr:class="btn btn-primary">"Book Your Tour Guide Now"</A>
            </div>
        </section>
    }
}
