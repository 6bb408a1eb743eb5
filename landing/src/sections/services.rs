use leptos::prelude::*;
use travelworld_forms::content::home::SERVICES;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"What we serve"</p>
                    <h2 class="section-title">"We offer our best services"</h2>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <ServiceCard
                                    icon=service.icon
                                    title=service.title
                                    text=service.text
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="service-card">
            <div class="service-icon">{icon}</div>
            <h3 class="service-title">{title}</h3>
            <p class="service-text">{text}</p>
        </div>
    }
}
