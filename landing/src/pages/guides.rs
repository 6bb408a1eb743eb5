// Tour guide list and details
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use travelworld_forms::content::guides::{self, Guide, GUIDES};
use travelworld_forms::content::stars;

#[component]
pub fn TourGuidesPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Meet Our Tour Guides"</h1>
                <p class="page-description">
                    "Explore destinations with the experts who know them best."
                </p>
            </div>
        </section>
        <section class="guides">
            <div class="container guides-grid">
                {GUIDES
                    .iter()
                    .map(|guide| view! { <GuideCard guide=guide /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn GuideCard(guide: &'static Guide) -> impl IntoView {
    view! {
        <div class="guide-card">
            <img src=guide.photo alt=guide.name />
            <h3>{guide.name}</h3>
            <p class="guide-description">{guide.description}</p>
            <p class="guide-rating">{stars(guide.rating)}</p>
            <A href=guide.details_href() attr:class="btn btn-primary">"View Details"</A>
        </div>
    }
}

#[component]
pub fn GuideDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let guide = move || {
        params
            .read()
            .get("id")
            .and_then(|id| guides::find_guide_param(&id))
    };

    move || match guide() {
        Some(guide) => view! { <GuideDetails guide=guide /> }.into_any(),
        None => view! {
            <section class="guide-not-found">
                <h2>"Guide not found"</h2>
                <A href="/tourguide" attr:class="back-link">"← Back to Tour Guides"</A>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn GuideDetails(guide: &'static Guide) -> impl IntoView {
    view! {
        <section class="guide-details">
            <div class="container guide-details-grid">
                <img class="guide-photo" src=guide.photo alt=guide.name />
                <div class="guide-info">
                    <h1>{guide.name}</h1>
                    <p class="guide-rating">{stars(guide.rating)}</p>
                    <h3>"About Me:"</h3>
                    <p>{guide.details}</p>

                    <div class="skills">
                        {guide
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="skill">
                                        <span class="skill-name">{skill.name}</span>
                                        <div class="skill-bar">
                                            <div
                                                class="skill-fill"
                                                style=format!("width: {}%", skill.level)
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <a href=guide.mailto() class="btn btn-primary">"Contact Me"</a>
                    <A href="/tourguide" attr:class="back-link">"← Back to Tour Guides"</A>
                </div>
            </div>
        </section>
    }
}
