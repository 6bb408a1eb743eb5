use leptos::prelude::*;
use travelworld_forms::content::home::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Fans love"</p>
                    <h2 class="section-title">"What our travellers say about us"</h2>
                </div>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial">
                                    <p>{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <cite>{format!("- {}", t.author)}</cite>
                                </blockquote>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
