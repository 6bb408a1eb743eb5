use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use travelworld_forms::newsletter::{self, SubscriptionList};
use travelworld_forms::{FormState, Outcome, SiteConfig};

use crate::storage::BrowserStorage;

/// The site-wide subscription list, opened once when the app starts.
pub type Subscriptions = RwSignal<SubscriptionList<BrowserStorage>>;

pub fn open_subscriptions(config: &SiteConfig) -> Subscriptions {
    RwSignal::new(SubscriptionList::open(
        BrowserStorage,
        config.newsletter_key.clone(),
    ))
}

/// Newsletter signup. Subscriptions are appended to `list`; there is no
/// server call.
#[component]
pub fn Newsletter(list: Subscriptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let dismiss_after = config.success_dismiss();

    let state = RwSignal::new(FormState::new(newsletter::schema()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let now = chrono::Utc::now();
        let signed_up = list
            .try_update(|list| state.try_update(|s| newsletter::submit_signup(s, list, now)))
            .flatten();

        if let Some(Ok(entry)) = signed_up {
            tracing::debug!(date = %entry.date, "newsletter signup stored");
            let seq = state.with_untracked(FormState::outcome_seq);
            set_timeout(
                move || {
                    state.try_update(|s| s.dismiss(seq));
                },
                dismiss_after,
            );
        }
    };

    let button_label = move || {
        state.with(|s| match s.outcome() {
            Outcome::Success(text) => text.clone(),
            _ => "Subscribe".to_string(),
        })
    };

    view! {
        <section class="newsletter">
            <div class="container newsletter-inner">
                <div class="newsletter-text">
                    <h2>"Subscribe now to get useful traveling information"</h2>
                    <p>"Deals, new tours and guide picks, straight to your inbox."</p>
                </div>
                <form class="newsletter-form" novalidate=true on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || state.with(|s| s.value("email").to_string())
                        on:input=move |ev: Event| {
                            state.update(|s| s.input("email", event_target_value(&ev)));
                        }
                    />
                    <button
                        type="submit"
                        class=move || {
                            if state.with(|s| s.outcome().is_success()) {
                                "btn-subscribe subscribed"
                            } else {
                                "btn-subscribe"
                            }
                        }
                    >
                        {button_label}
                    </button>
                    {move || {
                        state
                            .with(|s| s.error("email").map(str::to_string))
                            .map(|message| view! { <small class="validation">{message}</small> })
                    }}
                </form>
            </div>
        </section>
    }
}
