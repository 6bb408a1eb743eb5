// Profile page - mocked user, local-only editing
use crate::forms::{FeedbackBanner, FormFields, check_locally};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use travelworld_forms::FormState;
use travelworld_forms::catalog;
use travelworld_forms::content::ProfileData;
use travelworld_forms::content::profile::{QUICK_ACTIONS, TRAVEL_HISTORY, TRAVEL_STATS};

fn editor_state(profile: &ProfileData) -> FormState {
    let mut state = FormState::new(catalog::profile_schema());
    for (name, value) in profile.to_values() {
        state.input(&name, value);
    }
    state
}

fn password_state() -> FormState {
    FormState::new(catalog::change_password_schema())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = RwSignal::new(ProfileData::default());
    let (editing, set_editing) = signal(false);
    let (password_open, set_password_open) = signal(false);
    let editor = RwSignal::new(editor_state(&profile.get_untracked()));
    let password = RwSignal::new(password_state());

    let toggle_edit = move |_| {
        if !editing.get_untracked() {
            editor.set(editor_state(&profile.get_untracked()));
        }
        set_editing.update(|e| *e = !*e);
    };

    let save = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(values) = check_locally(editor, "Profile updated successfully!") {
            profile.update(|p| p.apply_values(&values));
            set_editing.set(false);
        }
    };

    let change_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        if check_locally(password, "Password changed successfully!").is_some() {
            set_password_open.set(false);
        }
    };

    let close_modal = move |_| {
        password.set(password_state());
        set_password_open.set(false);
    };

    let read_only = move || {
        let p = profile.get();
        view! {
            <div class="info-group"><label>"Full Name"</label><p>{p.full_name}</p></div>
            <div class="info-group"><label>"Email Address"</label><p>{p.email}</p></div>
            <div class="info-group"><label>"Phone Number"</label><p>{p.phone}</p></div>
            <div class="info-group"><label>"Address"</label><p>{p.address}</p></div>
        }
    };

    view! {
        <div class="profile-container">
            <div class="profile-header">
                <img class="profile-photo" src=move || profile.with(|p| p.photo.clone()) alt="Profile" />
                <h1>{move || profile.with(|p| p.full_name.clone())}</h1>
                <p class="username">{move || profile.with(|p| format!("@{}", p.username))}</p>
                <div class="profile-actions">
                    <button class="btn-edit-profile" on:click=toggle_edit>
                        {move || if editing.get() { "✏️ Cancel" } else { "✏️ Edit Profile" }}
                    </button>
                    <button class="btn-change-password" on:click=move |_| set_password_open.set(true)>
                        "🔐 Change Password"
                    </button>
                </div>
            </div>

            <FeedbackBanner state=password />

            <div class="profile-grid">
                <div class="profile-card personal-info-card">
                    <div class="card-header">
                        <h2>"👤 Personal Information"</h2>
                        <Show when=move || editing.get()>
                            <span class="editing-badge">"Editing"</span>
                        </Show>
                    </div>
                    <div class="card-body">
                        <FeedbackBanner state=editor />
                        <Show when=move || editing.get() fallback=read_only>
                            <form class="profile-form" novalidate=true on:submit=save>
                                <FormFields state=editor />
                                <button type="submit" class="btn-save">"💾 Save Changes"</button>
                            </form>
                        </Show>
                    </div>
                </div>

                <div class="profile-card stats-card">
                    <div class="card-header"><h2>"📊 Travel Stats"</h2></div>
                    <div class="card-body stats-grid">
                        {TRAVEL_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-item">
                                        <span class="stat-icon">{stat.icon}</span>
                                        <span class="stat-value">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="profile-card history-card">
                    <div class="card-header"><h2>"🗺️ Travel History"</h2></div>
                    <div class="card-body travel-list">
                        {TRAVEL_HISTORY
                            .iter()
                            .map(|trip| {
                                view! {
                                    <div class="travel-item">
                                        <div class="travel-icon">"🛫"</div>
                                        <div class="travel-details">
                                            <h4>{trip.destination}</h4>
                                            <p>{trip.date}</p>
                                        </div>
                                        <span class="travel-status completed">{trip.status}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="profile-card actions-card">
                    <div class="card-header"><h2>"⚡ Quick Actions"</h2></div>
                    <div class="card-body quick-actions">
                        {QUICK_ACTIONS
                            .iter()
                            .map(|(icon, label)| {
                                view! {
                                    <button class="action-btn"><span>{*icon}</span>" "{*label}</button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <Show when=move || password_open.get()>
                <div class="modal-overlay" on:click=close_modal>
                    <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                        <h2>"🔐 Change Password"</h2>
                        <form class="modal-body" novalidate=true on:submit=change_password>
                            <FormFields state=password />
                            <div class="modal-actions">
                                <button type="button" class="btn-cancel" on:click=close_modal>"Cancel"</button>
                                <button type="submit" class="btn-confirm">"Update Password"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
