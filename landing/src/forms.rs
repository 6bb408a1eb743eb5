// Schema-driven form rendering shared by every page with a form
// Developed with 🌍 by The TravelWorld Team (c)2025

use std::collections::HashMap;
use std::sync::Arc;

use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use travelworld_forms::catalog::FormDefinition;
use travelworld_forms::feedback::submit_label;
use travelworld_forms::{
    Banner, FieldKind, FieldSpec, FormController, FormState, Messages, SiteConfig, StateStore,
    SubmissionResult, Submitter,
};

use crate::transport::FetchTransport;

/// A [`FormState`] living in a reactive signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalStore(pub RwSignal<FormState>);

impl StateStore for SignalStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

pub type SiteForm = FormController<SignalStore, FetchTransport>;

/// Controller for `definition`, talking to the configured API.
pub fn use_form(definition: FormDefinition) -> SiteForm {
    let state = definition.new_state();
    use_form_with(definition, state)
}

/// Like [`use_form`], starting from a prepared state (e.g. with context values).
pub fn use_form_with(definition: FormDefinition, state: FormState) -> SiteForm {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let submitter = Submitter::new(
        FetchTransport::new(config.request_timeout()),
        config.api_base.clone(),
    );
    FormController::new(
        SignalStore(RwSignal::new(state)),
        submitter,
        Arc::new(definition),
    )
}

/// Run one submission without blocking the event handler.
pub fn submit_in_background(form: SiteForm) {
    spawn_local(async move {
        let attempt = form.submit().await;
        if let Some((after, seq)) = form.auto_dismiss(&attempt) {
            set_timeout(
                move || {
                    form.dismiss(seq);
                },
                after,
            );
        }
    });
}

/// Validate a form that has no endpoint. On success the values are handed
/// back and `message` becomes the outcome.
pub fn check_locally(state: RwSignal<FormState>, message: &str) -> Option<HashMap<String, String>> {
    state
        .try_update(|s| {
            s.begin_submit().ok()?;
            let values = s.values().clone();
            s.complete(
                SubmissionResult::Ok(Some(message.to_string())),
                &Messages::default(),
            );
            Some(values)
        })
        .flatten()
}

/// Success or error banner for the current outcome.
#[component]
pub fn FeedbackBanner(state: RwSignal<FormState>) -> impl IntoView {
    move || {
        state
            .with(|s| Banner::from_outcome(s.outcome()))
            .map(|banner| view! { <div class=banner.css_class()>{banner.text.clone()}</div> })
    }
}

/// Inputs for every field of the form's schema.
#[component]
pub fn FormFields(state: RwSignal<FormState>) -> impl IntoView {
    let fields = state.with_untracked(|s| s.schema().fields().to_vec());
    fields
        .into_iter()
        .map(|spec| view! { <Field state=state spec=spec /> })
        .collect_view()
}

#[component]
fn Field(state: RwSignal<FormState>, spec: FieldSpec) -> impl IntoView {
    let id = format!("field-{}", spec.name);
    let label = spec.label.clone();
    let placeholder = spec.placeholder.clone().unwrap_or_default();
    let required = spec.required;

    let value = {
        let name = spec.name.clone();
        move || state.with(|s| s.value(&name).to_string())
    };
    let error = {
        let name = spec.name.clone();
        move || {
            state
                .with(|s| s.error(&name).map(str::to_string))
                .map(|message| view! { <small class="validation">{message}</small> })
        }
    };

    if matches!(spec.kind, FieldKind::Flag) {
        let name = spec.name.clone();
        let checked = move || value() == "true";
        return view! {
            <div class="form-group checkbox">
                <label for=id.clone()>
                    <input
                        id=id.clone()
                        type="checkbox"
                        prop:checked=checked
                        on:change=move |ev: Event| {
                            state.update(|s| s.toggle(&name, event_target_checked(&ev)));
                        }
                    />
                    {label}
                </label>
                {error}
            </div>
        }
        .into_any();
    }

    let on_input = {
        let name = spec.name.clone();
        move |ev: Event| state.update(|s| s.input(&name, event_target_value(&ev)))
    };

    let control = if spec.multiline {
        view! {
            <textarea
                id=id.clone()
                rows="5"
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let kind = spec.kind.clone();
        // a "showPassword" flag in the same form unmasks password inputs
        let input_type = move || {
            let masked = kind.input_type() == "password";
            if masked && state.with(|s| s.value("showPassword") == "true") {
                "text"
            } else {
                kind.input_type()
            }
        };
        view! {
            <input
                id=id.clone()
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group" class:has-error=move || state.with(|s| s.error(&spec.name).is_some())>
            <label for=id>{label}</label>
            {control}
            {error}
        </div>
    }
    .into_any()
}

/// Submit button, disabled and relabelled while a request is in flight.
#[component]
pub fn SubmitButton(
    state: RwSignal<FormState>,
    #[prop(into)] label: String,
    #[prop(into)] busy_label: String,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let submitting = move || state.with(FormState::is_submitting);
    view! {
        <button
            type="submit"
            class=class.unwrap_or_else(|| "btn-submit".to_string())
            disabled=submitting
        >
            {move || submit_label(submitting(), &label, &busy_label).to_string()}
        </button>
    }
}

/// Complete form for a catalog definition: banner, fields, submit button.
#[component]
pub fn SchemaForm(
    form: SiteForm,
    /// Overrides the definition's idle button label
    #[prop(optional, into)]
    submit_label: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let state = form.store().0;
    let label = submit_label.unwrap_or_else(|| form.definition().submit_label.clone());
    let busy_label = form.definition().busy_label.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_in_background(form.clone());
    };

    view! {
        <form class="schema-form" novalidate=true on:submit=on_submit>
            <FeedbackBanner state=state />
            <FormFields state=state />
            {children.map(|children| children())}
            <SubmitButton state=state label=label busy_label=busy_label />
        </form>
    }
}
