//! End-to-end form flows against an in-memory transport.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use futures::channel::oneshot;
use pretty_assertions::assert_eq;
use travelworld_forms::catalog::{self, FormDefinition};
use travelworld_forms::state::FieldErrors;
use travelworld_forms::{
    FormController, FormState, HttpRequest, HttpResponse, Outcome, SubmitAttempt, SubmitRejected,
    Submitter, Transport, TransportFailure,
};

type Reply = Result<HttpResponse, TransportFailure>;

/// Replies in order; a reply may wait on a gate before resolving.
#[derive(Clone, Default)]
struct FakeServer {
    replies: Rc<RefCell<VecDeque<(Option<oneshot::Receiver<()>>, Reply)>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeServer {
    fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back((None, Ok(HttpResponse::new(status, body))));
        self
    }

    fn reply_when_released(self, status: u16, body: &str) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.replies
            .borrow_mut()
            .push_back((Some(rx), Ok(HttpResponse::new(status, body))));
        (self, tx)
    }

    fn unreachable(self) -> Self {
        self.replies.borrow_mut().push_back((
            None,
            Err(TransportFailure::Network("connection refused".into())),
        ));
        self
    }

    fn calls(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Transport for FakeServer {
    async fn send(&self, request: HttpRequest) -> Reply {
        self.sent.borrow_mut().push(request);
        let next = self.replies.borrow_mut().pop_front();
        let Some((gate, reply)) = next else {
            return Err(TransportFailure::Network("no reply scripted".into()));
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        reply
    }
}

type Form = FormController<Rc<RefCell<FormState>>, FakeServer>;

fn form(definition: FormDefinition, server: &FakeServer) -> Form {
    let store = Rc::new(RefCell::new(definition.new_state()));
    FormController::new(store, Submitter::new(server.clone(), ""), Arc::new(definition))
}

fn fill(form: &Form, pairs: &[(&str, &str)]) {
    for (name, value) in pairs {
        form.input(name, *value);
    }
}

fn state(form: &Form) -> FormState {
    form.store().borrow().clone()
}

const JANE: &[(&str, &str)] = &[
    ("name", "Jane"),
    ("email", "jane@x.com"),
    ("username", "janex"),
    ("password", "secret1"),
    ("passwordConfirmation", "secret1"),
];

#[tokio::test]
async fn register_success_resets_the_form() {
    let server = FakeServer::default().reply(200, r#"{"message":"ok"}"#);
    let register = form(catalog::register_form(), &server);
    fill(&register, JANE);

    let attempt = register.submit().await;

    assert_eq!(server.calls(), 1);
    let sent = server.sent.borrow()[0].clone();
    assert_eq!(sent.url, "/register");
    let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "username": "janex",
            "password": "secret1",
            "password_confirmation": "secret1",
        })
    );

    let SubmitAttempt::Completed { outcome, .. } = attempt else {
        panic!("expected a completed submission, got {attempt:?}");
    };
    assert_eq!(outcome, Outcome::Success("ok".into()));
    let after = state(&register);
    assert!(after.values().values().all(String::is_empty));
    assert!(!after.is_submitting());
}

#[tokio::test]
async fn register_mismatch_never_reaches_the_network() {
    let server = FakeServer::default().reply(200, "{}");
    let register = form(catalog::register_form(), &server);
    fill(&register, JANE);
    register.input("passwordConfirmation", "other12");

    let attempt = register.submit().await;

    let expected: FieldErrors = [(
        "passwordConfirmation".to_string(),
        "Passwords do not match".to_string(),
    )]
    .into_iter()
    .collect();
    assert_eq!(attempt, SubmitAttempt::Rejected(SubmitRejected::Invalid(expected)));
    assert_eq!(server.calls(), 0);
    assert_eq!(state(&register).outcome(), &Outcome::None);
    assert!(!state(&register).is_submitting());
}

#[tokio::test]
async fn login_domain_error_keeps_values() {
    let server = FakeServer::default().reply(401, r#"{"message":"Invalid credentials"}"#);
    let login = form(catalog::login_form(), &server);
    fill(&login, &[("email", "jane@x.com"), ("password", "secret1")]);
    login.toggle("remember", true);

    login.submit().await;

    let after = state(&login);
    assert_eq!(after.outcome(), &Outcome::Error("Invalid credentials".into()));
    assert_eq!(after.value("email"), "jane@x.com");
    assert_eq!(after.value("password"), "secret1");
    assert_eq!(after.value("remember"), "true");
    assert_eq!(server.calls(), 1);
}

#[tokio::test]
async fn contact_transport_failure_shows_generic_message() {
    let server = FakeServer::default().unreachable();
    let contact = form(catalog::contact_form(), &server);
    fill(
        &contact,
        &[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", "Do you run tours in July?"),
        ],
    );

    contact.submit().await;

    let after = state(&contact);
    assert_eq!(
        after.outcome(),
        &Outcome::Error("Network error! Please try again.".into())
    );
    assert_eq!(after.value("message"), "Do you run tours in July?");
    assert!(!after.is_submitting());
}

#[tokio::test]
async fn rapid_double_submit_sends_once() {
    let (server, release) =
        FakeServer::default().reply_when_released(200, r#"{"message":"Message sent"}"#);
    let contact = form(catalog::contact_form(), &server);
    fill(
        &contact,
        &[("name", "Jane"), ("email", "jane@x.com"), ("message", "Hi")],
    );

    let (first, second) = futures::join!(contact.submit(), async {
        let second = contact.submit().await;
        assert!(state(&contact).is_submitting());
        let _ = release.send(());
        second
    });

    assert_eq!(second, SubmitAttempt::Rejected(SubmitRejected::InFlight));
    assert!(matches!(first, SubmitAttempt::Completed { .. }));
    assert_eq!(server.calls(), 1);
}

#[tokio::test]
async fn forgot_password_prefers_server_message() {
    let server = FakeServer::default()
        .reply(200, r#"{"message":"Check your inbox"}"#)
        .reply(200, "{}");
    let forgot = form(catalog::forgot_password_form(), &server);

    forgot.input("email", "jane@x.com");
    forgot.submit().await;
    assert_eq!(
        state(&forgot).outcome(),
        &Outcome::Success("Check your inbox".into())
    );

    forgot.input("email", "jane@x.com");
    forgot.submit().await;
    assert_eq!(
        state(&forgot).outcome(),
        &Outcome::Success("Reset link sent to your email!".into())
    );
}

#[tokio::test]
async fn forgot_password_non_json_reply_is_a_network_error() {
    let server = FakeServer::default().reply(200, "<html>proxy page</html>");
    let forgot = form(catalog::forgot_password_form(), &server);

    forgot.input("email", "jane@x.com");
    forgot.submit().await;

    let after = state(&forgot);
    assert_eq!(
        after.outcome(),
        &Outcome::Error("Network error, please try again.".into())
    );
    assert_eq!(after.value("email"), "jane@x.com");
}

#[tokio::test]
async fn reset_password_non_json_reply_is_a_network_error() {
    let server = FakeServer::default().reply(204, "");
    let reset = form(catalog::reset_password_form(), &server);
    fill(
        &reset,
        &[
            ("email", "jane@x.com"),
            ("password", "secret1"),
            ("passwordConfirmation", "secret1"),
        ],
    );

    reset.submit().await;

    assert_eq!(
        state(&reset).outcome(),
        &Outcome::Error("Network error, please try again.".into())
    );
}

fn payment(server: &FakeServer) -> Form {
    let definition = catalog::payment_form();
    let context = catalog::PaymentContext {
        user_id: "u-1".into(),
        user_name: "John Traveler".into(),
        tour_name: "Cox's Bazar Sunset".into(),
        amount: 3200.0,
    };
    let store = Rc::new(RefCell::new(catalog::payment_state(&definition, &context)));
    let payment = FormController::new(store, Submitter::new(server.clone(), ""), Arc::new(definition));
    fill(
        &payment,
        &[("cardNumber", "4111111111111111"), ("expiry", "01/27"), ("cvv", "999")],
    );
    payment
}

#[tokio::test]
async fn payment_success_shows_fixed_message() {
    let server = FakeServer::default().reply(200, r#"{"message":"charged"}"#);
    let payment = payment(&server);

    payment.submit().await;

    assert_eq!(
        state(&payment).outcome(),
        &Outcome::Success("Payment successful! 🎉".into())
    );
}

#[tokio::test]
async fn payment_failure_uses_fixed_message() {
    let server = FakeServer::default().reply(422, r#"{"message":"expired card"}"#);
    let payment = payment(&server);

    payment.submit().await;

    assert_eq!(
        state(&payment).outcome(),
        &Outcome::Error("Payment failed. Please try again.".into())
    );
    let body: serde_json::Value = serde_json::from_str(&server.sent.borrow()[0].body).unwrap();
    assert_eq!(body["tourName"], "Cox's Bazar Sunset");
    assert_eq!(body["amount"], 3200.0);
}
