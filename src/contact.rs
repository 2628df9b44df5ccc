use crate::notify::Severity;
use crate::telemetry::{log_event, LogLevel};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use url::Url;

pub const CONTACT_PATH: &str = "/api/contact";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_LABEL: &str = "Sending...";

pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const MSG_SENT: &str = "Message sent successfully!";
pub const MSG_QUEUED: &str = "Message queued locally. Backend not reachable.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("received status {0}")]
    Status(u16),
    #[error("unreadable response body: {0}")]
    Body(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let subject = self.subject.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, a non-empty
/// local part, and a `.` inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEndpoint(Url);

impl ContactEndpoint {
    pub fn from_origin(origin: &str) -> Option<Self> {
        let origin = Url::parse(origin).ok()?;
        if origin.cannot_be_a_base() {
            return None;
        }
        origin.join(CONTACT_PATH).ok().map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// HTTP seam for the contact endpoint. Any non-2xx status, or a 2xx whose body
/// is not JSON, is an error.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn post_json(&self, url: &str, payload: &ContactPayload) -> Result<(), TransportError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

impl ButtonState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            busy: false,
        }
    }

    pub fn busy() -> Self {
        Self {
            label: BUSY_LABEL.to_string(),
            disabled: true,
            busy: true,
        }
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::idle(SUBMIT_LABEL)
    }
}

/// Where the submitter reports progress: the submit button and the
/// notification presenter.
pub trait SubmitFeedback {
    fn button(&self) -> ButtonState;

    fn set_button(&mut self, state: ButtonState);

    fn notify(&mut self, message: &str, severity: Severity);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Sent,
    /// The request failed; the user was told the message is queued locally.
    QueuedLocally(TransportError),
}

impl SubmitOutcome {
    /// The form is cleared only after a confirmed send.
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

pub struct ContactSubmitter<T> {
    transport: T,
    endpoint: ContactEndpoint,
}

impl<T: ContactTransport> ContactSubmitter<T> {
    pub fn new(transport: T, endpoint: ContactEndpoint) -> Self {
        Self { transport, endpoint }
    }

    pub fn endpoint(&self) -> &ContactEndpoint {
        &self.endpoint
    }

    pub async fn submit(&self, form: &ContactForm, feedback: &mut impl SubmitFeedback) -> SubmitOutcome {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(error) => {
                feedback.notify(&error.to_string(), Severity::Error);
                return SubmitOutcome::Rejected(error);
            }
        };

        let original = feedback.button();
        feedback.set_button(ButtonState::busy());

        let result = self.transport.post_json(self.endpoint.as_str(), &payload).await;

        let outcome = match result {
            Ok(()) => {
                log_event(LogLevel::Info, "contact_sent", json!({}));
                feedback.notify(MSG_SENT, Severity::Success);
                SubmitOutcome::Sent
            }
            Err(error) => {
                log_event(
                    LogLevel::Warn,
                    "contact_fallback",
                    json!({ "reason": error.to_string() }),
                );
                feedback.notify(MSG_QUEUED, Severity::Info);
                SubmitOutcome::QueuedLocally(error)
            }
        };

        feedback.set_button(ButtonState::idle(original.label));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct StubTransport {
        result: Result<(), TransportError>,
        calls: Cell<usize>,
        last_payload: RefCell<Option<ContactPayload>>,
    }

    impl StubTransport {
        fn returning(result: Result<(), TransportError>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
                last_payload: RefCell::new(None),
            }
        }
    }

    impl ContactTransport for &StubTransport {
        async fn post_json(&self, url: &str, payload: &ContactPayload) -> Result<(), TransportError> {
            assert_eq!(url, "https://portfolio.example/api/contact");
            self.calls.set(self.calls.get() + 1);
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingFeedback {
        button: ButtonState,
        button_history: Vec<ButtonState>,
        notices: Vec<(String, Severity)>,
    }

    impl SubmitFeedback for RecordingFeedback {
        fn button(&self) -> ButtonState {
            self.button.clone()
        }

        fn set_button(&mut self, state: ButtonState) {
            self.button_history.push(state.clone());
            self.button = state;
        }

        fn notify(&mut self, message: &str, severity: Severity) {
            self.notices.push((message.to_string(), severity));
        }
    }

    fn endpoint() -> ContactEndpoint {
        ContactEndpoint::from_origin("https://portfolio.example").expect("valid origin")
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "  Ada ".to_string(),
            email: "ada@example.com ".to_string(),
            subject: String::new(),
            message: " hello ".to_string(),
        }
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn validation_trims_and_requires_fields() {
        let payload = valid_form().validate().expect("valid form");
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.email, "ada@example.com");
        assert_eq!(payload.message, "hello");

        let mut blank = valid_form();
        blank.message = "   ".to_string();
        assert_eq!(blank.validate(), Err(ValidationError::MissingFields));

        let mut bad_email = valid_form();
        bad_email.email = "ada@example".to_string();
        assert_eq!(bad_email.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn payload_serializes_all_four_fields() {
        let payload = valid_form().validate().expect("valid form");
        let value = serde_json::to_value(&payload).expect("serializable");

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "",
                "message": "hello",
            })
        );
    }

    #[test]
    fn endpoint_is_resolved_against_origin() {
        assert_eq!(endpoint().as_str(), "https://portfolio.example/api/contact");
        assert_eq!(
            ContactEndpoint::from_origin("http://localhost:8080").map(|e| e.as_str().to_string()),
            Some("http://localhost:8080/api/contact".to_string())
        );
        assert!(ContactEndpoint::from_origin("null").is_none());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_network() {
        let transport = StubTransport::returning(Ok(()));
        let submitter = ContactSubmitter::new(&transport, endpoint());
        let mut feedback = RecordingFeedback::default();
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let outcome = submitter.submit(&form, &mut feedback).await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::InvalidEmail));
        assert_eq!(transport.calls.get(), 0);
        assert!(feedback.button_history.is_empty());
        assert_eq!(feedback.notices, [(MSG_INVALID_EMAIL.to_string(), Severity::Error)]);
    }

    #[tokio::test]
    async fn confirmed_send_notifies_success_and_clears() {
        let transport = StubTransport::returning(Ok(()));
        let submitter = ContactSubmitter::new(&transport, endpoint());
        let mut feedback = RecordingFeedback::default();

        let outcome = submitter.submit(&valid_form(), &mut feedback).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(outcome.clears_form());
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(
            transport.last_payload.borrow().as_ref().map(|p| p.name.as_str()),
            Some("Ada")
        );
        assert_eq!(feedback.notices, [(MSG_SENT.to_string(), Severity::Success)]);
        assert_eq!(feedback.button_history[0], ButtonState::busy());
        assert_eq!(feedback.button, ButtonState::idle(SUBMIT_LABEL));
    }

    #[tokio::test]
    async fn network_failure_falls_back_and_restores_button() {
        let transport = StubTransport::returning(Err(TransportError::Network("offline".to_string())));
        let submitter = ContactSubmitter::new(&transport, endpoint());
        let mut feedback = RecordingFeedback {
            button: ButtonState::idle("Transmit"),
            ..RecordingFeedback::default()
        };

        let outcome = submitter.submit(&valid_form(), &mut feedback).await;

        assert!(matches!(outcome, SubmitOutcome::QueuedLocally(TransportError::Network(_))));
        assert!(!outcome.clears_form());
        assert_eq!(feedback.notices, [(MSG_QUEUED.to_string(), Severity::Info)]);
        assert!(!feedback.button.disabled);
        assert!(!feedback.button.busy);
        assert_eq!(feedback.button.label, "Transmit");
    }

    #[tokio::test]
    async fn error_status_is_treated_like_network_failure() {
        let transport = StubTransport::returning(Err(TransportError::Status(502)));
        let submitter = ContactSubmitter::new(&transport, endpoint());
        let mut feedback = RecordingFeedback::default();

        let outcome = submitter.submit(&valid_form(), &mut feedback).await;

        assert_eq!(outcome, SubmitOutcome::QueuedLocally(TransportError::Status(502)));
        assert_eq!(feedback.notices.len(), 1);
        assert_eq!(feedback.notices[0].1, Severity::Info);
        assert_eq!(feedback.button, ButtonState::default());
    }
}
