use std::cell::RefCell;
use std::sync::LazyLock;

use regex::Regex;

use crate::delivery::{DeliveryConfig, DeliveryError, EmailRequest, Mailer};

pub const SUCCESS_BANNER: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const ERROR_BANNER: &str = "There was an error sending your message. Please check your email format and try again, or contact me directly via LinkedIn.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Title,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Title, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Title => "title",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Title => "Title",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Title => "Subject/Title of your message",
            Self::Message => "Your message...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Title => &self.title,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Title => &mut self.title,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEmail,
    Delivery,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(FailureKind),
}

/// An accepted submit. `ticket` ties the eventual outcome to this attempt so a late reply
/// cannot land on a form that was cleared or resubmitted in the meantime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub request: EmailRequest,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    attempts: u64,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Leaves `status` alone, so an error banner stays up while the user corrects input.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.slot_mut(field) = value.into();
    }

    /// Accepted from `Idle` and `Error` only. A malformed address fails locally without a
    /// request being produced, from `Success` as well, so the format banner always shows.
    pub fn submit(&mut self, config: &DeliveryConfig) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }

        if !is_valid_email(&self.fields.email) {
            self.status = FormStatus::Error(FailureKind::InvalidEmail);
            return None;
        }

        if self.status == FormStatus::Success {
            return None;
        }

        self.attempts += 1;
        self.status = FormStatus::Submitting;

        let ContactFields {
            name,
            email,
            title,
            message,
        } = &self.fields;

        Some(Submission {
            ticket: self.attempts,
            request: EmailRequest::new(config, name, email, title, message),
        })
    }

    pub fn complete(&mut self, ticket: u64, outcome: Result<(), DeliveryError>) {
        if !self.owns(ticket) {
            return;
        }

        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = FormStatus::Success;
            }
            Err(_) => self.status = FormStatus::Error(FailureKind::Delivery),
        }
    }

    /// The delivery call went away without an answer; unlock the form and keep the input.
    pub fn abandon(&mut self, ticket: u64) {
        if self.owns(ticket) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn clear(&mut self) {
        self.fields = ContactFields::default();
        self.status = FormStatus::Idle;
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Success => Some(SUCCESS_BANNER),
            FormStatus::Error(_) => Some(ERROR_BANNER),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }

    fn owns(&self, ticket: u64) -> bool {
        self.is_submitting() && ticket == self.attempts
    }
}

struct InFlight<'a> {
    form: &'a RefCell<ContactForm>,
    ticket: u64,
    notify: &'a dyn Fn(),
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: Result<(), DeliveryError>) -> FormStatus {
        self.settled = true;
        self.form.borrow_mut().complete(self.ticket, outcome);
        (self.notify)();
        self.form.borrow().status()
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut form) = self.form.try_borrow_mut() {
            form.abandon(self.ticket);
        }
        (self.notify)();
    }
}

/// Runs one submit attempt end to end. `notify` fires after every state change the caller
/// may want to render. If this future is dropped mid-flight the form is unlocked again.
pub async fn submit_with<M: Mailer>(
    form: &RefCell<ContactForm>,
    mailer: &M,
    config: &DeliveryConfig,
    notify: &dyn Fn(),
) -> FormStatus {
    let submission = form.borrow_mut().submit(config);
    notify();

    let Some(Submission { ticket, request }) = submission else {
        return form.borrow().status();
    };

    let in_flight = InFlight {
        form,
        ticket,
        notify,
        settled: false,
    };
    let outcome = mailer.send(&request).await;
    in_flight.settle(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::EMAILJS_ENDPOINT;

    fn config() -> DeliveryConfig {
        DeliveryConfig {
            service_id: "service".to_string(),
            template_id: "template".to_string(),
            public_key: "key".to_string(),
            recipient_name: "Soheb".to_string(),
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    fn filled_form(email: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(ContactField::Name, "Ada");
        form.edit(ContactField::Email, email);
        form.edit(ContactField::Title, "Hello");
        form.edit(ContactField::Message, "Nice site");
        form
    }

    #[test]
    fn email_validation_matches_local_at_domain_dot_tld() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn invalid_email_fails_locally_without_a_request() {
        let mut form = filled_form("not-an-email");
        assert!(form.submit(&config()).is_none());
        assert_eq!(form.status(), FormStatus::Error(FailureKind::InvalidEmail));
        assert_eq!(form.value(ContactField::Name), "Ada");
        assert_eq!(form.banner(), Some(ERROR_BANNER));
    }

    #[test]
    fn editing_keeps_the_error_banner() {
        let mut form = filled_form("broken");
        form.submit(&config());
        form.edit(ContactField::Email, "ada@example.com");
        assert_eq!(form.status(), FormStatus::Error(FailureKind::InvalidEmail));
    }

    #[test]
    fn error_state_accepts_resubmission() {
        let mut form = filled_form("broken");
        form.submit(&config());
        form.edit(ContactField::Email, "ada@example.com");

        let submission = form.submit(&config()).expect("resubmission accepted");
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(submission.request.template_params.email, "ada@example.com");
    }

    #[test]
    fn submitting_and_success_reject_further_submits() {
        let mut form = filled_form("ada@example.com");
        let submission = form.submit(&config()).expect("accepted");
        assert!(form.submit(&config()).is_none());

        form.complete(submission.ticket, Ok(()));
        form.edit(ContactField::Email, "ada@example.com");
        assert!(form.submit(&config()).is_none());
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn clear_resets_from_any_settled_state() {
        let settled = [
            FormStatus::Idle,
            FormStatus::Success,
            FormStatus::Error(FailureKind::InvalidEmail),
            FormStatus::Error(FailureKind::Delivery),
        ];

        for status in settled {
            let mut form = filled_form("ada@example.com");
            form.status = status;
            form.clear();
            assert_eq!(form.status(), FormStatus::Idle);
            assert!(form.fields().is_empty());
            assert_eq!(form.banner(), None);
        }
    }

    #[test]
    fn late_outcome_after_clear_is_ignored() {
        let mut form = filled_form("ada@example.com");
        let submission = form.submit(&config()).expect("accepted");
        form.clear();
        form.edit(ContactField::Name, "Grace");

        form.complete(submission.ticket, Err(DeliveryError::Transport("timeout".into())));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.value(ContactField::Name), "Grace");
    }

    #[test]
    fn malformed_email_after_success_shows_the_format_banner() {
        let mut form = filled_form("ada@example.com");
        let submission = form.submit(&config()).expect("accepted");
        form.complete(submission.ticket, Ok(()));
        form.edit(ContactField::Email, "ada@");

        assert!(form.submit(&config()).is_none());
        assert_eq!(form.status(), FormStatus::Error(FailureKind::InvalidEmail));
        assert_eq!(form.banner(), Some(ERROR_BANNER));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod delivery_flow {
        use super::*;
        use std::cell::Cell;

        struct StubMailer {
            outcome: Result<(), DeliveryError>,
            sent: RefCell<Vec<EmailRequest>>,
        }

        impl StubMailer {
            fn answering(outcome: Result<(), DeliveryError>) -> Self {
                Self {
                    outcome,
                    sent: RefCell::new(Vec::new()),
                }
            }
        }

        impl Mailer for StubMailer {
            async fn send(&self, request: &EmailRequest) -> Result<(), DeliveryError> {
                self.sent.borrow_mut().push(request.clone());
                self.outcome.clone()
            }
        }

        struct StalledMailer;

        impl Mailer for StalledMailer {
            async fn send(&self, _request: &EmailRequest) -> Result<(), DeliveryError> {
                std::future::pending().await
            }
        }

        #[tokio::test]
        async fn successful_delivery_clears_fields() {
            let form = RefCell::new(filled_form("ada@example.com"));
            let mailer = StubMailer::answering(Ok(()));
            let seen = RefCell::new(Vec::new());
            let notify = || seen.borrow_mut().push(form.borrow().status());

            let status = submit_with(&form, &mailer, &config(), &notify).await;

            assert_eq!(status, FormStatus::Success);
            assert_eq!(*seen.borrow(), vec![FormStatus::Submitting, FormStatus::Success]);
            assert!(form.borrow().fields().is_empty());
            assert!(!form.borrow().is_submitting());

            let sent = mailer.sent.borrow();
            assert_eq!(sent.len(), 1);
            assert_eq!(sent[0].template_params.title, "Hello");
            assert_eq!(sent[0].template_params.to_name, "Soheb");
        }

        #[tokio::test]
        async fn failed_delivery_keeps_fields_for_retry() {
            let form = RefCell::new(filled_form("ada@example.com"));
            let mailer = StubMailer::answering(Err(DeliveryError::Rejected {
                status: 400,
                body: "bad template".to_string(),
            }));
            let seen = RefCell::new(Vec::new());
            let notify = || seen.borrow_mut().push(form.borrow().status());

            let status = submit_with(&form, &mailer, &config(), &notify).await;

            assert_eq!(status, FormStatus::Error(FailureKind::Delivery));
            assert_eq!(
                *seen.borrow(),
                vec![FormStatus::Submitting, FormStatus::Error(FailureKind::Delivery)]
            );
            assert_eq!(form.borrow().value(ContactField::Message), "Nice site");
            assert_eq!(mailer.sent.borrow().len(), 1);
        }

        #[tokio::test]
        async fn invalid_email_never_reaches_the_mailer() {
            let form = RefCell::new(filled_form("a @b.com"));
            let mailer = StubMailer::answering(Ok(()));

            let status = submit_with(&form, &mailer, &config(), &|| ()).await;

            assert_eq!(status, FormStatus::Error(FailureKind::InvalidEmail));
            assert!(mailer.sent.borrow().is_empty());
        }

        #[tokio::test]
        async fn dropping_an_in_flight_submit_unlocks_the_form() {
            let form = RefCell::new(filled_form("ada@example.com"));
            let notified = Cell::new(0);
            let notify = || notified.set(notified.get() + 1);

            let outcome = tokio::time::timeout(
                std::time::Duration::from_millis(20),
                submit_with(&form, &StalledMailer, &config(), &notify),
            )
            .await;

            assert!(outcome.is_err());
            assert_eq!(form.borrow().status(), FormStatus::Idle);
            assert_eq!(form.borrow().value(ContactField::Email), "ada@example.com");
            assert_eq!(notified.get(), 2);
        }
    }
}
