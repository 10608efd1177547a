// SPDX-License-Identifier: MPL-2.0
//! Contact form component: field state, validation flow, and the submission
//! lifecycle.
//!
//! Validation runs when a field loses its place as the active field (the
//! blur analog), live while editing only if the field is already in an
//! error state, and for every field on submit. The parent performs the
//! actual network request when [`Event::Submit`] is returned and reports
//! back through [`State::submission_finished`].

pub mod submit;
pub mod validate;

pub use submit::{Payload, SubmitError};
use validate::{validate, Rule, ValidationError};

/// The text fields of the form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Phone => 2,
            Field::Message => 3,
        }
    }

    fn rule(self) -> Rule {
        match self {
            Field::Name | Field::Message => Rule::Text,
            Field::Email => Rule::Email,
            Field::Phone => Rule::Phone,
        }
    }

    fn required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

/// Service types offered in the optional pick list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Installation,
    Maintenance,
    Repair,
    Consultation,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Installation,
        Service::Maintenance,
        Service::Repair,
        Service::Consultation,
    ];

    /// Localization key of the service title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Service::Installation => "service-install-title",
            Service::Maintenance => "service-maintenance-title",
            Service::Repair => "service-repair-title",
            Service::Consultation => "service-consult-title",
        }
    }

    /// Stable value submitted to the form service.
    #[must_use]
    pub fn form_value(self) -> &'static str {
        match self {
            Service::Installation => "installation",
            Service::Maintenance => "maintenance",
            Service::Repair => "repair",
            Service::Consultation => "consultation",
        }
    }
}

/// Messages emitted by the contact section widgets.
#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Field, String),
    ServiceSelected(Service),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Validation failed; the parent scrolls to the form and focuses the
    /// first invalid field.
    Blocked { first_invalid: Field },
    /// All fields valid; the parent performs the network request.
    Submit(Payload),
}

/// Form state.
#[derive(Debug, Default)]
pub struct State {
    values: [String; 4],
    errors: [Option<ValidationError>; 4],
    service: Option<Service>,
    active_field: Option<Field>,
    sending: bool,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors[field.index()]
    }

    #[must_use]
    pub fn service(&self) -> Option<Service> {
        self.service
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Advances the submit-button spinner by one animation frame.
    pub fn spin(&mut self) {
        self.spinner_rotation += 0.2;
    }

    /// Processes a form message and returns the resulting event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldEdited(field, value) => {
                // Moving to a different field validates the one being left.
                if self.active_field != Some(field) {
                    if let Some(previous) = self.active_field {
                        self.validate_field(previous);
                    }
                    self.active_field = Some(field);
                }

                self.values[field.index()] = value;

                // Live re-validation only for fields already in error, so
                // the error clears as soon as the user fixes the value.
                if self.errors[field.index()].is_some() {
                    self.validate_field(field);
                }
                Event::None
            }
            Message::ServiceSelected(service) => {
                if let Some(previous) = self.active_field.take() {
                    self.validate_field(previous);
                }
                self.service = Some(service);
                Event::None
            }
            Message::Submit => {
                if self.sending {
                    return Event::None;
                }
                if let Some(first_invalid) = self.validate_all() {
                    Event::Blocked { first_invalid }
                } else {
                    self.sending = true;
                    Event::Submit(self.payload())
                }
            }
        }
    }

    /// Validates one field, updating its error slot. Returns whether the
    /// field is valid.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let result = validate(field.rule(), field.required(), self.value(field));
        self.errors[field.index()] = result.err();
        result.is_ok()
    }

    /// Validates every field; returns the first invalid one in document
    /// order, if any.
    fn validate_all(&mut self) -> Option<Field> {
        let mut first_invalid = None;
        for field in Field::ALL {
            if !self.validate_field(field) && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        first_invalid
    }

    /// Snapshot of the current field contents for submission.
    #[must_use]
    pub fn payload(&self) -> Payload {
        Payload {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            phone: self.value(Field::Phone).to_string(),
            service: self.service.map(|s| s.form_value().to_string()),
            message: self.value(Field::Message).to_string(),
        }
    }

    /// Restores the form after a submission attempt. Successful submissions
    /// clear every field; failed ones keep the values for resubmission.
    pub fn submission_finished(&mut self, success: bool) {
        self.sending = false;
        if success {
            self.values = Default::default();
            self.errors = Default::default();
            self.service = None;
            self.active_field = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.update(Message::FieldEdited(Field::Name, "Budi Santoso".into()));
        state.update(Message::FieldEdited(Field::Email, "budi@contoh.com".into()));
        state.update(Message::FieldEdited(
            Field::Message,
            "Tolong cek pemanas air saya.".into(),
        ));
        state
    }

    #[test]
    fn leaving_a_field_validates_it() {
        let mut state = State::new();
        state.update(Message::FieldEdited(Field::Email, "not-an-email".into()));
        // Still editing the email field: no error yet.
        assert!(state.error(Field::Email).is_none());

        // Switching to another field is the blur analog.
        state.update(Message::FieldEdited(Field::Name, "B".into()));
        assert_eq!(
            state.error(Field::Email),
            Some(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn errored_field_revalidates_while_editing() {
        let mut state = State::new();
        state.update(Message::FieldEdited(Field::Email, "bad".into()));
        state.update(Message::FieldEdited(Field::Name, "B".into()));
        assert!(state.error(Field::Email).is_some());

        // Typing a fix clears the error immediately.
        state.update(Message::FieldEdited(
            Field::Email,
            "budi@contoh.com".into(),
        ));
        assert!(state.error(Field::Email).is_none());
    }

    #[test]
    fn submit_with_empty_name_flags_only_name() {
        let mut state = State::new();
        state.update(Message::FieldEdited(Field::Email, "budi@contoh.com".into()));
        state.update(Message::FieldEdited(Field::Message, "Halo, mau tanya.".into()));

        let event = state.update(Message::Submit);
        match event {
            Event::Blocked { first_invalid } => assert_eq!(first_invalid, Field::Name),
            other => panic!("expected blocked submission, got {other:?}"),
        }

        assert_eq!(state.error(Field::Name), Some(ValidationError::Required));
        assert!(state.error(Field::Email).is_none());
        assert!(state.error(Field::Phone).is_none());
        assert!(state.error(Field::Message).is_none());
        assert!(!state.is_sending());
    }

    #[test]
    fn valid_submit_yields_payload_and_sending_state() {
        let mut state = filled_state();
        state.update(Message::ServiceSelected(Service::Repair));

        let event = state.update(Message::Submit);
        match event {
            Event::Submit(payload) => {
                assert_eq!(payload.name, "Budi Santoso");
                assert_eq!(payload.service.as_deref(), Some("repair"));
            }
            other => panic!("expected submit event, got {other:?}"),
        }
        assert!(state.is_sending());

        // A second submit while in flight is ignored.
        assert!(matches!(state.update(Message::Submit), Event::None));
    }

    #[test]
    fn success_clears_fields_failure_retains_them() {
        let mut state = filled_state();
        let _ = state.update(Message::Submit);

        state.submission_finished(false);
        assert!(!state.is_sending());
        assert_eq!(state.value(Field::Name), "Budi Santoso");

        let _ = state.update(Message::Submit);
        state.submission_finished(true);
        assert_eq!(state.value(Field::Name), "");
        assert_eq!(state.value(Field::Email), "");
        assert!(state.service().is_none());
    }

    #[test]
    fn optional_phone_does_not_block_submission() {
        let mut state = filled_state();
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::Submit(_)));
    }
}
