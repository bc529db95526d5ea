use crate::api::{ApiError, SignupFormData};

pub const SUBMIT_LABEL: &str = "Join the Webinar";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str = "Thank you for signing up!";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Name,
    Email,
    Grade,
}

/// Why a sign-up did not go through. Only logged; the page shows one generic
/// message for every variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionFailure {
    #[error("sign-up request could not be sent: {0}")]
    Network(String),
    #[error("sign-up rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl From<ApiError> for SubmissionFailure {
    fn from(err: ApiError) -> Self {
        match err.status() {
            Some(status) => SubmissionFailure::Rejected {
                status,
                message: err.error,
            },
            None => SubmissionFailure::Network(err.error),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupController {
    data: SignupFormData,
    status: SubmissionStatus,
}

impl SignupController {
    pub fn data(&self) -> &SignupFormData {
        &self.data
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn field(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.data.name,
            SignupField::Email => &self.data.email,
            SignupField::Grade => &self.data.grade,
        }
    }

    pub fn update_field(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::Name => self.data.name = value,
            SignupField::Email => self.data.email = value,
            SignupField::Grade => self.data.grade = value,
        }
    }

    /// Enters `Submitting` and returns the payload to send. Returns `None`
    /// while a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<SignupFormData> {
        if self.status == SubmissionStatus::Submitting {
            log::debug!("sign-up already in flight; ignoring submit");
            return None;
        }
        log::debug!("sign-up submitting");
        self.status = SubmissionStatus::Submitting;
        Some(self.data.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmissionFailure>) {
        match result {
            Ok(()) => {
                log::debug!("sign-up accepted; clearing form");
                self.status = SubmissionStatus::Success;
                self.data = SignupFormData::default();
            }
            Err(err) => {
                log::error!("Error during submission: {}", err);
                self.status = SubmissionStatus::Error;
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn status_message(&self) -> Option<&'static str> {
        status_message(self.status)
    }
}

pub fn status_message(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
        SubmissionStatus::Error => Some(ERROR_MESSAGE),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}
