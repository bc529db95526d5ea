use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /webinar-signup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFormData {
    pub name: String,
    pub email: String,
    pub grade: String,
}

impl SignupFormData {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            grade: grade.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.grade.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::Sixth,
        Grade::Seventh,
        Grade::Eighth,
        Grade::Ninth,
        Grade::Tenth,
        Grade::Eleventh,
        Grade::Twelfth,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Grade::Sixth => "6",
            Grade::Seventh => "7",
            Grade::Eighth => "8",
            Grade::Ninth => "9",
            Grade::Tenth => "10",
            Grade::Eleventh => "11",
            Grade::Twelfth => "12",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Sixth => "6th Grade",
            Grade::Seventh => "7th Grade",
            Grade::Eighth => "8th Grade",
            Grade::Ninth => "9th Grade",
            Grade::Tenth => "10th Grade",
            Grade::Eleventh => "11th Grade",
            Grade::Twelfth => "12th Grade",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.value() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    /// HTTP status carried in an `HTTP_<status>` code.
    pub fn status(&self) -> Option<u16> {
        self.code.strip_prefix("HTTP_")?.parse().ok()
    }
}
