use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Page size the vacations endpoint is always queried with.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub user: Credentials,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInStatus {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub status: SignInStatus,
}

impl SignInResponse {
    pub fn token(&self) -> Option<&str> {
        self.status
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacationType {
    #[serde(rename = "incapacidad")]
    SickLeave,
    #[serde(rename = "vacaciones")]
    Vacation,
}

impl VacationType {
    pub const ALL: [VacationType; 2] = [VacationType::SickLeave, VacationType::Vacation];

    pub fn wire_name(self) -> &'static str {
        match self {
            VacationType::SickLeave => "incapacidad",
            VacationType::Vacation => "vacaciones",
        }
    }

    /// Enum ordinal the backend query parser matches `vacation_type_eq` against.
    pub fn ordinal(self) -> u8 {
        match self {
            VacationType::SickLeave => 0,
            VacationType::Vacation => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VacationType::SickLeave => "Sick leave",
            VacationType::Vacation => "Vacation",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wire_name() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VacationStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "aprobado")]
    Approved,
    #[serde(rename = "rechazado")]
    Rejected,
}

impl VacationStatus {
    pub const ALL: [VacationStatus; 3] = [
        VacationStatus::Pending,
        VacationStatus::Approved,
        VacationStatus::Rejected,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            VacationStatus::Pending => "pendiente",
            VacationStatus::Approved => "aprobado",
            VacationStatus::Rejected => "rechazado",
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            VacationStatus::Pending => 0,
            VacationStatus::Approved => 1,
            VacationStatus::Rejected => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VacationStatus::Pending => "Pending",
            VacationStatus::Approved => "Approved",
            VacationStatus::Rejected => "Rejected",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.wire_name() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaboratorRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRecord {
    pub id: i64,
    pub collaborator_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub vacation_type: VacationType,
    pub status: VacationStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub vacation_days: Option<i64>,
    #[serde(default)]
    pub collaborator: Option<CollaboratorRef>,
}

impl VacationRecord {
    pub fn collaborator_name(&self) -> &str {
        self.collaborator
            .as_ref()
            .map(|collaborator| collaborator.name.as_str())
            .unwrap_or("-")
    }
}

/// Editable fields of a vacation record. Carries no id: the id of an update
/// travels in the URL only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPayload {
    pub collaborator_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub vacation_type: VacationType,
    pub status: VacationStatus,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationEnvelope {
    pub vacation: VacationPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationListResponse {
    #[serde(default)]
    pub vacations: Vec<VacationRecord>,
    #[serde(default)]
    pub meta: ListMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Sign-in answered 2xx without a usable token.
    pub fn login_failed() -> Self {
        Self::with_code("Login failed", "LOGIN_FAILED")
    }

    pub fn is_login_failed(&self) -> bool {
        self.code == "LOGIN_FAILED"
    }

    /// Builds an error from a non-2xx body. Rails answers with `error`,
    /// `errors` or `message`; anything else falls back to the status line.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let code = if status == 401 {
            "UNAUTHORIZED".to_string()
        } else {
            format!("HTTP_{}", status)
        };
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed.as_ref().and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        let details = parsed.as_ref().and_then(|value| value.get("errors").cloned());
        Self {
            error: message.unwrap_or_else(|| format!("HTTP {}", status)),
            code,
            details,
        }
    }
}
