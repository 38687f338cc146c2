//! Call status vocabularies and the mapping between them.
//!
//! DESIGN
//! ======
//! The backend encodes call status as upper-case codes (`A_CONTACTER`, ...)
//! while the dashboard speaks a kebab-case display vocabulary
//! (`to-contact`, ...). Both directions fail soft: anything unmapped lands on
//! the neutral to-contact state instead of producing an error.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use serde::{Deserialize, Serialize, Serializer};

/// Call status as encoded by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum ApiCallStatus {
    #[default]
    AContacter,
    PasDeReponse,
    ARappeler,
    RdvFixe,
    RdvReporte,
    FauxNumero,
    PasInteresse,
    EnvoyerMail,
    Doublon,
    DejaClient,
}

/// Call status in the dashboard display vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "String")]
pub enum UiCallStatus {
    #[default]
    ToContact,
    NoAnswer,
    Callback,
    AppointmentSet,
    AppointmentRescheduled,
    WrongNumber,
    NotInterested,
    SendEmail,
    Duplicate,
    AlreadyClient,
}

/// UI statuses whose edit form carries a callback date and time slot.
pub const RECALL_STATUSES: [UiCallStatus; 2] = [UiCallStatus::NoAnswer, UiCallStatus::Callback];

impl ApiCallStatus {
    pub const ALL: [Self; 10] = [
        Self::AContacter,
        Self::PasDeReponse,
        Self::ARappeler,
        Self::RdvFixe,
        Self::RdvReporte,
        Self::FauxNumero,
        Self::PasInteresse,
        Self::EnvoyerMail,
        Self::Doublon,
        Self::DejaClient,
    ];

    /// Wire code sent to and received from the backend.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::AContacter => "A_CONTACTER",
            Self::PasDeReponse => "PAS_DE_REPONSE",
            Self::ARappeler => "A_RAPPELER",
            Self::RdvFixe => "RDV_FIXE",
            Self::RdvReporte => "RDV_REPORTE",
            Self::FauxNumero => "FAUX_NUMERO",
            Self::PasInteresse => "PAS_INTERESSE",
            Self::EnvoyerMail => "ENVOYER_MAIL",
            Self::Doublon => "DOUBLON",
            Self::DejaClient => "DEJA_CLIENT",
        }
    }

    /// Parse a wire code, falling back to [`ApiCallStatus::AContacter`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code.trim())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn to_ui(self) -> UiCallStatus {
        match self {
            Self::AContacter => UiCallStatus::ToContact,
            Self::PasDeReponse => UiCallStatus::NoAnswer,
            Self::ARappeler => UiCallStatus::Callback,
            Self::RdvFixe => UiCallStatus::AppointmentSet,
            Self::RdvReporte => UiCallStatus::AppointmentRescheduled,
            Self::FauxNumero => UiCallStatus::WrongNumber,
            Self::PasInteresse => UiCallStatus::NotInterested,
            Self::EnvoyerMail => UiCallStatus::SendEmail,
            Self::Doublon => UiCallStatus::Duplicate,
            Self::DejaClient => UiCallStatus::AlreadyClient,
        }
    }
}

impl UiCallStatus {
    pub const ALL: [Self; 10] = [
        Self::ToContact,
        Self::NoAnswer,
        Self::Callback,
        Self::AppointmentSet,
        Self::AppointmentRescheduled,
        Self::WrongNumber,
        Self::NotInterested,
        Self::SendEmail,
        Self::Duplicate,
        Self::AlreadyClient,
    ];

    /// Kebab-case key used in form values and URLs.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ToContact => "to-contact",
            Self::NoAnswer => "no-answer",
            Self::Callback => "callback",
            Self::AppointmentSet => "appointment-set",
            Self::AppointmentRescheduled => "appointment-rescheduled",
            Self::WrongNumber => "wrong-number",
            Self::NotInterested => "not-interested",
            Self::SendEmail => "send-email",
            Self::Duplicate => "duplicate",
            Self::AlreadyClient => "already-client",
        }
    }

    /// Parse a display key, falling back to [`UiCallStatus::ToContact`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key.trim())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn to_api(self) -> ApiCallStatus {
        match self {
            Self::ToContact => ApiCallStatus::AContacter,
            Self::NoAnswer => ApiCallStatus::PasDeReponse,
            Self::Callback => ApiCallStatus::ARappeler,
            Self::AppointmentSet => ApiCallStatus::RdvFixe,
            Self::AppointmentRescheduled => ApiCallStatus::RdvReporte,
            Self::WrongNumber => ApiCallStatus::FauxNumero,
            Self::NotInterested => ApiCallStatus::PasInteresse,
            Self::SendEmail => ApiCallStatus::EnvoyerMail,
            Self::Duplicate => ApiCallStatus::Doublon,
            Self::AlreadyClient => ApiCallStatus::DejaClient,
        }
    }

    /// Human label shown in tables, selects and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ToContact => "À contacter",
            Self::NoAnswer => "Pas de réponse",
            Self::Callback => "À rappeler",
            Self::AppointmentSet => "RDV fixé",
            Self::AppointmentRescheduled => "RDV reporté",
            Self::WrongNumber => "Faux numéro",
            Self::NotInterested => "Pas intéressé",
            Self::SendEmail => "Envoyer un mail",
            Self::Duplicate => "Doublon",
            Self::AlreadyClient => "Déjà client",
        }
    }

    /// Badge modifier class, e.g. `status-badge--callback`.
    #[must_use]
    pub fn badge_class(self) -> String {
        format!("status-badge status-badge--{}", self.key())
    }

    /// Whether saving a call in this status persists a callback date/slot.
    #[must_use]
    pub fn requires_recall(self) -> bool {
        RECALL_STATUSES.contains(&self)
    }

    /// Whether the call is still in the neutral, never-acted-upon state.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self == Self::ToContact
    }
}

/// Map a backend code to its display key. Unknown codes map to `to-contact`.
#[must_use]
pub fn api_to_ui(code: &str) -> &'static str {
    ApiCallStatus::from_code(code).to_ui().key()
}

/// Map a display key to its backend code. Unknown keys map to `A_CONTACTER`.
#[must_use]
pub fn ui_to_api(key: &str) -> &'static str {
    UiCallStatus::from_key(key).to_api().code()
}

impl From<String> for ApiCallStatus {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<String> for UiCallStatus {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<ApiCallStatus> for UiCallStatus {
    fn from(value: ApiCallStatus) -> Self {
        value.to_ui()
    }
}

impl From<UiCallStatus> for ApiCallStatus {
    fn from(value: UiCallStatus) -> Self {
        value.to_api()
    }
}

impl Serialize for ApiCallStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl Serialize for UiCallStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl std::fmt::Display for ApiCallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::fmt::Display for UiCallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
