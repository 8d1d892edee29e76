//! Shared domain vocabulary for the Clinidesk front-desk system.
//!
//! This crate holds the small validated and enumerated types every other
//! crate agrees on: non-empty text for names and the like, and the closed
//! vocabularies (gender, staff role, availability, queue status, priority).
//! Nothing here performs I/O.

use serde::{Deserialize, Serialize};

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Error returned when parsing a vocabulary enum from a string fails.
#[derive(Debug, thiserror::Error)]
#[error("unrecognised {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed before the emptiness check, so whitespace-only
    /// strings are rejected with [`TextError::Empty`].
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Patient gender as recorded at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "male")]
    Male,
    #[serde(alias = "female")]
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("male") => Ok(Gender::Male),
            v if v.eq_ignore_ascii_case("female") => Ok(Gender::Female),
            other => Err(UnknownVariant::new("gender", other)),
        }
    }
}

/// Role of a medical staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffRole {
    #[serde(alias = "doctor")]
    Doctor,
    #[serde(alias = "nurse")]
    Nurse,
    #[serde(alias = "administrator")]
    Administrator,
    #[serde(alias = "technician")]
    Technician,
    #[serde(alias = "staff")]
    Staff,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "Doctor",
            StaffRole::Nurse => "Nurse",
            StaffRole::Administrator => "Administrator",
            StaffRole::Technician => "Technician",
            StaffRole::Staff => "Staff",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StaffRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("doctor") => Ok(StaffRole::Doctor),
            v if v.eq_ignore_ascii_case("nurse") => Ok(StaffRole::Nurse),
            v if v.eq_ignore_ascii_case("administrator") => Ok(StaffRole::Administrator),
            v if v.eq_ignore_ascii_case("technician") => Ok(StaffRole::Technician),
            v if v.eq_ignore_ascii_case("staff") => Ok(StaffRole::Staff),
            other => Err(UnknownVariant::new("staff role", other)),
        }
    }
}

/// Current availability of a staff member.
///
/// The upstream directory reports off-duty staff with the wire value
/// `offline`; that spelling is accepted on input and rendered as
/// `Off Duty` everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(alias = "available")]
    Available,
    #[serde(alias = "busy")]
    Busy,
    #[serde(rename = "Off Duty", alias = "off duty", alias = "offline")]
    OffDuty,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Busy => "Busy",
            Availability::OffDuty => "Off Duty",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Availability {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("available") => Ok(Availability::Available),
            v if v.eq_ignore_ascii_case("busy") => Ok(Availability::Busy),
            v if v.eq_ignore_ascii_case("off duty") || v.eq_ignore_ascii_case("offline") => {
                Ok(Availability::OffDuty)
            }
            other => Err(UnknownVariant::new("availability", other)),
        }
    }
}

/// Position of a queue entry in the visit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueStatus {
    #[serde(alias = "waiting", alias = "WAITING")]
    Waiting,
    #[serde(alias = "consulting", alias = "CONSULTING")]
    Consulting,
    #[serde(alias = "completed", alias = "COMPLETED")]
    Completed,
}

impl QueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Waiting => "Waiting",
            QueueStatus::Consulting => "Consulting",
            QueueStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QueueStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("waiting") => Ok(QueueStatus::Waiting),
            v if v.eq_ignore_ascii_case("consulting") => Ok(QueueStatus::Consulting),
            v if v.eq_ignore_ascii_case("completed") => Ok(QueueStatus::Completed),
            other => Err(UnknownVariant::new("queue status", other)),
        }
    }
}

/// Triage priority attached to a queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuePriority {
    High,
    Medium,
    Low,
}

impl QueuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueuePriority::High => "high",
            QueuePriority::Medium => "medium",
            QueuePriority::Low => "low",
        }
    }
}

impl std::fmt::Display for QueuePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QueuePriority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("high") => Ok(QueuePriority::High),
            v if v.eq_ignore_ascii_case("medium") => Ok(QueuePriority::Medium),
            v if v.eq_ignore_ascii_case("low") => Ok(QueuePriority::Low),
            other => Err(UnknownVariant::new("queue priority", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  Maria Santos  ").expect("valid text");
        assert_eq!(text.as_str(), "Maria Santos");
    }

    #[test]
    fn non_empty_text_rejects_whitespace_only() {
        assert!(matches!(NonEmptyText::new("   "), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn gender_parses_case_insensitively() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn availability_accepts_offline_wire_form() {
        assert_eq!(
            "offline".parse::<Availability>().unwrap(),
            Availability::OffDuty
        );
        assert_eq!(Availability::OffDuty.to_string(), "Off Duty");

        let parsed: Availability = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(parsed, Availability::OffDuty);
        assert_eq!(
            serde_json::to_string(&Availability::OffDuty).unwrap(),
            "\"Off Duty\""
        );
    }

    #[test]
    fn queue_status_accepts_upper_case_wire_form() {
        let parsed: QueueStatus = serde_json::from_str("\"WAITING\"").unwrap();
        assert_eq!(parsed, QueueStatus::Waiting);
        assert_eq!("consulting".parse::<QueueStatus>().unwrap(), QueueStatus::Consulting);
    }

    #[test]
    fn priority_serialises_lower_case() {
        assert_eq!(
            serde_json::to_string(&QueuePriority::High).unwrap(),
            "\"high\""
        );
        assert_eq!("Medium".parse::<QueuePriority>().unwrap(), QueuePriority::Medium);
    }
}
