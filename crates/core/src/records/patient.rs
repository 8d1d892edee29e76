use crate::view::{NumericSearchMode, Record, StatKind, StatSpec, ViewConfig};
use clinidesk_types::Gender;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Formatted identifier, e.g. `PAT-001`.
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub contact: String,
    pub address: String,
    /// Human-readable label of the last recorded visit.
    #[serde(default = "Patient::no_visits_label")]
    pub last_visit: String,
}

const PATIENT_VIEW: ViewConfig = ViewConfig {
    text_fields: &["name", "address", "contact"],
    category_fields: &["gender"],
    numeric_mode: NumericSearchMode::IdSubstring,
    stats: &[
        StatSpec {
            title: "Total Patients",
            detail: "All registered patients",
            kind: StatKind::Total,
        },
        StatSpec {
            title: "Male Patients",
            detail: "",
            kind: StatKind::Matching {
                field: "gender",
                value: "Male",
            },
        },
        StatSpec {
            title: "Female Patients",
            detail: "",
            kind: StatKind::Matching {
                field: "gender",
                value: "Female",
            },
        },
    ],
};

impl Patient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            age,
            contact: contact.into(),
            address: address.into(),
            last_visit: Self::no_visits_label(),
        }
    }

    pub fn no_visits_label() -> String {
        "No visits yet".to_owned()
    }

    /// How the derivation engine searches and summarises patients.
    pub fn view_config() -> &'static ViewConfig {
        &PATIENT_VIEW
    }
}

impl Record for Patient {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "address" => Some(Cow::Borrowed(self.address.as_str())),
            "contact" => Some(Cow::Borrowed(self.contact.as_str())),
            "gender" => Some(Cow::Borrowed(self.gender.as_str())),
            "last_visit" => Some(Cow::Borrowed(self.last_visit.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_fields_resolve_on_a_sample_patient() {
        let patient = Patient::new(
            "PAT-001",
            "Maria Santos",
            Gender::Female,
            45,
            "09123456789",
            "123 Main St, Barangay Centro",
        );

        let config = Patient::view_config();
        for field in config.text_fields {
            assert!(patient.field(field).is_some(), "missing text field {field}");
        }
        for field in config.category_fields {
            assert!(
                patient.field(field).is_some(),
                "missing category field {field}"
            );
        }
        assert_eq!(patient.field("gender").unwrap(), "Female");
        assert_eq!(patient.last_visit, "No visits yet");
    }

    #[test]
    fn deserialising_without_last_visit_uses_the_default_label() {
        let json = r#"{
            "id": "PAT-009",
            "name": "Rosa Martinez",
            "gender": "Female",
            "age": 38,
            "contact": "09567890123",
            "address": "34 Narra Ave"
        }"#;

        let patient: Patient = serde_json::from_str(json).expect("parse patient");
        assert_eq!(patient.last_visit, "No visits yet");

        let rendered = serde_json::to_string(&patient).expect("render patient");
        let reparsed: Patient = serde_json::from_str(&rendered).expect("reparse patient");
        assert_eq!(patient, reparsed);
    }
}
