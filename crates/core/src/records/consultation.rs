use crate::view::{NumericSearchMode, Record, StatKind, StatSpec, ViewConfig};
use chrono::NaiveDate;
use clinidesk_types::Gender;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A consultation note, also the unit of the visit-history view.
///
/// Patient name, gender and age are denormalised onto the note at record
/// time so the history view does not need a join against the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: u32,
    pub patient_id: String,
    pub patient_name: String,
    pub gender: Gender,
    pub age: u32,
    pub staff_id: String,
    pub doctor: String,
    pub date: NaiveDate,
    /// Wall-clock time of the consultation, e.g. `09:30 AM`.
    pub time: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

const HISTORY_VIEW: ViewConfig = ViewConfig {
    text_fields: &["patient_name", "doctor", "diagnosis"],
    category_fields: &["doctor", "date"],
    // History matches all-digit terms against the id exactly, unlike the
    // substring match the other views use.
    numeric_mode: NumericSearchMode::IdExact,
    stats: &[
        StatSpec {
            title: "Total Visits",
            detail: "All consultations",
            kind: StatKind::Total,
        },
        StatSpec {
            title: "Unique Patients",
            detail: "Individual patients",
            kind: StatKind::Distinct {
                field: "patient_name",
            },
        },
    ],
};

impl Consultation {
    /// Display code for a consultation, e.g. `CONS-001`.
    pub fn code(&self) -> String {
        format!("CONS-{:03}", self.id)
    }

    /// How the derivation engine searches and summarises the history view.
    pub fn view_config() -> &'static ViewConfig {
        &HISTORY_VIEW
    }
}

impl Record for Consultation {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "patient_name" => Some(Cow::Borrowed(self.patient_name.as_str())),
            "doctor" => Some(Cow::Borrowed(self.doctor.as_str())),
            "diagnosis" => Some(Cow::Borrowed(self.diagnosis.as_str())),
            "symptoms" => Some(Cow::Borrowed(self.symptoms.as_str())),
            "date" => Some(Cow::Owned(self.date.to_string())),
            "gender" => Some(Cow::Borrowed(self.gender.as_str())),
            "patient_id" => Some(Cow::Borrowed(self.patient_id.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Consultation {
        Consultation {
            id: 1,
            patient_id: "PAT-001".into(),
            patient_name: "Maria Santos".into(),
            gender: Gender::Female,
            age: 45,
            staff_id: "STAFF-001".into(),
            doctor: "Dr. Maria Cruz".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            time: "09:30 AM".into(),
            symptoms: "Headache, dizziness, high blood pressure".into(),
            diagnosis: "Hypertension Stage 2".into(),
            prescription: "Lisinopril 10mg once daily".into(),
            notes: "Follow up in 2 weeks".into(),
        }
    }

    #[test]
    fn code_is_zero_padded() {
        assert_eq!(note().code(), "CONS-001");
    }

    #[test]
    fn date_field_renders_iso_for_the_date_filter() {
        assert_eq!(note().field("date").unwrap(), "2025-01-05");
    }

    #[test]
    fn view_fields_resolve_on_a_sample_note() {
        let note = note();
        let config = Consultation::view_config();
        for field in config.text_fields.iter().chain(config.category_fields) {
            assert!(note.field(field).is_some(), "missing field {field}");
        }
    }
}
