use crate::error::{ClinicError, ClinicResult};
use crate::records::{demo, Consultation};
use crate::services::PatientService;
use crate::store::RecordStore;
use crate::view::{derive_view, Criteria, DerivedView};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Data for a new consultation note.
#[derive(Debug, Clone)]
pub struct NewConsultation {
    pub patient_id: String,
    pub staff_id: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

/// Partial update of an existing note.
#[derive(Debug, Clone, Default)]
pub struct ConsultationUpdate {
    pub date: Option<NaiveDate>,
    pub symptoms: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub notes: Option<String>,
}

/// A canned note the consultation form offers for common presentations.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickTemplate {
    pub id: u32,
    pub name: &'static str,
    pub symptoms: &'static str,
    pub diagnosis: &'static str,
    pub prescription: &'static str,
    pub remarks: &'static str,
}

const QUICK_TEMPLATES: &[QuickTemplate] = &[
    QuickTemplate {
        id: 1,
        name: "Fever / Common Cold",
        symptoms: "Fever, runny nose, cough, sore throat",
        diagnosis: "Upper respiratory tract infection",
        prescription: "Paracetamol 500mg every 6 hours, rest, plenty of fluids",
        remarks: "Monitor temperature, return if symptoms worsen",
    },
    QuickTemplate {
        id: 2,
        name: "Headache",
        symptoms: "Persistent headache, sensitivity to light",
        diagnosis: "Tension headache",
        prescription: "Ibuprofen 400mg as needed, stress management",
        remarks: "Avoid triggers, maintain hydration",
    },
    QuickTemplate {
        id: 3,
        name: "Hypertension",
        symptoms: "Elevated blood pressure, occasional dizziness",
        diagnosis: "Stage 1 Hypertension",
        prescription: "Lisinopril 10mg daily, lifestyle modifications",
        remarks: "Regular BP monitoring, low sodium diet",
    },
];

/// Consultation notes plus the visit-history view over them.
#[derive(Clone)]
pub struct ConsultationService {
    inner: Arc<RwLock<ConsultationState>>,
}

struct ConsultationState {
    store: RecordStore<Consultation>,
    next_id: u32,
}

impl Default for ConsultationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsultationService {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn with_demo_data() -> Self {
        Self::from_records(demo::demo_consultations())
    }

    pub fn from_records(records: Vec<Consultation>) -> Self {
        let next_id = records.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(ConsultationState {
                store: RecordStore::from_records(records),
                next_id,
            })),
        }
    }

    /// Records a consultation against an existing patient.
    ///
    /// Patient name, gender and age are denormalised onto the note, and
    /// the patient's last-visit label is stamped with the consultation
    /// date.
    pub fn record(
        &self,
        patients: &PatientService,
        new: NewConsultation,
    ) -> ClinicResult<Consultation> {
        let patient = patients
            .find(&new.patient_id)?
            .ok_or_else(|| ClinicError::not_found("patient", &new.patient_id))?;

        patients.record_visit(&patient.id, &new.date.format("%b %d, %Y").to_string())?;

        let mut state = self.inner.write()?;
        let id = state.next_id;
        state.next_id += 1;

        let note = Consultation {
            id,
            patient_id: patient.id,
            patient_name: patient.name,
            gender: patient.gender,
            age: patient.age,
            staff_id: new.staff_id,
            doctor: new.doctor,
            date: new.date,
            time: new.time,
            symptoms: new.symptoms,
            diagnosis: new.diagnosis,
            prescription: new.prescription,
            notes: new.notes,
        };
        state.store.push(note.clone());
        tracing::info!(code = %note.code(), patient = %note.patient_id, "consultation recorded");
        Ok(note)
    }

    pub fn list(&self) -> ClinicResult<Vec<Consultation>> {
        Ok(self.inner.read()?.store.records().to_vec())
    }

    /// The visit-history view under the given criteria.
    pub fn history(&self, criteria: &Criteria) -> ClinicResult<DerivedView<Consultation>> {
        let state = self.inner.read()?;
        Ok(derive_view(
            state.store.records(),
            criteria,
            Consultation::view_config(),
        ))
    }

    /// Number of consultations on or after the cutoff date. The "This
    /// Week" card passes `today - 7 days`.
    pub fn recorded_since(&self, cutoff: NaiveDate) -> ClinicResult<usize> {
        let state = self.inner.read()?;
        Ok(state
            .store
            .records()
            .iter()
            .filter(|c| c.date >= cutoff)
            .count())
    }

    pub fn update(&self, id: u32, changes: ConsultationUpdate) -> ClinicResult<Consultation> {
        let mut state = self.inner.write()?;
        let note = state
            .store
            .records_mut()
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ClinicError::not_found("consultation", id.to_string()))?;

        if let Some(date) = changes.date {
            note.date = date;
        }
        if let Some(symptoms) = changes.symptoms {
            note.symptoms = symptoms;
        }
        if let Some(diagnosis) = changes.diagnosis {
            note.diagnosis = diagnosis;
        }
        if let Some(prescription) = changes.prescription {
            note.prescription = prescription;
        }
        if let Some(notes) = changes.notes {
            note.notes = notes;
        }
        Ok(note.clone())
    }

    pub fn remove(&self, id: u32) -> ClinicResult<()> {
        let mut state = self.inner.write()?;
        let before = state.store.len();
        state.store.records_mut().retain(|c| c.id != id);
        if state.store.len() == before {
            return Err(ClinicError::not_found("consultation", id.to_string()));
        }
        Ok(())
    }

    /// The canned notes the consultation form offers.
    pub fn quick_templates() -> &'static [QuickTemplate] {
        QUICK_TEMPLATES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_for(patient_id: &str) -> NewConsultation {
        NewConsultation {
            patient_id: patient_id.into(),
            staff_id: "STAFF-001".into(),
            doctor: "Dr. Maria Cruz".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            time: "10:00 AM".into(),
            symptoms: "Sore throat".into(),
            diagnosis: "Pharyngitis".into(),
            prescription: "Lozenges, warm fluids".into(),
            notes: "Rest voice".into(),
        }
    }

    #[test]
    fn recording_requires_a_known_patient() {
        let patients = PatientService::with_demo_data();
        let service = ConsultationService::new();

        let err = service
            .record(&patients, note_for("PAT-999"))
            .expect_err("unknown patient");
        assert!(matches!(err, ClinicError::NotFound { kind: "patient", .. }));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn recording_denormalises_and_stamps_last_visit() {
        let patients = PatientService::with_demo_data();
        let service = ConsultationService::with_demo_data();

        let note = service.record(&patients, note_for("PAT-002")).unwrap();

        assert_eq!(note.id, 7);
        assert_eq!(note.code(), "CONS-007");
        assert_eq!(note.patient_name, "Juan Dela Cruz");
        assert_eq!(note.age, 32);

        let patient = patients.find("PAT-002").unwrap().unwrap();
        assert_eq!(patient.last_visit, "Jan 10, 2025");
    }

    #[test]
    fn history_filters_by_doctor_and_date() {
        let service = ConsultationService::with_demo_data();
        let mut criteria = Criteria::for_view(Consultation::view_config());
        criteria.set_filter("doctor", "Dr. Maria Cruz").unwrap();

        let view = service.history(&criteria).unwrap();
        assert_eq!(view.records.len(), 3);

        criteria.set_filter("date", "2025-01-05").unwrap();
        let view = service.history(&criteria).unwrap();
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].patient_name, "Maria Santos");
    }

    #[test]
    fn history_stats_count_unique_patients_of_the_filtered_set() {
        let service = ConsultationService::with_demo_data();
        let view = service
            .history(&Criteria::for_view(Consultation::view_config()))
            .unwrap();

        let total = view.stats.iter().find(|s| s.title == "Total Visits").unwrap();
        let unique = view
            .stats
            .iter()
            .find(|s| s.title == "Unique Patients")
            .unwrap();
        // Six notes, but Maria Santos appears twice.
        assert_eq!(total.value, 6);
        assert_eq!(unique.value, 5);
    }

    #[test]
    fn numeric_history_search_requires_the_exact_id() {
        let service = ConsultationService::with_demo_data();
        let mut criteria = Criteria::for_view(Consultation::view_config());

        criteria.set_search_term("1");
        let view = service.history(&criteria).unwrap();
        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].id, 1);
    }

    #[test]
    fn recorded_since_counts_from_the_cutoff() {
        let service = ConsultationService::with_demo_data();
        let cutoff = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(service.recorded_since(cutoff).unwrap(), 4);
    }

    #[test]
    fn quick_templates_are_available() {
        let templates = ConsultationService::quick_templates();
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].name, "Fever / Common Cold");
    }
}
