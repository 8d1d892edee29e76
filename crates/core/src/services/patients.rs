use crate::error::{ClinicError, ClinicResult};
use crate::records::{demo, id_sequence, Patient};
use crate::store::RecordStore;
use crate::validation::{validate_age, validate_contact_number, validate_person_name};
use crate::view::{derive_view, Criteria, DerivedView};
use clinidesk_types::Gender;
use std::sync::{Arc, RwLock};

/// Intake data for a new or updated patient record.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub contact: String,
    pub address: String,
}

/// The patient registry.
#[derive(Clone)]
pub struct PatientService {
    inner: Arc<RwLock<PatientState>>,
}

struct PatientState {
    store: RecordStore<Patient>,
    next_seq: u32,
}

impl Default for PatientService {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientService {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn with_demo_data() -> Self {
        Self::from_records(demo::demo_patients())
    }

    pub fn from_records(records: Vec<Patient>) -> Self {
        let next_seq = next_sequence(&records);
        Self {
            inner: Arc::new(RwLock::new(PatientState {
                store: RecordStore::from_records(records),
                next_seq,
            })),
        }
    }

    /// Registers a patient, assigning the next `PAT-NNN` identifier.
    pub fn register(&self, new: NewPatient) -> ClinicResult<Patient> {
        validate_person_name(&new.name)?;
        validate_contact_number(&new.contact)?;
        validate_age(new.age)?;

        let mut state = self.inner.write()?;
        let id = format!("PAT-{:03}", state.next_seq);
        state.next_seq += 1;

        let patient = Patient::new(
            id,
            new.name.trim(),
            new.gender,
            new.age,
            new.contact.trim(),
            new.address.trim(),
        );
        state.store.push(patient.clone());
        tracing::info!(id = %patient.id, "patient registered");
        Ok(patient)
    }

    pub fn list(&self) -> ClinicResult<Vec<Patient>> {
        Ok(self.inner.read()?.store.records().to_vec())
    }

    pub fn find(&self, id: &str) -> ClinicResult<Option<Patient>> {
        let state = self.inner.read()?;
        Ok(state.store.records().iter().find(|p| p.id == id).cloned())
    }

    /// The filtered view of the registry under the given criteria.
    pub fn view(&self, criteria: &Criteria) -> ClinicResult<DerivedView<Patient>> {
        let state = self.inner.read()?;
        Ok(derive_view(
            state.store.records(),
            criteria,
            Patient::view_config(),
        ))
    }

    pub fn update(&self, id: &str, changes: NewPatient) -> ClinicResult<Patient> {
        validate_person_name(&changes.name)?;
        validate_contact_number(&changes.contact)?;
        validate_age(changes.age)?;

        let mut state = self.inner.write()?;
        let patient = state
            .store
            .records_mut()
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ClinicError::not_found("patient", id))?;

        patient.name = changes.name.trim().to_owned();
        patient.gender = changes.gender;
        patient.age = changes.age;
        patient.contact = changes.contact.trim().to_owned();
        patient.address = changes.address.trim().to_owned();
        Ok(patient.clone())
    }

    pub fn remove(&self, id: &str) -> ClinicResult<()> {
        let mut state = self.inner.write()?;
        let before = state.store.len();
        state.store.records_mut().retain(|p| p.id != id);
        if state.store.len() == before {
            return Err(ClinicError::not_found("patient", id));
        }
        tracing::info!(id, "patient removed");
        Ok(())
    }

    /// Stamps the patient's last-visit label when a consultation is
    /// recorded.
    pub(crate) fn record_visit(&self, id: &str, label: &str) -> ClinicResult<()> {
        let mut state = self.inner.write()?;
        let patient = state
            .store
            .records_mut()
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ClinicError::not_found("patient", id))?;
        patient.last_visit = label.to_owned();
        Ok(())
    }
}

fn next_sequence(records: &[Patient]) -> u32 {
    records
        .iter()
        .filter_map(|p| id_sequence(&p.id))
        .max()
        .unwrap_or(0)
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            gender: Gender::Female,
            age: 30,
            contact: "09170000000".into(),
            address: "1 Mabini St".into(),
        }
    }

    #[test]
    fn register_assigns_sequential_ids() {
        let service = PatientService::new();
        let first = service.register(intake("Liza Soberano")).unwrap();
        let second = service.register(intake("Carmen Rosales")).unwrap();
        assert_eq!(first.id, "PAT-001");
        assert_eq!(second.id, "PAT-002");
    }

    #[test]
    fn register_continues_after_the_demo_data() {
        let service = PatientService::with_demo_data();
        let patient = service.register(intake("Liza Soberano")).unwrap();
        assert_eq!(patient.id, "PAT-006");
    }

    #[test]
    fn register_rejects_bad_intake_data() {
        let service = PatientService::new();

        assert!(matches!(
            service.register(intake("Liza 2")),
            Err(ClinicError::InvalidInput(_))
        ));

        let mut bad_contact = intake("Liza Soberano");
        bad_contact.contact = "not-a-number".into();
        assert!(matches!(
            service.register(bad_contact),
            Err(ClinicError::InvalidInput(_))
        ));
    }

    #[test]
    fn update_and_remove_report_missing_patients() {
        let service = PatientService::new();
        assert!(matches!(
            service.update("PAT-999", intake("Liza Soberano")),
            Err(ClinicError::NotFound { .. })
        ));
        assert!(matches!(
            service.remove("PAT-999"),
            Err(ClinicError::NotFound { .. })
        ));
    }

    #[test]
    fn view_filters_by_gender() {
        let service = PatientService::with_demo_data();
        let mut criteria = Criteria::for_view(Patient::view_config());
        criteria.set_filter("gender", "Male").unwrap();

        let view = service.view(&criteria).unwrap();
        assert!(view.records.iter().all(|p| p.gender == Gender::Male));
        assert_eq!(view.stats[0].value, view.records.len());
    }
}
