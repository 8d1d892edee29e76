use crate::error::{ClinicError, ClinicResult};
use crate::records::{demo, id_sequence, StaffMember};
use crate::store::{RecordStore, SourceError};
use crate::view::{derive_view, Criteria, DerivedView};
use clinidesk_types::{Availability, Gender, NonEmptyText, StaffRole};
use std::sync::{Arc, RwLock};

/// Data for a new or updated staff directory entry.
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub name: String,
    pub role: StaffRole,
    pub specialty: String,
    pub email: String,
    pub contact: String,
    pub department: String,
    pub schedule: String,
    pub years_of_experience: u32,
    pub availability: Option<Availability>,
    pub gender: Option<Gender>,
}

/// The medical staff directory.
///
/// Unlike the other stores, the directory can be refreshed wholesale from
/// an upstream source; a failed refresh leaves it empty with a
/// user-visible message rather than stale or panicking.
#[derive(Clone)]
pub struct StaffService {
    inner: Arc<RwLock<StaffState>>,
}

struct StaffState {
    store: RecordStore<StaffMember>,
    next_seq: u32,
}

impl Default for StaffService {
    fn default() -> Self {
        Self::new()
    }
}

impl StaffService {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn with_demo_data() -> Self {
        Self::from_records(demo::demo_staff())
    }

    pub fn from_records(records: Vec<StaffMember>) -> Self {
        let next_seq = next_sequence(&records);
        Self {
            inner: Arc::new(RwLock::new(StaffState {
                store: RecordStore::from_records(records),
                next_seq,
            })),
        }
    }

    /// Adds a staff member, assigning the next `STAFF-NNN` identifier.
    pub fn add(&self, new: NewStaff) -> ClinicResult<StaffMember> {
        let name = NonEmptyText::new(&new.name)?;
        if !new.email.is_empty() && !new.email.contains('@') {
            return Err(ClinicError::InvalidInput(format!(
                "invalid email address: {}",
                new.email
            )));
        }

        let mut state = self.inner.write()?;
        let id = format!("STAFF-{:03}", state.next_seq);
        state.next_seq += 1;

        let member = StaffMember {
            id,
            name: name.into_inner(),
            role: new.role,
            specialty: defaulted(new.specialty, "Not specified"),
            email: new.email,
            contact: defaulted(new.contact, "No contact"),
            availability: new.availability.unwrap_or(Availability::Available),
            department: defaulted(new.department, "General Medicine"),
            schedule: new.schedule,
            years_of_experience: new.years_of_experience,
            gender: new.gender,
        };
        state.store.push(member.clone());
        tracing::info!(id = %member.id, "staff member added");
        Ok(member)
    }

    pub fn list(&self) -> ClinicResult<Vec<StaffMember>> {
        Ok(self.inner.read()?.store.records().to_vec())
    }

    pub fn find(&self, id: &str) -> ClinicResult<Option<StaffMember>> {
        let state = self.inner.read()?;
        Ok(state.store.records().iter().find(|s| s.id == id).cloned())
    }

    /// The filtered view of the directory under the given criteria.
    pub fn view(&self, criteria: &Criteria) -> ClinicResult<DerivedView<StaffMember>> {
        let state = self.inner.read()?;
        Ok(derive_view(
            state.store.records(),
            criteria,
            StaffMember::view_config(),
        ))
    }

    /// The message from the last failed refresh, if any.
    pub fn load_error(&self) -> ClinicResult<Option<String>> {
        Ok(self.inner.read()?.store.error().map(str::to_owned))
    }

    pub fn update(&self, id: &str, changes: NewStaff) -> ClinicResult<StaffMember> {
        let name = NonEmptyText::new(&changes.name)?;

        let mut state = self.inner.write()?;
        let member = state
            .store
            .records_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ClinicError::not_found("staff member", id))?;

        member.name = name.into_inner();
        member.role = changes.role;
        member.specialty = defaulted(changes.specialty, "Not specified");
        member.email = changes.email;
        member.contact = defaulted(changes.contact, "No contact");
        member.department = defaulted(changes.department, "General Medicine");
        member.schedule = changes.schedule;
        member.years_of_experience = changes.years_of_experience;
        if let Some(availability) = changes.availability {
            member.availability = availability;
        }
        if let Some(gender) = changes.gender {
            member.gender = Some(gender);
        }
        Ok(member.clone())
    }

    pub fn set_availability(
        &self,
        id: &str,
        availability: Availability,
    ) -> ClinicResult<StaffMember> {
        let mut state = self.inner.write()?;
        let member = state
            .store
            .records_mut()
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ClinicError::not_found("staff member", id))?;
        member.availability = availability;
        Ok(member.clone())
    }

    pub fn remove(&self, id: &str) -> ClinicResult<()> {
        let mut state = self.inner.write()?;
        let before = state.store.len();
        state.store.records_mut().retain(|s| s.id != id);
        if state.store.len() == before {
            return Err(ClinicError::not_found("staff member", id));
        }
        tracing::info!(id, "staff member removed");
        Ok(())
    }

    /// Replaces the directory from an upstream source.
    ///
    /// On success any previous load error is cleared; on failure the
    /// directory is emptied, the message is kept for consumers, and the
    /// error is returned for the caller to surface.
    pub fn refresh_with<F>(&self, source: F) -> ClinicResult<usize>
    where
        F: FnOnce() -> Result<Vec<StaffMember>, SourceError>,
    {
        let mut state = self.inner.write()?;
        match state.store.refresh_with(source) {
            Ok(count) => {
                state.next_seq = next_sequence(state.store.records());
                tracing::info!(count, "staff directory refreshed");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(error = %err, "staff refresh failed, directory cleared");
                Err(err.into())
            }
        }
    }
}

fn next_sequence(records: &[StaffMember]) -> u32 {
    records
        .iter()
        .filter_map(|s| id_sequence(&s.id))
        .max()
        .unwrap_or(0)
        + 1
}

fn defaulted(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}
