use crate::error::{ClinicError, ClinicResult};
use crate::records::{demo, id_sequence, initials, Patient, QueueEntry};
use crate::services::{NewPatient, PatientService};
use crate::store::RecordStore;
use crate::view::{derive_view, Criteria, DerivedView};
use chrono::NaiveTime;
use clinidesk_types::{Gender, QueuePriority, QueueStatus};
use std::sync::{Arc, RwLock};

/// Placeholder until real wait estimation exists.
const ESTIMATED_WAIT: &str = "15 mins";

const UNASSIGNED: &str = "Unassigned";

/// A walk-in patient joining today's queue.
#[derive(Debug, Clone)]
pub struct JoinRequest {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub contact: String,
    pub address: String,
    pub priority: Option<QueuePriority>,
}

/// What the front desk hands back after a successful join.
#[derive(Debug, Clone)]
pub struct JoinTicket {
    pub entry: QueueEntry,
    pub patient: Patient,
    pub estimated_wait: String,
}

/// Partial update of a queue entry.
#[derive(Debug, Clone, Default)]
pub struct QueueUpdate {
    pub status: Option<QueueStatus>,
    pub assigned_to: Option<String>,
    pub priority: Option<QueuePriority>,
}

/// Today's walk-in queue.
#[derive(Clone)]
pub struct QueueService {
    inner: Arc<RwLock<QueueState>>,
}

struct QueueState {
    store: RecordStore<QueueEntry>,
    next_id: u32,
}

impl Default for QueueService {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueService {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn with_demo_data() -> Self {
        Self::from_records(demo::demo_queue())
    }

    pub fn from_records(records: Vec<QueueEntry>) -> Self {
        let next_id = records.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(RwLock::new(QueueState {
                store: RecordStore::from_records(records),
                next_id,
            })),
        }
    }

    /// Registers the walk-in as a patient, then queues them with the next
    /// ticket number and the current wall-clock arrival time.
    pub fn join(&self, patients: &PatientService, request: JoinRequest) -> ClinicResult<JoinTicket> {
        let arrival = chrono::Local::now().time();
        self.join_at(patients, request, arrival)
    }

    /// `join` with an explicit arrival time.
    pub fn join_at(
        &self,
        patients: &PatientService,
        request: JoinRequest,
        arrival: NaiveTime,
    ) -> ClinicResult<JoinTicket> {
        let patient = patients.register(NewPatient {
            name: request.name,
            gender: request.gender,
            age: request.age,
            contact: request.contact,
            address: request.address,
        })?;

        let mut state = self.inner.write()?;
        let queue_number = next_queue_number(state.store.records());
        let id = state.next_id;
        state.next_id += 1;

        let entry = QueueEntry {
            id,
            queue_number,
            patient_id: patient.id.clone(),
            name: patient.name.clone(),
            initials: initials(&patient.name),
            age: patient.age,
            gender: patient.gender,
            assigned_to: UNASSIGNED.to_owned(),
            arrival_time: arrival.format("%I:%M %p").to_string(),
            status: QueueStatus::Waiting,
            priority: request.priority.unwrap_or(QueuePriority::Medium),
        };
        state.store.push(entry.clone());
        tracing::info!(queue_number = %entry.queue_number, "patient joined the queue");

        Ok(JoinTicket {
            entry,
            patient,
            estimated_wait: ESTIMATED_WAIT.to_owned(),
        })
    }

    pub fn list(&self) -> ClinicResult<Vec<QueueEntry>> {
        Ok(self.inner.read()?.store.records().to_vec())
    }

    /// The filtered view of the queue under the given criteria.
    pub fn view(&self, criteria: &Criteria) -> ClinicResult<DerivedView<QueueEntry>> {
        let state = self.inner.read()?;
        Ok(derive_view(
            state.store.records(),
            criteria,
            QueueEntry::view_config(),
        ))
    }

    pub fn update(&self, id: u32, update: QueueUpdate) -> ClinicResult<QueueEntry> {
        let mut state = self.inner.write()?;
        let entry = state
            .store
            .records_mut()
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ClinicError::not_found("queue entry", id.to_string()))?;

        if let Some(status) = update.status {
            entry.status = status;
        }
        if let Some(assigned_to) = update.assigned_to {
            entry.assigned_to = assigned_to;
        }
        if let Some(priority) = update.priority {
            entry.priority = priority;
        }
        Ok(entry.clone())
    }

    pub fn remove(&self, id: u32) -> ClinicResult<()> {
        let mut state = self.inner.write()?;
        let before = state.store.len();
        state.store.records_mut().retain(|e| e.id != id);
        if state.store.len() == before {
            return Err(ClinicError::not_found("queue entry", id.to_string()));
        }
        tracing::info!(id, "queue entry removed");
        Ok(())
    }
}

/// Next ticket number after the last entry: `Q-001` when the queue is
/// empty, a zero-padded increment of the last number otherwise.
fn next_queue_number(entries: &[QueueEntry]) -> String {
    let next = entries
        .last()
        .and_then(|entry| id_sequence(&entry.queue_number))
        .map_or(1, |n| n + 1);
    format!("Q-{:03}", next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_in(name: &str) -> JoinRequest {
        JoinRequest {
            name: name.into(),
            gender: Gender::Male,
            age: 40,
            contact: "09170000000".into(),
            address: "7 Rizal St".into(),
            priority: None,
        }
    }

    fn arrival() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 30, 0).unwrap()
    }

    #[test]
    fn first_join_gets_ticket_q001() {
        let patients = PatientService::new();
        let queue = QueueService::new();

        let ticket = queue
            .join_at(&patients, walk_in("Pedro Penduko"), arrival())
            .unwrap();

        assert_eq!(ticket.entry.queue_number, "Q-001");
        assert_eq!(ticket.entry.status, QueueStatus::Waiting);
        assert_eq!(ticket.entry.assigned_to, "Unassigned");
        assert_eq!(ticket.entry.arrival_time, "08:30 AM");
        assert_eq!(ticket.entry.priority, QueuePriority::Medium);
        assert_eq!(ticket.estimated_wait, "15 mins");
        // The walk-in is now a registered patient too.
        assert_eq!(ticket.patient.id, "PAT-001");
        assert!(patients.find("PAT-001").unwrap().is_some());
    }

    #[test]
    fn ticket_numbers_increment_from_the_last_entry() {
        let patients = PatientService::with_demo_data();
        let queue = QueueService::with_demo_data();

        let ticket = queue
            .join_at(&patients, walk_in("Pedro Penduko"), arrival())
            .unwrap();
        assert_eq!(ticket.entry.queue_number, "Q-004");
        assert_eq!(ticket.entry.id, 4);
    }

    #[test]
    fn join_rejects_invalid_intake_without_queueing() {
        let patients = PatientService::new();
        let queue = QueueService::new();

        let mut bad = walk_in("Pedro Penduko");
        bad.contact = "none".into();
        assert!(queue.join_at(&patients, bad, arrival()).is_err());
        assert!(queue.list().unwrap().is_empty());
        assert!(patients.list().unwrap().is_empty());
    }

    #[test]
    fn update_transitions_status_and_assignment() {
        let queue = QueueService::with_demo_data();

        let entry = queue
            .update(
                2,
                QueueUpdate {
                    status: Some(QueueStatus::Consulting),
                    assigned_to: Some("Dr. Roberto Santos".into()),
                    priority: None,
                },
            )
            .unwrap();

        assert_eq!(entry.status, QueueStatus::Consulting);
        assert_eq!(entry.assigned_to, "Dr. Roberto Santos");
        // Untouched fields survive a partial update.
        assert_eq!(entry.priority, QueuePriority::Medium);
    }

    #[test]
    fn remove_unknown_entry_is_not_found() {
        let queue = QueueService::new();
        assert!(matches!(
            queue.remove(99),
            Err(ClinicError::NotFound { .. })
        ));
    }

    #[test]
    fn status_filter_and_stats_agree() {
        let queue = QueueService::with_demo_data();
        let mut criteria = Criteria::for_view(QueueEntry::view_config());
        criteria.set_filter("status", "Waiting").unwrap();

        let view = queue.view(&criteria).unwrap();
        assert_eq!(view.records.len(), 1);

        let total = view.stats.iter().find(|s| s.title == "Total Patients").unwrap();
        let waiting = view.stats.iter().find(|s| s.title == "Waiting").unwrap();
        assert_eq!(total.value, 1);
        assert_eq!(waiting.value, 1);
    }
}
