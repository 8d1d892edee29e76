use crate::error::ClinicResult;
use crate::records::VisitEntry;
use crate::store::RecordStore;
use chrono::NaiveDateTime;
use clinidesk_types::NonEmptyText;
use std::sync::{Arc, RwLock};

/// The front-desk visit log.
#[derive(Clone)]
pub struct VisitLog {
    inner: Arc<RwLock<VisitState>>,
}

struct VisitState {
    store: RecordStore<VisitEntry>,
    next_id: u32,
}

impl Default for VisitLog {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(VisitState {
                store: RecordStore::new(),
                next_id: 1,
            })),
        }
    }

    /// Appends a visit with the current wall-clock time.
    pub fn log_now(&self, visitor_name: &str, purpose: &str) -> ClinicResult<VisitEntry> {
        self.log_at(visitor_name, purpose, chrono::Local::now().naive_local())
    }

    /// Appends a visit with an explicit time.
    pub fn log_at(
        &self,
        visitor_name: &str,
        purpose: &str,
        at: NaiveDateTime,
    ) -> ClinicResult<VisitEntry> {
        let visitor_name = NonEmptyText::new(visitor_name)?;

        let mut state = self.inner.write()?;
        let id = state.next_id;
        state.next_id += 1;

        let entry = VisitEntry {
            id,
            visitor_name: visitor_name.into_inner(),
            visit_time: at,
            purpose: purpose.trim().to_owned(),
        };
        state.store.push(entry.clone());
        Ok(entry)
    }

    pub fn list(&self) -> ClinicResult<Vec<VisitEntry>> {
        Ok(self.inner.read()?.store.records().to_vec())
    }

    /// Number of visits at or after the cutoff.
    pub fn since(&self, cutoff: NaiveDateTime) -> ClinicResult<usize> {
        let state = self.inner.read()?;
        Ok(state
            .store
            .records()
            .iter()
            .filter(|v| v.visit_time >= cutoff)
            .count())
    }
}
