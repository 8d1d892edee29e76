//! In-memory record store with explicit load-failure semantics.
//!
//! A store is either seeded from a static collection or replaced wholesale
//! by a fallible source. When a source fails the store falls back to the
//! empty collection and remembers a user-visible message; consumers only
//! ever see "records plus optional error", never a panic.

/// Why loading records from a source failed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request returned status {0}")]
    Status(u16),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// An ordered, in-memory collection of records plus an error indicator.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    error: Option<String>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
        }
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self {
            records,
            error: None,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The message from the last failed load, if the store is in the
    /// fallen-back state.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Replaces the records from a fallible source.
    ///
    /// On success the records are swapped in, any previous error is
    /// cleared, and the new count is returned. On failure the store falls
    /// back to the empty collection, keeps a message for the consumer, and
    /// the source error is handed back to the caller for logging.
    pub fn refresh_with<F>(&mut self, source: F) -> Result<usize, SourceError>
    where
        F: FnOnce() -> Result<Vec<R>, SourceError>,
    {
        match source() {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.error = None;
                Ok(count)
            }
            Err(err) => {
                self.records = Vec::new();
                self.error = Some(format!("Failed to load records: {err}. Please try again."));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_success_replaces_and_clears_error() {
        let mut store = RecordStore::from_records(vec![1, 2, 3]);
        store
            .refresh_with(|| Err(SourceError::Status(502)))
            .expect_err("source fails");
        assert!(store.is_empty());
        assert!(store.error().is_some());

        let count = store
            .refresh_with(|| Ok(vec![4, 5]))
            .expect("source succeeds");
        assert_eq!(count, 2);
        assert_eq!(store.records(), &[4, 5]);
        assert!(store.error().is_none());
    }

    #[test]
    fn refresh_failure_falls_back_to_empty_with_message() {
        let mut store = RecordStore::from_records(vec![1, 2, 3]);

        let err = store
            .refresh_with(|| Err(SourceError::Network("connection refused".into())))
            .expect_err("source fails");

        assert!(matches!(err, SourceError::Network(_)));
        assert!(store.is_empty());
        let message = store.error().expect("error recorded");
        assert!(message.contains("Please try again"));
    }

    #[test]
    fn malformed_payload_is_a_load_failure_not_a_panic() {
        let mut store: RecordStore<u32> = RecordStore::new();
        store
            .refresh_with(|| Err(SourceError::Malformed("expected array".into())))
            .expect_err("source fails");
        assert!(store.is_empty());
        assert!(store.error().unwrap().contains("malformed payload"));
    }
}
