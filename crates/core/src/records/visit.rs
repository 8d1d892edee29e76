use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry in the front-desk visit log.
///
/// The visit log records everyone who walks in, not only patients, so it
/// carries a free-form purpose instead of clinical fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitEntry {
    pub id: u32,
    pub visitor_name: String,
    pub visit_time: NaiveDateTime,
    pub purpose: String,
}
