use crate::view::{NumericSearchMode, Record, StatKind, StatSpec, ViewConfig};
use clinidesk_types::{Gender, QueuePriority, QueueStatus};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One walk-in patient in today's queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: u32,
    /// Formatted ticket number, e.g. `Q-001`.
    pub queue_number: String,
    /// Id of the patient record created at intake.
    pub patient_id: String,
    pub name: String,
    /// Display initials derived from the name, e.g. `JDC`.
    pub initials: String,
    pub age: u32,
    pub gender: Gender,
    /// Doctor the entry is assigned to, `Unassigned` until triaged.
    pub assigned_to: String,
    /// Arrival wall-clock time, e.g. `08:30 AM`.
    pub arrival_time: String,
    pub status: QueueStatus,
    pub priority: QueuePriority,
}

const QUEUE_VIEW: ViewConfig = ViewConfig {
    text_fields: &["name", "assigned_to", "status", "id", "initials"],
    category_fields: &["status"],
    numeric_mode: NumericSearchMode::IdSubstring,
    stats: &[
        StatSpec {
            title: "Total Patients",
            detail: "In queue today",
            kind: StatKind::Total,
        },
        StatSpec {
            title: "Waiting",
            detail: "Average: 15 minutes",
            kind: StatKind::Matching {
                field: "status",
                value: "Waiting",
            },
        },
        StatSpec {
            title: "Consulting",
            detail: "Currently with doctor",
            kind: StatKind::Matching {
                field: "status",
                value: "Consulting",
            },
        },
        StatSpec {
            title: "Completed",
            detail: "Sessions completed",
            kind: StatKind::Matching {
                field: "status",
                value: "Completed",
            },
        },
    ],
};

impl QueueEntry {
    /// How the derivation engine searches and summarises the queue.
    pub fn view_config() -> &'static ViewConfig {
        &QUEUE_VIEW
    }
}

impl Record for QueueEntry {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "assigned_to" => Some(Cow::Borrowed(self.assigned_to.as_str())),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "id" => Some(Cow::Owned(self.id.to_string())),
            "initials" => Some(Cow::Borrowed(self.initials.as_str())),
            "queue_number" => Some(Cow::Borrowed(self.queue_number.as_str())),
            "gender" => Some(Cow::Borrowed(self.gender.as_str())),
            "priority" => Some(Cow::Borrowed(self.priority.as_str())),
            _ => None,
        }
    }
}

/// Display initials for a queue card: the first letter of each word of the
/// name, upper-cased. `"Juan Dela Cruz"` becomes `"JDC"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Maria Santos"), "MS");
        assert_eq!(initials("Juan Dela Cruz"), "JDC");
        assert_eq!(initials("  Ana   Reyes "), "AR");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn view_fields_resolve_on_a_sample_entry() {
        let entry = QueueEntry {
            id: 2,
            queue_number: "Q-002".into(),
            patient_id: "PAT-002".into(),
            name: "Juan Dela Cruz".into(),
            initials: initials("Juan Dela Cruz"),
            age: 32,
            gender: Gender::Male,
            assigned_to: "Dr. Cruz".into(),
            arrival_time: "08:45 AM".into(),
            status: QueueStatus::Waiting,
            priority: QueuePriority::Medium,
        };

        let config = QueueEntry::view_config();
        for field in config.text_fields.iter().chain(config.category_fields) {
            assert!(entry.field(field).is_some(), "missing field {field}");
        }
        assert_eq!(entry.field("id").unwrap(), "2");
        assert_eq!(entry.field("initials").unwrap(), "JDC");
    }
}
