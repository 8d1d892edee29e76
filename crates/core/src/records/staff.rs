use crate::view::{NumericSearchMode, Record, StatKind, StatSpec, ViewConfig};
use clinidesk_types::{Availability, Gender, StaffRole};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A member of the medical staff directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Formatted identifier, e.g. `STAFF-001`.
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    pub specialty: String,
    pub email: String,
    pub contact: String,
    pub availability: Availability,
    pub department: String,
    pub schedule: String,
    pub years_of_experience: u32,
    #[serde(default)]
    pub gender: Option<Gender>,
}

const STAFF_VIEW: ViewConfig = ViewConfig {
    text_fields: &["name", "email", "specialty", "role", "department"],
    category_fields: &["role", "status"],
    numeric_mode: NumericSearchMode::IdSubstring,
    stats: &[
        StatSpec {
            title: "Total Staff",
            detail: "All medical staff",
            kind: StatKind::Total,
        },
        StatSpec {
            title: "Doctors",
            detail: "Medical physicians",
            kind: StatKind::Matching {
                field: "role",
                value: "Doctor",
            },
        },
        StatSpec {
            title: "Nurses",
            detail: "Nursing staff",
            kind: StatKind::Matching {
                field: "role",
                value: "Nurse",
            },
        },
        StatSpec {
            title: "Available Now",
            detail: "Currently active",
            kind: StatKind::Matching {
                field: "status",
                value: "Available",
            },
        },
    ],
};

impl StaffMember {
    /// How the derivation engine searches and summarises staff.
    pub fn view_config() -> &'static ViewConfig {
        &STAFF_VIEW
    }
}

impl Record for StaffMember {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn field(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "email" => Some(Cow::Borrowed(self.email.as_str())),
            "specialty" => Some(Cow::Borrowed(self.specialty.as_str())),
            "role" => Some(Cow::Borrowed(self.role.as_str())),
            "department" => Some(Cow::Borrowed(self.department.as_str())),
            "contact" => Some(Cow::Borrowed(self.contact.as_str())),
            // The directory exposes availability as the "status" column.
            "status" => Some(Cow::Borrowed(self.availability.as_str())),
            "gender" => self.gender.map(|g| Cow::Borrowed(g.as_str())),
            _ => None,
        }
    }
}
