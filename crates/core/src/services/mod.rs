//! Stateful front-desk services.
//!
//! Each service owns one record store behind a lock and hands out cheap
//! cloneable handles, so the same instance can back REST handlers and the
//! CLI. All fallible operations return [`ClinicResult`](crate::ClinicResult).

mod consultations;
mod patients;
mod queue;
mod staff;
mod visits;

pub use consultations::{ConsultationService, ConsultationUpdate, NewConsultation, QuickTemplate};
pub use patients::{NewPatient, PatientService};
pub use queue::{JoinRequest, JoinTicket, QueueService, QueueUpdate};
pub use staff::{NewStaff, StaffService};
pub use visits::VisitLog;

use crate::config::CoreConfig;

/// The full set of front-desk services, wired together.
#[derive(Clone)]
pub struct FrontDesk {
    pub patients: PatientService,
    pub staff: StaffService,
    pub queue: QueueService,
    pub consultations: ConsultationService,
    pub visits: VisitLog,
}

impl FrontDesk {
    /// Services per the startup configuration: empty, or preloaded with
    /// the demo dataset.
    pub fn new(config: &CoreConfig) -> Self {
        if config.seed_demo_data() {
            Self::with_demo_data()
        } else {
            Self::empty()
        }
    }

    pub fn empty() -> Self {
        Self {
            patients: PatientService::new(),
            staff: StaffService::new(),
            queue: QueueService::new(),
            consultations: ConsultationService::new(),
            visits: VisitLog::new(),
        }
    }

    pub fn with_demo_data() -> Self {
        Self {
            patients: PatientService::with_demo_data(),
            staff: StaffService::with_demo_data(),
            queue: QueueService::with_demo_data(),
            consultations: ConsultationService::with_demo_data(),
            visits: VisitLog::new(),
        }
    }
}
