//! # Clinidesk Core
//!
//! Core business logic for the Clinidesk front-desk system.
//!
//! This crate contains pure data operations and in-memory record management:
//! - The collection view derivation engine: criteria, predicate evaluation,
//!   filtered views and aggregate statistics
//! - Record stores with explicit load-failure semantics
//! - Front-desk services: patient registry, staff directory, walk-in queue,
//!   consultation notes and the visit log
//!
//! **No API concerns**: HTTP servers, OpenAPI documentation or wire DTOs
//! belong in `api-rest`.
//!
//! # Modules
//!
//! - [`view`]: the generic filter/search/derive engine
//! - [`store`]: in-memory record store with fetch-failure semantics
//! - [`records`]: domain record types and the demo dataset
//! - [`services`]: stateful front-desk services built on the above
//! - [`validation`]: input guards for intake forms
//! - [`config`]: startup-resolved core configuration

pub mod config;
pub mod error;
pub mod records;
pub mod services;
pub mod store;
pub mod validation;
pub mod view;

pub use config::CoreConfig;
pub use error::{ClinicError, ClinicResult};
pub use records::{Consultation, Patient, QueueEntry, StaffMember, VisitEntry};
pub use services::{
    ConsultationService, FrontDesk, PatientService, QueueService, StaffService, VisitLog,
};
pub use store::{RecordStore, SourceError};
pub use view::{
    derive_view, Criteria, DerivedView, NumericSearchMode, Record, Stat, StatKind, StatSpec,
    ViewConfig, ViewError,
};
