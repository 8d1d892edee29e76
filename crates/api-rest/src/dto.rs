//! Wire types for the REST API.
//!
//! Core types never cross the HTTP boundary directly; each has a DTO with
//! a `From` conversion, so OpenAPI schemas and serde attributes stay out of
//! the core crate.

use chrono::NaiveDate;
use clinidesk_core::services::{
    JoinRequest, JoinTicket, NewConsultation, NewPatient, NewStaff, QueueUpdate, QuickTemplate,
};
use clinidesk_core::{ClinicError, Consultation, Patient, QueueEntry, Stat, StaffMember, VisitEntry};
use clinidesk_types::{Availability, Gender, QueuePriority, QueueStatus, StaffRole, UnknownVariant};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn parse_vocab<T>(value: &str) -> Result<T, ClinicError>
where
    T: std::str::FromStr<Err = UnknownVariant>,
{
    value
        .parse()
        .map_err(|e: UnknownVariant| ClinicError::InvalidInput(e.to_string()))
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One stat card of a derived view.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatDto {
    pub title: String,
    pub value: usize,
    pub detail: String,
}

impl From<Stat> for StatDto {
    fn from(stat: Stat) -> Self {
        Self {
            title: stat.title,
            value: stat.value,
            detail: stat.detail,
        }
    }
}

/// Generic acknowledgement for delete-style operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

// =========================================================================
// Patients
// =========================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct PatientDto {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub contact: String,
    pub address: String,
    pub last_visit: String,
}

impl From<Patient> for PatientDto {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            gender: patient.gender.to_string(),
            age: patient.age,
            contact: patient.contact,
            address: patient.address,
            last_visit: patient.last_visit,
        }
    }
}

/// Filter parameters of the patient list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PatientQuery {
    /// Free-text search term; all-digit terms match against the patient id.
    pub search: Option<String>,
    /// Gender filter; omit or pass `all` for no constraint.
    pub gender: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatientViewRes {
    pub patients: Vec<PatientDto>,
    pub stats: Vec<StatDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterPatientReq {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub contact: String,
    #[serde(default)]
    pub address: String,
}

impl TryFrom<RegisterPatientReq> for NewPatient {
    type Error = ClinicError;

    fn try_from(req: RegisterPatientReq) -> Result<Self, Self::Error> {
        Ok(NewPatient {
            name: req.name,
            gender: parse_vocab::<Gender>(&req.gender)?,
            age: req.age,
            contact: req.contact,
            address: req.address,
        })
    }
}

// =========================================================================
// Staff
// =========================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffDto {
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub email: String,
    pub contact: String,
    pub status: String,
    pub department: String,
    pub schedule: String,
    pub years_of_experience: u32,
    pub gender: Option<String>,
}

impl From<StaffMember> for StaffDto {
    fn from(member: StaffMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            role: member.role.to_string(),
            specialty: member.specialty,
            email: member.email,
            contact: member.contact,
            status: member.availability.to_string(),
            department: member.department,
            schedule: member.schedule,
            years_of_experience: member.years_of_experience,
            gender: member.gender.map(|g| g.to_string()),
        }
    }
}

/// Filter parameters of the staff directory.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StaffQuery {
    pub search: Option<String>,
    /// Role filter; omit or pass `all` for no constraint.
    pub role: Option<String>,
    /// Availability filter; omit or pass `all` for no constraint.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffViewRes {
    pub staff: Vec<StaffDto>,
    pub stats: Vec<StatDto>,
    /// Message from the last failed directory refresh, if any.
    pub error: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddStaffReq {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub years_of_experience: u32,
    pub availability: Option<String>,
    pub gender: Option<String>,
}

impl TryFrom<AddStaffReq> for NewStaff {
    type Error = ClinicError;

    fn try_from(req: AddStaffReq) -> Result<Self, Self::Error> {
        Ok(NewStaff {
            name: req.name,
            role: parse_vocab::<StaffRole>(&req.role)?,
            specialty: req.specialty,
            email: req.email,
            contact: req.contact,
            department: req.department,
            schedule: req.schedule,
            years_of_experience: req.years_of_experience,
            availability: req
                .availability
                .as_deref()
                .map(parse_vocab::<Availability>)
                .transpose()?,
            gender: req
                .gender
                .as_deref()
                .map(parse_vocab::<Gender>)
                .transpose()?,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetAvailabilityReq {
    /// One of `Available`, `Busy`, `Off Duty` (or the wire form `offline`).
    pub availability: String,
}

// =========================================================================
// Queue
// =========================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct QueueEntryDto {
    pub id: u32,
    pub queue_number: String,
    pub patient_id: String,
    pub name: String,
    pub initials: String,
    pub age: u32,
    pub gender: String,
    pub assigned_to: String,
    pub arrival_time: String,
    pub status: String,
    pub priority: String,
}

impl From<QueueEntry> for QueueEntryDto {
    fn from(entry: QueueEntry) -> Self {
        Self {
            id: entry.id,
            queue_number: entry.queue_number,
            patient_id: entry.patient_id,
            name: entry.name,
            initials: entry.initials,
            age: entry.age,
            gender: entry.gender.to_string(),
            assigned_to: entry.assigned_to,
            arrival_time: entry.arrival_time,
            status: entry.status.to_string(),
            priority: entry.priority.to_string(),
        }
    }
}

/// Filter parameters of the queue dashboard.
#[derive(Debug, Deserialize, IntoParams)]
pub struct QueueQuery {
    pub search: Option<String>,
    /// Status filter; omit or pass `all` for no constraint.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QueueViewRes {
    pub queue: Vec<QueueEntryDto>,
    pub stats: Vec<StatDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinQueueReq {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub contact: String,
    #[serde(default)]
    pub address: String,
    pub priority: Option<String>,
}

impl TryFrom<JoinQueueReq> for JoinRequest {
    type Error = ClinicError;

    fn try_from(req: JoinQueueReq) -> Result<Self, Self::Error> {
        Ok(JoinRequest {
            name: req.name,
            gender: parse_vocab::<Gender>(&req.gender)?,
            age: req.age,
            contact: req.contact,
            address: req.address,
            priority: req
                .priority
                .as_deref()
                .map(parse_vocab::<QueuePriority>)
                .transpose()?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JoinQueueRes {
    pub queue_number: String,
    pub patient_id: String,
    pub patient_name: String,
    pub status: String,
    pub estimated_wait: String,
}

impl From<JoinTicket> for JoinQueueRes {
    fn from(ticket: JoinTicket) -> Self {
        Self {
            queue_number: ticket.entry.queue_number,
            patient_id: ticket.patient.id,
            patient_name: ticket.patient.name,
            status: ticket.entry.status.to_string(),
            estimated_wait: ticket.estimated_wait,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQueueReq {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<String>,
}

impl TryFrom<UpdateQueueReq> for QueueUpdate {
    type Error = ClinicError;

    fn try_from(req: UpdateQueueReq) -> Result<Self, Self::Error> {
        Ok(QueueUpdate {
            status: req
                .status
                .as_deref()
                .map(parse_vocab::<QueueStatus>)
                .transpose()?,
            assigned_to: req.assigned_to,
            priority: req
                .priority
                .as_deref()
                .map(parse_vocab::<QueuePriority>)
                .transpose()?,
        })
    }
}

// =========================================================================
// Consultations & visit history
// =========================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct ConsultationDto {
    pub id: u32,
    /// Display code, e.g. `CONS-001`.
    pub code: String,
    pub patient_id: String,
    pub patient_name: String,
    pub gender: String,
    pub age: u32,
    pub staff_id: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

impl From<Consultation> for ConsultationDto {
    fn from(note: Consultation) -> Self {
        Self {
            code: note.code(),
            id: note.id,
            patient_id: note.patient_id,
            patient_name: note.patient_name,
            gender: note.gender.to_string(),
            age: note.age,
            staff_id: note.staff_id,
            doctor: note.doctor,
            date: note.date,
            time: note.time,
            symptoms: note.symptoms,
            diagnosis: note.diagnosis,
            prescription: note.prescription,
            notes: note.notes,
        }
    }
}

/// Filter parameters of the visit-history view.
#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQuery {
    /// Free-text search; all-digit terms must match a consultation id
    /// exactly.
    pub search: Option<String>,
    /// Doctor filter; omit or pass `all` for no constraint.
    pub doctor: Option<String>,
    /// Exact date filter (`YYYY-MM-DD`); omit or pass an empty string for
    /// no constraint.
    pub date: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryViewRes {
    pub consultations: Vec<ConsultationDto>,
    pub stats: Vec<StatDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordConsultationReq {
    pub patient_id: String,
    pub staff_id: String,
    pub doctor: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub prescription: String,
    #[serde(default)]
    pub notes: String,
}

impl From<RecordConsultationReq> for NewConsultation {
    fn from(req: RecordConsultationReq) -> Self {
        NewConsultation {
            patient_id: req.patient_id,
            staff_id: req.staff_id,
            doctor: req.doctor,
            date: req.date,
            time: req.time,
            symptoms: req.symptoms,
            diagnosis: req.diagnosis,
            prescription: req.prescription,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuickTemplateDto {
    pub id: u32,
    pub name: String,
    pub symptoms: String,
    pub diagnosis: String,
    pub prescription: String,
    pub remarks: String,
}

impl From<&QuickTemplate> for QuickTemplateDto {
    fn from(template: &QuickTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name.to_owned(),
            symptoms: template.symptoms.to_owned(),
            diagnosis: template.diagnosis.to_owned(),
            prescription: template.prescription.to_owned(),
            remarks: template.remarks.to_owned(),
        }
    }
}

// =========================================================================
// Visit log
// =========================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct VisitDto {
    pub id: u32,
    pub visitor_name: String,
    pub visit_time: chrono::NaiveDateTime,
    pub purpose: String,
}

impl From<VisitEntry> for VisitDto {
    fn from(entry: VisitEntry) -> Self {
        Self {
            id: entry.id,
            visitor_name: entry.visitor_name,
            visit_time: entry.visit_time,
            purpose: entry.purpose,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LogVisitReq {
    pub visitor_name: String,
    #[serde(default)]
    pub purpose: String,
}
