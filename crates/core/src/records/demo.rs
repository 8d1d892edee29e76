//! The demo dataset.
//!
//! A small, internally consistent clinic used by the CLI, the seeded
//! server mode and the tests: five patients, three staff members, three
//! queue entries and six consultation notes that reference each other by
//! id.

use super::{initials, Consultation, Patient, QueueEntry, StaffMember};
use chrono::NaiveDate;
use clinidesk_types::{Availability, Gender, QueuePriority, QueueStatus, StaffRole};

pub fn demo_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "PAT-001".into(),
            name: "Maria Santos".into(),
            gender: Gender::Female,
            age: 45,
            contact: "09123456789".into(),
            address: "123 Main St, Barangay Centro".into(),
            last_visit: "Jan 05, 2025".into(),
        },
        Patient {
            id: "PAT-002".into(),
            name: "Juan Dela Cruz".into(),
            gender: Gender::Male,
            age: 32,
            contact: "09234567890".into(),
            address: "456 Oak Ave, Barangay San Jose".into(),
            last_visit: "Jan 05, 2025".into(),
        },
        Patient {
            id: "PAT-003".into(),
            name: "Ana Reyes".into(),
            gender: Gender::Female,
            age: 28,
            contact: "09345678901".into(),
            address: "789 Pine Rd, Barangay Poblacion".into(),
            last_visit: "Jan 04, 2025".into(),
        },
        Patient {
            id: "PAT-004".into(),
            name: "Pedro Garcia".into(),
            gender: Gender::Male,
            age: 55,
            contact: "09456789012".into(),
            address: "12 Acacia St, Barangay Malinis".into(),
            last_visit: "Jan 04, 2025".into(),
        },
        Patient {
            id: "PAT-005".into(),
            name: "Rosa Martinez".into(),
            gender: Gender::Female,
            age: 38,
            contact: "09567890123".into(),
            address: "34 Narra Ave, Barangay Bagong Silang".into(),
            last_visit: "Dec 27, 2024".into(),
        },
    ]
}

pub fn demo_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "STAFF-001".into(),
            name: "Dr. Maria Cruz".into(),
            role: StaffRole::Doctor,
            specialty: "General Medicine".into(),
            email: "maria.cruz@clinic.com".into(),
            contact: "09123456789".into(),
            availability: Availability::Available,
            department: "General Medicine".into(),
            schedule: "Mon-Fri, 8:00 AM - 5:00 PM".into(),
            years_of_experience: 8,
            gender: Some(Gender::Female),
        },
        StaffMember {
            id: "STAFF-002".into(),
            name: "Dr. Roberto Santos".into(),
            role: StaffRole::Doctor,
            specialty: "General Medicine".into(),
            email: "roberto.santos@clinic.com".into(),
            contact: "09234567890".into(),
            availability: Availability::Busy,
            department: "General Medicine".into(),
            schedule: "Mon-Sat, 9:00 AM - 6:00 PM".into(),
            years_of_experience: 12,
            gender: Some(Gender::Male),
        },
        StaffMember {
            id: "STAFF-003".into(),
            name: "Nurse Maria Reyes".into(),
            role: StaffRole::Nurse,
            specialty: "Emergency Care".into(),
            email: "maria.reyes@clinic.com".into(),
            contact: "09567890123".into(),
            availability: Availability::OffDuty,
            department: "Emergency Care".into(),
            schedule: "Tue-Sat, 8:00 AM - 5:00 PM".into(),
            years_of_experience: 5,
            gender: Some(Gender::Female),
        },
    ]
}

pub fn demo_queue() -> Vec<QueueEntry> {
    let entry = |id: u32,
                 patient_id: &str,
                 name: &str,
                 age: u32,
                 gender: Gender,
                 arrival: &str,
                 status: QueueStatus,
                 priority: QueuePriority| QueueEntry {
        id,
        queue_number: format!("Q-{:03}", id),
        patient_id: patient_id.into(),
        name: name.into(),
        initials: initials(name),
        age,
        gender,
        assigned_to: "Dr. Cruz".into(),
        arrival_time: arrival.into(),
        status,
        priority,
    };

    vec![
        entry(
            1,
            "PAT-001",
            "Maria Santos",
            45,
            Gender::Female,
            "08:30 AM",
            QueueStatus::Consulting,
            QueuePriority::High,
        ),
        entry(
            2,
            "PAT-002",
            "Juan Dela Cruz",
            32,
            Gender::Male,
            "08:45 AM",
            QueueStatus::Waiting,
            QueuePriority::Medium,
        ),
        entry(
            3,
            "PAT-003",
            "Ana Reyes",
            28,
            Gender::Female,
            "09:00 AM",
            QueueStatus::Completed,
            QueuePriority::Low,
        ),
    ]
}

pub fn demo_consultations() -> Vec<Consultation> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");

    vec![
        Consultation {
            id: 1,
            patient_id: "PAT-001".into(),
            patient_name: "Maria Santos".into(),
            gender: Gender::Female,
            age: 45,
            staff_id: "STAFF-001".into(),
            doctor: "Dr. Maria Cruz".into(),
            date: date(2025, 1, 5),
            time: "09:30 AM".into(),
            symptoms: "Headache, dizziness, high blood pressure".into(),
            diagnosis: "Hypertension - Stage 2".into(),
            prescription: "Lisinopril 10mg once daily".into(),
            notes: "Follow up in 2 weeks, low sodium diet".into(),
        },
        Consultation {
            id: 2,
            patient_id: "PAT-002".into(),
            patient_name: "Juan Dela Cruz".into(),
            gender: Gender::Male,
            age: 32,
            staff_id: "STAFF-002".into(),
            doctor: "Dr. Roberto Santos".into(),
            date: date(2025, 1, 5),
            time: "10:15 AM".into(),
            symptoms: "Wheezing, shortness of breath, chest tightness".into(),
            diagnosis: "Acute Asthma Exacerbation".into(),
            prescription: "Salbutamol inhaler, Prednisone 40mg".into(),
            notes: "Avoid triggers, use inhaler as needed".into(),
        },
        Consultation {
            id: 3,
            patient_id: "PAT-003".into(),
            patient_name: "Ana Reyes".into(),
            gender: Gender::Female,
            age: 28,
            staff_id: "STAFF-001".into(),
            doctor: "Dr. Maria Cruz".into(),
            date: date(2025, 1, 4),
            time: "02:00 PM".into(),
            symptoms: "Throbbing headache, visual aura, nausea".into(),
            diagnosis: "Migraine with Aura".into(),
            prescription: "Sumatriptan 50mg at onset".into(),
            notes: "Keep a trigger diary, return if attacks increase".into(),
        },
        Consultation {
            id: 4,
            patient_id: "PAT-004".into(),
            patient_name: "Pedro Garcia".into(),
            gender: Gender::Male,
            age: 55,
            staff_id: "STAFF-002".into(),
            doctor: "Dr. Roberto Santos".into(),
            date: date(2025, 1, 4),
            time: "11:30 AM".into(),
            symptoms: "Increased thirst, frequent urination, fatigue".into(),
            diagnosis: "Type 2 Diabetes Mellitus".into(),
            prescription: "Metformin 500mg twice daily".into(),
            notes: "Diet counselling, fasting glucose in 4 weeks".into(),
        },
        Consultation {
            id: 5,
            patient_id: "PAT-001".into(),
            patient_name: "Maria Santos".into(),
            gender: Gender::Female,
            age: 45,
            staff_id: "STAFF-001".into(),
            doctor: "Dr. Maria Cruz".into(),
            date: date(2024, 12, 28),
            time: "08:45 AM".into(),
            symptoms: "Routine follow-up, no new complaints".into(),
            diagnosis: "Follow-up: Hypertension Management".into(),
            prescription: "Continue Lisinopril 10mg".into(),
            notes: "Blood pressure improving, recheck in a month".into(),
        },
        Consultation {
            id: 6,
            patient_id: "PAT-005".into(),
            patient_name: "Rosa Martinez".into(),
            gender: Gender::Female,
            age: 38,
            staff_id: "STAFF-002".into(),
            doctor: "Dr. Roberto Santos".into(),
            date: date(2024, 12, 27),
            time: "03:15 PM".into(),
            symptoms: "Productive cough, low-grade fever".into(),
            diagnosis: "Acute Bronchitis".into(),
            prescription: "Supportive care, fluids, rest".into(),
            notes: "Return if fever persists beyond 3 days".into(),
        },
    ]
}
