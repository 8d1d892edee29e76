//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services. Reading process-wide environment variables during request
//! handling leads to inconsistent behaviour in multi-threaded runtimes and
//! test harnesses, so the binaries resolve everything up front and hand a
//! `CoreConfig` down.

use crate::{ClinicError, ClinicResult};

const MAX_CLINIC_NAME_LEN: usize = 120;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    clinic_name: String,
    seed_demo_data: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The clinic name must be non-empty after trimming and is bounded in
    /// length to keep it usable in banners and log lines.
    pub fn new(clinic_name: impl Into<String>, seed_demo_data: bool) -> ClinicResult<Self> {
        let clinic_name = clinic_name.into().trim().to_owned();
        if clinic_name.is_empty() {
            return Err(ClinicError::InvalidInput(
                "clinic name cannot be empty".into(),
            ));
        }
        if clinic_name.len() > MAX_CLINIC_NAME_LEN {
            return Err(ClinicError::InvalidInput(format!(
                "clinic name exceeds maximum length of {} characters",
                MAX_CLINIC_NAME_LEN
            )));
        }

        Ok(Self {
            clinic_name,
            seed_demo_data,
        })
    }

    pub fn clinic_name(&self) -> &str {
        &self.clinic_name
    }

    /// Whether services should start preloaded with the demo dataset.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_trimmed_name() {
        let config = CoreConfig::new("  Barangay Centro Clinic ", true).expect("valid config");
        assert_eq!(config.clinic_name(), "Barangay Centro Clinic");
        assert!(config.seed_demo_data());
    }

    #[test]
    fn rejects_empty_name() {
        let err = CoreConfig::new("   ", false).expect_err("should reject empty");
        assert!(matches!(err, ClinicError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn rejects_overlong_name() {
        let err = CoreConfig::new("x".repeat(121), false).expect_err("should reject long name");
        assert!(
            matches!(err, ClinicError::InvalidInput(msg) if msg.contains("exceeds maximum length"))
        );
    }
}
