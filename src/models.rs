//! Data models for the clinic desk registry.
//!
//! This module defines the core data structures used throughout the system:
//! - ProfessionalRole: Variant payload distinguishing GPs from specialists
//! - HealthProfessional: Identity and display data for a caregiver
//! - Appointment: A booked time slot linking a patient to a professional

use chrono::{DateTime, Local};
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Separator line emitted after each printed record.
pub const RECORD_SEPARATOR: &str = "------------------------------";

/// Role payload used when the caller does not name a GP type.
pub const DEFAULT_GP_TYPE: &str = "General";

/// Role payload used when the caller does not name a specialty.
pub const DEFAULT_SPECIALTY: &str = "Unknown Specialty";

/// Error returned when a role label cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid role: '{0}'. Must be one of: general practitioner, specialist")]
pub struct RoleParseError(String);

/// Variant-specific data for a health professional.
///
/// Each variant carries the one field the base identity triad does not
/// cover. The extension line it contributes is always rendered after the
/// base fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessionalRole {
    GeneralPractitioner { gp_type: String },
    Specialist { specialty: String },
}

impl ProfessionalRole {
    /// Fixed label for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            ProfessionalRole::GeneralPractitioner { .. } => "General Practitioner",
            ProfessionalRole::Specialist { .. } => "Specialist",
        }
    }

    /// The variant line appended after the identity line.
    fn extension_line(&self) -> String {
        match self {
            ProfessionalRole::GeneralPractitioner { gp_type } => format!("Type: {}", gp_type),
            ProfessionalRole::Specialist { specialty } => format!("Specialty: {}", specialty),
        }
    }
}

impl FromStr for ProfessionalRole {
    type Err = RoleParseError;

    /// Parse a role label, with default variant payload.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().trim() {
            "general practitioner" | "gp" => Ok(ProfessionalRole::GeneralPractitioner {
                gp_type: DEFAULT_GP_TYPE.to_string(),
            }),
            "specialist" => Ok(ProfessionalRole::Specialist {
                specialty: DEFAULT_SPECIALTY.to_string(),
            }),
            _ => Err(RoleParseError(value.to_string())),
        }
    }
}

/// A caregiver in the registry.
///
/// All fields are fixed at construction. The `id` is caller-assigned and
/// assumed unique within a run; it is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProfessional {
    id: u32,
    name: String,
    specialization: String,
    role: ProfessionalRole,
}

impl HealthProfessional {
    /// Create a general practitioner. A missing GP type falls back to
    /// "General".
    pub fn general_practitioner(
        id: u32,
        name: String,
        specialization: String,
        gp_type: Option<String>,
    ) -> Self {
        HealthProfessional {
            id,
            name,
            specialization,
            role: ProfessionalRole::GeneralPractitioner {
                gp_type: gp_type.unwrap_or_else(|| DEFAULT_GP_TYPE.to_string()),
            },
        }
    }

    /// Create a specialist. A missing specialty falls back to
    /// "Unknown Specialty".
    pub fn specialist(
        id: u32,
        name: String,
        specialization: String,
        specialty: Option<String>,
    ) -> Self {
        HealthProfessional {
            id,
            name,
            specialization,
            role: ProfessionalRole::Specialist {
                specialty: specialty.unwrap_or_else(|| DEFAULT_SPECIALTY.to_string()),
            },
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Fixed label for the professional's variant.
    pub fn describe_type(&self) -> &'static str {
        self.role.label()
    }

    /// Render the professional as display lines.
    ///
    /// The identity line always comes first, the variant extension line
    /// second, regardless of variant.
    pub fn detail_lines(&self) -> Vec<String> {
        vec![
            format!(
                "ID: {}, Name: {}, Specialization: {}",
                self.id, self.name, self.specialization
            ),
            self.role.extension_line(),
        ]
    }
}

/// A booked appointment.
///
/// Holds a non-owning reference to the professional it is booked with;
/// the professional is never mutated through it. The mobile number is the
/// lookup key for cancellation and is fixed at construction.
#[derive(Debug, Clone)]
pub struct Appointment {
    appointment_id: String,
    patient_name: String,
    mobile: String,
    time_slot: String,
    professional: Rc<HealthProfessional>,
    created_at: DateTime<Local>,
}

impl Appointment {
    /// Create a new appointment for a patient with a professional.
    pub fn new(
        patient_name: String,
        mobile: String,
        time_slot: String,
        professional: Rc<HealthProfessional>,
    ) -> Self {
        Appointment {
            appointment_id: Uuid::new_v4().to_string(),
            patient_name,
            mobile,
            time_slot,
            professional,
            created_at: Local::now(),
        }
    }

    /// Render the appointment as display lines.
    ///
    /// Order: patient name, mobile, time slot, then the professional's
    /// own detail lines, then a separator.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Patient Name: {}", self.patient_name),
            format!("Mobile: {}", self.mobile),
            format!("Time Slot: {}", self.time_slot),
        ];
        lines.extend(self.professional.detail_lines());
        lines.push(RECORD_SEPARATOR.to_string());
        lines
    }

    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    /// Rename the patient. The one mutation the model allows.
    pub fn set_patient_name(&mut self, patient_name: String) {
        self.patient_name = patient_name;
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    pub fn professional(&self) -> &HealthProfessional {
        &self.professional
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn sample_gp() -> HealthProfessional {
        HealthProfessional::general_practitioner(
            1,
            "Dr. John".to_string(),
            "General Medicine".to_string(),
            Some("Primary Care".to_string()),
        )
    }

    fn sample_specialist() -> HealthProfessional {
        HealthProfessional::specialist(
            3,
            "Dr. Brown".to_string(),
            "Cardiology".to_string(),
            Some("Cardiologist".to_string()),
        )
    }

    #[test]
    fn gp_renders_base_fields_then_type_line() {
        let gp = sample_gp();
        assert_eq!(gp.describe_type(), "General Practitioner");
        assert_eq!(
            gp.detail_lines(),
            vec![
                "ID: 1, Name: Dr. John, Specialization: General Medicine".to_string(),
                "Type: Primary Care".to_string(),
            ]
        );
    }

    #[test]
    fn specialist_renders_base_fields_then_specialty_line() {
        let specialist = sample_specialist();
        assert_eq!(specialist.describe_type(), "Specialist");
        assert_eq!(
            specialist.detail_lines(),
            vec![
                "ID: 3, Name: Dr. Brown, Specialization: Cardiology".to_string(),
                "Specialty: Cardiologist".to_string(),
            ]
        );
    }

    #[test]
    fn gp_type_defaults_to_general() {
        let gp = HealthProfessional::general_practitioner(
            2,
            "Dr. Smith".to_string(),
            "Family Medicine".to_string(),
            None,
        );
        assert_eq!(gp.detail_lines()[1], "Type: General");
    }

    #[test]
    fn specialty_defaults_to_unknown() {
        let specialist = HealthProfessional::specialist(
            4,
            "Dr. Green".to_string(),
            "Dermatology".to_string(),
            None,
        );
        assert_eq!(specialist.detail_lines()[1], "Specialty: Unknown Specialty");
    }

    #[test]
    fn role_parses_from_menu_labels() {
        assert_eq!(
            " General Practitioner ".parse::<ProfessionalRole>(),
            Ok(ProfessionalRole::GeneralPractitioner {
                gp_type: DEFAULT_GP_TYPE.to_string(),
            })
        );
        assert_eq!(
            "gp".parse::<ProfessionalRole>(),
            Ok(ProfessionalRole::GeneralPractitioner {
                gp_type: DEFAULT_GP_TYPE.to_string(),
            })
        );
        assert_eq!(
            "Specialist".parse::<ProfessionalRole>(),
            Ok(ProfessionalRole::Specialist {
                specialty: DEFAULT_SPECIALTY.to_string(),
            })
        );
    }

    #[test]
    fn role_rejects_unknown_label() {
        let err = "wizard".parse::<ProfessionalRole>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid role: 'wizard'. Must be one of: general practitioner, specialist"
        );
    }

    #[test]
    fn appointment_renders_patient_fields_then_delegates_to_professional() {
        let appointment = Appointment::new(
            "Alice".to_string(),
            "1234567890".to_string(),
            "10:00".to_string(),
            Rc::new(sample_gp()),
        );
        assert_eq!(
            appointment.detail_lines(),
            vec![
                "Patient Name: Alice".to_string(),
                "Mobile: 1234567890".to_string(),
                "Time Slot: 10:00".to_string(),
                "ID: 1, Name: Dr. John, Specialization: General Medicine".to_string(),
                "Type: Primary Care".to_string(),
                RECORD_SEPARATOR.to_string(),
            ]
        );
    }

    #[test]
    fn set_patient_name_renames() {
        let mut appointment = Appointment::new(
            "Alice".to_string(),
            "1234567890".to_string(),
            "10:00".to_string(),
            Rc::new(sample_gp()),
        );
        appointment.set_patient_name("Alicia".to_string());
        assert_eq!(appointment.patient_name(), "Alicia");
        assert_eq!(appointment.detail_lines()[0], "Patient Name: Alicia");
    }

    #[test]
    fn appointments_get_distinct_ids() {
        let professional = Rc::new(sample_gp());
        let first = Appointment::new(
            "Alice".to_string(),
            "1234567890".to_string(),
            "10:00".to_string(),
            Rc::clone(&professional),
        );
        let second = Appointment::new(
            "Bob".to_string(),
            "0987654321".to_string(),
            "14:00".to_string(),
            Rc::clone(&professional),
        );
        assert_ne!(first.appointment_id(), second.appointment_id());
        assert!(first.created_at() <= Local::now());
    }
}
