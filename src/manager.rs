//! Appointment management for the clinic desk registry.
//!
//! This module provides the AppointmentManager struct which owns the
//! ordered appointment book and supports adding, listing, and cancelling
//! appointments by patient mobile number.

use crate::models::Appointment;
use std::fmt;

/// Outcome of a cancellation attempt.
///
/// A lookup miss is an ordinary outcome, not an error; `success` is false
/// and the collection is left untouched.
#[derive(Debug, Clone)]
pub struct CancelResult {
    pub cancelled: Option<Appointment>,
    pub success: bool,
    pub message: String,
}

/// Ordered book of appointments.
///
/// Insertion order is preserved and duplicate mobile numbers are
/// permitted; cancellation acts on the earliest-inserted match only.
pub struct AppointmentManager {
    appointments: Vec<Appointment>,
}

impl AppointmentManager {
    /// Initialize an empty appointment book.
    pub fn new() -> Self {
        AppointmentManager {
            appointments: Vec::new(),
        }
    }

    /// Append an appointment to the book. Always succeeds; returns the
    /// confirmation notice naming the patient.
    pub fn add_appointment(&mut self, appointment: Appointment) -> String {
        let message = format!("Appointment added for {}", appointment.patient_name());
        self.appointments.push(appointment);
        message
    }

    /// Render the book as display lines, in insertion order.
    ///
    /// An empty book yields a single notice line. Re-invoking without
    /// intervening mutation yields identical output.
    pub fn list_appointments(&self) -> Vec<String> {
        if self.appointments.is_empty() {
            return vec!["No existing appointments.".to_string()];
        }
        self.appointments
            .iter()
            .flat_map(|appointment| appointment.detail_lines())
            .collect()
    }

    /// Cancel the first appointment whose mobile matches exactly.
    ///
    /// Scans from the front and stops at the first match, so a later
    /// appointment sharing the same mobile survives a single call.
    pub fn cancel_appointment(&mut self, mobile: &str) -> CancelResult {
        match self
            .appointments
            .iter()
            .position(|appointment| appointment.mobile() == mobile)
        {
            Some(index) => {
                let cancelled = self.appointments.remove(index);
                CancelResult {
                    cancelled: Some(cancelled),
                    success: true,
                    message: format!("Appointment canceled for mobile: {}", mobile),
                }
            }
            None => CancelResult {
                cancelled: None,
                success: false,
                message: format!("No appointment found for mobile: {}", mobile),
            },
        }
    }

    /// All appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Appointments with element-level mutable access, for in-place
    /// edits such as renaming a patient.
    pub fn appointments_mut(&mut self) -> &mut [Appointment] {
        &mut self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl Default for AppointmentManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AppointmentManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AppointmentManager(appointments={})",
            self.appointments.len()
        )
    }
}
