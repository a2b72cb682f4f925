//! Command-line interface for the clinic desk registry.
//!
//! This module provides an interactive CLI for registering health
//! professionals, booking patient appointments, and cancelling them by
//! mobile number. All registry output is produced by the core as text and
//! written to the console here.

mod manager;
mod models;

use manager::AppointmentManager;
use models::{
    Appointment, HealthProfessional, ProfessionalRole, DEFAULT_GP_TYPE, DEFAULT_SPECIALTY,
    RECORD_SEPARATOR,
};
use std::io::{self, Write};
use std::rc::Rc;

struct ClinicCli {
    professionals: Vec<Rc<HealthProfessional>>,
    manager: AppointmentManager,
    running: bool,
}

impl ClinicCli {
    fn new() -> Self {
        ClinicCli {
            professionals: Vec::new(),
            manager: AppointmentManager::new(),
            running: true,
        }
    }

    fn print_header(&self) {
        println!("\n{}", "=".repeat(60));
        println!("       CLINIC DESK APPOINTMENT REGISTRY");
        println!("{}", "=".repeat(60));
    }

    fn print_menu(&self) {
        println!("\n--- Main Menu ---");
        println!("1. Register health professional");
        println!("2. View health professionals");
        println!("3. Book appointment");
        println!("4. View appointments");
        println!("5. Update patient name");
        println!("6. Cancel appointment");
        println!("7. Run demo");
        println!("8. Exit");
        println!("{}", "-".repeat(20));
    }

    fn get_input(&self, prompt: &str, default: Option<&str>) -> String {
        if let Some(def) = default {
            print!("{} [{}]: ", prompt, def);
        } else {
            print!("{}: ", prompt);
        }
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).unwrap();
        let input = input.trim();

        if input.is_empty() {
            default.unwrap_or("").to_string()
        } else {
            input.to_string()
        }
    }

    fn get_int_input(&self, prompt: &str, default: Option<i32>) -> i32 {
        loop {
            let default_str = default.map(|d| d.to_string());
            let input = self.get_input(prompt, default_str.as_deref());

            if let Ok(value) = input.parse::<i32>() {
                return value;
            }
            println!("Please enter a valid number");
        }
    }

    fn register_professional(&mut self) {
        println!("\n--- Register Health Professional ---");

        let next_id = self.professionals.len() as i32 + 1;
        let id = self.get_int_input("Professional ID", Some(next_id)) as u32;
        let name = self.get_input("Name", Some("Dr. Smith"));
        let specialization = self.get_input("Specialization", Some("General Medicine"));

        let role = loop {
            let input = self.get_input(
                "Role (general practitioner/specialist)",
                Some("general practitioner"),
            );
            match input.parse::<ProfessionalRole>() {
                Ok(role) => break role,
                Err(e) => println!("{}", e),
            }
        };

        let professional = match role {
            ProfessionalRole::GeneralPractitioner { .. } => {
                let gp_type = self.get_input("GP type", Some(DEFAULT_GP_TYPE));
                HealthProfessional::general_practitioner(id, name, specialization, Some(gp_type))
            }
            ProfessionalRole::Specialist { .. } => {
                let specialty = self.get_input("Specialty", Some(DEFAULT_SPECIALTY));
                HealthProfessional::specialist(id, name, specialization, Some(specialty))
            }
        };

        println!("\nRegistered {}:", professional.describe_type());
        for line in professional.detail_lines() {
            println!("{}", line);
        }
        self.professionals.push(Rc::new(professional));
    }

    fn view_professionals(&self) {
        if self.professionals.is_empty() {
            println!("\nPlease register a health professional first (option 1)");
            return;
        }

        println!("\nHealth Professionals:");
        for (i, professional) in self.professionals.iter().enumerate() {
            println!("{}", professional.describe_type());
            for line in professional.detail_lines() {
                println!("{}", line);
            }
            if i + 1 < self.professionals.len() {
                println!("{}", RECORD_SEPARATOR);
            }
        }
    }

    fn select_professional(&self) -> Option<Rc<HealthProfessional>> {
        println!("\nAvailable professionals:");
        for (i, professional) in self.professionals.iter().enumerate() {
            println!(
                "  {}. #{} {} - {} ({})",
                i + 1,
                professional.id(),
                professional.name(),
                professional.specialization(),
                professional.describe_type()
            );
        }

        let choice = self.get_int_input("Select professional (0 to go back)", Some(0));
        if choice <= 0 || choice as usize > self.professionals.len() {
            return None;
        }
        Some(Rc::clone(&self.professionals[choice as usize - 1]))
    }

    fn book_appointment(&mut self) {
        if self.professionals.is_empty() {
            println!("\nPlease register a health professional first (option 1)");
            return;
        }

        println!("\n--- Book Appointment ---");

        let professional = match self.select_professional() {
            Some(professional) => professional,
            None => return,
        };

        let patient_name = self.get_input("Patient name", None);
        let mobile = self.get_input("Patient mobile", None);
        let time_slot = self.get_input("Time slot", Some("10:00"));

        let appointment = Appointment::new(patient_name, mobile, time_slot, professional);
        let reference = appointment.appointment_id()[..8].to_string();
        let booked_at = appointment.created_at();

        println!("\n{}", self.manager.add_appointment(appointment));
        println!("Booking reference: {}", reference);
        println!("Booked at: {}", booked_at.format("%Y-%m-%d %H:%M"));
    }

    fn view_appointments(&self) {
        println!("\nExisting appointments:");
        for line in self.manager.list_appointments() {
            println!("{}", line);
        }
        println!("{}", self.manager);
    }

    fn select_appointment_index(&self) -> Option<usize> {
        println!("\nCurrent appointments:");
        for (i, appointment) in self.manager.appointments().iter().enumerate() {
            println!(
                "  {}. {} - {} ({}) with {}",
                i + 1,
                appointment.patient_name(),
                appointment.mobile(),
                appointment.time_slot(),
                appointment.professional().name()
            );
        }

        let choice = self.get_int_input("Select appointment (0 to go back)", Some(0));
        if choice <= 0 || choice as usize > self.manager.len() {
            return None;
        }
        Some(choice as usize - 1)
    }

    fn update_patient_name(&mut self) {
        if self.manager.is_empty() {
            println!("\nNo appointments to update");
            return;
        }

        println!("\n--- Update Patient Name ---");

        let index = match self.select_appointment_index() {
            Some(index) => index,
            None => return,
        };

        let new_name = self.get_input("New patient name", None);
        self.manager.appointments_mut()[index].set_patient_name(new_name.clone());
        println!("\nPatient name updated to {}", new_name);
    }

    fn cancel_appointment(&mut self) {
        if self.manager.is_empty() {
            println!("\nNo appointments to cancel");
            return;
        }

        println!("\n--- Cancel Appointment ---");
        println!("\nCurrent appointments:");
        for appointment in self.manager.appointments() {
            println!(
                "  {} - {} ({}) with {}",
                appointment.patient_name(),
                appointment.mobile(),
                appointment.time_slot(),
                appointment.professional().name()
            );
        }

        let mobile = self.get_input("Mobile of appointment to cancel", None);
        let result = self.manager.cancel_appointment(&mobile);

        println!("\n{}", result.message);
        if result.success {
            if let Some(cancelled) = &result.cancelled {
                println!("Time slot {} is free again", cancelled.time_slot());
            }
            println!("{} appointment(s) remaining", self.manager.len());
        }
    }

    fn run_demo(&mut self) {
        println!("\n--- Running Demo ---");

        let professionals = vec![
            Rc::new(HealthProfessional::general_practitioner(
                1,
                "Dr. John".to_string(),
                "General Medicine".to_string(),
                Some("Primary Care".to_string()),
            )),
            Rc::new(HealthProfessional::general_practitioner(
                2,
                "Dr. Smith".to_string(),
                "Family Medicine".to_string(),
                Some("Primary Care".to_string()),
            )),
            Rc::new(HealthProfessional::specialist(
                3,
                "Dr. Brown".to_string(),
                "Cardiology".to_string(),
                Some("Cardiologist".to_string()),
            )),
            Rc::new(HealthProfessional::specialist(
                4,
                "Dr. Green".to_string(),
                "Dermatology".to_string(),
                Some("Dermatologist".to_string()),
            )),
        ];

        println!("Health Professionals:");
        for (i, professional) in professionals.iter().enumerate() {
            println!("{}", professional.describe_type());
            for line in professional.detail_lines() {
                println!("{}", line);
            }
            if i + 1 < professionals.len() {
                println!("{}", RECORD_SEPARATOR);
            }
        }

        let mut manager = AppointmentManager::new();

        let bookings = [
            ("Alice", "1234567890", "10:00", &professionals[0]),
            ("Bob", "0987654321", "14:00", &professionals[2]),
            ("Charlie", "1122334455", "09:00", &professionals[1]),
            ("Diana", "5566778899", "11:30", &professionals[3]),
        ];
        for (patient, mobile, time_slot, professional) in bookings {
            let appointment = Appointment::new(
                patient.to_string(),
                mobile.to_string(),
                time_slot.to_string(),
                Rc::clone(professional),
            );
            println!("{}", manager.add_appointment(appointment));
        }

        println!("\nExisting appointments:");
        for line in manager.list_appointments() {
            println!("{}", line);
        }

        let result = manager.cancel_appointment("1234567890");
        println!("{}", result.message);

        println!("\nUpdated appointments:");
        for line in manager.list_appointments() {
            println!("{}", line);
        }

        // Keep the demo data for the interactive options
        self.professionals = professionals;
        self.manager = manager;
    }

    fn run(&mut self) {
        self.print_header();

        while self.running {
            self.print_menu();

            let choice = self.get_int_input("Enter choice", Some(7));

            match choice {
                1 => self.register_professional(),
                2 => self.view_professionals(),
                3 => self.book_appointment(),
                4 => self.view_appointments(),
                5 => self.update_patient_name(),
                6 => self.cancel_appointment(),
                7 => self.run_demo(),
                8 => {
                    self.running = false;
                    println!("\nGoodbye!");
                }
                _ => println!("Invalid choice"),
            }
        }
    }
}

fn main() {
    let mut cli = ClinicCli::new();
    cli.run();
}
