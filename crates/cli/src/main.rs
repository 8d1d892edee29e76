use clap::{Parser, Subcommand};
use clinidesk_core::services::JoinRequest;
use clinidesk_core::{
    Consultation, Criteria, ConsultationService, FrontDesk, Patient, QueueEntry, Stat, StaffMember,
    ViewConfig,
};

#[derive(Parser)]
#[command(name = "clinidesk")]
#[command(about = "Clinidesk front-desk CLI over the demo dataset")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients
    Patients {
        /// Search term (all-digit terms match patient ids)
        #[arg(long)]
        search: Option<String>,
        /// Gender filter ("all" for no constraint)
        #[arg(long)]
        gender: Option<String>,
    },
    /// List medical staff
    Staff {
        #[arg(long)]
        search: Option<String>,
        /// Role filter ("all" for no constraint)
        #[arg(long)]
        role: Option<String>,
        /// Availability filter ("all" for no constraint)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show today's queue
    Queue {
        #[arg(long)]
        search: Option<String>,
        /// Status filter ("all" for no constraint)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show the visit history
    History {
        #[arg(long)]
        search: Option<String>,
        /// Doctor filter ("all" for no constraint)
        #[arg(long)]
        doctor: Option<String>,
        /// Exact date filter (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Join the queue as a walk-in patient
    Join {
        /// Patient name (letters and spaces)
        name: String,
        /// Patient age
        age: u32,
        /// Patient gender
        gender: String,
        /// Contact number (digits only)
        contact: String,
        /// Home address
        #[arg(long, default_value = "")]
        address: String,
        /// Triage priority (high, medium, low)
        #[arg(long)]
        priority: Option<String>,
    },
    /// Show the consultation quick templates
    Templates,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let desk = FrontDesk::with_demo_data();

    match cli.command {
        Some(Commands::Patients { search, gender }) => {
            let criteria = criteria_for(
                Patient::view_config(),
                search,
                vec![("gender", gender)],
            )?;
            let view = desk.patients.view(&criteria)?;
            print_stats(&view.stats);
            for patient in &view.records {
                println!(
                    "{}  {:<20} {:<6} {:>3}  {}  last visit: {}",
                    patient.id,
                    patient.name,
                    patient.gender,
                    patient.age,
                    patient.contact,
                    patient.last_visit
                );
            }
        }
        Some(Commands::Staff {
            search,
            role,
            status,
        }) => {
            let criteria = criteria_for(
                StaffMember::view_config(),
                search,
                vec![("role", role), ("status", status)],
            )?;
            let view = desk.staff.view(&criteria)?;
            if let Some(error) = desk.staff.load_error()? {
                println!("! {error}");
            }
            print_stats(&view.stats);
            for member in &view.records {
                println!(
                    "{}  {:<22} {:<14} {:<18} {}",
                    member.id, member.name, member.role, member.specialty, member.availability
                );
            }
        }
        Some(Commands::Queue { search, status }) => {
            let criteria = criteria_for(
                QueueEntry::view_config(),
                search,
                vec![("status", status)],
            )?;
            let view = desk.queue.view(&criteria)?;
            print_stats(&view.stats);
            for entry in &view.records {
                println!(
                    "{}  [{}] {:<20} {:<12} arrived {}  {}",
                    entry.queue_number,
                    entry.initials,
                    entry.name,
                    entry.status,
                    entry.arrival_time,
                    entry.assigned_to
                );
            }
        }
        Some(Commands::History {
            search,
            doctor,
            date,
        }) => {
            let criteria = criteria_for(
                Consultation::view_config(),
                search,
                vec![("doctor", doctor), ("date", date)],
            )?;
            let view = desk.consultations.history(&criteria)?;
            print_stats(&view.stats);
            for note in &view.records {
                println!(
                    "{}  {} {:<8} {:<20} {:<22} {}",
                    note.code(),
                    note.date,
                    note.time,
                    note.patient_name,
                    note.doctor,
                    note.diagnosis
                );
            }
        }
        Some(Commands::Join {
            name,
            age,
            gender,
            contact,
            address,
            priority,
        }) => {
            let request = JoinRequest {
                name,
                gender: gender.parse()?,
                age,
                contact,
                address,
                priority: priority.as_deref().map(str::parse).transpose()?,
            };
            let ticket = desk.queue.join(&desk.patients, request)?;
            println!(
                "Queued {} as {} ({}), estimated wait {}",
                ticket.patient.name, ticket.entry.queue_number, ticket.entry.status,
                ticket.estimated_wait
            );
        }
        Some(Commands::Templates) => {
            for template in ConsultationService::quick_templates() {
                println!("{}. {}", template.id, template.name);
                println!("   symptoms:     {}", template.symptoms);
                println!("   diagnosis:    {}", template.diagnosis);
                println!("   prescription: {}", template.prescription);
                println!("   remarks:      {}", template.remarks);
            }
        }
        None => {
            println!("clinidesk: no command given, try --help");
        }
    }

    Ok(())
}

fn criteria_for(
    config: &ViewConfig,
    search: Option<String>,
    filters: Vec<(&'static str, Option<String>)>,
) -> anyhow::Result<Criteria> {
    let mut criteria = Criteria::for_view(config);
    if let Some(term) = search {
        criteria.set_search_term(term);
    }
    for (key, value) in filters {
        if let Some(value) = value {
            criteria.set_filter(key, value)?;
        }
    }
    Ok(criteria)
}

fn print_stats(stats: &[Stat]) {
    for stat in stats {
        if stat.detail.is_empty() {
            println!("{}: {}", stat.title, stat.value);
        } else {
            println!("{}: {} ({})", stat.title, stat.value, stat.detail);
        }
    }
    println!();
}
