//! Booking form command-line client.
//!
//! Provides the `bookform` binary with subcommands for working with a
//! running submission server: `form` prints the staged form definition,
//! `submit` drives a full controller session from flags, and `list`
//! fetches the stored submissions.
//!
//! Uses the same `FormController` as any UI frontend would, ensuring
//! identical validation and submission behavior from the command line.

use std::process;

use clap::{Parser, Subcommand};

use bookform_client::{api, FormController};
use bookform_core::input::{booking_stages, FieldSpec, InputKind};
use bookform_core::locale::translate;
use bookform_core::{FieldId, FieldValue, Locale};

/// Booking form tools.
#[derive(Parser)]
#[command(name = "bookform", about = "Booking form tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the staged form definition.
    Form {
        /// Language tag for labels (en or de).
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Validate and submit a booking.
    Submit {
        /// Submission server base URL.
        #[arg(long, default_value = "http://localhost:3000")]
        endpoint: String,

        /// Language tag for validation messages (en or de).
        #[arg(long, default_value = "en")]
        locale: String,

        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Travel purpose: personal, business, tmc or agent.
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long)]
        package: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        school_trip: bool,
        #[arg(long)]
        accessible_room: bool,
        #[arg(long)]
        with_children: bool,
        /// Number of single rooms.
        #[arg(long, default_value_t = 0)]
        single_rooms: u32,
        /// Number of double rooms.
        #[arg(long, default_value_t = 0)]
        double_rooms: u32,
        /// Arrival date (YYYY-MM-DD).
        #[arg(long)]
        arrive: Option<String>,
        /// Departure date (YYYY-MM-DD).
        #[arg(long)]
        depart: Option<String>,
    },

    /// List stored submissions.
    List {
        /// Submission server base URL.
        #[arg(long, default_value = "http://localhost:3000")]
        endpoint: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Form { locale } => print_form(Locale::from_tag(&locale)),
        Commands::Submit {
            endpoint,
            locale,
            title,
            first_name,
            last_name,
            email,
            phone,
            purpose,
            package,
            notes,
            school_trip,
            accessible_room,
            with_children,
            single_rooms,
            double_rooms,
            arrive,
            depart,
        } => {
            let locale = Locale::from_tag(&locale);
            let mut form = match FormController::new(&endpoint, locale) {
                Ok(form) => form,
                Err(err) => {
                    eprintln!("error: {}", err);
                    process::exit(1);
                }
            };

            let text_fields = [
                (FieldId::Title, title),
                (FieldId::FirstName, first_name),
                (FieldId::LastName, last_name),
                (FieldId::Email, email),
                (FieldId::PhoneNumber, phone),
                (FieldId::TravelPurpose, purpose),
                (FieldId::PackageChoice, package),
                (FieldId::Notes, notes),
            ];
            for (field, value) in text_fields {
                if let Some(value) = value {
                    form.update_field(field, FieldValue::Text(value));
                }
            }
            form.update_field(FieldId::SchoolTrip, FieldValue::Flag(school_trip));
            form.update_field(FieldId::AccessibleRoom, FieldValue::Flag(accessible_room));
            form.update_field(FieldId::TravellingWithChildren, FieldValue::Flag(with_children));
            form.update_field(FieldId::SingleOccupancy, FieldValue::Count(single_rooms));
            form.update_field(FieldId::DoubleOccupancy, FieldValue::Count(double_rooms));
            if arrive.is_some() || depart.is_some() {
                form.update_field(
                    FieldId::TravelDates,
                    FieldValue::DateRange {
                        start: arrive.unwrap_or_default(),
                        end: depart.unwrap_or_default(),
                    },
                );
            }

            form.submit().await;

            let state = form.state();
            if state.is_submitted {
                println!("Booking submitted.");
            } else {
                eprintln!("Booking not submitted:");
                for (field, message) in &state.errors {
                    eprintln!("  {}: {}", field, message);
                }
                process::exit(1);
            }
        }
        Commands::List { endpoint } => match api::fetch_submissions(&endpoint).await {
            Ok(submissions) => {
                println!("{}", serde_json::to_string_pretty(&submissions).unwrap());
            }
            Err(err) => {
                eprintln!("error: {}", err);
                process::exit(1);
            }
        },
    }
}

/// Prints every stage and field of the form, dispatching on the input
/// kind in one place.
fn print_form(locale: Locale) {
    for (index, stage) in booking_stages().iter().enumerate() {
        println!("{}. {}", index + 1, translate(locale, stage.title_key));
        for spec in stage.fields {
            println!("   {}", describe_field(locale, spec));
        }
    }
}

fn describe_field(locale: Locale, spec: &FieldSpec) -> String {
    let label = translate(locale, spec.label_key);
    let marker = if spec.required { " *" } else { "" };
    let detail = match spec.kind {
        InputKind::Text => "text".to_string(),
        InputKind::Phone { country_code } => format!("phone ({})", country_code),
        InputKind::ImageText { icon } => format!("text [{}]", icon),
        InputKind::DateRange => "date range (YYYY-MM-DD .. YYYY-MM-DD)".to_string(),
        InputKind::Select { options } | InputKind::Radio { options } => {
            let values: Vec<&str> = options.iter().map(|option| option.value).collect();
            format!("one of: {}", values.join(", "))
        }
        InputKind::Counter { min, max, description_key } => {
            format!("{} ({}..={})", translate(locale, description_key), min, max)
        }
        InputKind::Checkbox => "yes/no".to_string(),
    };
    format!("{}{} -- {}", label, marker, detail)
}
