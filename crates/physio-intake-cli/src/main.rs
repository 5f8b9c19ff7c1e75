//! Front-desk command line for the clinic intake records.
//!
//! A thin view layer over the persistence façade: it validates form
//! input, submits it, and re-renders the full list after every
//! successful write so the display always reflects the store that took
//! the write.

mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use physio_intake_core::{
    Endpoint, LocalStore, Notice, PatientInput, PersistenceFacade, RemoteGateway,
};

#[derive(Parser, Debug)]
#[command(name = "physio-intake")]
#[command(about = "Patient intake records for the clinic front desk")]
struct Cli {
    /// Backend web-app URL (falls back to the PHYSIO_INTAKE_URL env var)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path of the local record file
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List records, optionally filtered by a search query
    List {
        /// Substring matched against name, phone, address, notes and serial
        query: Option<String>,
    },
    /// Record a new patient enquiry
    Add {
        #[command(flatten)]
        fields: RecordFields,
    },
    /// Replace every field of an existing record
    Update {
        /// Serial number of the record to replace
        sno: u32,
        #[command(flatten)]
        fields: RecordFields,
    },
}

#[derive(clap::Args, Debug)]
struct RecordFields {
    /// Intake date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Patient name
    #[arg(long)]
    name: String,

    /// Gender
    #[arg(long)]
    gender: String,

    /// Contact phone
    #[arg(long)]
    phone: String,

    /// Home address
    #[arg(long)]
    address: String,

    /// How the patient heard about the clinic
    #[arg(long)]
    referral: Option<String>,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

impl RecordFields {
    fn into_input(self) -> PatientInput {
        PatientInput {
            date: self.date.unwrap_or_else(today),
            name: self.name,
            gender: self.gender,
            phone: self.phone,
            address: self.address,
            referral_source: self.referral,
            notes: self.notes,
        }
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let endpoint_setting = cli
        .endpoint
        .or_else(|| std::env::var("PHYSIO_INTAKE_URL").ok());
    let endpoint = Endpoint::from_setting(endpoint_setting.as_deref());

    let store_path = cli.store.unwrap_or_else(default_store_path);
    let facade = PersistenceFacade::new(RemoteGateway::new(endpoint), LocalStore::open(store_path));

    match cli.command {
        Command::List { query } => Ok(list(&facade, query.as_deref())),
        Command::Add { fields } => Ok(add(&facade, fields.into_input())),
        Command::Update { sno, fields } => Ok(update(&facade, sno, fields.into_input())),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("physio-intake")
        .join("patients.json")
}

fn list(facade: &PersistenceFacade, query: Option<&str>) -> ExitCode {
    let outcome = facade.fetch_all();
    if let Some(notice) = outcome.notice() {
        println!("{notice}");
    }

    let records = match query {
        Some(query) => view::filter_records(&outcome.records, query),
        None => outcome.records,
    };
    print!("{}", view::render_table(&records));
    ExitCode::SUCCESS
}

fn add(facade: &PersistenceFacade, input: PatientInput) -> ExitCode {
    let input = match input.validate() {
        Ok(input) => input,
        Err(err) => {
            debug!(error = %err, "rejected form input");
            println!("{}", Notice::required_fields());
            return ExitCode::FAILURE;
        }
    };

    let outcome = facade.add(&input);
    println!("{}", outcome.notice());
    if !outcome.success {
        return ExitCode::FAILURE;
    }
    if let Some(sno) = outcome.sno {
        println!("Assigned serial: {sno}");
    }

    refresh(facade);
    ExitCode::SUCCESS
}

fn update(facade: &PersistenceFacade, sno: u32, input: PatientInput) -> ExitCode {
    let input = match input.validate() {
        Ok(input) => input,
        Err(err) => {
            debug!(error = %err, "rejected form input");
            println!("{}", Notice::required_fields());
            return ExitCode::FAILURE;
        }
    };

    let outcome = facade.update(sno, &input);
    println!("{}", outcome.notice());
    if !outcome.success {
        return ExitCode::FAILURE;
    }

    refresh(facade);
    ExitCode::SUCCESS
}

/// Re-fetch and render the full list after a write.
fn refresh(facade: &PersistenceFacade) {
    let outcome = facade.fetch_all();
    if let Some(notice) = outcome.notice() {
        println!("{notice}");
    }
    print!("{}", view::render_table(&outcome.records));
}
