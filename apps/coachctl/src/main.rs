use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_api::{
    attendance_report, batch_rows, dashboard_stats, finance_summary, invoice_document,
    list_students, list_teachers, performance_report, schedule_for_date, AttendanceQuery,
    StudentQuery,
};
use serde::Serialize;
use shared::error::ApiException;
use store::{Snapshot, Store};
use tracing::info;

mod config;
mod replay;

use config::{load_settings, Settings};
use replay::replay_commands;

#[derive(Parser, Debug)]
#[command(name = "coachctl", about = "Inspect and drive the coaching-center dashboard store")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Start from an empty store instead of the sample records.
    #[arg(long, global = true)]
    no_seed: bool,
    /// Start from a JSON snapshot file; repeated ids are dropped.
    #[arg(long, global = true, conflicts_with = "no_seed")]
    seed_file: Option<PathBuf>,
    /// JSON-lines file of commands applied before the subcommand runs.
    #[arg(long, global = true)]
    commands: Option<PathBuf>,
    #[command(subcommand)]
    command: View,
}

#[derive(Subcommand, Debug)]
enum View {
    Snapshot,
    Students {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        batch: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Teachers {
        #[arg(long, default_value = "")]
        search: String,
    },
    Batches,
    Schedule {
        #[arg(long)]
        date: String,
    },
    Attendance {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        student: Option<String>,
    },
    Performance {
        #[arg(long)]
        student: Option<String>,
    },
    Finance,
    Invoice {
        id: String,
    },
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    info!(?settings, "settings loaded");

    let mut store = Store::new(initial_snapshot(&cli, &settings)?);

    if let Some(path) = &cli.commands {
        let file = File::open(path)
            .with_context(|| format!("failed to open commands file {}", path.display()))?;
        let summary = replay_commands(&mut store, BufReader::new(file))?;
        info!(
            applied = summary.applied,
            not_found = summary.not_found,
            "commands replayed"
        );
    }

    let snapshot = store.snapshot();
    match cli.command {
        View::Snapshot => print_json(&*snapshot),
        View::Students {
            search,
            batch,
            page,
        } => print_json(&list_students(
            &snapshot,
            &StudentQuery {
                search,
                batch,
                page,
                page_size: settings.page_size,
            },
        )),
        View::Teachers { search } => print_json(&list_teachers(&snapshot, &search)),
        View::Batches => print_json(&batch_rows(&snapshot)),
        View::Schedule { date } => print_json(&schedule_for_date(&snapshot, &date)),
        View::Attendance { date, student } => print_json(&attendance_report(
            &snapshot,
            &AttendanceQuery {
                date,
                student_id: student,
            },
        )),
        View::Performance { student } => {
            print_json(&performance_report(&snapshot, student.as_deref()))
        }
        View::Finance => print_json(&finance_summary(&snapshot)),
        View::Invoice { id } => {
            let document = invoice_document(&snapshot, &id).map_err(ApiException::from)?;
            info!(file = %document.file_name(), "invoice exported");
            print!("{}", document.to_csv());
            Ok(())
        }
        View::Stats => print_json(&dashboard_stats(&snapshot)),
    }
}

fn initial_snapshot(cli: &Cli, settings: &Settings) -> Result<Snapshot> {
    if let Some(path) = &cli.seed_file {
        return load_seed_file(path);
    }
    if cli.no_seed || !settings.seed_sample_data {
        return Ok(Snapshot::default());
    }
    Ok(Snapshot::sample(chrono::Local::now().date_naive()))
}

fn load_seed_file(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    Ok(snapshot.normalized())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
