use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use payroll_ledger::config::ConfigLoader;
use payroll_ledger::error::PayrollError;
use payroll_ledger::models::format_number;
use payroll_ledger::roster::Roster;

#[derive(Parser, Debug)]
#[command(name = "payroll", author, version, about, long_about = None)]
struct Cli {
    /// Roster file (overrides the configuration file)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// YAML configuration file (default: ./payroll.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Reject categories other than full-time and part-time
    #[arg(long, global = true)]
    strict_categories: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List all employees
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the pay stub of one employee, or of every employee
    Stub {
        id: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Record sick days for an employee, then save the roster
    SickDay {
        id: String,
        amount: f64,
        /// Save to this file instead of the roster file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reset sick days for one category, then save the roster
    Reset {
        period: ResetPeriod,
        /// Save to this file instead of the roster file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the roster to another file
    Save { path: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResetPeriod {
    /// Restore the yearly allowance of full-time staff
    Yearly,
    /// Clear the sick days taken by part-time staff
    Monthly,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::discover(cli.config.as_deref(), ".")?;
    let mut options = loader.load_options();
    options.strict_categories |= cli.strict_categories;

    let roster_path = cli
        .file
        .unwrap_or_else(|| loader.config().roster_path.clone());

    let mut roster = Roster::new();
    roster
        .load_with(&roster_path, &options)
        .with_context(|| format!("failed to load roster from {}", roster_path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.cmd {
        Cmd::List { json: true } => {
            serde_json::to_writer_pretty(&mut out, roster.employees())?;
            writeln!(out)?;
        }
        Cmd::List { json: false } => roster.write_employee_list(&mut out)?,
        Cmd::Stub { id: None, json: true } => {
            serde_json::to_writer_pretty(&mut out, &roster.pay_stubs())?;
            writeln!(out)?;
        }
        Cmd::Stub { id: None, json: false } => roster.print_all_pay_stubs(&mut out)?,
        Cmd::Stub { id: Some(id), json } => {
            let employee = roster.find(&id).ok_or(PayrollError::EmployeeNotFound { id })?;
            if json {
                serde_json::to_writer_pretty(&mut out, &employee.pay_stub())?;
                writeln!(out)?;
            } else {
                employee.print_pay_stub(&mut out)?;
            }
        }
        Cmd::SickDay { id, amount, output } => {
            let sick_days = roster
                .enter_sick_day(&id, amount)
                .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.clone() })?;
            writeln!(out, "New sick days for {}: {}", id, format_number(sick_days))?;
            save(&roster, output.as_deref().unwrap_or(roster_path.as_path()))?;
        }
        Cmd::Reset { period, output } => {
            let count = match period {
                ResetPeriod::Yearly => roster.yearly_sick_day_reset(),
                ResetPeriod::Monthly => roster.monthly_sick_day_reset(),
            };
            writeln!(out, "Reset sick days for {} employees", count)?;
            save(&roster, output.as_deref().unwrap_or(roster_path.as_path()))?;
        }
        Cmd::Save { path } => {
            save(&roster, &path)?;
            writeln!(out, "Saved {} employees to {}", roster.len(), path.display())?;
        }
    }

    Ok(())
}

fn save(roster: &Roster, path: &Path) -> Result<()> {
    roster
        .save(path)
        .with_context(|| format!("failed to save roster to {}", path.display()))
}
