//! Assess a single loan applicant from the command line
//!
//! Prints the KPI summary, the approval decision with its factor
//! breakdown, and the amortization schedule. `--export` writes the intake
//! CSV row for the assessment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use loan_assessment::report::export::{default_export_path, write_assessment_csv};
use loan_assessment::report::{format_schedule_table, format_summary};
use loan_assessment::{assess, ApplicantProfile, Assumptions, EmploymentType};

#[derive(Debug, Parser)]
#[command(name = "assess", version, about = "Loan EMI and approval assessment")]
struct Cli {
    /// Applicant full name
    #[arg(long, required_unless_present = "sample")]
    name: Option<String>,

    /// Employment category (government, salaried, self-employed, student)
    #[arg(long, default_value = "salaried")]
    employment: String,

    /// Gross monthly income
    #[arg(long, required_unless_present = "sample")]
    income: Option<f64>,

    /// Co-applicant monthly income
    #[arg(long, default_value_t = 0.0)]
    co_income: f64,

    /// Existing monthly debt obligations
    #[arg(long, default_value_t = 0.0)]
    debts: f64,

    /// Requested loan amount
    #[arg(long, required_unless_present = "sample")]
    loan_amount: Option<f64>,

    /// Tenure in months
    #[arg(long, required_unless_present = "sample")]
    tenure: Option<u32>,

    /// Credit score (300-900)
    #[arg(long, required_unless_present = "sample")]
    credit_score: Option<f64>,

    /// Applicant age in years
    #[arg(long, required_unless_present = "sample")]
    age: Option<f64>,

    /// Loan purpose
    #[arg(long, default_value = "")]
    purpose: String,

    /// Use the built-in sample applicant instead of flags
    #[arg(long)]
    sample: bool,

    /// Assumptions override file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the intake CSV row; derives a dated filename when no path is given
    #[arg(long, num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Print the result as JSON instead of the formatted report
    #[arg(long)]
    json: bool,

    /// Skip the amortization table
    #[arg(long)]
    no_schedule: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.config {
        Some(path) => Assumptions::from_json_file(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_retail(),
    };

    let profile = if cli.sample {
        ApplicantProfile::sample()
    } else {
        ApplicantProfile {
            name: cli.name.clone().unwrap_or_default(),
            employment: EmploymentType::from_label(&cli.employment),
            income: cli.income.unwrap_or(0.0),
            co_income: cli.co_income,
            debts: cli.debts,
            loan_amount: cli.loan_amount.unwrap_or(0.0),
            tenure_months: cli.tenure.unwrap_or(0),
            credit_score: cli.credit_score.unwrap_or(0.0),
            age: cli.age.unwrap_or(0.0),
            purpose: cli.purpose.clone(),
        }
    };
    profile.validate()?;

    let result = assess(&profile, &assumptions);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_summary(&profile, &result));
        if !cli.no_schedule && !result.schedule.is_empty() {
            println!();
            print!("{}", format_schedule_table(&result.schedule));
        }
    }

    if let Some(export) = &cli.export {
        let path = match export {
            Some(path) => path.clone(),
            None => default_export_path(&profile, Local::now().date_naive()),
        };
        write_assessment_csv(&path, &profile, &result)?;
        println!("\nExport written to {}", path.display());
    }

    Ok(())
}
