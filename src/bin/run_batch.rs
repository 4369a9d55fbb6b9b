//! Run assessments for an entire applicant file
//!
//! Reads applicants from CSV, assesses them in parallel, writes one result
//! row per applicant, and prints portfolio summary stats.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rayon::prelude::*;

use loan_assessment::applicant::load_applicants;
use loan_assessment::report::export::{count_approved, write_batch_csv};
use loan_assessment::report::format_inr;
use loan_assessment::{assess, AssessmentResult, Assumptions};

#[derive(Debug, Parser)]
#[command(name = "run_batch", version, about = "Batch loan assessment")]
struct Cli {
    /// Applicant CSV file
    input: PathBuf,

    /// Results CSV path
    #[arg(long, default_value = "assessment_results.csv")]
    output: PathBuf,

    /// Assumptions override file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let assumptions = match &cli.config {
        Some(path) => Assumptions::from_json_file(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_retail(),
    };

    println!("Loading applicants from {}...", cli.input.display());
    let applicants = load_applicants(&cli.input)
        .with_context(|| format!("loading applicants from {}", cli.input.display()))?;
    println!("Loaded {} applicants in {:?}", applicants.len(), start.elapsed());

    println!("Running assessments...");
    let assess_start = Instant::now();
    let results: Vec<AssessmentResult> = applicants
        .par_iter()
        .map(|applicant| assess(applicant, &assumptions))
        .collect();
    println!("Assessments complete in {:?}", assess_start.elapsed());

    write_batch_csv(&cli.output, &applicants, &results)?;
    println!("Output written to {}", cli.output.display());

    let approved = count_approved(&results);
    let review = results.len() - approved;
    let mean_probability = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.probability).sum::<f64>() / results.len() as f64
    };
    let total_requested: f64 = applicants.iter().map(|a| a.loan_amount).sum();
    let total_emi: f64 = results.iter().map(|r| r.emi).sum();

    println!("\nBatch Summary ({}):", Local::now().format("%Y-%m-%d"));
    println!("  Applicants:        {}", results.len());
    println!(
        "  Likely approved:   {} ({:.1}%)",
        approved,
        100.0 * approved as f64 / results.len().max(1) as f64
    );
    println!("  Needs review:      {}", review);
    println!("  Mean probability:  {mean_probability:.1}%");
    println!("  Total requested:   {}", format_inr(total_requested));
    println!("  Total monthly EMI: {}", format_inr(total_emi));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
