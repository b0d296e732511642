//! # enrol CLI Entry Point
//!
//! Builds the tensor once from the embedded dataset, resolves one
//! school (interactively or from `--identifier`), and prints both
//! statistics blocks.

use anyhow::Context;
use clap::Parser;

use enrol_cli::{data, report, session};
use enrol_core::SchoolRegistry;
use enrol_tensor::{general_stats, school_stats, EnrollmentTensor};

/// School Enrollment Statistics — a decade of Calgary high-school
/// enrollment, by year, school, and grade.
#[derive(Parser, Debug)]
#[command(name = "enrol", version, about)]
struct Cli {
    /// School name or code; skips the interactive prompt.
    #[arg(long)]
    identifier: Option<String>,

    /// Emit results as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let registry = SchoolRegistry::calgary();
    let tensor = EnrollmentTensor::build(data::decade_tables())
        .context("embedded decade dataset failed shape validation")?;

    println!("School Enrollment Statistics");
    let (years, schools, grades) = tensor.shape();
    println!("Shape of full data array: ({years}, {schools}, {grades})");
    println!("Dimensions of full data array: {}", tensor.ndim());

    let school_index = match cli.identifier {
        Some(identifier) => registry
            .resolve(&identifier)
            .with_context(|| format!("cannot resolve school identifier {identifier:?}"))?,
        None => {
            let stdin = std::io::stdin();
            session::prompt_school_index(stdin.lock(), std::io::stdout(), &registry)?
        }
    };

    let school = registry.school_at(school_index)?;
    let school_result = school_stats(&tensor, school_index)?;
    let general_result = general_stats(&tensor);

    if cli.json {
        let payload = serde_json::json!({
            "school": { "code": school.code.0, "name": school.name },
            "school_stats": school_result,
            "general_stats": general_result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("\n***Requested School Statistics***\n");
        print!("{}", report::school_report(school, &school_result));
        println!("\n***General Statistics for All Schools***\n");
        print!("{}", report::general_report(&general_result));
    }

    Ok(())
}
