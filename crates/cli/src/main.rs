//! Renders the expense report to `<program name>.pdf`.
//!
//! The program takes no arguments. Set `EXPENSE_REPORT_DEFINITION` to the
//! path of a JSON report definition to render it instead of the built-in
//! report, and `RUST_LOG` to change log verbosity.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use report::{load_report, ReportDefinition, ReportRenderer};

/// Environment variable naming a JSON report definition
const DEFINITION_ENV: &str = "EXPENSE_REPORT_DEFINITION";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let invocation = std::env::args_os()
        .next()
        .context("Program invocation name is missing")?;
    let output = output_path(&invocation);

    let definition = load_definition(std::env::var_os(DEFINITION_ENV))?;
    log::debug!(
        "Rendering '{}' with {} rows",
        definition.title,
        definition.rows.len()
    );

    ReportRenderer::new(&definition)
        .with_creation_date(Utc::now())
        .render_to_file(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}

/// The built-in report, or the definition file named by the environment
fn load_definition(path: Option<OsString>) -> Result<ReportDefinition> {
    match path {
        Some(path) => {
            let path = Path::new(&path);
            log::info!("Loading report definition from {}", path.display());
            load_report(path).with_context(|| {
                format!("Failed to load report definition {}", path.display())
            })
        }
        None => Ok(ReportDefinition::default()),
    }
}

/// Output file: the invocation name with `.pdf` appended
fn output_path(invocation: &OsStr) -> PathBuf {
    let mut name = invocation.to_os_string();
    name.push(".pdf");
    PathBuf::from(name)
}
