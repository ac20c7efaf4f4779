//! # Check Subcommand
//!
//! Validates a record document against a schema document.
//!
//! ```bash
//! rcheck check --schema contact.schema.json --record contact.json
//! rcheck check --schema contact.schema.yaml --record contact.yaml --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use rcheck_schema::{record_from_value, Schema, ValidationResult, Validator};

use crate::document::load_document;
use crate::EXIT_INVALID;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    pub schema: PathBuf,

    /// Record file (JSON, or YAML with a .yaml/.yml extension).
    #[arg(long)]
    pub record: PathBuf,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Load both documents and validate the record.
pub fn check_files(
    schema_path: &Path,
    record_path: &Path,
    validator: &Validator,
) -> Result<ValidationResult> {
    let schema = Schema::from_value(&load_document(schema_path)?)
        .with_context(|| format!("invalid schema {}", schema_path.display()))?;
    let record = record_from_value(load_document(record_path)?)
        .with_context(|| format!("invalid record {}", record_path.display()))?;

    tracing::info!(
        schema = %schema_path.display(),
        record = %record_path.display(),
        "validating record"
    );
    Ok(validator.validate(&record, &schema))
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, validator: &Validator) -> Result<u8> {
    let result = check_files(&args.schema, &args.record, validator)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}: {result}", args.record.display());
    }

    Ok(if result.is_valid() { 0 } else { EXIT_INVALID })
}
