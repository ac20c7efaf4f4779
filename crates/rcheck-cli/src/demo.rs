//! # Demo Subcommand
//!
//! Self-test: validates a built-in contact record against a schema that
//! exercises all five constraint categories.

use anyhow::Result;
use clap::Args;
use rcheck_schema::{Record, Schema, ValidationResult, Validator};
use serde_json::json;

use crate::EXIT_INVALID;

/// Arguments for the demo subcommand.
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Print the full result as JSON instead of `true`/`false`.
    #[arg(long)]
    pub json: bool,
}

/// Schema used by the self-test.
pub fn contact_schema() -> Schema {
    Schema::new()
        .required(["id", "name"])
        .one_of(["home_phone", "cell_phone", "work_phone"])
        .either_or("birth_date", "govt_id")
        .mutually_exclusive("field1", "field2")
        .allow("day", ["SU", "MO", "TU", "WE", "TH", "FR", "SA"])
}

/// Record used by the self-test. It satisfies [`contact_schema`].
pub fn contact_record() -> Record {
    let mut record = Record::new();
    record.insert("id".into(), json!("123"));
    record.insert("name".into(), json!("John Doe"));
    record.insert("home_phone".into(), json!("555-1234"));
    record.insert("day".into(), json!("MO"));
    record
}

/// Run the self-test and report the outcome on stdout.
pub fn run_demo(args: &DemoArgs, validator: &Validator) -> Result<u8> {
    let result = validator.validate(&contact_record(), &contact_schema());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if let ValidationResult::Invalid(failure) = &result {
            println!("{failure}");
        }
        println!("{}", result.is_valid());
    }

    Ok(if result.is_valid() { 0 } else { EXIT_INVALID })
}
