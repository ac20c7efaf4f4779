//! # CLI Configuration
//!
//! Resolves [`ValidatorOptions`] from an optional config file and the
//! command-line overrides. Flags win over the file; the file wins over
//! the defaults.

use std::path::Path;

use anyhow::{Context, Result};
use rcheck_schema::{EmptyOneOfPolicy, ValidatorOptions};

use crate::document::load_document;

/// Build validator options from `--config` and `--strict-one-of`.
pub fn resolve_options(config: Option<&Path>, strict_one_of: bool) -> Result<ValidatorOptions> {
    let mut options = match config {
        Some(path) => {
            let value = load_document(path)?;
            let options: ValidatorOptions = serde_json::from_value(value)
                .with_context(|| format!("invalid validator config in {}", path.display()))?;
            tracing::debug!(config = %path.display(), ?options, "loaded validator config");
            options
        }
        None => ValidatorOptions::default(),
    };

    if strict_one_of {
        options.empty_one_of = EmptyOneOfPolicy::Strict;
    }
    Ok(options)
}
