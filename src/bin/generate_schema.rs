//! Schema generator for the handler's response.
//!
//! Writes the JSON Schema of the `{claims, requestInfo}` object the Lambda
//! returns, for API Gateway models or client code generation.
//!
//! Usage: `generate-schema [OUTPUT]` (defaults to `output_schema.json`).

use anyhow::{Context, Result};
use authorizer_claims_lambda::schema::output_schema;
use std::fs;
use std::path::PathBuf;

const OUTPUT_FILE: &str = "output_schema.json";

fn main() -> Result<()> {
    let output = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(OUTPUT_FILE), PathBuf::from);

    let json = serde_json::to_string_pretty(&output_schema())
        .context("Failed to serialize output schema")?;

    fs::write(&output, json).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✅ Generated {}", output.display());
    Ok(())
}
