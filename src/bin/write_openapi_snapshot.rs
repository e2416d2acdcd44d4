// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use api_base::config::AppConfig;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let output_path = PathBuf::from(
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string()),
    );
    api_base::presentation::http::openapi::write_openapi_snapshot(&output_path, config.api_logo())?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
