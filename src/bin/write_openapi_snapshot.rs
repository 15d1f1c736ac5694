// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use blog_core::presentation::http::openapi;
use std::path::PathBuf;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = PathBuf::from(openapi::snapshot_path());
    openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
