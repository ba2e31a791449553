//! Async boundary scanning with tokio.
//!
//! Run with:
//!     cargo run --example async_scan --features async-io -- /path/to/dump.sql

use std::env;

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use sqlsplit::{SplitConfig, scan_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "dump.sql".to_string());

    let file = tokio::fs::File::open(&path).await?;
    println!("Scanning {} asynchronously\n", path);

    let mut stream = scan_async(file.compat(), SplitConfig::default());

    let mut count = 0usize;
    while let Some(point) = stream.next().await {
        count += 1;
        println!("table {:>4} starts at byte {}", count, point?);
    }

    println!("\n{} tables", count);
    Ok(())
}
