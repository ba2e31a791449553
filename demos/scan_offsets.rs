//! List the table boundaries in a dump without writing anything.
//!
//! Run with:
//!     cargo run --example scan_offsets -- /path/to/dump.sql

use std::env;
use std::fs::File;

use sqlsplit::{SplitConfig, Splitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args().nth(1).unwrap_or_else(|| "dump.sql".to_string());

    let file = File::open(&path)?;
    println!("Scanning {}\n", path);

    let splitter = Splitter::new(SplitConfig::default());

    let mut count = 0usize;
    for point in splitter.scan(file) {
        let point = point?;
        count += 1;
        println!("table {:>4} starts at byte {}", count, point);
    }

    if count == 0 {
        println!("no table markers found");
    } else {
        println!("\n{} tables", count);
    }
    Ok(())
}
