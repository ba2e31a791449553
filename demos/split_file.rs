//! Split a MySQL dump file into one file per table.
//!
//! Run with:
//!     cargo run --example split_file -- /path/to/dump.sql

use std::env;
use std::fs::File;
use std::process::ExitCode;

use sqlsplit::{FileSinkProvider, SplitConfig, Splitter};

fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: split_file <filename>");
        println!(
            "Splits a large MySQL dump into smaller files, one per table, \
             starting a new file at every `-- Table structure for table` line."
        );
        println!(
            "Each file is framed so it can be applied on its own, with \
             constraint enforcement disabled while it loads."
        );
        return ExitCode::FAILURE;
    };

    let input = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error opening {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let splitter = Splitter::new(SplitConfig::mysql_dump());
    let mut sinks = FileSinkProvider::new(&path);

    match splitter.split(input, &mut sinks) {
        Ok(summary) => {
            for segment in &summary.segments {
                println!(
                    "{} <- bytes {}..{}",
                    sinks.path_for(segment.seq()).display(),
                    segment.start(),
                    segment.end()
                );
            }
            println!(
                "\nSplit {} bytes into {} files",
                summary.total_bytes,
                summary.sink_count()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Split failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
