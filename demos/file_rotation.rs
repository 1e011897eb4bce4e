//! File logging and rotation example
//!
//! Logs to a file, moves the file aside the way logrotate does, then reopens
//! the original path with `Logger::rotate`.
//!
//! Run with: cargo run --example file_rotation

use leveled_logger::prelude::*;
use leveled_logger::{err, infof, warn};
use std::fs;

fn main() -> Result<()> {
    println!("=== Leveled Logger - File Rotation Example ===\n");

    let path = std::env::temp_dir().join("leveled_logger_demo.log");
    let rotated = path.with_extension("log.1");

    let logger = Logger::builder()
        .with_file_path(&path)
        .with_prefix("demo ")
        .with_flags(LineFlags::STD_FLAGS | LineFlags::SHORT_FILE)
        .with_min_level(Level::NOTICE)
        .build()?;

    println!("1. Logging to {}", path.display());
    logger.info("Below threshold, not written");
    logger.notice("Application started");
    for i in 1..=3 {
        infof!(logger, "Processing item {}/3 (hidden)", i);
    }
    warn!(logger, "Disk usage at ", 91, "%");

    println!("2. Moving the file aside and rotating");
    fs::rename(&path, &rotated)?;
    logger.notice("Written to the moved file");
    if let Some(previous) = logger.rotate()? {
        // Close the old handle once nothing else needs it.
        drop(previous);
    }
    err!(logger, "Written to the fresh file");

    println!("\n--- {} ---", rotated.display());
    print!("{}", fs::read_to_string(&rotated)?);
    println!("--- {} ---", path.display());
    print!("{}", fs::read_to_string(&path)?);

    fs::remove_file(&rotated)?;
    fs::remove_file(&path)?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
