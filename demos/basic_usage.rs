//! Basic logger usage example
//!
//! Logs through the process-wide facade to the terminal and to
//! `demo.log` in the system temp directory, then shuts down.
//!
//! Run with: cargo run --example basic_usage

use sinklog::{FormatFlags, LogLevel, OutputTarget};

fn handle_request(id: u32) {
    sinklog::info!("handling request {}", id);
    if id % 2 == 0 {
        sinklog::warning!("request {} took {}ms", id, 250);
    }
}

fn main() -> sinklog::Result<()> {
    println!("=== sinklog - Basic Usage Example ===\n");

    sinklog::set_file_path(std::env::temp_dir());
    sinklog::set_file_name("demo.log");

    println!("1. Default prefix, every level:");
    sinklog::debug("This is a debug message");
    sinklog::info("This is an info message");
    sinklog::warning("This is a warning message");
    sinklog::error("This is an error message");
    sinklog::fatal("This is a fatal message");
    sinklog::flush()?;

    println!("\n2. Time and level only, INFO and above:");
    sinklog::set_flags(FormatFlags::TIME | FormatFlags::LEVEL);
    sinklog::set_level(LogLevel::Info);
    sinklog::debug("Debug message (hidden)");
    sinklog::info("Info message (visible)");
    sinklog::flush()?;

    println!("\n3. Caller details from the macros:");
    sinklog::set_flags(FormatFlags::FILENAME | FormatFlags::FUNCNAME | FormatFlags::LINENO);
    for id in 1..=2 {
        handle_request(id);
    }
    sinklog::flush()?;

    println!("\n4. File only, bare messages:");
    sinklog::set_output_type(OutputTarget::FILE);
    sinklog::set_flags(FormatFlags::NONE);
    sinklog::info("written to the file only");
    sinklog::flush()?;

    if let Some(path) = sinklog::active_file_path() {
        println!("   log file: {}", path.display());
    }

    let metrics = sinklog::metrics();
    println!(
        "\n   enqueued={} written={} filtered={}",
        metrics.total_enqueued(),
        metrics.total_written(),
        metrics.filtered_count()
    );

    if !sinklog::shutdown() {
        eprintln!("logger did not stop in time");
    }

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
