//! # chatstash CLI
//!
//! Command-line interface for the chatstash library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use chatstash::cli::{Args, Command};
use chatstash::config::{CleanConfig, ConsolidateConfig};
use chatstash::core::Consolidator;
use chatstash::error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    match args.command {
        #[cfg(feature = "clipboard")]
        Command::Backup { dir, attempts, at } => run_backup(&dir, attempts, at.as_deref()),
        Command::Consolidate { dir, output, strip } => run_consolidate(&dir, output, strip),
    }
}

#[cfg(feature = "clipboard")]
fn run_backup(dir: &Path, attempts: usize, at: Option<&str>) -> Result<()> {
    use chatstash::backup::write_backup;
    use chatstash::capture::{CaptureConfig, read_clipboard};
    use chatstash::timestamp;

    println!("📦 chatstash v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Backups: {}", dir.display());

    let captured_at = match at {
        Some(raw) => timestamp::parse_required(raw)?,
        None => chrono::Utc::now(),
    };

    println!("📋 Reading clipboard ({} attempt(s) max)...", attempts);
    let config = CaptureConfig::new().with_max_attempts(attempts);
    let content = read_clipboard(&config)?;
    println!("   Got {} characters", content.len());

    let path = write_backup(dir, &content, captured_at)?;

    println!();
    println!("✅ Backup saved to {}", path.display());
    Ok(())
}

fn run_consolidate(dir: &Path, output: String, strip: Vec<String>) -> Result<()> {
    println!("📦 chatstash v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Backups: {}", dir.display());
    println!("💾 Output:  {}", output);
    if !strip.is_empty() {
        println!("🧹 Extra markers: {}", strip.join(", "));
    }
    println!();

    let clean_config = CleanConfig::new().with_markers(strip);
    let consolidator = Consolidator::new()
        .with_clean_config(clean_config)
        .with_config(ConsolidateConfig::new().with_output_filename(output));

    println!("⏳ Consolidating...");
    let report = consolidator.consolidate(dir)?;

    for (path, err) in &report.skipped {
        eprintln!("⚠️  Skipped {}: {}", path.display(), err);
    }

    if report.nothing_to_do() {
        println!("   No backup files found. Nothing to do.");
        return Ok(());
    }

    println!();
    println!("✅ Done! Output saved to");
    if let Some(path) = &report.output {
        println!("   {}", path.display());
    }

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Files found:   {}", report.files_found);
    println!("   Files read:    {}", report.files_read);
    println!("   Interactions:  {}", report.interactions);
    println!("   Duplicates:    {}", report.duplicates);
    println!("   Written:       {}", report.written);

    Ok(())
}
