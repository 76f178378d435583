use clap::Parser;
use colored::*;
use enex2md::api::Converter;
use enex2md::commands::{CmdMessage, ConversionReport, MessageLevel};
use enex2md::config::ConverterConfig;
use enex2md::error::Result;
use enex2md::store::fs::FileStore;
use enex2md::store::memory::InMemoryStore;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands, ConfigOverrides};

const RULE_WIDTH: usize = 60;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&cli, &cwd)?;

    match cli.command {
        Some(Commands::Config { save }) => handle_config(&config, save, &cwd),
        None => handle_convert(config, cli.overrides.dry_run),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn load_config(cli: &Cli, cwd: &Path) -> Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::load_file(path)?,
        None => ConverterConfig::load(cwd)?,
    };
    apply_overrides(&mut config, &cli.overrides);
    config.validate()?;
    log::debug!("effective config: {:?}", config);
    Ok(config)
}

fn apply_overrides(config: &mut ConverterConfig, overrides: &ConfigOverrides) {
    if let Some(input) = &overrides.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &overrides.output {
        config.output_dir = output.clone();
    }
    if let Some(marker) = &overrides.marker {
        config.marker_tag = marker.clone();
    }
    if let Some(lang) = overrides.lang {
        config.language = lang;
    }
}

fn handle_convert(config: ConverterConfig, dry_run: bool) -> Result<()> {
    print_rule();
    println!("{}", "Evernote to Markdown Converter".bold());
    print_rule();

    if dry_run {
        let mut converter = Converter::new(InMemoryStore::new(), config);
        let report = converter.convert_all()?;
        print_messages(&report.messages);
        print_summary(&report);

        let store = converter.into_store();
        println!(
            "\n{}",
            format!("Dry run: {} file(s) would be written", store.file_count()).cyan()
        );
        for path in store.files() {
            println!("  {}", path.display());
        }
    } else {
        let mut converter = Converter::new(FileStore::new(), config);
        let report = converter.convert_all()?;
        print_messages(&report.messages);
        print_summary(&report);
    }

    println!();
    print_rule();
    println!("{}", "Conversion completed!".bold());
    print_rule();
    Ok(())
}

fn handle_config(config: &ConverterConfig, save: bool, cwd: &Path) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    if save {
        let path = config.save(cwd)?;
        print_messages(&[CmdMessage::success(format!("Saved {}", path.display()))]);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_summary(report: &ConversionReport) {
    println!();
    if report.has_errors() {
        print_rule();
        println!("{}", "ERRORS DETECTED:".yellow().bold());
        print_rule();
        for error in &report.errors {
            println!("{} {}", "✗".red(), error);
        }
    } else {
        println!("{}", "All notes converted successfully!".green());
    }
    println!(
        "{}",
        format!(
            "{} written, {} skipped, {} rejected, {} failed",
            report.written_count(),
            report.skipped_count(),
            report.rejected_count(),
            report.failed_count()
        )
        .dimmed()
    );
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}
