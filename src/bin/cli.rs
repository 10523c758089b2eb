// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! stl2pov CLI

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};
use stl2pov::cli::{Converter, Reporter};
use stl2pov::{ConvertConfig, DegeneratePolicy, MeshStyle};

#[derive(Parser)]
#[command(name = "stl2pov")]
#[command(about = "Convert STL files into POV-Ray mesh or mesh2 objects", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// One or more STL files or directories
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    options: ConvertArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Clone, Default)]
struct ConvertArgs {
    /// Generate a mesh2 object (slow on big files)
    #[arg(short = '2', long)]
    mesh2: bool,

    /// Directory for the generated include files
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Configuration file (defaults to ./stl2pov.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Leave degenerate facets out of the output
    #[arg(long)]
    skip_degenerate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert STL files to POV-Ray include files
    Convert {
        /// One or more STL files or directories
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        options: ConvertArgs,
    },

    /// Print facet, point and bounding box statistics of an STL file
    Info {
        /// Input STL file
        file: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Convert { files, options }) => {
            convert_command(&files, &options, cli.verbose)?;
        }
        Some(Commands::Info { file, json }) => {
            info_command(&file, json)?;
        }
        Some(Commands::Version) => {
            println!("stl2pov v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            if cli.files.is_empty() {
                Cli::command().print_help()?;
                return Ok(());
            }
            convert_command(&cli.files, &cli.options, cli.verbose)?;
        }
    }

    Ok(())
}

fn load_config(options: &ConvertArgs, verbose: bool) -> Result<ConvertConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let mut config = ConvertConfig::from_file(path)?;
            config.apply_overrides(|key| std::env::var(key).ok())?;
            config
        }
        None => ConvertConfig::load()?,
    };

    if options.mesh2 {
        config.style = MeshStyle::Indexed;
    }
    if let Some(dir) = &options.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if options.skip_degenerate {
        config.degenerate = DegeneratePolicy::Skip;
    }
    config.verbose |= verbose;

    Ok(config)
}

fn convert_command(files: &[PathBuf], options: &ConvertArgs, verbose: bool) -> Result<()> {
    let config = load_config(options, verbose)?;

    if let Some(dir) = &config.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let inputs = Converter::collect_inputs(files);
    info!(
        "converting {} file(s) to {} objects",
        inputs.len(),
        config.style
    );

    let progress = if config.verbose && inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let converter = Converter::new(config);
    let results = converter.convert_all(&inputs, progress.as_ref());

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut converted = 0;
    let mut failed = 0;
    let mut skipped = 0;
    let mut write_failed = false;

    for (_, result) in &results {
        match result {
            Ok(report) => {
                converted += 1;
                Reporter::report_conversion(report, converter.config().verbose);
            }
            Err(error) => {
                Reporter::report_failure(error);
                if matches!(error, stl2pov::cli::ConversionError::NotStl(_)) {
                    skipped += 1;
                } else {
                    failed += 1;
                }
                write_failed |= error.is_write_failure();
            }
        }
    }

    if converter.config().verbose || results.len() > 1 {
        Reporter::report_totals(converted, failed, skipped);
    }

    if write_failed {
        std::process::exit(2);
    }

    Ok(())
}

fn info_command(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        Reporter::report_error(&format!("Input file not found: {}", file.display()));
        std::process::exit(1);
    }

    let summary = Converter::summarize(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        Reporter::report_summary(&summary);
    }

    Ok(())
}
