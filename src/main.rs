//! Mapship CLI - React Native source map upload tool
//!
//! Usage: mapship <COMMAND>
//!
//! Commands:
//!   upload  Generate a bundle + source map and upload to Bugsnag
//!   check   Verify the external toolchain is available

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use mapship::cli::{Cli, Commands, UploadArgs};
use mapship::config::{self, ConfigWarning};
use mapship::exec::{check_available, ProcessRunner};
use mapship::pipeline::{UploadEvent, UploadPipeline};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload(args) => cmd_upload(args, cli.json, cli.verbose),
        Commands::Check => cmd_check(cli.json),
    }
}

fn cmd_upload(args: UploadArgs, json: bool, verbose: u8) -> Result<()> {
    let icons = std::io::stdout().is_terminal();

    let (mut config, warnings) = match config::load_or_default(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => fail(json, icons, &err.to_string()),
    };
    print_warnings(&warnings, json);
    args.apply(&mut config);

    if !json {
        println!("{}Mapship Upload", prefix(icons, "📦 "));
        println!("Platform: {}", config.platform);
        println!("Directory: {}", config.sourcemaps_dir.display());
        if args.dry_run {
            println!("Mode: Dry run");
        }
        if verbose > 0 {
            println!("Entry file: {}", config.entry_file);
            println!("Generate bundle: {}", config.generate);
            println!("Overwrite: {}", config.overwrite);
            if let Some(endpoint) = &config.endpoint {
                println!("Endpoint: {}", endpoint);
            }
        }
        println!();
    }

    let runner = ProcessRunner::new(json);
    let pipeline = UploadPipeline::new(&config, &runner).with_dry_run(args.dry_run);

    let result = pipeline.run(|event| {
        if json {
            println!("{}", event.to_json());
        } else {
            match event {
                UploadEvent::PathsResolved { source_map, bundle } => {
                    println!("Source map: {}", source_map);
                    println!("Bundle: {}", bundle);
                }
                UploadEvent::BundleStarted { command } => {
                    println!("{}Creating React Native bundle", prefix(icons, "🔨 "));
                    println!("  $ {}", command);
                }
                UploadEvent::UploadStarted { command } => {
                    println!("{}Uploading source map to Bugsnag", prefix(icons, "🚀 "));
                    println!("  $ {}", command);
                }
                UploadEvent::Finished => {}
            }
        }
    });

    match result {
        Ok(_) => {
            if !json {
                println!();
                if args.dry_run {
                    println!("{}Dry run complete - nothing executed", prefix(icons, "✓ "));
                } else {
                    println!("{}Source map uploaded", prefix(icons, "✓ "));
                }
            }
            Ok(())
        }
        Err(err) => fail(json, icons, &err.to_string()),
    }
}

fn cmd_check(json: bool) -> Result<()> {
    let icons = std::io::stdout().is_terminal();
    let available = check_available("npx");

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "check",
                "tool": "npx",
                "available": available,
            })
        );
    } else {
        println!("{}Mapship Check", prefix(icons, "🩺 "));
        if available {
            println!("{}npx - found", prefix(icons, "✓ "));
        } else {
            println!("{}npx - not found", prefix(icons, "✗ "));
            println!("  ↳ Install Node.js; npx runs both the bundler and the uploader");
        }
    }

    if !available {
        std::process::exit(1);
    }
    Ok(())
}

fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "warning",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                })
            );
        } else {
            let mut message = format!(
                "Warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
            if let Some(line) = warning.line {
                message.push_str(&format!(":{line}"));
            }
            if let Some(suggestion) = &warning.suggestion {
                message.push_str(&format!(". Did you mean '{suggestion}'?"));
            }
            eprintln!("{}", message);
        }
    }
}

fn prefix(icons: bool, icon: &str) -> &str {
    if icons {
        icon
    } else {
        ""
    }
}

fn fail(json: bool, icons: bool, message: &str) -> ! {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "error",
                "message": message,
            })
        );
    } else {
        eprintln!("{}{}", prefix(icons, "✗ "), message);
    }
    std::process::exit(1);
}
