mod cli;

use vidmeta::{config, processor};
use vidmeta_av::FfprobeProber;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidmeta=debug,vidmeta_av=debug".to_string()
        } else {
            "vidmeta=info,vidmeta_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_config_or_default(cli.config.as_deref())?;

    // Command-line values win over the config file and get the same `~` expansion
    if let Some(ffprobe) = cli.ffprobe {
        config.tools.ffprobe_path = Some(config::expand_path(&ffprobe));
    }
    if !cli.dirs.is_empty() {
        config.directories = cli.dirs.iter().map(|d| config::expand_path(d)).collect();
    }
    if let Some(output) = cli.output {
        config.output = Some(config::expand_path(&output));
    }

    if cli.check_tools {
        return check_tools(&config);
    }

    if config.directories.is_empty() {
        anyhow::bail!(
            "No directories to scan: pass them as arguments or set `directories` in the config file"
        );
    }

    let ffprobe = vidmeta_av::get_tool_path("ffprobe", config.tools.ffprobe_path.as_deref())
        .context("ffprobe is required; install FFmpeg or pass --ffprobe")?;
    tracing::debug!("Using ffprobe at {:?}", ffprobe);

    let prober = FfprobeProber::new(ffprobe);
    let summary = processor::run(&config, &prober)?;

    println!(
        "Done. Saved report to {} ({} files, {} skipped)",
        summary.report_path.display(),
        summary.written,
        summary.failed
    );

    Ok(())
}

fn check_tools(config: &config::Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tools = vidmeta_av::check_tools(config.tools.ffprobe_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install FFmpeg to provide ffprobe.");
    }

    Ok(())
}
