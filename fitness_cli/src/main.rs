use clap::{Parser, Subcommand};
use fitness_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text, json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Skip packages with an undefined training type instead of failing
    #[arg(long, global = true)]
    skip_unknown: bool,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the built-in demonstration packages (default)
    Demo,

    /// Summarize sensor packages from a CSV file (CODE,field,field,...)
    Run {
        /// Path to the packages file
        file: PathBuf,
    },

    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fitness_core::logging::init(cli.verbose);

    match cli.command {
        Some(Commands::InitConfig { force }) => cmd_init_config(cli.config, force),
        Some(Commands::Run { file }) => {
            let settings = Settings::resolve(cli.config, cli.format, cli.skip_unknown)?;
            let packages = load_packages(&file)?;
            cmd_summarize(&packages, &settings)
        }
        Some(Commands::Demo) | None => {
            let settings = Settings::resolve(cli.config, cli.format, cli.skip_unknown)?;
            cmd_summarize(&demo_packages(), &settings)
        }
    }
}

/// Effective settings: command-line flags over config file over defaults
struct Settings {
    format: OutputFormat,
    policy: UnknownTypePolicy,
}

impl Settings {
    fn resolve(
        config_path: Option<PathBuf>,
        format: Option<String>,
        skip_unknown: bool,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(&path)?,
            None => Config::load()?,
        };

        let format = match format {
            Some(f) => f.parse::<OutputFormat>()?,
            None => config.output.format,
        };

        let policy = if skip_unknown {
            UnknownTypePolicy::Skip
        } else {
            config.packages.on_unknown
        };

        Ok(Self { format, policy })
    }
}

fn cmd_summarize(packages: &[SensorPackage], settings: &Settings) -> Result<()> {
    let messages = process_packages(packages, settings.policy)?;
    tracing::debug!("Writing {} summaries as {:?}", messages.len(), settings.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for info in &messages {
        match settings.format {
            OutputFormat::Text => writeln!(out, "{}", info.get_message())?,
            OutputFormat::Json => writeln!(out, "{}", info.to_json()?)?,
        }
    }
    out.flush()?;

    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
