use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::Level;

use translation_prep::core::{
    prepare_csvs, print_error_message, print_info_message, PrepOptions, RunOutcome,
};
use translation_prep::env::{generate_env_docs, EnvConfig};
use translation_prep::translation::config::expand_path;
use translation_prep::{extract_archive, ConfigManager, PrepResult};

#[derive(Parser, Debug)]
#[command(
    name = "translation-prep",
    version,
    about = "Split product-data exports into per-namespace translation datasets"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export archive to unpack when no source files are given
    #[arg(short, long, value_name = "ZIP")]
    archive: Option<PathBuf>,

    /// Directory the archive is unpacked into
    #[arg(short, long, value_name = "DIR")]
    extract_dir: Option<PathBuf>,

    /// Directory source file names are resolved against
    #[arg(short, long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Directory the datasets are written to
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short = 'q', long)]
    silent: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the supported environment variables and exit
    #[arg(long)]
    env_docs: bool,

    /// Source files, relative to the source directory
    #[arg(value_name = "FILES")]
    files: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            print_error_message(&format!("Error: {}", e));
            process::exit(1);
        }
    };

    let silent = cli.silent || env_config.silent;
    init_tracing(&env_config, silent);

    if cli.env_docs {
        print_info_message(&generate_env_docs());
        env_config.print_summary();
        return;
    }

    if let Err(e) = run(&cli, &env_config, silent) {
        print_error_message(&format!("Error: {}", e));
        process::exit(1);
    }
}

fn init_tracing(env_config: &EnvConfig, silent: bool) {
    let level = if silent {
        Level::ERROR
    } else {
        env_config.log_level.parse().unwrap_or(Level::INFO)
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(!env_config.no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, env_config: &EnvConfig, silent: bool) -> PrepResult<()> {
    let config_path = cli.config.clone().or_else(|| env_config.config_file.clone());
    let config = ConfigManager::load(config_path.as_deref())?.into_config();

    if cli.dump_config {
        print_info_message(&config.to_toml_string()?);
        return Ok(());
    }

    let mut options = PrepOptions::from(&config);
    if let Some(ref dir) = cli.output_dir {
        options.output_dir = dir.clone();
    }

    let file_names = if !cli.files.is_empty() {
        if let Some(ref dir) = cli.source_dir {
            options.source_dir = dir.clone();
        }
        cli.files.clone()
    } else {
        let archive_path = cli
            .archive
            .clone()
            .unwrap_or_else(|| expand_path(&config.archive.path));
        let extract_dir = cli
            .extract_dir
            .clone()
            .unwrap_or_else(|| expand_path(&config.archive.extract_dir));

        let names = extract_archive(&archive_path, &extract_dir)?;
        // 归档条目相对于解压目录
        options.source_dir = extract_dir;
        names
    };

    match prepare_csvs(&options, &file_names)? {
        RunOutcome::NothingToDo => {
            if !silent {
                print_info_message("nothing to do");
            }
        }
        RunOutcome::Completed(report) => {
            if !silent {
                for artifact in &report.artifacts {
                    print_info_message(&artifact.display().to_string());
                }
            }
        }
    }

    Ok(())
}
