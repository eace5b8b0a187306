use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prep_store::sample::{sample_questions, sample_users};
use prep_store::{DataWriter, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "prep-store", version, about = "Write users and interview questions to JSON")]
struct Cli {
    /// Settings file (JSON with `usersPath` / `questionsPath`).
    #[arg(long, global = true, env = "PREP_STORE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the users output file.
    #[arg(long, global = true)]
    users: Option<PathBuf>,

    /// Override the questions output file.
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Save the built-in sample users and questions.
    Demo {
        /// Create missing parent directories first.
        #[arg(long)]
        create_dirs: bool,
    },
    /// Print the resolved output paths.
    Paths,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Paths => {
            println!("users:     {}", config.users_path.display());
            println!("questions: {}", config.questions_path.display());
            Ok(true)
        }
        Command::Demo { create_dirs } => {
            if create_dirs {
                ensure_parent(&config.users_path)?;
                ensure_parent(&config.questions_path)?;
            }
            let writer = DataWriter::new(config);

            let users = sample_users();
            let users_ok = report("users", users.len(), writer.save_users(&users).is_ok());

            let questions = sample_questions();
            let questions_ok =
                report("questions", questions.len(), writer.save_questions(&questions).is_ok());

            Ok(users_ok && questions_ok)
        }
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::load_or_default(StoreConfig::default_settings_path()),
    };
    if let Some(users) = &cli.users {
        config.users_path = users.clone();
    }
    if let Some(questions) = &cli.questions {
        config.questions_path = questions.clone();
    }
    Ok(config)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(())
}

fn report(what: &str, count: usize, ok: bool) -> bool {
    if ok {
        println!("saved {count} {what}");
    } else {
        println!("could not save {what}");
    }
    ok
}
