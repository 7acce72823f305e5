//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ContextOptions};
use crate::domain::{AppError, EnvKey, PersistScope, RepoKind, ResolvedPathMap, ShellDialect};

const LOG_ENV: &str = "REPOENV_LOG";

#[derive(Parser)]
#[command(name = "repoenv")]
#[command(version)]
#[command(
    about = "Locate sibling repositories and export environment variables pointing to them",
    long_about = None
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Configuration file
    #[arg(long, global = true, env = "REPOENV_CONFIG")]
    config: Option<PathBuf>,
    /// Levels scanned below the filesystem root when every candidate misses (0 disables)
    #[arg(long, global = true)]
    fallback_depth: Option<usize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct AnchorArgs {
    /// Repository the bootstrap runs from (defaults to the current directory)
    #[arg(short, long)]
    anchor: Option<PathBuf>,
    /// Which repository the anchor is (config, scripts, dotfiles)
    #[arg(long, default_value = "config")]
    anchor_repo: RepoKind,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve all repositories and set the environment variables
    #[clap(visible_alias = "i")]
    Init {
        #[command(flatten)]
        anchor: AnchorArgs,
        /// Persisted scope to write (repeatable; defaults to the config file)
        #[arg(short, long = "scope", conflicts_with = "no_persist")]
        scopes: Vec<PersistScope>,
        /// Only update the current process
        #[arg(long)]
        no_persist: bool,
        /// Print the resolved map as JSON instead of change lines
        #[arg(long)]
        json: bool,
    },
    /// Print the resolved map without changing anything
    #[clap(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        anchor: AnchorArgs,
        /// Print JSON instead of KEY=value lines
        #[arg(long)]
        json: bool,
    },
    /// Print the candidate locations for one repository in probe order
    #[clap(visible_alias = "c")]
    Candidates {
        /// Repository (config, scripts, dotfiles)
        repo: RepoKind,
        /// Repository the bootstrap runs from (defaults to the current directory)
        #[arg(short, long)]
        anchor: Option<PathBuf>,
    },
    /// Print persisted values as shell statements
    #[clap(visible_alias = "e")]
    Export {
        /// Persisted scope to read
        #[arg(short, long, default_value = "user")]
        scope: PersistScope,
        /// Target shell (posix, fish, powershell)
        #[arg(long, default_value = "posix")]
        shell: ShellDialect,
    },
    /// Remove every managed variable
    Clear {
        /// Persisted scope to clear (repeatable; defaults to the config file)
        #[arg(short, long = "scope")]
        scopes: Vec<PersistScope>,
    },
}

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ContextOptions { config_path: cli.config, fallback_depth: cli.fallback_depth };

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { anchor, scopes, no_persist, json } => {
            let scopes = if no_persist { Some(Vec::new()) } else { non_empty(scopes) };
            run_init(&options, anchor, scopes, json)
        }
        Commands::Resolve { anchor, json } => run_resolve(&options, anchor, json),
        Commands::Candidates { repo, anchor } => run_candidates(&options, repo, anchor),
        Commands::Export { scope, shell } => {
            api::export(&options, scope, shell).map(|script| print!("{script}"))
        }
        Commands::Clear { scopes } => run_clear(&options, non_empty(scopes)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn non_empty(scopes: Vec<PersistScope>) -> Option<Vec<PersistScope>> {
    if scopes.is_empty() { None } else { Some(scopes) }
}

fn run_init(
    options: &ContextOptions,
    anchor: AnchorArgs,
    scopes: Option<Vec<PersistScope>>,
    json: bool,
) -> Result<(), AppError> {
    let outcome = api::init(options, anchor.anchor.as_deref(), anchor.anchor_repo, scopes)?;
    if json {
        println!("{}", to_json(&outcome.map)?);
    } else {
        for change in &outcome.report.changes {
            println!("{change}");
        }
    }
    Ok(())
}

fn run_resolve(options: &ContextOptions, anchor: AnchorArgs, json: bool) -> Result<(), AppError> {
    let map = api::resolve(options, anchor.anchor.as_deref(), anchor.anchor_repo)?;
    if json {
        println!("{}", to_json(&map)?);
    } else {
        for key in EnvKey::ALL {
            println!("{}={}", key, map.value_string(key).unwrap_or_default());
        }
    }
    Ok(())
}

fn run_candidates(
    options: &ContextOptions,
    repo: RepoKind,
    anchor: Option<PathBuf>,
) -> Result<(), AppError> {
    for candidate in api::candidates(options, repo, anchor.as_deref())? {
        println!("{}", candidate.display());
    }
    Ok(())
}

fn run_clear(options: &ContextOptions, scopes: Option<Vec<PersistScope>>) -> Result<(), AppError> {
    let report = api::clear(options, scopes)?;
    for change in &report.changes {
        println!("[env:clear] {}", change.key);
    }
    Ok(())
}

fn to_json(map: &ResolvedPathMap) -> Result<String, AppError> {
    serde_json::to_string_pretty(map).map_err(|e| AppError::Io(e.into()))
}
