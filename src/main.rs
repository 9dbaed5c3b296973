use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use krypt::cli::{
    handle_create_command, handle_edit_command, handle_list_command, handle_reseal_command,
    handle_seal_command, handle_unseal_command, handle_view_command, BatchOutcome, CreateArgs,
    EditArgs, ResealArgs, SealArgs, UnsealArgs, ViewArgs,
};
use krypt::config::{KryptPaths, Settings};

#[derive(Parser)]
#[command(
    name = "krypt",
    author = "Kaylee Beyene",
    version,
    about = "Encrypt and decrypt files with a password",
    long_about = "krypt seals files in place with a password-derived key. Sealed \
                  files record their format version and cipher, so they can be \
                  unsealed, viewed, edited or re-sealed without any other metadata."
)]
struct Cli {
    /// Config file (default searches ./config.yml, the user config dir and /etc/krypt)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Include debug statements in log output
    #[arg(short = 'D', long, global = true, hide = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seal file(s) in place
    #[command(alias = "s")]
    Seal(SealArgs),

    /// Unseal encrypted file(s)
    #[command(aliases = ["u", "unsl"])]
    Unseal(UnsealArgs),

    /// List the available cipher methods
    #[command(alias = "l")]
    List,

    /// Decrypt and view the contents of a sealed file without editing
    #[command(alias = "v")]
    View(ViewArgs),

    /// Decrypt, edit and encrypt an encrypted file
    #[command(alias = "e")]
    Edit(EditArgs),

    /// Create a new encrypted text file
    #[command(alias = "c")]
    Create(CreateArgs),

    /// Change the password/cipher on encrypted file(s)
    #[command(aliases = ["r", "rekey"])]
    Reseal(ResealArgs),
}

/// Logs go to stderr; `RUST_LOG` overrides `--debug`
fn init_telemetry(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_telemetry(cli.debug);

    let paths = KryptPaths::new(cli.config.clone());
    let settings = Settings::load(&paths).context("Failed to load configuration")?;
    if let Some(source) = &settings.source {
        debug!("config: {}", source.display());
    }

    let outcome = match cli.command {
        Commands::Seal(args) => handle_seal_command(&settings, args)?,
        Commands::Unseal(args) => handle_unseal_command(&settings, args)?,
        Commands::List => {
            handle_list_command()?;
            BatchOutcome::default()
        }
        Commands::View(args) => handle_view_command(&settings, args)?,
        Commands::Edit(args) => handle_edit_command(&settings, args)?,
        Commands::Create(args) => handle_create_command(&settings, args)?,
        Commands::Reseal(args) => handle_reseal_command(&settings, args)?,
    };

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
