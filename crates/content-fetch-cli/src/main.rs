//! content-fetch — entry point.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use content_fetch::display::{COFFEE_LOCATOR, DOCUMENT_LOCATOR, TEA_LOCATOR};
use content_fetch::{DisplayPlan, PayloadKind};
use content_fetch_cli::cli::{fetch_cmd, plan_cmd, show_cmd};
use content_fetch_cli::config::resolve_base_url;

#[derive(Parser)]
#[command(
    name = "content-fetch",
    about = "Fetch two images and a text document concurrently and render them as a page",
    version
)]
struct Cli {
    /// Base URL that relative locators resolve against.
    /// Also reads from CONTENT_FETCH_BASE_URL env var.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both images and the document, then write an HTML page (default).
    Show {
        /// First image locator.
        #[arg(long, default_value = TEA_LOCATOR)]
        first_image: String,

        /// Second image locator.
        #[arg(long, default_value = COFFEE_LOCATOR)]
        second_image: String,

        /// Text document locator.
        #[arg(long, default_value = DOCUMENT_LOCATOR)]
        document: String,

        /// Page title.
        #[arg(long, default_value = show_cmd::DEFAULT_TITLE)]
        title: String,

        /// Write the page here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Retrieve a single resource and write its decoded body.
    Fetch {
        /// Absolute URL, or a path relative to the base URL.
        locator: String,

        /// How to decode the body (binary or text).
        #[arg(long, default_value = "binary")]
        kind: PayloadKind,

        /// Write the body here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the requests a `show` run would issue, as JSON.
    Plan,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   content-fetch completions bash > ~/.local/share/bash-completion/completions/content-fetch
    ///   content-fetch completions zsh > ~/.zfunc/_content-fetch
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Commands::Show {
        first_image: TEA_LOCATOR.to_string(),
        second_image: COFFEE_LOCATOR.to_string(),
        document: DOCUMENT_LOCATOR.to_string(),
        title: show_cmd::DEFAULT_TITLE.to_string(),
        out: None,
    });

    match command {
        Commands::Show {
            first_image,
            second_image,
            document,
            title,
            out,
        } => {
            let base = resolve_base_url(cli.base_url.as_deref())?;
            let plan = DisplayPlan::new(first_image, second_image, document);
            if !show_cmd::run(base, &plan, &title, out.as_deref()).await? {
                std::process::exit(1);
            }
        }

        Commands::Fetch { locator, kind, out } => {
            let base = resolve_base_url(cli.base_url.as_deref())?;
            let written = fetch_cmd::run(base, &locator, kind, out.as_deref()).await?;
            tracing::debug!("fetched {written} bytes from {locator}");
        }

        Commands::Plan => {
            let base = resolve_base_url(cli.base_url.as_deref())?;
            plan_cmd::run(base, &DisplayPlan::default())?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "content-fetch", &mut std::io::stdout());
        }
    }

    Ok(())
}
