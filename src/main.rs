use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tower_lsp::{LspService, Server};

use php_docblocker::block;
use php_docblocker::config::Config;
use php_docblocker::doc::Doc;
use php_docblocker::logging::init_logging;
use php_docblocker::render::build_plain;
use php_docblocker::{Backend, DocblockerError};

/// PHPDoc block generator and language server.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the language server over stdio (the default).
    Lsp,
    /// Print the docblock for a single declaration line.
    Doc {
        /// The declaration, e.g. `public function add($a, $b = 1.5) {`.
        line: String,
        /// Print the documentation model as JSON instead of the block.
        #[arg(long)]
        json: bool,
        /// Read rendering options from this TOML file.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Command::Lsp) {
        Command::Lsp => {
            run_server().await;
            ExitCode::SUCCESS
        }
        Command::Doc { line, json, config } => match print_doc(&line, json, config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn run_server() {
    tracing::info!("starting language server on stdio");
    let (service, socket) = LspService::new(Backend::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket)
        .serve(service)
        .await;
}

fn print_doc(line: &str, json: bool, config_path: Option<PathBuf>) -> Result<(), DocblockerError> {
    let doc = block::parse_declaration(line).unwrap_or_else(|| {
        tracing::warn!("no declaration recognised; emitting an empty block");
        Doc::empty()
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let mut config = match std::env::current_dir() {
        Ok(cwd) => Config::load(Some(cwd.as_path()))?,
        Err(_) => Config::load(None)?,
    };
    if let Some(path) = config_path {
        if !path.is_file() {
            return Err(DocblockerError::Io {
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
                path,
            });
        }
        config.merge_file(&path)?;
    }

    println!("{}", build_plain(&doc, &config));
    Ok(())
}
