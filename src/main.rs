use anyhow::Result;
use clap::{Parser, Subcommand};

use jan_membership::config::Config;
use jan_membership::{logging, web};

#[derive(Parser)]
#[command(name = "jan-membership")]
#[command(about = "Membership registration portal for Jirel Association Nepal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the registration portal (the default)
    Serve {
        /// Listening port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let _logging = logging::init_logging(&config, cli.debug)?;

    if config.uses_default_secret() {
        tracing::warn!(
            "using the built-in session secret; set MEMBERSHIP__SERVER__SECRET_KEY in production"
        );
    }

    let port = match cli.command {
        Some(Commands::Serve { port }) => port,
        None => None,
    }
    .unwrap_or(config.server.port);

    let state = web::AppState::from_config(&config)?;
    web::serve(state, port).await
}
