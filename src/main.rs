//! Main entry point for the gtranslate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gtranslate::cli::commands::{self, Commands};
use gtranslate::{GoogleTranslator, TranslatorConfig};

/// gtranslate - rate-limited client for the Google Translate web page
#[derive(Parser, Debug)]
#[command(name = "gtranslate", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Translate page endpoint (defaults to GTRANSLATE_ENDPOINT or the public page)
    #[arg(long)]
    endpoint: Option<String>,

    /// Send requests without waiting between them
    #[arg(long)]
    no_rate_control: bool,

    /// Minimum delay between requests in milliseconds
    #[arg(long)]
    rate_delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// CLI settings layered over the loaded configuration
struct ConfigOverrides {
    endpoint: Option<String>,
    no_rate_control: bool,
    rate_delay_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Load configuration and apply CLI args on top; only commands that talk
    /// to the service need this.
    fn load(&self) -> anyhow::Result<TranslatorConfig> {
        let mut config = TranslatorConfig::load()?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if self.no_rate_control {
            config.rate_control = false;
        }
        if let Some(rate_delay_ms) = self.rate_delay_ms {
            config.rate_delay_ms = rate_delay_ms;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(args).await
}

/// Execute the parsed command
async fn run(args: Args) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        endpoint: args.endpoint,
        no_rate_control: args.no_rate_control,
        rate_delay_ms: args.rate_delay_ms,
    };

    // Execute command
    match args.command {
        Some(Commands::Translate { from, to, text }) => {
            let translator = GoogleTranslator::new(overrides.load()?)?;
            commands::handle_translate(translator, text, from, to).await?;
        }
        Some(Commands::Batch {
            file,
            output,
            from,
            to,
        }) => {
            let translator = GoogleTranslator::new(overrides.load()?)?;
            commands::handle_batch(translator, file, output, from, to).await?;
        }
        Some(Commands::Languages) => {
            commands::handle_languages();
        }
        Some(Commands::Server { host, port }) => {
            let translator = GoogleTranslator::new(overrides.load()?)?;
            commands::handle_server(translator, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_commands_skip_config() {
        std::env::set_var("GTRANSLATE_RATE_CONTROL", "yes");

        let args = Args::try_parse_from(["gtranslate", "languages"]).unwrap();
        assert!(run(args).await.is_ok());

        let args =
            Args::try_parse_from(["gtranslate", "translate", "--from", "en", "--to", "fr", "hello"]).unwrap();
        assert!(run(args).await.is_err());

        std::env::remove_var("GTRANSLATE_RATE_CONTROL");
    }
}
