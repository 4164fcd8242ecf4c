mod gateway;

use clap::{Parser, Subcommand};
use mimus_channels::discord::DiscordChannel;
use mimus_core::{config, traits::{Channel, Engine}};
use mimus_engines::{artifact::ArtifactStore, ollama::OllamaEngine, prompt, worker};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "mimus",
    version,
    about = "Mimus — Discord bridge to a local language model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Mimus bridge.
    Start,
    /// Check engine availability and channel configuration.
    Status,
    /// Send a one-shot prompt to the engine.
    Ask {
        /// The text to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    // RUST_LOG wins when set; otherwise the configured level applies.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.mimus.log_level)),
        )
        .init();

    match cli.command {
        Commands::Start => {
            let engine = build_engine(&cfg)?;
            if !engine.is_available().await {
                anyhow::bail!(
                    "engine '{}' is not available. Is the local model server running?",
                    engine.name()
                );
            }

            // Build channels.
            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            let mut message_limit = mimus_core::config::DiscordConfig::default().message_limit;

            let mut identity = None;
            if let Some(ref dc) = cfg.channel.discord {
                if dc.enabled {
                    if dc.bot_token.is_empty() {
                        anyhow::bail!(
                            "Discord is enabled but bot_token is empty. Set it in config.toml."
                        );
                    }
                    let channel = DiscordChannel::new(dc.clone());
                    identity = Some(channel.resolve_identity().await?);
                    message_limit = dc.message_limit;
                    channels.insert("discord".to_string(), Arc::new(channel));
                }
            }

            let Some(identity) = identity else {
                anyhow::bail!("No channels enabled. Enable at least one channel in config.toml.");
            };

            // Build the artifact store and the single-slot worker.
            let data_dir = PathBuf::from(config::shellexpand(&cfg.mimus.data_dir));
            let artifacts = ArtifactStore::new(data_dir.join("artifacts"));
            let engine_name = engine.name().to_string();
            let worker = worker::spawn(engine, artifacts.clone());

            println!("Mimus — Starting bridge...");
            let gw = Arc::new(gateway::Gateway::new(
                channels,
                identity,
                worker,
                artifacts,
                message_limit,
                engine_name,
            ));
            gw.run().await?;
        }
        Commands::Status => {
            println!("Mimus — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Default engine: {}", cfg.engine.default);
            println!();

            let engine = build_engine(&cfg)?;
            let available = engine.is_available().await;
            println!(
                "  {}: {}",
                engine.name(),
                if available { "available" } else { "not reachable" }
            );
            println!();

            if let Some(ref dc) = cfg.channel.discord {
                println!(
                    "  discord: {}",
                    if dc.enabled && !dc.bot_token.is_empty() {
                        "configured"
                    } else if dc.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  discord: not configured");
            }
        }
        Commands::Ask { message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: mimus ask <message>");
            }

            let text = message.join(" ");
            let engine = build_engine(&cfg)?;

            if !engine.is_available().await {
                anyhow::bail!(
                    "engine '{}' is not available. Is the local model server running?",
                    engine.name()
                );
            }

            let response = engine.generate(&prompt::build_prompt(&text)).await?;
            println!("{response}");
        }
    }

    Ok(())
}

/// Build the configured engine.
fn build_engine(cfg: &config::Config) -> anyhow::Result<Arc<dyn Engine>> {
    match cfg.engine.default.as_str() {
        "ollama" => {
            let oc = cfg.engine.ollama.clone().unwrap_or_default();
            Ok(Arc::new(OllamaEngine::from_config(oc)))
        }
        other => anyhow::bail!("unsupported engine: {other}"),
    }
}
