//! chat-router binary: interactive loop or HTTP server over the same
//! classify/branch/fulfill pipeline.

use chat_router::textgen::OpenAiTextGen;
use chat_router::weather::OpenWeatherProvider;
use chat_router::{cli, server, Router, RouterCtx, Settings};
use clap::{Parser, ValueEnum};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "chat-router")]
#[command(about = "Two-intent conversational router (weather or joke)")]
#[command(version)]
struct Cli {
    /// Run the interactive terminal mode or the web server mode.
    #[arg(long, value_enum, default_value = "cli")]
    mode: Mode,

    /// Web host for --mode web.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Web port for --mode web.
    #[arg(long, default_value_t = 8101)]
    port: u16,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Cli,
    Web,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the interactive loop stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_router=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let settings = Settings::from_env()?;

    let ctx = RouterCtx::builder()
        .textgen(Arc::new(OpenAiTextGen::new(
            &settings.openai_api_key,
            &settings.model,
        )))
        .weather(Arc::new(OpenWeatherProvider::new(
            &settings.openweather_api_key,
        )))
        .build();
    let router = Router::new(ctx);

    match args.mode {
        Mode::Cli => cli::run(router).await?,
        Mode::Web => server::serve(router, &args.host, args.port).await?,
    }

    Ok(())
}
