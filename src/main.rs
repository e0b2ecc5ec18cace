use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::sync::RwLock;

use reel_cards::{
    ui::render, Config, HttpRecommendationApi, Page, PageBindings,
    RecommendationRequester, StderrNotifier,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Numbered lines for the terminal
    Text,
    /// HTML fragment with one movie card per recommendation
    Html,
}

/// Fetch movie recommendations and render them as cards
#[derive(Parser)]
#[command(name = "reel-cards")]
#[command(about = "Movie recommendation cards from a recommendation API", long_about = None)]
struct Cli {
    /// Movie title to get recommendations for
    movie: String,

    /// Recommendation API base URL (overrides RECS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Render at most this many cards (overrides RECS_MAX_CARDS)
    #[arg(long)]
    limit: Option<usize>,

    /// Request timeout in seconds (overrides RECS_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reel_cards=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.recs_api_url = api_url;
    }
    if let Some(limit) = cli.limit {
        config.recs_max_cards = Some(limit);
    }
    if let Some(timeout) = cli.timeout {
        config.recs_timeout_secs = timeout;
    }
    config.validate()?;

    let api = HttpRecommendationApi::from_config(&config)
        .context("Failed to build recommendation API client")?;
    let bindings = PageBindings::from(&config);
    let requester = RecommendationRequester::new(api, StderrNotifier)
        .with_bindings(bindings.clone())
        .with_max_cards(config.recs_max_cards);

    let page = RwLock::new(
        Page::new()
            .with_input(bindings.input_id.clone(), cli.movie)
            .with_container(bindings.container_id.clone()),
    );

    let outcome = requester.fetch_and_render(&page).await?;
    if !outcome.is_rendered() {
        return Ok(ExitCode::FAILURE);
    }

    let page = page.read().await;
    let container = page
        .container(&bindings.container_id)
        .context("Container element missing after render")?;
    match cli.format {
        Format::Text => print!("{}", render::container_text(container)),
        Format::Html => println!("{}", render::container_html(container)),
    }

    Ok(ExitCode::SUCCESS)
}
