use clap::Parser;
use std::sync::Arc;
use tracing::info;

use md_core::config::DEFAULT_FEED_URL;
use md_core::{FeedConfig, InferenceConfig, ModelProvider, Result};
use md_extract::Extractor;
use md_feed::FeedClient;
use md_inference::{create_model, Analyzer};
use md_pipeline::{mem::spawn_memory_guard, Block, Pipeline, Sink};

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily market digest from your RSS feed", long_about = None)]
struct Cli {
    /// Model provider to use for analysis
    #[arg(long, default_value = "ollama", help = "Model provider: openai or ollama")]
    provider: ModelProvider,

    /// Model name, e.g. gpt-4o-mini or llama3.2
    #[arg(long, default_value = "llama3.2")]
    model: String,

    /// Language the analyses and summary are written in
    #[arg(long, default_value = "English")]
    language: String,

    /// Base URL of the feed service's Google Reader compatible API
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Override the model provider's base URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Context window hint for local models
    #[arg(long)]
    context_length: Option<u32>,

    /// Disable the RAM high-water-mark guard
    #[arg(long)]
    no_mem_guard: bool,
}

/// Prints markdown blocks to stdout.
struct TerminalSink;

impl Sink for TerminalSink {
    fn emit(&mut self, block: &Block) {
        match block {
            Block::Heading(title) => println!("\n## {}\n", title),
            Block::Analysis(text) | Block::Summary(text) => println!("{}\n", text),
            Block::Notice(text) => println!("{}", text),
        }
    }
}

fn build_configs(cli: &Cli) -> std::result::Result<(FeedConfig, InferenceConfig), String> {
    // Secrets are read from the environment here, once; components only
    // ever see the explicit config objects.
    let auth_token = std::env::var("FRESHRSS_AUTH_TOKEN")
        .map_err(|_| "FRESHRSS_AUTH_TOKEN is not set".to_string())?;
    let feed = FeedConfig::new(cli.feed_url.clone(), auth_token);

    let mut inference = InferenceConfig::new(cli.provider, cli.model.clone())
        .with_language(cli.language.clone());
    if let Some(endpoint) = &cli.endpoint {
        inference = inference.with_endpoint(endpoint.clone());
    }
    if let Some(context_length) = cli.context_length {
        inference = inference.with_context_length(context_length);
    }
    if cli.provider == ModelProvider::OpenAi {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| "OPENAI_API_KEY is not set but the openai provider was selected".to_string())?;
        inference = inference.with_api_key(api_key);
    }

    Ok((feed, inference))
}

async fn run(cli: Cli) -> Result<()> {
    let (feed_config, inference_config) =
        build_configs(&cli).map_err(|e| md_core::Error::External(anyhow::anyhow!(e)))?;

    let model = create_model(&inference_config)?;
    info!("🧠 Model initialized (using {})", model.name());

    let source = Arc::new(FeedClient::new(feed_config));
    let analyzer = Arc::new(Analyzer::new(
        model,
        Extractor::new(),
        inference_config.language.clone(),
    ));

    if !cli.no_mem_guard {
        spawn_memory_guard();
    }

    let pipeline = Pipeline::new(source, analyzer);
    pipeline.run(&mut TerminalSink).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
