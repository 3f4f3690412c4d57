mod config;
mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use config::{MarketcrewConfig, API_KEY_ENV};
use display::TerminalDisplay;
use marketcrew_agent::OpenAiBackend;
use marketcrew_channels::{Credentials, Platform, PublisherSet};
use marketcrew_orchestrator::{
    CampaignRequest, Pipeline, PipelineRun, Roster, CONTENT_TASKS, MEDIA_TASKS,
};
use marketcrew_trace::Annotator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marketcrew", about = "Marketcrew: AI marketing crew for ad copy, images and social posts")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "marketcrew.toml")]
    config: PathBuf,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate copy and an image for a product, then post it
    Run(RunArgs),
    /// Show the agents and task order
    Roster,
}

#[derive(Args)]
struct RunArgs {
    /// Product website to analyse
    #[arg(long, default_value = "https://aminutewithmary.com")]
    website: String,

    /// Extra product details
    #[arg(long, conflicts_with = "details_file")]
    details: Option<String>,

    /// Read product details from a file
    #[arg(long)]
    details_file: Option<PathBuf>,

    /// Facebook page access token
    #[arg(long, env = "FACEBOOK_ACCESS_TOKEN", hide_env_values = true)]
    facebook_token: Option<String>,

    /// Instagram access token
    #[arg(long, env = "INSTAGRAM_ACCESS_TOKEN", hide_env_values = true)]
    instagram_token: Option<String>,

    /// Twitter bearer token
    #[arg(long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    twitter_token: Option<String>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl RunArgs {
    fn credentials(&self) -> Credentials {
        let mut creds = Credentials::new();
        creds.set_opt(Platform::Facebook, self.facebook_token.clone());
        creds.set_opt(Platform::Instagram, self.instagram_token.clone());
        creds.set_opt(Platform::Twitter, self.twitter_token.clone());
        creds
    }

    async fn product_details(&self) -> anyhow::Result<String> {
        match (&self.details, &self.details_file) {
            (Some(details), _) => Ok(details.clone()),
            (None, Some(path)) => tokio::fs::read_to_string(path).await.map_err(|e| {
                anyhow::anyhow!(
                    "Failed to read details file '{}': {}",
                    path.display(),
                    e
                )
            }),
            (None, None) => Ok(String::new()),
        }
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing, so token flags can fall back to .env values.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.log_json);

    let mut config = MarketcrewConfig::load(&cli.config)?;
    config.apply_api_key(std::env::var(API_KEY_ENV).ok());

    match cli.command {
        Commands::Run(args) => run(config, args).await,
        Commands::Roster => {
            print_roster(&Roster::default());
            Ok(())
        }
    }
}

async fn run(config: MarketcrewConfig, args: RunArgs) -> anyhow::Result<()> {
    config.require_api_key()?;

    let request = CampaignRequest::new(&args.website, args.product_details().await?);
    let credentials = args.credentials();

    let backend = Arc::new(OpenAiBackend::new(config.model.clone()));
    let pipeline = Pipeline::new(
        backend.clone(),
        backend,
        PublisherSet::from_config(&config.social),
    );

    let annotator_config = config
        .annotator
        .clone()
        .with_role_markers(pipeline.roster().roles());
    let mut annotator = Annotator::new(&annotator_config, TerminalDisplay::default())?;

    info!(
        model = %config.model.model_id,
        website = %request.product_website,
        platforms = credentials.present().count(),
        "Running marketing crew"
    );

    let result = pipeline.run(&request, &credentials, &mut annotator).await;
    let terminal = annotator.finish();
    let run = result?;
    info!(blocks = terminal.flushed(), "Trace complete");

    match args.output {
        OutputFormat::Text => print_summary(&run),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&run)?),
    }
    Ok(())
}

fn print_summary(run: &PipelineRun) {
    println!("\n== Social media copy ==\n{}", run.generated_copy);
    println!("\n== Image prompt ==\n{}", run.generated_image_prompt);
    match (&run.generated_image_url, &run.image_error) {
        (Some(url), _) => println!("\n== Image ==\n{url}"),
        (None, Some(err)) => println!("\n== Image ==\nnot generated: {err}"),
        (None, None) => {}
    }
    if run.posts.is_empty() {
        println!("\nNothing posted.");
    } else {
        println!("\n== Posting ==");
        for post in &run.posts {
            match &post.error {
                None => println!("  {}: shared", post.platform),
                Some(err) => println!("  {}: failed ({err})", post.platform),
            }
        }
    }
    println!("\nRun {}", run.run_id);
}

fn print_roster(roster: &Roster) {
    println!("Agents:");
    for profile in roster.profiles() {
        println!("  {}", profile.role);
        println!("    goal: {}", profile.goal);
    }
    println!("\nContent crew: {}", CONTENT_TASKS.join(" -> "));
    println!("Media crew:   {}", MEDIA_TASKS.join(" -> "));
}
