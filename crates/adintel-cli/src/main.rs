mod analyze;

use clap::{Parser, Subcommand};

use adintel_core::load_brands;

#[derive(Debug, Parser)]
#[command(name = "adintel")]
#[command(about = "Competitive ad intelligence: collect, analyze, report")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full collect -> analyze -> report pipeline.
    Analyze {
        /// Analyze one brand instead of the whole active roster.
        #[arg(long)]
        brand: Option<String>,
        /// Skip the webhook notification for this run.
        #[arg(long)]
        no_notify: bool,
    },
    /// List the configured brand roster and lookup targets.
    Brands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = adintel_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { brand, no_notify } => {
            let report = analyze::run_analysis(&config, brand.as_deref(), !no_notify).await?;
            println!("{report}");
        }
        Commands::Brands => {
            let roster = load_brands(&config.brands_path)?;
            for brand in &roster.brands {
                let target = brand
                    .lookup_url()
                    .unwrap_or_else(|| "(no lookup target)".to_string());
                let state = if brand.active { "active" } else { "inactive" };
                println!("{:<24} {:<8} {}", brand.slug(), state, target);
            }
        }
    }

    Ok(())
}
