mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seohub-cli")]
#[command(about = "SEO research hub command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Research keywords and write the SEO master plan workbook.
    Generate {
        /// Keyword to research; repeat for several.
        #[arg(long = "keyword", short = 'k')]
        keywords: Vec<String>,

        /// File with one keyword per line (`#` starts a comment).
        #[arg(long)]
        keywords_file: Option<PathBuf>,

        /// Where to write the workbook.
        #[arg(long, short = 'o', default_value = seohub_report::REPORT_FILENAME)]
        output: PathBuf,

        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true, default_value = "")]
        groq_key: String,

        #[arg(long, env = "SERPER_API_KEY", hide_env_values = true, default_value = "")]
        serper_key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = seohub_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Generate {
            keywords,
            keywords_file,
            output,
            groq_key,
            serper_key,
        } => {
            let keywords = generate::collect_keywords(keywords, keywords_file.as_deref())?;
            let credentials = seohub_core::Credentials::new(serper_key, groq_key);
            generate::run_generate(&config, &credentials, &keywords, &output).await?;
        }
    }

    Ok(())
}
