//! `generate` command: the same research run the server performs, written to
//! a local file instead of an HTTP response.

use std::path::Path;

use anyhow::Context;
use seohub_core::{normalize_keywords, AppConfig, Credentials};
use seohub_research::{run_research, LiveServiceFactory, ServiceFactory, Throttle};

/// Merges `--keyword` values with the lines of `--keywords-file`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or no keyword remains after
/// blanks and comments are dropped.
pub(crate) fn collect_keywords(
    from_args: Vec<String>,
    file: Option<&Path>,
) -> anyhow::Result<Vec<String>> {
    let mut raw = from_args;
    if let Some(path) = file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keywords file {}", path.display()))?;
        raw.extend(parse_keywords_file(&contents));
    }

    let keywords = normalize_keywords(raw);
    if keywords.is_empty() {
        anyhow::bail!("no keywords given; pass --keyword or --keywords-file");
    }
    Ok(keywords)
}

pub(crate) fn parse_keywords_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToOwned::to_owned)
        .collect()
}

/// Runs every keyword through the pipeline and writes the workbook to
/// `output`.
///
/// # Errors
///
/// Returns an error if either key is missing, the service clients cannot be
/// built, the research produced no rows, or the file cannot be written.
pub(crate) async fn run_generate(
    config: &AppConfig,
    credentials: &Credentials,
    keywords: &[String],
    output: &Path,
) -> anyhow::Result<()> {
    if credentials.serper_key.is_empty() || credentials.groq_key.is_empty() {
        anyhow::bail!("missing API keys; set --groq-key/--serper-key or GROQ_API_KEY/SERPER_API_KEY");
    }

    let services = LiveServiceFactory::new(config.clone())
        .build(credentials)
        .context("failed to build service clients")?;
    let throttle = Throttle::from(config.throttle);

    tracing::info!(keywords = keywords.len(), output = %output.display(), "starting research run");
    let tables = run_research(&services, &throttle, keywords).await;

    let workbook = seohub_report::build_workbook(&tables)?;
    tokio::fs::write(output, &workbook)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "wrote {} ({} sheets, {} bytes)",
        output.display(),
        seohub_report::sheet_names(&tables).len(),
        workbook.len()
    );
    Ok(())
}
