use anyhow::Result;
use focscraper::{config::ScrapeConfig, pipeline};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) scrape the fixed page into the fixed file ────────────────
    let config = ScrapeConfig::default();
    let summary = pipeline::run(&config)?;

    info!(
        rows = summary.rows,
        columns = summary.columns,
        "all done → {}",
        summary.path.display()
    );
    Ok(())
}
