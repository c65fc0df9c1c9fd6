use std::io::Write;

use anyhow::Context;

use bookstore_observability::LogFormat;
use bookstore_services::StoreConfig;

fn main() -> anyhow::Result<()> {
    match std::env::var("BOOKSTORE_LOG_FORMAT").ok().as_deref().and_then(LogFormat::parse) {
        Some(format) => bookstore_observability::tracing::init(format),
        None => bookstore_observability::init(),
    }

    let config = StoreConfig::from_env().context("invalid bookstore configuration")?;
    tracing::info!(store_email = %config.store_email, rate = config.shipping_rate_per_kg, "running demo scenarios");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    bookstore_demo::run_all(&mut out, &config).context("demo scenario failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
