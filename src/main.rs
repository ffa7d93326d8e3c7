use std::path::PathBuf;

use camino::Utf8PathBuf;
use tracing_subscriber::EnvFilter;

use dcmfixture::{FixtureSettings, generate_with};

fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .finish(),
    )
    .unwrap_or_else(|e| eprintln!("Could not set up global logger: {e}"));

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .map(Utf8PathBuf::try_from)
        .transpose()?;
    let settings = FixtureSettings::load(output)?;
    generate_with(&settings.output, &settings.options())?;
    Ok(())
}
