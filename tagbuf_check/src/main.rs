use anyhow::Result;
use std::env;
use std::io;
use tagbuf_check::CheckConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = CheckConfig::from_env(env::args().skip(1))?;
    let report = tagbuf_check::check_file(&config)?;

    println!("{}", report.identical);

    Ok(())
}
