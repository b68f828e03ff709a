use anyhow::Result;
use daytime_core::{fetch, Endpoint};
use std::io::stdout;
use tracing::debug;

mod cli;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse_args()?;
    logging::init_tracing(cli.verbose);

    let endpoint = Endpoint::parse(&cli.address, cli.port)?;
    let received = fetch(&endpoint, stdout().lock())?;

    debug!(bytes = received, "done");
    Ok(())
}
