use clap::Parser;
use daytime_core::{DaytimeError, DEFAULT_PORT};
use std::ffi::OsString;
use std::ops::RangeInclusive;

#[derive(Parser, Debug)]
#[command(name = "daytimetcpcli", author, version, about, long_about = None)]
pub struct Cli {
    /// IPv4 address of the daytime server, in dotted-decimal form
    #[arg(value_name = "IPaddress")]
    pub address: String,

    #[arg(long, short, value_parser = port_in_range, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Print connection diagnostics to stderr
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, DaytimeError> {
        Cli::parse_from_args(std::env::args_os())
    }

    /// Like `try_parse_from`, but argument mistakes come back as a usage error. Help and
    /// version requests still print and exit straight away.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, DaytimeError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => {
                let rendered = e.render().to_string();
                let message = rendered.trim_start_matches("error: ").trim_end();
                Err(DaytimeError::Usage(message.to_string()))
            }
        }
    }
}

const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid port number", s))?;
    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "Port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}
