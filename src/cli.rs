//! Command line interface.

use crate::models::{Ipv4Address, Ipv4Notation, Ipv6Address, Port, Subnet, SubnetNotation};
use crate::output::Report;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "net-notation", version, about = "Convert and classify address notations")]
pub struct Cli {
    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// IPv4 address, optionally with a mask
    Ipv4 {
        value: String,
        /// dot, binary, cidr-short, cidr-long or cidr-binary (guessed when omitted)
        #[arg(short, long)]
        notation: Option<String>,
    },
    /// IPv4 subnet mask
    Subnet {
        value: String,
        /// dot, cidr or binary
        #[arg(short, long, default_value = "dot")]
        notation: String,
    },
    /// IPv6 address
    Ipv6 { value: String },
    /// Port number
    Port {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },
}

/// Parse the value named by `command` and build its report.
pub fn run(command: &Command) -> Result<Report, Box<dyn Error>> {
    log::debug!("run({command:?})");
    let report = match command {
        Command::Ipv4 { value, notation } => {
            let notation = match notation {
                Some(name) => name.parse::<Ipv4Notation>()?,
                None => Ipv4Notation::detect(value),
            };
            Report::for_ipv4(value, &Ipv4Address::new(value, notation))
        }
        Command::Subnet { value, notation } => {
            let notation = notation.parse::<SubnetNotation>()?;
            Report::for_subnet(value, &Subnet::new(value, notation))
        }
        Command::Ipv6 { value } => Report::for_ipv6(value, &Ipv6Address::new(value)),
        Command::Port { number } => Report::for_port(&number.to_string(), &Port::new(*number)),
    };
    if !report.valid {
        log::info!("{} {} is not valid", report.kind, report.input);
    }
    Ok(report)
}
