use clap::{Parser, ValueEnum};
use strum_macros::Display;

/// Direction of the conversion
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq, Display)]
pub enum OperationMode {
    /// IPv6 addresses in, `ip6.arpa` PTR record lines out
    #[value(name = "forward")]
    #[strum(serialize = "forward")]
    Forward,
    /// Zone file PTR records in, `address<TAB>host` lines out
    #[value(name = "reverse")]
    #[strum(serialize = "reverse")]
    Reverse,
}

/// Command-line arguments for the program
#[derive(Parser, Debug)]
#[command(
    name = "rdns6",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert IPv6 addresses read from stdin into ip6.arpa PTR record lines",
)]
pub struct CommandArgs {
    /// Conversion direction
    #[arg(
        short = 'm',
        long = "mode",
        value_enum,
        default_value_t = OperationMode::Forward,
        ignore_case = true
    )]
    pub operation_mode: OperationMode,

    /// Print status information and skipped lines to stderr
    #[arg(short, long, default_value_t = false, env = "RDNS6_VERBOSE")]
    pub verbose: bool,

    /// Don't colour status messages
    #[arg(long, env = "RDNS6_NO_COLOR")]
    pub no_color: bool,
}

/// Retrieves the parsed command-line arguments
pub fn get_parsed_args() -> CommandArgs {
    CommandArgs::parse()
}
