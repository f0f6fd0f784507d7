//! Command dispatch logic for check-homematic

use super::{CheckArgs, InitArgs, ValidateArgs, check_device, init_config, validate_config};
use crate::status::Status;
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::io::Write;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "check-homematic", version, author, long_about = None)]
#[command(about = "Monitoring plugin for HomeMatic devices")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: HomematicSubcommand,
}

#[derive(Subcommand, Debug)]
enum HomematicSubcommand {
    /// Check a device and print a monitoring plugin status line
    Check(Box<CheckArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// Malformed command lines are reported on the host's error stream and end with the
/// `UNKNOWN` exit code, as monitoring systems expect from a plugin.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too, and are not failures
            if e.use_stderr() {
                let _ = write!(host.error(), "{}", e.render());
                host.exit(Status::Unknown.exit_code());
            } else {
                let _ = write!(host.output(), "{}", e.render());
                host.exit(Status::Ok.exit_code());
            }
            return Ok(());
        }
    };

    match &cli.command {
        HomematicSubcommand::Check(check_args) => check_device(host, check_args),
        HomematicSubcommand::Init(init_args) => init_config(host, init_args),
        HomematicSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
