use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

use pimon::commands;

fn build_cli() -> Command {
    Command::new("pimon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("System health monitor for single-board and edge devices")
        .subcommand(
            Command::new("run")
                .about("Run the collector loop in the foreground")
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .value_name("SECONDS")
                        .help("Seconds between collections")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("history-file")
                        .long("history-file")
                        .value_name("PATH")
                        .help("File holding the rolling sample history"),
                )
                .arg(
                    Arg::new("interface")
                        .long("interface")
                        .value_name("NAME")
                        .help("Wireless interface to monitor"),
                )
                .arg(
                    Arg::new("log-file")
                        .long("log-file")
                        .value_name("PATH")
                        .help("Also write logs to this file"),
                ),
        )
        .subcommand(
            Command::new("status")
                .about("Show current cpu/memory utilization")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the snapshot as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Show recently recorded samples")
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Number of samples to show (default 10)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the samples as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => {
            commands::run::execute(sub_matches)?;
        }
        Some(("status", sub_matches)) => {
            commands::status::execute(sub_matches)?;
        }
        Some(("history", sub_matches)) => {
            commands::history::execute(sub_matches)?;
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut build_cli())?;
        }
        Some(("version", _)) => {
            commands::version::execute()?;
        }
        _ => {
            println!("Use 'pimon --help' for more information.");
        }
    }

    Ok(())
}
