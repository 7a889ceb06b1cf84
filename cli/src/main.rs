mod commands;
mod terminal;

use commands::{CommandLine, report};
use eonmap_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);

    print::header("correlating inventory", cfg.quiet);
    report::report(&commands.directory, &cfg)
}
