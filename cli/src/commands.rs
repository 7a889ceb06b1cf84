pub mod report;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "eonmap")]
#[command(about = "Correlates CMDB assets with their deployment hosts.")]
#[command(version)]
pub struct CommandLine {
    /// Directory containing assetmap.txt, deployments.txt and cmdb_eon_map.txt
    #[arg(short, long)]
    pub directory: PathBuf,

    /// Hide the header and summary (-qq hides warnings too)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Report every skipped or unmatched record
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
