use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file with defaults if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Connect to every service, run the liveness checks, then exit.
    #[arg(long)]
    pub check: bool
}
