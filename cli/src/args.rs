use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "segment-smoke",
    author,
    version,
    about = "Smoke-tests the Vantage segments API by creating a segment and toggling track_unallocated on and off",
    long_about = None
)]
pub struct Args {
    /// Name for the segment to create
    #[arg(short, long)]
    pub name: String,

    /// Vantage API token
    #[arg(short, long, env = "VANTAGE_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Base URL of the Vantage API
    #[arg(long, default_value = "https://api.vantage.sh")]
    pub api_url: String,
}
