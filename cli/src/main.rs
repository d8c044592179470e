use anyhow::Result;
use clap::Parser;
use segment_smoke::{
    smoke,
    transport::{self, Transport},
    Args,
};
use vantage_client::VantageClient;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default level info, overridable with RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client = match VantageClient::new(&args.api_url, &args.token) {
        Ok(client) => client,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    let transport = Transport::new(&transport::user_agent());

    match smoke::run(&client, |req| transport.execute(req), &args.name) {
        Ok(segment) => log::info!(
            "smoke test passed: token={} track_unallocated={}",
            segment.token,
            segment.track_unallocated
        ),
        Err(err) => println!("{err}"),
    }

    Ok(())
}
