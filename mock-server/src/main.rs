//! Standalone runner for the segments mock, for pointing `segment-smoke`
//! at a local server via `--api-url`.

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("segments mock listening on {addr} (POST /v2/segments, GET/PUT /v2/segments/{{token}})");
    mock_server::run(listener).await
}
