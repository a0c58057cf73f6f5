//! Example showing an event-driven progress line for an HTTP download

use color_eyre::Result;
use futures::StreamExt;
use rainbar::{ProgressBarBuilder, RefreshMethod};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/bytes/102400".to_string());

    let bar = ProgressBarBuilder::new("Download", 0)
        .refresh_method(RefreshMethod::Event)
        .build();

    let response = reqwest::get(&url).await?.error_for_status()?;
    let mut progress = bar.response_progress();
    let mut body = std::pin::pin!(progress.observe_response(response));

    let mut received = 0usize;
    while let Some(chunk) = body.next().await {
        received += chunk?.as_ref().len();
    }

    println!("\nDownloaded {} bytes from {}", received, url);
    Ok(())
}
