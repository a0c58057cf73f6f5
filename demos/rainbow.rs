//! Example showing a timer-driven rainbow progress line

use color_eyre::Result;
use rainbar::ProgressBar;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let bar = ProgressBar::new("Brewing", 100);
    bar.start(Duration::from_millis(80))?;

    // Reaching the maximum stops the timer and ends the line.
    for value in 0..=100 {
        bar.update(value)?;
        tokio::time::sleep(Duration::from_millis(40)).await;
    }

    println!("Done!");
    Ok(())
}
