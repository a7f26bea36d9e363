//! Pattern 3: Three Ways to Wait
//!
//! Run with: cargo run --bin async_delay
//! Shorten the wait with `delay_ms = 200` in tour.toml.

use colored::Colorize;
use feature_tour::delay::{
    fetch_all, fetch_async, fetch_with_callback, fetch_with_continuations, load_and_report,
    run_style,
};
use feature_tour::{logging, FetchError, MockSource, Style, TourConfig, TourError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TourError> {
    let config = TourConfig::load()?;
    logging::init(&config.log_filter);
    let source = MockSource::from_config(&config);

    println!("{}", "=== 1. Callback ===".bold());
    let handle = fetch_with_callback(&source, |outcome| match outcome {
        Ok(data) => println!("callback received: {}", data),
        Err(err) => println!("callback received error: {}", err),
    });
    println!("(callback scheduled, main keeps going)");
    handle.await.map_err(FetchError::from)?;

    println!("\n{}", "=== 2. Promise with continuations ===".bold());
    println!("then: {}", fetch_with_continuations(&source).await);

    println!("\n{}", "=== 3. async/await ===".bold());
    let data = fetch_async(&source).await?;
    println!("awaited: {}", data);

    println!("\n{}", "=== Error paths ===".bold());
    let failing = source.clone().failing("simulated outage");
    println!("catch: {}", fetch_with_continuations(&failing).await);
    println!("try/catch: {}", load_and_report(&failing).await);

    println!("\n{}", "=== Promise.all ===".bold());
    let sources = MockSource::staggered(&config);
    for data in fetch_all(&sources).await? {
        println!("  {}", data);
    }

    println!("\n{}", "=== Equivalence ===".bold());
    let mut outcomes = Vec::new();
    for style in Style::ALL {
        let data = run_style(style, &source).await?;
        println!("{:>12}: {}", style.label(), data);
        outcomes.push(data);
    }
    if outcomes.iter().all(|data| data == &outcomes[0]) {
        println!("{}", "✓ All three styles produced the same result".green());
    } else {
        println!("{}", "✗ Styles disagree".red());
    }

    Ok(())
}
