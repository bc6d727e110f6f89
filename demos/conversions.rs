//! Prints every conversion for the current instant.
//!
//! ```text
//! EASY_TIME_PATTERN="yyyy/MM/dd HH:mm" cargo run --example conversions
//! ```

use anyhow::Result;
use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use easy_time::config::Config;
use easy_time::*;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("easy-time demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Default pattern: {} ({})", config.default_pattern, config.default_pattern.canonical());

    let now = Utc::now();
    let local = instant_to_date_time(&now)?;
    let today = instant_to_date(&now)?;

    println!("instant                {}", now.to_rfc3339());
    println!("date-time at +08:00    {}", local);
    println!("date at +08:00         {}", today);
    println!("formatted              {}", instant_to_string(&now, &config.default_pattern)?);
    println!("timestamp              {}", date_time_to_timestamp(&local));
    println!("start of day timestamp {}", date_to_timestamp(&today));
    println!("first moment of month  {}", first_moment_of_month(&today));
    println!("last moment of month   {}", last_moment_of_month(&today));

    let month = instant_to_string(&now, &MONTH_PATTERN)?;
    println!("month start instant    {}", string_to_instant(&month, &MONTH_PATTERN)?.to_rfc3339());

    let text = instant_to_string(&now, &config.default_pattern)?;
    match string_to_instant(&text, &config.default_pattern) {
        Ok(instant) => println!("round trip             {}", instant.to_rfc3339()),
        Err(e) => println!("round trip failed      {}", e),
    }

    Ok(())
}
