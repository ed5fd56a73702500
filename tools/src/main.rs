//! shop-runner: headless storefront simulation runner.
//!
//! Usage:
//!   shop-runner --seed 12345 --days 7 --line 100 --waitlist 50
//!   shop-runner --config shop.json --json

use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use std::env;
use storefront_core::{
    config::ShopConfig,
    generator::validate_count,
    shopfront::{RunSummary, Shopfront},
};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let days = parse_arg(&args, "--days", 1u64);
    let json_mode = args.iter().any(|a| a == "--json");

    let config = match args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str())
    {
        Some(path) => ShopConfig::load(path)?,
        None => ShopConfig::default(),
    };

    // Counts are validated, not silently defaulted: a bad --line or
    // --waitlist value should fail the run, not run with 0.
    let line = match args
        .windows(2)
        .find(|w| w[0] == "--line")
        .map(|w| w[1].as_str())
    {
        Some(raw) => validate_count(raw)?,
        None => config.default_line_size as usize,
    };
    let wait_list = match args
        .windows(2)
        .find(|w| w[0] == "--waitlist")
        .map(|w| w[1].as_str())
    {
        Some(raw) => validate_count(raw)?,
        None => config.default_wait_list_size as usize,
    };

    if !json_mode {
        println!("{} - shop-runner", config.shop_name);
        println!("  seed:      {seed}");
        println!("  days:      {days}");
        println!("  line:      {line}");
        println!("  waitlist:  {wait_list}");
        println!();
    }

    let mut shop = Shopfront::build(config, seed);
    log::debug!("run {} configured: days={days} line={line} wait_list={wait_list}", shop.run_id);

    let mut summaries: Vec<RunSummary> = Vec::with_capacity(days as usize);
    for _ in 0..days {
        summaries.push(shop.run_day(line, wait_list));
        shop.advance_day();
    }

    if json_mode {
        println!("{}", shop.metrics_json()?);
    } else {
        print_metrics_table(&shop);
        print_summary(&shop, &summaries);
    }

    Ok(())
}

fn print_metrics_table(shop: &Shopfront) {
    let today = Local::now().date_naive();

    println!("=== DAILY METRICS ===");
    println!("  {:<4} {:<12} {:>10} {:>10}", "day", "date", "in store", "income");
    for (day, metrics) in shop.metrics() {
        println!(
            "  {:<4} {:<12} {:>10} {:>10.2}",
            day,
            calendar_date(today, *day),
            metrics.total_customers_in_store,
            metrics.income
        );
    }
}

fn print_summary(shop: &Shopfront, summaries: &[RunSummary]) {
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  shop:    {}", shop.shop_name());
    println!("  run_id:  {}", shop.run_id);
    for s in summaries {
        println!(
            "  day {}: line={} waitlist={} repeats={} in store={}",
            s.day, s.line_customers, s.wait_list_customers, s.repeat_visitors,
            s.total_customers_in_store
        );
    }
}

/// Day 0 renders as today's date, day n as today plus n days.
fn calendar_date(today: NaiveDate, day: u64) -> String {
    today
        .checked_add_days(Days::new(day))
        .unwrap_or(today)
        .to_string()
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
