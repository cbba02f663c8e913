//! Composing patterns from fragments.
//!
//! Builds a few patterns with the fluent API, prints their sources and runs
//! them against sample text. Engine decisions are logged through `tracing`.
//!
//! Run with: `RUST_LOG=zeroreg=trace cargo run --example compose`

use tracing_subscriber::EnvFilter;
use zeroreg::patterns;
use zeroreg::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("zeroreg Composition Example");
    println!("===========================\n");

    // Example 1: Phone numbers
    println!("1. Phone numbers...");
    let phone = optional("+")
        .then(digits(3))
        .then("-")
        .then(digits(3))
        .then("-")
        .then(digits(4));
    println!("   Source: {phone}");
    for m in phone.find_all("Call 555-123-4567 or +555-987-6543")? {
        println!("   Found: '{}' at {}..{}", m.text, m.start, m.end);
    }

    // Example 2: Named captures
    println!("\n2. Named captures...");
    let date = capture_named(digits(4), "year")
        .then("-")
        .then(capture_named(digits(2), "month"))
        .then("-")
        .then(capture_named(digits(2), "day"));
    println!("   Source: {date}");
    if let Some(m) = date.find("Released on 2024-03-15.")? {
        for (name, value) in &m.named {
            println!("   {name} = {value}");
        }
    }

    // Example 3: Lookaround compiles on the backtracking engine
    println!("\n3. Lookaround...");
    let price = lookbehind("$").then(digit().one_or_more());
    let matcher = price.to_regex()?;
    println!("   Source: {price} (backtracking: {})", matcher.is_fancy());
    println!(
        "   Rewritten: {}",
        price.replace_all("Pay $100 now, $25 later", "<amount>")?
    );

    // Example 4: Ready-made patterns
    println!("\n4. Catalogue...");
    for (name, input) in [
        ("email", "user@example.com"),
        ("uuid", "550e8400-e29b-41d4-a716-446655440000"),
        ("semver", "v1.0.0"),
    ] {
        if let Some(pattern) = patterns::lookup(name) {
            println!("   {name} {input:?}: {}", pattern.is_match(input)?);
        }
    }

    // Example 5: Errors surface at compile time, not while building
    println!("\n5. Invalid syntax...");
    let broken = raw("(unclosed").then(digit());
    match broken.to_regex() {
        Ok(_) => println!("   Unexpectedly compiled"),
        Err(err) => println!("   Error: {err}"),
    }

    println!("\nCache: {:?}", zeroreg::GLOBAL_CACHE.stats());
    Ok(())
}
