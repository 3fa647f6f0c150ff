use std::error::Error;

use pairmatch::Matcher;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs from the engine (span, outcome line) land on stderr; tune with
    // RUST_LOG, e.g. `RUST_LOG=pairmatch=info cargo run --example pairing_demo`.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Doubles of 1..=10 on one side, the strings "1".."10" on the other.
    let mut numbers = Matcher::new((1..=10).map(|n| 2 * n));
    println!("numbers: {numbers}");

    let mut strings: Matcher<String> = (1..=10).map(|n| n.to_string()).collect();
    println!("strings: {strings}");

    let pairs = numbers.match_with(&mut strings, |num, s| num.to_string() == *s)?;

    println!("pairs matched by {{ num.to_string() == s }}:");
    for pair in &pairs {
        println!("  {} <-> {:?}", pair.left, pair.right);
    }
    println!("as json: {}", serde_json::to_string(&pairs)?);

    println!("numbers after matching: {numbers}");
    println!("strings after matching: {strings}");

    Ok(())
}
