//! Pattern 2: Closed Sum Types
//!
//! Run with: cargo run --bin shape_area

use colored::Colorize;
use feature_tour::shape::{area, describe_area, parse_shape, Shape};
use feature_tour::{logging, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::load()?;
    logging::init(&config.log_filter);

    println!("{}", "=== Exhaustive Match ===".bold());
    let circle = Shape::circle(5.0);
    let rectangle = Shape::rectangle(4.0, 6.0);
    println!("{:?} -> {}", circle, area(&circle));
    println!("{:?} -> {}", rectangle, area(&rectangle));

    println!("\n{}", "=== Decoding Tagged JSON ===".bold());
    let parsed = parse_shape(r#"{"shape":"circle","radius":5}"#)?;
    println!("parsed {} with area {:.4}", parsed.kind(), area(&parsed));

    let inputs = [
        r#"{"shape":"rectangle","width":4,"height":6}"#,
        r#"{"shape":"triangle","base":3,"height":4}"#,
        r#"{"width":4,"height":6}"#,
    ];
    for input in inputs {
        println!("{} -> {}", input, describe_area(input));
    }

    println!(
        "\n{}",
        format!("✓ {} variants, all handled", Shape::KINDS.len()).green()
    );
    Ok(())
}
