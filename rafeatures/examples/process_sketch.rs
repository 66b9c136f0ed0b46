//! Process a sketch and print what would be generated, without writing.

use rafeatures::prelude::*;
use std::path::Path;

fn main() -> Result<(), RaFeaturesError> {
    let mut args = std::env::args().skip(1);
    let sketch = args
        .next()
        .unwrap_or_else(|| "tests/fixtures/Reef.ino".to_string());
    let rules = args
        .next()
        .unwrap_or_else(|| "tests/fixtures/feature.txt".to_string());
    let sketch = Path::new(&sketch);

    if !sketch.exists() {
        eprintln!("File not found: {}", sketch.display());
        eprintln!("Usage: cargo run --example process_sketch [path/to/sketch.ino] [feature.txt]");
        std::process::exit(1);
    }

    let options = ProcessOptions {
        rules_file: Some(rules.into()),
        offline: true,
        dry_run: true,
        ..Default::default()
    };

    let report = RaFeaturesCore::run_blocking(sketch, &options, None)?;

    println!("Features for: {}", report.sketch.display());
    for feature in &report.features {
        println!("  #define {:<40} {}", feature.symbol, feature.description);
    }

    for event in report.unknown_labels() {
        println!("Unknown label: {}", event.key());
    }

    Ok(())
}
