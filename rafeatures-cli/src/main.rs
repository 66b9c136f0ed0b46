//! RAFeatures CLI - generate Reef Angel feature and label headers from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use rafeatures::rules::DEFAULT_RULES_URL;
use rafeatures::version::{code_version, read_library_version};
use rafeatures::{
    build_defaults, load_rules, HttpRulesFetcher, LabelEvent, ProcessOptions, ProcessReport,
    RaFeaturesCore, RulesFetcher, SketchbookLayout,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rafeatures")]
#[command(about = "Reef Angel sketch feature and custom label header generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug log output
    #[arg(long, global = true)]
    debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect features and labels in a sketch and write the headers
    Process {
        /// Path to the .ino sketch
        #[arg(value_name = "SKETCH")]
        sketch: PathBuf,

        /// Arduino sketchbook folder (contains libraries/)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        sketchbook: PathBuf,

        /// Feature rule table to use instead of <sketchbook>/update/feature.txt
        #[arg(short, long, value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Where to download the rule table from when it is missing
        #[arg(long, value_name = "URL", default_value = DEFAULT_RULES_URL)]
        rules_url: String,

        /// Never download the rule table
        #[arg(long)]
        offline: bool,

        /// Detect and render, but do not write any files
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the feature rules
    Rules {
        /// Arduino sketchbook folder (contains update/feature.txt)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        sketchbook: PathBuf,

        /// Rule table to list instead of the sketchbook copy
        #[arg(short, long, value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Show keywords and descriptions
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the default custom labels
    Labels {
        /// Show default values
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the installed library version and a sketch's code version
    Version {
        /// Sketch to read the code version from
        #[arg(value_name = "SKETCH")]
        sketch: Option<PathBuf>,

        /// Arduino sketchbook folder (contains libraries/)
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        sketchbook: PathBuf,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON report
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.quiet);

    let exit_code = match cli.command {
        Commands::Process {
            sketch,
            sketchbook,
            rules,
            rules_url,
            offline,
            dry_run,
            format,
        } => {
            let options = ProcessOptions {
                sketchbook,
                rules_file: rules,
                rules_url,
                offline,
                dry_run,
            };
            handle_process(&sketch, &options, format).await
        }
        Commands::Rules {
            sketchbook,
            rules,
            verbose,
        } => handle_rules(&sketchbook, rules, verbose),
        Commands::Labels { verbose } => {
            handle_labels(verbose);
            0
        }
        Commands::Version { sketch, sketchbook } => handle_version(sketch.as_deref(), &sketchbook),
    };

    process::exit(exit_code);
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(debug: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_process(sketch: &Path, options: &ProcessOptions, format: OutputFormat) -> i32 {
    let fetcher = HttpRulesFetcher::new(Some(options.rules_url.clone()));
    let fetcher: Option<&dyn RulesFetcher> = if options.offline {
        None
    } else {
        Some(&fetcher)
    };

    match RaFeaturesCore::run(sketch, options, fetcher).await {
        Ok(report) => match format {
            OutputFormat::Human => {
                output_human(&report);
                0
            }
            OutputFormat::Json => output_json(&report),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_human(report: &ProcessReport) {
    println!("\nSketch: {}", report.sketch.display());
    println!("{}", "─".repeat(60));

    match &report.library_version {
        Some(version) => println!("  Libraries version: {}", version.raw),
        None => println!("  Libraries version: NONE"),
    }
    println!(
        "  Code version:      {}",
        report.code_version.as_deref().unwrap_or("NONE")
    );
    println!("  Rules loaded:      {}", report.rules_loaded);

    println!("\n  FEATURES:");
    for feature in &report.features {
        println!("    #define {:<36} {}", feature.symbol, feature.description);
    }

    let overridden: Vec<_> = report.overridden_labels().collect();
    if !overridden.is_empty() {
        println!("\n  LABELS:");
        for event in overridden {
            if let LabelEvent::Found { key, value } = event {
                println!("    {} = {}", key, value);
            }
        }
    }

    let unknown: Vec<_> = report.unknown_labels().collect();
    if !unknown.is_empty() {
        println!("\n  UNKNOWN LABELS (ignored):");
        for event in unknown {
            println!("    {}", event.key());
        }
    }

    println!();
    if report.written {
        println!("  Wrote {}", report.features_path.display());
        println!("  Wrote {}", report.labels_path.display());
        println!("\n  Ready to compile & upload.");
    } else {
        println!("  Dry run: no files written");
    }
}

fn output_json(report: &ProcessReport) -> i32 {
    match serde_json::to_string_pretty(report) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_rules(sketchbook: &Path, rules: Option<PathBuf>, verbose: bool) -> i32 {
    let path = rules.unwrap_or_else(|| SketchbookLayout::new(sketchbook).rules_file());
    if !path.is_file() {
        eprintln!("Error: Feature rules file not found: {}", path.display());
        return 1;
    }

    let rules = load_rules(&path);
    println!("Feature rules from {}:\n", path.display());

    for rule in &rules {
        println!("  {}", rule.symbol);
        if verbose {
            println!("    keyword:     {}", rule.keyword);
            println!("    description: {}", rule.description);
        }
    }
    println!("\n  {} rules", rules.len());
    0
}

fn handle_labels(verbose: bool) {
    println!("Default custom labels:\n");

    for (key, value) in build_defaults().iter() {
        if verbose {
            println!("  {:<32} \"{}\"", key, value);
        } else {
            println!("  {}", key);
        }
    }
}

fn handle_version(sketch: Option<&Path>, sketchbook: &Path) -> i32 {
    let layout = SketchbookLayout::new(sketchbook);

    match read_library_version(&layout.library_header()) {
        Some(version) => println!("Reef Angel Libraries Version: {}", version.raw),
        None => println!("Reef Angel Libraries Version: NONE"),
    }

    if let Some(sketch) = sketch {
        match std::fs::read_to_string(sketch) {
            Ok(source) => println!(
                "User Code Version: {}",
                code_version(&source).as_deref().unwrap_or("NONE")
            ),
            Err(e) => {
                eprintln!("Error: {}: {}", sketch.display(), e);
                return 1;
            }
        }
    }
    0
}
