//! Process command - extract fields from a single OCR text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use ktpx_core::models::config::KtpxConfig;
use ktpx_core::models::record::KtpRecord;
use ktpx_core::{KtpExtractor, RuleBasedParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file holding the OCR text of one card
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence score
    #[arg(long)]
    show_confidence: bool,

    /// List fields that could not be extracted
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        KtpxConfig::from_file(std::path::Path::new(path))?
    } else {
        KtpxConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;

    let parser = RuleBasedParser::from_config(&config.extraction);
    let result = parser.extract_from_text(&text);

    // List gaps if requested
    if args.check {
        let missing = result.record.missing_fields();
        if missing.is_empty() {
            eprintln!("{} All fields extracted", style("✓").green());
        } else {
            eprintln!("{}", style("Missing fields:").yellow());
            for field in &missing {
                eprintln!("  - {}", field);
            }
        }
    }

    // Format output
    let output = format_record(&result.record, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    // Show summary
    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.confidence * 100.0
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Format a record in the requested output format.
pub fn format_record(record: &KtpRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_record_csv(record),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

pub fn format_record_csv(record: &KtpRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["nik", "name", "birthplace", "birth_date", "address"])?;
    wtr.write_record([
        record.nik.clone().unwrap_or_default(),
        record.name.clone().unwrap_or_default(),
        record.birthplace.clone().unwrap_or_default(),
        record
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        record.address.clone().unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_record_text(record: &KtpRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "NIK:        {}\n",
        record.nik.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Name:       {}\n",
        record.name.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Birthplace: {}\n",
        record.birthplace.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!(
        "Birth date: {}\n",
        record
            .birth_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Address:    {}\n",
        record.address.as_deref().unwrap_or("-")
    ));

    output
}
