//! Parse command - extract card fields from a single fragment dump.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardscan_core::{CardReader, ExtractedFields, FragmentDump, RecognizedFragment};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Fragment dump (JSON array of fragments, or one fragment per line)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print the recognized fragments unfiltered instead of parsed fields
    #[arg(long)]
    raw: bool,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
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

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let reader = CardReader::new(FragmentDump).with_config(config.extraction.clone());

    let output = if args.raw {
        let fragments = reader.read_raw_data(args.input.as_path())?;
        format_fragments(&fragments, args.format)?
    } else {
        let result = reader.read_information(args.input.as_path())?;

        if args.show_warnings {
            for warning in &result.warnings {
                eprintln!("{} {}", style("!").yellow(), warning);
            }
        }

        format_fields(&result.fields, args.format, config.output.group_card_number)?
    };

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

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render extracted fields.
pub fn format_fields(
    fields: &ExtractedFields,
    format: OutputFormat,
    group_card_number: bool,
) -> anyhow::Result<String> {
    let data = if group_card_number {
        fields.display_data()
    } else {
        fields.parsed_data()
    };
    let card_number = &data[cardscan_core::models::card::CARD_NUMBER_KEY];

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&data)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["card_number", "name", "expiry_date"])?;
            wtr.write_record([card_number, &fields.name, &fields.expiry_date])?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("Card number: {}\n", card_number));
            output.push_str(&format!("Name:        {}\n", fields.name));
            output.push_str(&format!("Expiry date: {}\n", fields.expiry_date));
            Ok(output)
        }
    }
}

/// Render raw fragments.
pub fn format_fragments(
    fragments: &[RecognizedFragment],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(fragments)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["text", "x", "y", "width", "height"])?;
            for fragment in fragments {
                let r = fragment.region;
                wtr.write_record([
                    fragment.text.clone(),
                    r.x.to_string(),
                    r.y.to_string(),
                    r.width.to_string(),
                    r.height.to_string(),
                ])?;
            }
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(fragments
            .iter()
            .map(|f| {
                let r = f.region;
                format!("{}  ({}, {}, {}x{})", f.text, r.x, r.y, r.width, r.height)
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
