use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::processor::find_transaction;
use crate::types::{side_addresses, AddressEntry};
use crate::untangling::{untangle, Classification};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Output format of the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Show the untangling of a single transaction
#[derive(Args)]
pub struct InspectCommand {
    /// Transaction ID to inspect
    #[arg(long)]
    pub tx_id: String,

    /// JSON Lines file of pre-parsed transactions (overrides config.toml)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| AppConfig::get_defaults().paths.input);
        info!("Inspecting {} in {}", self.tx_id, input.display());

        let record = find_transaction(&input, &self.tx_id)?;
        let (inputs, outputs, classification) = untangle(&record);

        match self.format {
            OutputFormat::Json => print_json(&self.tx_id, &inputs, &outputs, &classification)?,
            OutputFormat::Text => print_text(&self.tx_id, &inputs, &outputs, &classification),
        }

        Ok(())
    }
}

fn print_text(
    tx_id: &str,
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    classification: &Classification,
) {
    println!("\n=== Transaction Untangling ===");
    println!("TXID: {}", tx_id);
    println!("Category: {}", classification.category);
    println!();

    print_side("Inputs (simplified)", inputs);
    print_side("Outputs (simplified)", outputs);

    println!(
        "Connectable pairs: {}",
        classification.connectable_pairs.len()
    );
    for pair in &classification.connectable_pairs {
        let (from, to) = pair.resolve(inputs, outputs);
        println!(
            "  {:#b} -> {:#b}  [{}] -> [{}]",
            pair.inputs,
            pair.outputs,
            from.join(", "),
            to.join(", ")
        );
    }
    println!();

    println!("Minimal pairs: {}", classification.minimal_pairs.len());
    for pair in &classification.minimal_pairs {
        let (from, to) = pair.resolve(inputs, outputs);
        println!("  [{}] -> [{}]", from.join(", "), to.join(", "));
    }
}

fn print_side(title: &str, side: &[AddressEntry]) {
    println!("{}: {}", title, side.len());
    for (position, (address, assets)) in side.iter().enumerate() {
        let amounts: Vec<String> = assets
            .iter()
            .map(|(asset, amount)| format!("{}={}", asset, amount))
            .collect();
        println!("  [{}] {}  {}", position, address, amounts.join(" "));
    }
    println!();
}

fn print_json(
    tx_id: &str,
    inputs: &[AddressEntry],
    outputs: &[AddressEntry],
    classification: &Classification,
) -> AppResult<()> {
    let resolve = |pairs: &[crate::untangling::ConnectablePair]| {
        pairs
            .iter()
            .map(|pair| {
                let (from, to) = pair.resolve(inputs, outputs);
                serde_json::json!({
                    "input_mask": pair.inputs,
                    "output_mask": pair.outputs,
                    "inputs": from,
                    "outputs": to,
                })
            })
            .collect::<Vec<_>>()
    };

    let json = serde_json::json!({
        "tx_id": tx_id,
        "category": classification.category,
        "inputs": side_addresses(inputs),
        "outputs": side_addresses(outputs),
        "connectable_pairs": resolve(&classification.connectable_pairs),
        "minimal_pairs": resolve(&classification.minimal_pairs),
    });

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
