use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::calculation::report::Currency;
use crate::error::Error;

impl Cli {
    /// Convenience constructor to avoid redundant `Parser` imports in main.
    pub fn new() -> Self {
        Cli::parse()
    }
}

/// Accepts any finite number, negative included.
///
/// Negative input is not an error here, the router clamps it to zero the way a
/// number field with `min="0"` would. Only text that isn't a number is rejected.
pub fn parse_quantity(raw: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| Error::InvalidQuantity(raw.to_owned()))
}

// Structs

#[derive(Parser, Debug)]
#[command(name = "ratecard", version, about = "Compare AI service pricing and total up a cart.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    //
    // Global args start here..
    //

    //
    /// No format. Prints bare numbers without currency symbols or rounding.
    #[arg(long, default_value_t = false, global = true)]
    pub unformatted: bool,

    /// Print the underlying result as JSON instead of CSV.
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,

    /// Display currency. Costs are computed in USD and converted for display only.
    #[arg(long, default_value = "usd", global = true)]
    pub currency: Currency,

    /// Load price tables from a JSON file instead of the built-in ones.
    #[arg(long, env = "RATECARD_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank speech-to-text providers for a number of minutes.
    Speech(SpeechArgs),

    /// Rank every LLM model version for a token count.
    Llm(LlmArgs),

    /// Estimate monthly object storage cost for one provider.
    Storage(StorageArgs),

    /// Price a bundle of LLM, speech and storage usage per assessment.
    Assessment(AssessmentArgs),

    /// Price a file of selections, put them in a cart and show the total.
    ///
    /// The file is a JSON array such as
    /// `[{"kind": "speech", "provider": "aws", "minutes": 300000}]`.
    /// Use `-` to read it from stdin.
    Cart(CartArgs),

    /// List the price tables.
    Tiers(TiersArgs),
}

#[derive(clap::Args, Debug)]
pub struct SpeechArgs {
    /// Minutes of audio.
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true)]
    pub minutes: f64,

    /// Only price this provider id.
    #[arg(long)]
    pub provider: Option<String>,

    /// Also show how the minutes fell into each tier.
    #[arg(long, default_value_t = false)]
    pub breakdown: bool,

    /// Show only the cheapest N rows.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct LlmArgs {
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true)]
    pub input_tokens: f64,

    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true)]
    pub output_tokens: f64,

    /// Only price this provider id.
    #[arg(long)]
    pub provider: Option<String>,

    /// Show only the cheapest N rows.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct StorageArgs {
    #[arg(long)]
    pub provider: String,

    /// Storage class name, like "Standard" or "Archive". Defaults to the provider's first.
    #[arg(long)]
    pub class: Option<String>,

    /// Gigabytes stored for the month.
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true, default_value = "1")]
    pub storage_gb: f64,

    /// Gigabytes transferred out.
    #[arg(long, value_parser = parse_quantity, allow_hyphen_values = true, default_value = "1")]
    pub transfer_gb: f64,
}

#[derive(clap::Args, Debug)]
pub struct AssessmentArgs {
    #[arg(long, default_value = "gpt-4o")]
    pub llm_model: String,

    #[arg(long, default_value = "aws")]
    pub speech_provider: String,

    #[arg(long, default_value = "aws-s3")]
    pub storage_provider: String,

    /// How many assessments to price.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub assessments: u32,

    #[arg(long, value_parser = parse_quantity, default_value = "500")]
    pub input_words: f64,

    #[arg(long, value_parser = parse_quantity, default_value = "500")]
    pub output_words: f64,

    #[arg(long, value_parser = parse_quantity, default_value = "1.4")]
    pub tokens_per_word: f64,

    #[arg(long, value_parser = parse_quantity, default_value = "0.02")]
    pub storage_gb: f64,

    #[arg(long, value_parser = parse_quantity, default_value = "0.02")]
    pub transfer_gb: f64,

    /// Minutes of audio per assessment.
    #[arg(long, value_parser = parse_quantity, default_value = "2")]
    pub minutes: f64,
}

#[derive(clap::Args, Debug)]
pub struct CartArgs {
    pub file: PathBuf,

    /// Remove the item at this position after adding everything. Repeatable, applied in order.
    #[arg(long)]
    pub remove: Vec<usize>,
}

#[derive(clap::Args, Debug)]
pub struct TiersArgs {
    /// Which table to list. All of them when left out.
    #[arg(long)]
    pub kind: Option<Kind>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    Speech,
    Llm,
    Storage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quantities_parse() {
        assert_eq!(parse_quantity("300000").unwrap(), 300_000.0);
        assert_eq!(parse_quantity(" 0.02 ").unwrap(), 0.02);
        assert_eq!(parse_quantity("-5").unwrap(), -5.0);
        assert!(parse_quantity("ten").is_err());
        assert!(parse_quantity("NaN").is_err());
        assert!(parse_quantity("inf").is_err());
    }

    #[test]
    fn negative_minutes_reach_the_router() {
        let cli = Cli::try_parse_from(["ratecard", "speech", "--minutes", "-10"]).unwrap();

        let Commands::Speech(args) = cli.command else {
            panic!("expected the speech command");
        };
        assert_eq!(args.minutes, -10.0);
    }

    #[test]
    fn globals_work_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "ratecard",
            "llm",
            "--input-tokens",
            "1000000",
            "--output-tokens",
            "0",
            "--currency",
            "inr",
            "--unformatted",
        ])
        .unwrap();

        assert_eq!(cli.currency, Currency::Inr);
        assert!(cli.unformatted);
    }

    #[test]
    fn cart_removals_repeat() {
        let cli =
            Cli::try_parse_from(["ratecard", "cart", "cart.json", "--remove", "2", "--remove", "0"])
                .unwrap();

        let Commands::Cart(args) = cli.command else {
            panic!("expected the cart command");
        };
        assert_eq!(args.remove, vec![2, 0]);
    }
}
