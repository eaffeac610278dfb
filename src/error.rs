use miette::Diagnostic;
use thiserror::Error;

// Codes:
// ratecard::parse -> cli argument parsing/validation.
// ratecard::lookup -> an id that isn't in the catalog.
// ratecard::catalog -> a price table that can't be used.
//
// None of these come out of the calculators. Those degrade to zero cost instead.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid quantity: expected a number, got '{0}'")]
    #[diagnostic(
        code(ratecard::parse::quantity),
        help("Please provide a plain number, like '300000' or '0.02'.")
    )]
    InvalidQuantity(String),

    #[error("Unknown {kind} provider '{id}'.")]
    #[diagnostic(
        code(ratecard::lookup::provider),
        help("Run `ratecard tiers --kind {kind}` to list the known provider ids.")
    )]
    UnknownProvider { kind: &'static str, id: String },

    #[error("Unknown LLM model '{0}'.")]
    #[diagnostic(
        code(ratecard::lookup::model),
        help("Run `ratecard tiers --kind llm` to list the known model ids.")
    )]
    UnknownModel(String),

    #[error("Tier thresholds for '{owner}' must be strictly increasing, got {previous} then {next}.")]
    #[diagnostic(
        code(ratecard::catalog::tier_order),
        help("Sort the tiers ascending by threshold_units and remove duplicates.")
    )]
    InvalidTierTable {
        owner: String,
        previous: f64,
        next: f64,
    },

    #[error("Storage provider '{0}' has no storage classes.")]
    #[diagnostic(
        code(ratecard::catalog::storage_classes),
        help("Add at least one entry to storage_classes.")
    )]
    EmptyStorageProvider(String),

    #[error("Model '{model}' has no version named '{version}'.")]
    #[diagnostic(
        code(ratecard::lookup::version),
        help("Leave the version out to use the model's first listed version.")
    )]
    UnknownVersion { model: String, version: String },
}
