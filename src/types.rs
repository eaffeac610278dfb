use crate::prelude::*;

// Note that quantities are f64 everywhere, unlike token counts in a usage report.
// Minutes and gigabytes are fractional (0.02 GB per assessment is a real default),
// and the calculator has to treat all three units the same way.

/// One usage band of a graduated price list.
///
/// The band starts at `threshold_units` (inclusive) and ends at the next tier's
/// threshold (exclusive). The last tier of a list is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub threshold_units: f64,
    pub unit_price: f64,
}

impl RateTier {
    pub const fn new(threshold_units: f64, unit_price: f64) -> Self {
        RateTier {
            threshold_units,
            unit_price,
        }
    }
}

/// One row per tier actually consumed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub units_in_tier: f64,
    pub rate: f64,
    pub sub_cost: f64,
}

/// The result of running a usage quantity through a tier list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TieredCost {
    /// Rounded to 4 decimal places.
    pub total_cost: f64,
    pub breakdown: Vec<CostBreakdownEntry>,
}

impl TieredCost {
    /// The unrounded total. Use this when the cost feeds another sum.
    pub fn exact_cost(&self) -> f64 {
        self.breakdown.iter().map(|entry| entry.sub_cost).sum()
    }
}

/// A speech-to-text offering, billed per minute on a tier list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechProvider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Vendor family for display, like "Deepgram" or "Groq".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    pub tiers: Vec<RateTier>,
}

/// Token prices in dollars per million tokens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LlmPricing {
    pub input_price: f64,
    pub output_price: f64,
    /// Tokens per second, when the vendor publishes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmVersion {
    pub name: String,
    pub pricing: LlmPricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmModel {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub versions: Vec<LlmVersion>,
}

impl LlmModel {
    /// The version the assessment bundle prices against: the first one listed.
    pub fn default_pricing(&self) -> Option<&LlmPricing> {
        self.versions.first().map(|version| &version.pricing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmProvider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    #[serde(default)]
    pub models: Vec<LlmModel>,
}

/// A named storage product (Standard, Nearline, Archive...) priced per GB-month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageClass {
    pub name: String,
    pub tiers: Vec<RateTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageProvider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    pub storage_classes: Vec<StorageClass>,
    /// Flat egress price per GB.
    pub transfer_rate: f64,
}

impl StorageProvider {
    pub fn find_class(&self, name: &str) -> Option<&StorageClass> {
        self.storage_classes.iter().find(|class| class.name == name)
    }
}
