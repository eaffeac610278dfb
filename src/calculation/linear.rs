use crate::prelude::*;
use crate::types::{LlmPricing, LlmProvider};

/// LLM prices are quoted per million tokens.
pub const TOKENS_PER_MILLION: f64 = 1_000_000.0;

/// Cost of a single amount at a single rate, no tiers involved.
pub fn flat_cost(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Input and output units priced separately, both quoted per `scale_factor` units.
pub fn linear_token_cost(
    input_units: f64,
    output_units: f64,
    pricing: &LlmPricing,
    scale_factor: f64,
) -> f64 {
    let input_cost = flat_cost(input_units / scale_factor, pricing.input_price);
    let output_cost = flat_cost(output_units / scale_factor, pricing.output_price);

    input_cost + output_cost
}

/// One priced row of the LLM comparison: a single version of a single model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmQuote<'a> {
    pub provider: &'a str,
    pub model: &'a str,
    pub version: &'a str,
    pub pricing: LlmPricing,
    pub cost: f64,
}

impl LlmQuote<'_> {
    /// "Provider / Model (Version)", used as the left column of the report.
    pub fn display_name(&self) -> String {
        format!("{} / {} ({})", self.provider, self.model, self.version)
    }
}

/// Prices every version of every model, cheapest first.
///
/// Providers that list no models contribute no rows. Equal costs keep catalog order.
pub fn compute_llm_quotes(
    input_tokens: f64,
    output_tokens: f64,
    providers: &[LlmProvider],
) -> Vec<LlmQuote<'_>> {
    let mut quotes: Vec<LlmQuote> = providers
        .iter()
        .flat_map(|provider| {
            provider.models.iter().flat_map(move |model| {
                model.versions.iter().map(move |version| LlmQuote {
                    provider: &provider.name,
                    model: &model.name,
                    version: &version.name,
                    pricing: version.pricing,
                    cost: linear_token_cost(
                        input_tokens,
                        output_tokens,
                        &version.pricing,
                        TOKENS_PER_MILLION,
                    ),
                })
            })
        })
        .collect();

    debug!(rows = quotes.len(), input_tokens, output_tokens, "llm quotes");

    quotes.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LlmModel, LlmVersion};

    fn pricing(input_price: f64, output_price: f64) -> LlmPricing {
        LlmPricing {
            input_price,
            output_price,
            speed: None,
        }
    }

    fn provider(name: &str, models: Vec<(&str, Vec<(&str, LlmPricing)>)>) -> LlmProvider {
        LlmProvider {
            id: name.to_lowercase(),
            name: name.to_owned(),
            pricing_url: None,
            models: models
                .into_iter()
                .map(|(model_name, versions)| LlmModel {
                    id: model_name.to_lowercase(),
                    name: model_name.to_owned(),
                    description: None,
                    versions: versions
                        .into_iter()
                        .map(|(version_name, pricing)| LlmVersion {
                            name: version_name.to_owned(),
                            pricing,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn million_in_million_out() {
        let cost = linear_token_cost(1_000_000.0, 1_000_000.0, &pricing(2.50, 10.00), TOKENS_PER_MILLION);
        assert!((cost - 12.50).abs() < 1e-9);
    }

    #[test]
    fn scale_factor_is_a_parameter() {
        // Per-thousand pricing works the same way.
        let cost = linear_token_cost(2_000.0, 0.0, &pricing(0.5, 99.0), 1_000.0);
        assert!((cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn flat_cost_multiplies() {
        assert!((flat_cost(100.0, 0.09) - 9.0).abs() < 1e-9);
        assert_eq!(flat_cost(0.0, 0.09), 0.0);
    }

    #[test]
    fn quotes_cover_every_version_and_sort_ascending() {
        let providers = vec![
            provider(
                "Big",
                vec![("Large", vec![("Default", pricing(15.0, 60.0)), ("Preview", pricing(15.0, 60.0))])],
            ),
            provider("Small", vec![("Mini", vec![("Default", pricing(0.15, 0.6))])]),
            provider("Empty", vec![]),
        ];

        let quotes = compute_llm_quotes(1_000_000.0, 0.0, &providers);

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].provider, "Small");
        assert_eq!(quotes[1].version, "Default");
        assert_eq!(quotes[2].version, "Preview");
        assert_eq!(quotes[0].display_name(), "Small / Mini (Default)");
    }
}
