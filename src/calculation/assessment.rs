use crate::prelude::*;
use crate::types::{LlmPricing, RateTier, StorageProvider};

use super::linear::{TOKENS_PER_MILLION, flat_cost, linear_token_cost};
use super::tiered::{compute_tiered_cost, round_to_display};

/// What a single assessment consumes.
///
/// These are business assumptions, not prices, so they are passed in rather than
/// baked into the cost functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentParams {
    pub input_words: f64,
    pub output_words: f64,
    /// Rough words to tokens conversion.
    pub tokens_per_word: f64,
    pub storage_gb: f64,
    pub transfer_gb: f64,
    pub minutes: f64,
}

impl Default for AssessmentParams {
    fn default() -> Self {
        AssessmentParams {
            input_words: 500.0,
            output_words: 500.0,
            tokens_per_word: 1.4,
            storage_gb: 0.02,
            transfer_gb: 0.02,
            minutes: 2.0,
        }
    }
}

/// Per-assessment parts and the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AssessmentQuote {
    pub llm_cost: f64,
    pub speech_cost: f64,
    /// Storage plus transfer.
    pub storage_cost: f64,
    pub per_assessment: f64,
    pub total: f64,
    pub assessments: u32,
}

/// Prices one bundle of LLM, speech and storage usage, then multiplies by the count.
///
/// Any missing piece of pricing contributes zero instead of failing the whole quote.
/// Storage is priced on the provider's first storage class. The parts stay
/// unrounded, only `total` is rounded.
pub fn quote_assessment(
    llm_pricing: Option<&LlmPricing>,
    speech_tiers: &[RateTier],
    storage_provider: Option<&StorageProvider>,
    params: &AssessmentParams,
    assessments: u32,
) -> AssessmentQuote {
    let input_tokens = params.input_words * params.tokens_per_word;
    let output_tokens = params.output_words * params.tokens_per_word;

    let llm_cost = llm_pricing
        .map(|pricing| linear_token_cost(input_tokens, output_tokens, pricing, TOKENS_PER_MILLION))
        .unwrap_or(0.0);

    let speech_cost = compute_tiered_cost(params.minutes, speech_tiers).exact_cost();

    let storage_cost = storage_provider
        .map(|provider| {
            let stored = provider
                .storage_classes
                .first()
                .map(|class| compute_tiered_cost(params.storage_gb, &class.tiers).exact_cost())
                .unwrap_or(0.0);

            stored + flat_cost(params.transfer_gb, provider.transfer_rate)
        })
        .unwrap_or(0.0);

    let per_assessment = llm_cost + speech_cost + storage_cost;

    debug!(llm_cost, speech_cost, storage_cost, assessments, "assessment bundle");

    AssessmentQuote {
        llm_cost,
        speech_cost,
        storage_cost,
        per_assessment,
        total: round_to_display(per_assessment * f64::from(assessments)),
        assessments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StorageClass;

    fn storage() -> StorageProvider {
        StorageProvider {
            id: "s3".to_owned(),
            name: "S3".to_owned(),
            pricing_url: None,
            storage_classes: vec![StorageClass {
                name: "Standard".to_owned(),
                tiers: vec![RateTier::new(0.0, 0.023)],
            }],
            transfer_rate: 0.09,
        }
    }

    fn gpt_like() -> LlmPricing {
        LlmPricing {
            input_price: 2.50,
            output_price: 10.00,
            speed: None,
        }
    }

    #[test]
    fn default_bundle() {
        let storage = storage();
        let quote = quote_assessment(
            Some(&gpt_like()),
            &[RateTier::new(0.0, 0.024)],
            Some(&storage),
            &AssessmentParams::default(),
            1,
        );

        // 700 tokens in and out: 0.00175 + 0.007.
        assert!((quote.llm_cost - 0.00875).abs() < 1e-12);
        assert!((quote.speech_cost - 0.048).abs() < 1e-12);
        // 0.02 GB stored is 0.00046, transfer is 0.0018.
        assert!((quote.storage_cost - (0.00046 + 0.0018)).abs() < 1e-12);
        assert!((quote.total - round_to_display(quote.per_assessment)).abs() < 1e-12);
    }

    #[test]
    fn count_multiplies_the_bundle() {
        let storage = storage();
        let params = AssessmentParams::default();
        let one = quote_assessment(Some(&gpt_like()), &[], Some(&storage), &params, 1);
        let ten = quote_assessment(Some(&gpt_like()), &[], Some(&storage), &params, 10);

        assert!((ten.total - round_to_display(one.per_assessment * 10.0)).abs() < 1e-12);
        assert_eq!(ten.assessments, 10);
    }

    #[test]
    fn parts_are_not_rounded_before_multiplying() {
        let storage = storage();
        let quote = quote_assessment(
            Some(&gpt_like()),
            &[RateTier::new(0.0, 0.024)],
            Some(&storage),
            &AssessmentParams::default(),
            10_000,
        );

        // (0.00875 + 0.048 + 0.00046 + 0.0018) * 10000.
        assert!((quote.total - 590.1).abs() < 1e-9);
    }

    #[test]
    fn missing_pricing_contributes_zero() {
        let quote = quote_assessment(None, &[], None, &AssessmentParams::default(), 3);

        assert_eq!(quote.per_assessment, 0.0);
        assert_eq!(quote.total, 0.0);
    }

    #[test]
    fn words_to_tokens_is_configurable() {
        let params = AssessmentParams {
            input_words: 1_000_000.0,
            output_words: 0.0,
            tokens_per_word: 1.0,
            ..AssessmentParams::default()
        };
        let quote = quote_assessment(Some(&gpt_like()), &[], None, &params, 1);

        assert!((quote.llm_cost - 2.50).abs() < 1e-9);
    }
}
