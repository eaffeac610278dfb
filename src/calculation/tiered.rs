use crate::prelude::*;
use crate::types::{CostBreakdownEntry, RateTier, SpeechProvider, StorageClass, TieredCost};

/// Anything that can be priced on a graduated tier list.
///
/// Speech providers and storage classes both are, so the ranking below works for either.
pub trait TieredPricing {
    /// The label the ranking reports this entry under.
    fn label(&self) -> &str;

    fn tiers(&self) -> &[RateTier];
}

impl TieredPricing for SpeechProvider {
    fn label(&self) -> &str {
        &self.name
    }

    fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}

impl TieredPricing for StorageClass {
    fn label(&self) -> &str {
        &self.name
    }

    fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}

/// One ranked row: which entry, and what it costs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderCost<'a> {
    pub provider: &'a str,

    #[serde(flatten)]
    pub cost: TieredCost,
}

/// Walks the usage through the tiers from the lowest threshold up.
///
/// Each tier takes as much of the remaining usage as its band holds, the last
/// tier takes whatever is left. Only the final total is rounded, the breakdown
/// keeps the exact per-tier numbers.
///
/// Tiers must already be sorted ascending by threshold. Negative usage consumes
/// nothing and costs zero.
pub fn compute_tiered_cost(usage: f64, tiers: &[RateTier]) -> TieredCost {
    let mut remaining = usage;
    let mut total_cost = 0.0;
    let mut breakdown = Vec::new();

    for (index, tier) in tiers.iter().enumerate() {
        if remaining <= 0.0 {
            break;
        }

        let units_in_tier = match tiers.get(index + 1) {
            Some(next) => remaining.min(next.threshold_units - tier.threshold_units),
            None => remaining,
        };

        if units_in_tier > 0.0 {
            let sub_cost = units_in_tier * tier.unit_price;

            breakdown.push(CostBreakdownEntry {
                units_in_tier,
                rate: tier.unit_price,
                sub_cost,
            });

            remaining -= units_in_tier;
            total_cost += sub_cost;
        }
    }

    debug!(usage, tiers_used = breakdown.len(), total_cost, "tiered cost");

    TieredCost {
        total_cost: round_to_display(total_cost),
        breakdown,
    }
}

/// Prices the same usage against every entry, cheapest first.
///
/// The sort is stable, so entries with equal totals keep their input order.
pub fn compute_cost_across_providers<P>(usage: f64, providers: &[P]) -> Vec<ProviderCost<'_>>
where
    P: TieredPricing,
{
    let mut ranked: Vec<ProviderCost> = providers
        .iter()
        .map(|provider| ProviderCost {
            provider: provider.label(),
            cost: compute_tiered_cost(usage, provider.tiers()),
        })
        .collect();

    ranked.sort_by(|a, b| a.cost.total_cost.total_cmp(&b.cost.total_cost));

    ranked
}

/// Four decimal places, the precision every cost is shown with.
pub fn round_to_display(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
