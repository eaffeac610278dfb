use crate::prelude::*;
use crate::types::StorageProvider;

use super::linear::flat_cost;
use super::tiered::compute_tiered_cost;

/// Monthly estimate for one provider and storage class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageQuote<'a> {
    pub provider: &'a str,
    pub storage_class: &'a str,
    pub storage_cost: f64,
    pub transfer_cost: f64,
    pub total: f64,
}

/// Stored gigabytes go through the class's tier list, transferred gigabytes are flat.
///
/// When `class_name` is missing or unknown the provider's first class is used.
/// A provider with no classes at all prices storage at zero and still charges transfer.
///
/// Nothing is rounded here, the total usually lands in a cart or another sum.
pub fn quote_storage<'a>(
    provider: &'a StorageProvider,
    class_name: Option<&str>,
    storage_gb: f64,
    transfer_gb: f64,
) -> StorageQuote<'a> {
    let requested = class_name.and_then(|name| provider.find_class(name));

    if requested.is_none() && class_name.is_some() {
        warn!(
            provider = %provider.id,
            class = ?class_name,
            "unknown storage class, falling back to the first one"
        );
    }

    let class = requested.or_else(|| provider.storage_classes.first());

    let storage_cost = class
        .map(|class| compute_tiered_cost(storage_gb, &class.tiers).exact_cost())
        .unwrap_or(0.0);
    let transfer_cost = flat_cost(transfer_gb, provider.transfer_rate);

    StorageQuote {
        provider: &provider.name,
        storage_class: class.map(|class| class.name.as_str()).unwrap_or(""),
        storage_cost,
        transfer_cost,
        total: storage_cost + transfer_cost,
    }
}
