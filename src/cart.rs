use crate::prelude::*;

/// A priced selection the user chose to keep.
///
/// Items have no identity beyond their position in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CartItem {
    Llm {
        provider: String,
        model: String,
        version: String,
        input_tokens: f64,
        output_tokens: f64,
        cost: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pricing_url: Option<String>,
    },
    Speech {
        provider: String,
        /// The provider's product name, e.g. "Nova-3".
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        minutes: f64,
        cost: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pricing_url: Option<String>,
    },
    Storage {
        provider: String,
        storage_class: String,
        storage_gb: f64,
        transfer_gb: f64,
        cost: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pricing_url: Option<String>,
    },
}

impl CartItem {
    pub fn cost(&self) -> f64 {
        match self {
            CartItem::Llm { cost, .. }
            | CartItem::Speech { cost, .. }
            | CartItem::Storage { cost, .. } => *cost,
        }
    }

    /// Where the price came from, when the catalog knows.
    pub fn pricing_url(&self) -> Option<&str> {
        match self {
            CartItem::Llm { pricing_url, .. }
            | CartItem::Speech { pricing_url, .. }
            | CartItem::Storage { pricing_url, .. } => pricing_url.as_deref(),
        }
    }

    /// Short label for summaries, e.g. "Speech-to-Text: AWS (300000 min)".
    pub fn describe(&self) -> String {
        match self {
            CartItem::Llm {
                provider,
                model,
                version,
                input_tokens,
                output_tokens,
                ..
            } => format!(
                "LLM: {} / {} ({}) {} in {} out",
                provider, model, version, input_tokens, output_tokens
            ),
            CartItem::Speech {
                provider,
                model: Some(model),
                minutes,
                ..
            } => format!("Speech-to-Text: {} {} ({} min)", provider, model, minutes),
            CartItem::Speech {
                provider, minutes, ..
            } => format!("Speech-to-Text: {} ({} min)", provider, minutes),
            CartItem::Storage {
                provider,
                storage_class,
                storage_gb,
                transfer_gb,
                ..
            } => format!(
                "Object Storage: {} {} ({} GB stored {} GB out)",
                provider, storage_class, storage_gb, transfer_gb
            ),
        }
    }
}

/// The ordered list of selections for one session.
///
/// Nothing is cached, `total` is summed again on every call. Carts hold tens of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        CartLedger { items: Vec::new() }
    }

    /// Appends. The same selection added twice is two entries.
    pub fn add(&mut self, item: CartItem) {
        debug!(position = self.items.len(), cost = item.cost(), "cart add");

        self.items.push(item);
    }

    /// Removes the entry at `index`. A stale index is ignored rather than an error.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "cart remove ignored, index out of range");
            return;
        }

        self.items.remove(index);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::cost).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech(provider: &str, cost: f64) -> CartItem {
        CartItem::Speech {
            provider: provider.to_owned(),
            model: None,
            minutes: 10.0,
            cost,
            pricing_url: None,
        }
    }

    #[test]
    fn remove_first_leaves_second() {
        let mut cart = CartLedger::new();
        let x = speech("x", 1.0);
        let y = speech("y", 2.5);

        cart.add(x);
        cart.add(y.clone());
        cart.remove_at(0);

        assert_eq!(cart.items(), &[y]);
        assert!((cart.total() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_remove_is_ignored() {
        let mut cart = CartLedger::new();
        cart.add(speech("x", 1.0));
        cart.add(speech("y", 2.0));
        let before = cart.clone();

        cart.remove_at(5);

        assert_eq!(cart, before);
    }

    #[test]
    fn duplicates_are_separate_entries() {
        let mut cart = CartLedger::new();
        cart.add(speech("x", 1.0));
        cart.add(speech("x", 1.0));

        assert_eq!(cart.len(), 2);
        assert!((cart.total() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_empties_and_zeroes() {
        let mut cart = CartLedger::new();
        cart.add(speech("x", 1.0));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn items_are_tagged_by_kind() {
        let item = CartItem::Storage {
            provider: "S3".to_owned(),
            storage_class: "Standard".to_owned(),
            storage_gb: 1.0,
            transfer_gb: 1.0,
            cost: 0.113,
            pricing_url: None,
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["kind"], "storage");
        assert_eq!(item.describe(), "Object Storage: S3 Standard (1 GB stored 1 GB out)");
        assert!(json.get("pricing_url").is_none());
    }

    #[test]
    fn speech_items_name_their_model_and_source() {
        let item = CartItem::Speech {
            provider: "Deepgram".to_owned(),
            model: Some("Nova-3".to_owned()),
            minutes: 60.0,
            cost: 0.258,
            pricing_url: Some("https://deepgram.com/pricing".to_owned()),
        };

        assert_eq!(item.describe(), "Speech-to-Text: Deepgram Nova-3 (60 min)");
        assert_eq!(item.pricing_url(), Some("https://deepgram.com/pricing"));
    }
}
