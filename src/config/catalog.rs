use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::prelude::*;
use crate::types::{
    LlmModel, LlmProvider, LlmVersion, RateTier, SpeechProvider, StorageClass, StorageProvider,
};

use super::llm_providers::LLM_PROVIDERS;
use super::speech_providers::SPEECH_PROVIDERS;
use super::storage_providers::STORAGE_PROVIDERS;

/// Every price table in effect for this process.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub speech: Vec<SpeechProvider>,
    #[serde(default)]
    pub llm: Vec<LlmProvider>,
    #[serde(default)]
    pub storage: Vec<StorageProvider>,
}

impl Catalog {
    /// The tables compiled into the binary.
    pub fn builtin() -> Self {
        let speech = SPEECH_PROVIDERS
            .iter()
            .map(|entry| SpeechProvider {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                description: Some(entry.description.to_owned()),
                group: entry.group.map(str::to_owned),
                pricing_url: Some(entry.pricing_url.to_owned()),
                tiers: entry.tiers.to_vec(),
            })
            .collect();

        let llm = LLM_PROVIDERS
            .iter()
            .map(|entry| LlmProvider {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                pricing_url: entry.pricing_url.map(str::to_owned),
                models: entry
                    .models
                    .iter()
                    .map(|model| LlmModel {
                        id: model.id.to_owned(),
                        name: model.name.to_owned(),
                        description: None,
                        versions: model
                            .versions
                            .iter()
                            .map(|version| LlmVersion {
                                name: version.name.to_owned(),
                                pricing: version.pricing,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let storage = STORAGE_PROVIDERS
            .iter()
            .map(|entry| StorageProvider {
                id: entry.id.to_owned(),
                name: entry.name.to_owned(),
                pricing_url: None,
                storage_classes: entry
                    .classes
                    .iter()
                    .map(|class| StorageClass {
                        name: class.name.to_owned(),
                        tiers: class.tiers.to_vec(),
                    })
                    .collect(),
                transfer_rate: entry.transfer_rate,
            })
            .collect();

        Catalog {
            speech,
            llm,
            storage,
        }
    }

    /// Reads a JSON catalog and validates it. Sections left out of the file are empty.
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read catalog file {}", path.display()))?;

        let catalog: Catalog = serde_json::from_str(&content)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to parse catalog file {}", path.display()))?;

        catalog.validate()?;

        info!(
            path = %path.display(),
            speech = catalog.speech.len(),
            llm = catalog.llm.len(),
            storage = catalog.storage.len(),
            "loaded catalog"
        );

        Ok(catalog)
    }

    /// Checks what the calculator relies on but never checks itself: ascending thresholds.
    pub fn validate(&self) -> AppResult {
        for provider in &self.speech {
            check_tier_order(&provider.id, &provider.tiers)?;
        }

        for provider in &self.storage {
            if provider.storage_classes.is_empty() {
                return Err(Error::EmptyStorageProvider(provider.id.clone()).into());
            }

            for class in &provider.storage_classes {
                check_tier_order(&format!("{}/{}", provider.id, class.name), &class.tiers)?;
            }
        }

        Ok(())
    }

    pub fn find_speech(&self, id: &str) -> Option<&SpeechProvider> {
        self.speech.iter().find(|provider| provider.id == id)
    }

    pub fn find_llm_provider(&self, id: &str) -> Option<&LlmProvider> {
        self.llm.iter().find(|provider| provider.id == id)
    }

    /// Model ids are unique across providers, so the provider comes along with the match.
    pub fn find_llm_model(&self, model_id: &str) -> Option<(&LlmProvider, &LlmModel)> {
        self.llm.iter().find_map(|provider| {
            provider
                .models
                .iter()
                .find(|model| model.id == model_id)
                .map(|model| (provider, model))
        })
    }

    pub fn find_storage(&self, id: &str) -> Option<&StorageProvider> {
        self.storage.iter().find(|provider| provider.id == id)
    }

    // The require_* variants are for user input, where an unknown id is a mistake worth reporting.

    pub fn require_speech(&self, id: &str) -> AppResult<&SpeechProvider> {
        self.find_speech(id).ok_or_else(|| unknown_provider("speech", id))
    }

    pub fn require_llm_provider(&self, id: &str) -> AppResult<&LlmProvider> {
        self.find_llm_provider(id)
            .ok_or_else(|| unknown_provider("llm", id))
    }

    pub fn require_llm_model(&self, model_id: &str) -> AppResult<(&LlmProvider, &LlmModel)> {
        let found = self
            .find_llm_model(model_id)
            .ok_or_else(|| Error::UnknownModel(model_id.to_owned()))?;

        Ok(found)
    }

    pub fn require_storage(&self, id: &str) -> AppResult<&StorageProvider> {
        self.find_storage(id)
            .ok_or_else(|| unknown_provider("storage", id))
    }
}

fn unknown_provider(kind: &'static str, id: &str) -> miette::Report {
    Error::UnknownProvider {
        kind,
        id: id.to_owned(),
    }
    .into()
}

fn check_tier_order(owner: &str, tiers: &[RateTier]) -> AppResult {
    if let Some(first) = tiers.first()
        && first.threshold_units != 0.0
    {
        // Allowed, but usage below the first threshold is then billed at the first rate.
        warn!(owner, threshold = first.threshold_units, "first tier does not start at zero");
    }

    let out_of_order = tiers
        .windows(2)
        .find(|pair| pair[1].threshold_units <= pair[0].threshold_units);

    if let Some(pair) = out_of_order {
        return Err(Error::InvalidTierTable {
            owner: owner.to_owned(),
            previous: pair[0].threshold_units,
            next: pair[1].threshold_units,
        }
        .into());
    }

    Ok(())
}
