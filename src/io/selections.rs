use std::fs;
use std::io::Read;
use std::path::Path;

use crate::prelude::*;

/// One "add to cart" action, as written in a selection file.
///
/// It names what was picked and how much of it. The cost is worked out when
/// the selection is priced, never read from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Selection {
    Llm {
        /// A model id, like "gpt-4o".
        model: String,
        /// Defaults to the model's first version.
        #[serde(default)]
        version: Option<String>,
        input_tokens: f64,
        output_tokens: f64,
    },
    Speech {
        provider: String,
        minutes: f64,
    },
    Storage {
        provider: String,
        #[serde(default)]
        storage_class: Option<String>,
        storage_gb: f64,
        transfer_gb: f64,
    },
}

/// Reads a JSON array of selections. `-` reads from stdin.
pub fn read_selections(path: &Path) -> AppResult<Vec<Selection>> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .into_diagnostic()
            .wrap_err("Failed to read selections from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read selection file {}", path.display()))?
    };

    parse_selections(&content)
}

pub fn parse_selections(content: &str) -> AppResult<Vec<Selection>> {
    let selections: Vec<Selection> = serde_json::from_str(content)
        .into_diagnostic()
        .wrap_err("Selections must be a JSON array of {\"kind\": ...} objects")?;

    debug!(count = selections.len(), "parsed selections");

    Ok(selections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind() {
        let selections = parse_selections(
            r#"[
                { "kind": "speech", "provider": "aws", "minutes": 300000 },
                { "kind": "llm", "model": "gpt-4o", "input_tokens": 1000000, "output_tokens": 0 },
                { "kind": "storage", "provider": "aws-s3", "storage_gb": 10, "transfer_gb": 1 }
            ]"#,
        )
        .unwrap();

        assert_eq!(selections.len(), 3);
        assert_eq!(
            selections[0],
            Selection::Speech {
                provider: "aws".to_owned(),
                minutes: 300_000.0
            }
        );
        assert!(matches!(&selections[1], Selection::Llm { version: None, .. }));
        assert!(matches!(&selections[2], Selection::Storage { storage_class: None, .. }));
    }

    #[test]
    fn missing_quantity_is_an_error() {
        assert!(parse_selections(r#"[{ "kind": "speech", "provider": "aws" }]"#).is_err());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(parse_selections(r#"[{ "kind": "video", "provider": "x" }]"#).is_err());
    }

    #[test]
    fn reads_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"[{ "kind": "speech", "provider": "openai", "minutes": 1 }]"#)
            .unwrap();

        assert_eq!(read_selections(file.path()).unwrap().len(), 1);
    }
}
