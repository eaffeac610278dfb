use std::slice;

use itertools::Itertools;

use crate::app::App;
use crate::calculation::assessment::{AssessmentParams, quote_assessment};
use crate::calculation::linear::{TOKENS_PER_MILLION, compute_llm_quotes, linear_token_cost};
use crate::calculation::report::Report;
use crate::calculation::storage::quote_storage;
use crate::calculation::tiered::{compute_cost_across_providers, compute_tiered_cost};
use crate::cart::{CartItem, CartLedger};
use crate::cli::{
    AssessmentArgs, CartArgs, Commands, Kind, LlmArgs, SpeechArgs, StorageArgs, TiersArgs,
};
use crate::config::Catalog;
use crate::error::Error;
use crate::io::selections::{Selection, read_selections};
use crate::prelude::*;
use crate::types::RateTier;

/// Runs the chosen subcommand against the catalog and returns what to print.
pub fn route(ctx: &mut App) -> AppResult<Report> {
    let App {
        cli,
        catalog,
        cart,
    } = ctx;

    let json = cli.json;
    let pretty = !cli.unformatted;

    info!(command = ?cli.command, "routing");

    match &cli.command {
        // ratecard speech.
        Commands::Speech(args) => speech(catalog, args, json, pretty),

        // ratecard llm.
        Commands::Llm(args) => llm(catalog, args, json, pretty),

        // ratecard storage.
        Commands::Storage(args) => storage(catalog, args, json, pretty),

        // ratecard assessment.
        Commands::Assessment(args) => assessment(catalog, args, json, pretty),

        // ratecard cart.
        Commands::Cart(args) => {
            let selections = read_selections(&args.file)?;
            fill_cart(catalog, cart, &selections, &args.remove)?;

            cart_summary(cart, json, pretty)
        }

        // ratecard tiers.
        Commands::Tiers(args) => tiers(catalog, args, json, pretty),
    }
}

/// Usage is clamped to zero before it reaches a calculator.
pub fn clamp_usage(value: f64, what: &str) -> f64 {
    if value < 0.0 {
        warn!(value, what, "negative quantity, using 0");
        return 0.0;
    }

    value
}

/// Prices one selection the same way the matching subcommand would.
pub fn price_selection(catalog: &Catalog, selection: &Selection) -> AppResult<CartItem> {
    let item = match selection {
        Selection::Speech { provider, minutes } => {
            let provider = catalog.require_speech(provider)?;
            let minutes = clamp_usage(*minutes, "minutes");

            CartItem::Speech {
                provider: provider.name.clone(),
                model: provider.description.clone(),
                minutes,
                cost: compute_tiered_cost(minutes, &provider.tiers).exact_cost(),
                pricing_url: provider.pricing_url.clone(),
            }
        }

        Selection::Llm {
            model,
            version,
            input_tokens,
            output_tokens,
        } => {
            let (provider, model) = catalog.require_llm_model(model)?;

            let picked = match version {
                Some(wanted) => model.versions.iter().find(|v| &v.name == wanted),
                None => model.versions.first(),
            };

            let picked = picked.ok_or_else(|| Error::UnknownVersion {
                model: model.id.clone(),
                version: version.clone().unwrap_or_else(|| "default".to_owned()),
            })?;

            let input_tokens = clamp_usage(*input_tokens, "input tokens");
            let output_tokens = clamp_usage(*output_tokens, "output tokens");

            CartItem::Llm {
                provider: provider.name.clone(),
                model: model.name.clone(),
                version: picked.name.clone(),
                input_tokens,
                output_tokens,
                cost: linear_token_cost(
                    input_tokens,
                    output_tokens,
                    &picked.pricing,
                    TOKENS_PER_MILLION,
                ),
                pricing_url: provider.pricing_url.clone(),
            }
        }

        Selection::Storage {
            provider,
            storage_class,
            storage_gb,
            transfer_gb,
        } => {
            let provider = catalog.require_storage(provider)?;
            let storage_gb = clamp_usage(*storage_gb, "storage gb");
            let transfer_gb = clamp_usage(*transfer_gb, "transfer gb");
            let quote = quote_storage(provider, storage_class.as_deref(), storage_gb, transfer_gb);

            CartItem::Storage {
                provider: quote.provider.to_owned(),
                storage_class: quote.storage_class.to_owned(),
                storage_gb,
                transfer_gb,
                cost: quote.total,
                pricing_url: provider.pricing_url.clone(),
            }
        }
    };

    Ok(item)
}

/// Adds every selection in order, then applies the removals in order.
///
/// A removal index is a position in the cart as it is at that moment, so
/// `--remove 0 --remove 0` drops the first two items.
pub fn fill_cart(
    catalog: &Catalog,
    cart: &mut CartLedger,
    selections: &[Selection],
    removals: &[usize],
) -> AppResult {
    for (index, selection) in selections.iter().enumerate() {
        let item = price_selection(catalog, selection)
            .wrap_err_with(|| format!("Failed to price selection {}", index))?;

        cart.add(item);
    }

    for index in removals {
        cart.remove_at(*index);
    }

    Ok(())
}

// Private

fn speech(catalog: &Catalog, args: &SpeechArgs, json: bool, pretty: bool) -> AppResult<Report> {
    let minutes = clamp_usage(args.minutes, "minutes");

    let providers = match &args.provider {
        Some(id) => slice::from_ref(catalog.require_speech(id)?),
        None => catalog.speech.as_slice(),
    };

    let mut ranked = compute_cost_across_providers(minutes, providers);
    truncate(&mut ranked, args.limit);

    if json {
        return to_json(&ranked, pretty);
    }

    let rows = ranked
        .into_iter()
        .map(|row| {
            let total = Report::Money(row.cost.total_cost);

            if !args.breakdown {
                return (row.provider.to_owned(), total);
            }

            let mut lines = vec![("total".to_owned(), total)];
            lines.extend(row.cost.breakdown.iter().map(|entry| {
                (
                    format!("{} min @ {}", entry.units_in_tier, entry.rate),
                    Report::Money(entry.sub_cost),
                )
            }));

            (row.provider.to_owned(), Report::Rows(lines))
        })
        .collect();

    Ok(Report::Rows(rows))
}

fn llm(catalog: &Catalog, args: &LlmArgs, json: bool, pretty: bool) -> AppResult<Report> {
    let input_tokens = clamp_usage(args.input_tokens, "input tokens");
    let output_tokens = clamp_usage(args.output_tokens, "output tokens");

    let providers = match &args.provider {
        Some(id) => slice::from_ref(catalog.require_llm_provider(id)?),
        None => catalog.llm.as_slice(),
    };

    let mut quotes = compute_llm_quotes(input_tokens, output_tokens, providers);
    truncate(&mut quotes, args.limit);

    if json {
        return to_json(&quotes, pretty);
    }

    let rows: Vec<(String, f64)> = quotes
        .iter()
        .map(|quote| (quote.display_name(), quote.cost))
        .collect();

    Ok(rows.into())
}

fn storage(catalog: &Catalog, args: &StorageArgs, json: bool, pretty: bool) -> AppResult<Report> {
    let provider = catalog.require_storage(&args.provider)?;
    let quote = quote_storage(
        provider,
        args.class.as_deref(),
        clamp_usage(args.storage_gb, "storage gb"),
        clamp_usage(args.transfer_gb, "transfer gb"),
    );

    if json {
        return to_json(&quote, pretty);
    }

    Ok(Report::Rows(vec![
        (
            format!("storage ({})", quote.storage_class),
            Report::Money(quote.storage_cost),
        ),
        ("transfer".to_owned(), Report::Money(quote.transfer_cost)),
        ("total".to_owned(), Report::Money(quote.total)),
    ]))
}

fn assessment(
    catalog: &Catalog,
    args: &AssessmentArgs,
    json: bool,
    pretty: bool,
) -> AppResult<Report> {
    let (_, model) = catalog.require_llm_model(&args.llm_model)?;
    let speech = catalog.require_speech(&args.speech_provider)?;
    let storage = catalog.require_storage(&args.storage_provider)?;

    let params = AssessmentParams {
        input_words: clamp_usage(args.input_words, "input words"),
        output_words: clamp_usage(args.output_words, "output words"),
        tokens_per_word: clamp_usage(args.tokens_per_word, "tokens per word"),
        storage_gb: clamp_usage(args.storage_gb, "storage gb"),
        transfer_gb: clamp_usage(args.transfer_gb, "transfer gb"),
        minutes: clamp_usage(args.minutes, "minutes"),
    };

    let quote = quote_assessment(
        model.default_pricing(),
        &speech.tiers,
        Some(storage),
        &params,
        args.assessments,
    );

    if json {
        return to_json(&quote, pretty);
    }

    Ok(Report::Rows(vec![
        ("llm per assessment".to_owned(), Report::Money(quote.llm_cost)),
        ("speech per assessment".to_owned(), Report::Money(quote.speech_cost)),
        ("storage + transfer per assessment".to_owned(), Report::Money(quote.storage_cost)),
        ("per assessment".to_owned(), Report::Money(quote.per_assessment)),
        (format!("total for {}", quote.assessments), Report::Money(quote.total)),
    ]))
}

fn cart_summary(cart: &CartLedger, json: bool, pretty: bool) -> AppResult<Report> {
    if json {
        #[derive(Serialize)]
        struct Summary<'a> {
            items: &'a [CartItem],
            total: f64,
        }

        return to_json(
            &Summary {
                items: cart.items(),
                total: cart.total(),
            },
            pretty,
        );
    }

    let mut rows: Vec<(String, Report)> = cart
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let label = match item.pricing_url() {
                Some(url) => format!("{}: {} <{}>", index, item.describe(), url),
                None => format!("{}: {}", index, item.describe()),
            };

            (label, Report::Money(item.cost()))
        })
        .collect();

    rows.push(("total".to_owned(), Report::Money(cart.total())));

    Ok(Report::Rows(rows))
}

fn tiers(catalog: &Catalog, args: &TiersArgs, json: bool, pretty: bool) -> AppResult<Report> {
    let wants = |kind: Kind| args.kind.is_none_or(|wanted| wanted == kind);

    if json {
        let mut filtered = catalog.clone();
        if !wants(Kind::Speech) {
            filtered.speech.clear();
        }
        if !wants(Kind::Llm) {
            filtered.llm.clear();
        }
        if !wants(Kind::Storage) {
            filtered.storage.clear();
        }

        return to_json(&filtered, pretty);
    }

    let mut sections = Vec::new();

    if wants(Kind::Speech) {
        // Vendors with many flat-rate products (Deepgram, Groq) are listed together.
        let speech_rows = catalog
            .speech
            .iter()
            .chunk_by(|provider| provider.group.as_deref())
            .into_iter()
            .flat_map(|(group, providers)| match group {
                Some(group) => vec![(
                    group.to_owned(),
                    Report::Rows(
                        providers
                            .map(|p| {
                                let label = match &p.description {
                                    Some(description) => format!("{} ({})", p.id, description),
                                    None => p.id.clone(),
                                };
                                (label, per_unit_rows(&p.tiers, "min"))
                            })
                            .collect(),
                    ),
                )],
                None => providers
                    .map(|p| (p.name.clone(), per_unit_rows(&p.tiers, "min")))
                    .collect(),
            })
            .collect();

        sections.push(("speech".to_owned(), Report::Rows(speech_rows)));
    }

    if wants(Kind::Llm) {
        let llm_rows = catalog
            .llm
            .iter()
            .flat_map(|provider| {
                provider.models.iter().flat_map(move |model| {
                    model.versions.iter().map(move |version| {
                        let mut lines = vec![
                            ("input per 1M tokens".to_owned(), Report::Rate(version.pricing.input_price)),
                            ("output per 1M tokens".to_owned(), Report::Rate(version.pricing.output_price)),
                        ];
                        if let Some(speed) = version.pricing.speed {
                            lines.push(("tokens/s".to_owned(), Report::Units(f64::from(speed))));
                        }

                        (
                            format!("{} / {} ({})", provider.name, model.name, version.name),
                            Report::Rows(lines),
                        )
                    })
                })
            })
            .collect();

        sections.push(("llm".to_owned(), Report::Rows(llm_rows)));
    }

    if wants(Kind::Storage) {
        let storage_rows = catalog
            .storage
            .iter()
            .map(|provider| {
                let mut lines: Vec<(String, Report)> = provider
                    .storage_classes
                    .iter()
                    .map(|class| (class.name.clone(), per_unit_rows(&class.tiers, "GB")))
                    .collect();
                lines.push(("transfer per GB".to_owned(), Report::Rate(provider.transfer_rate)));

                (provider.name.clone(), Report::Rows(lines))
            })
            .collect();

        sections.push(("storage".to_owned(), Report::Rows(storage_rows)));
    }

    Ok(Report::Rows(sections))
}

/// "0-250000 min" style rows with the unit price as the value.
fn per_unit_rows(tiers: &[RateTier], unit: &str) -> Report {
    let rows = tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let range = match tiers.get(index + 1) {
                Some(next) => format!("{}-{} {}", tier.threshold_units, next.threshold_units, unit),
                None => format!("{}+ {}", tier.threshold_units, unit),
            };

            (range, Report::Rate(tier.unit_price))
        })
        .collect();

    Report::Rows(rows)
}

fn truncate<T>(rows: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<Report> {
    let json = if pretty {
        serde_json::to_string_pretty(value).into_diagnostic()?
    } else {
        serde_json::to_string(value).into_diagnostic()?
    };

    Ok(Report::Raw(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::report::Currency;
    use crate::cli::Cli;
    use clap::Parser;

    fn app(args: &[&str]) -> App {
        let cli = Cli::try_parse_from(args).unwrap();

        App {
            cli,
            catalog: Catalog::builtin(),
            cart: CartLedger::new(),
        }
    }

    #[test]
    fn clamps_negative_usage() {
        assert_eq!(clamp_usage(-3.0, "minutes"), 0.0);
        assert_eq!(clamp_usage(3.0, "minutes"), 3.0);
    }

    #[test]
    fn speech_for_one_provider() {
        let mut ctx = app(&["ratecard", "speech", "--minutes", "300000", "--provider", "aws"]);
        let rendered = route(&mut ctx).unwrap().render(false, Currency::Usd).unwrap();

        assert_eq!(rendered, "AWS ($6750.0000),6750.0000\n");
    }

    #[test]
    fn speech_ranking_is_cheapest_first_and_limited() {
        let mut ctx = app(&["ratecard", "speech", "--minutes", "100", "--limit", "2"]);
        let rendered = route(&mut ctx).unwrap().render(true, Currency::Usd).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Groq 250x"));
    }

    #[test]
    fn speech_breakdown_lists_tiers() {
        let mut ctx = app(&[
            "ratecard", "speech", "--minutes", "300000", "--provider", "aws", "--breakdown",
        ]);
        let rendered = route(&mut ctx).unwrap().render(true, Currency::Usd).unwrap();

        assert_eq!(
            rendered,
            "AWS / total (6750),6750\nAWS / 250000 min @ 0.024 (6000),6000\nAWS / 50000 min @ 0.015 (750),750\n"
        );
    }

    #[test]
    fn negative_minutes_cost_nothing() {
        let mut ctx = app(&["ratecard", "speech", "--minutes", "-10", "--provider", "openai"]);
        let rendered = route(&mut ctx).unwrap().render(true, Currency::Usd).unwrap();

        assert_eq!(rendered, "OpenAI (0),0\n");
    }

    #[test]
    fn unknown_speech_provider_is_an_error() {
        let mut ctx = app(&["ratecard", "speech", "--minutes", "1", "--provider", "nope"]);

        assert!(route(&mut ctx).is_err());
    }

    #[test]
    fn llm_for_one_provider() {
        let mut ctx = app(&[
            "ratecard",
            "llm",
            "--input-tokens",
            "1000000",
            "--output-tokens",
            "1000000",
            "--provider",
            "anthropic",
            "--limit",
            "1",
        ]);
        let rendered = route(&mut ctx).unwrap().render(false, Currency::Usd).unwrap();

        assert_eq!(rendered, "Anthropic / Claude 3.5 Haiku (Default) ($4.8000),4.8000\n");
    }

    #[test]
    fn storage_quote_rows() {
        let mut ctx = app(&[
            "ratecard",
            "storage",
            "--provider",
            "google-cloud-storage",
            "--class",
            "Archive",
            "--storage-gb",
            "1000",
            "--transfer-gb",
            "10",
        ]);
        let rendered = route(&mut ctx).unwrap().render(false, Currency::Usd).unwrap();

        assert_eq!(
            rendered,
            "storage (Archive) ($1.2000),1.2000\ntransfer ($1.2000),1.2000\ntotal ($2.4000),2.4000\n"
        );
    }

    #[test]
    fn assessment_json_has_every_part() {
        let mut ctx = app(&["ratecard", "assessment", "--assessments", "10", "--json"]);
        let Report::Raw(json) = route(&mut ctx).unwrap() else {
            panic!("expected raw json");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["assessments"], 10);
        assert!(value["total"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn cart_prices_and_removes() {
        let catalog = Catalog::builtin();
        let mut cart = CartLedger::new();
        let selections = vec![
            Selection::Speech {
                provider: "openai".to_owned(),
                minutes: 100.0,
            },
            Selection::Llm {
                model: "gpt-4o".to_owned(),
                version: None,
                input_tokens: 1_000_000.0,
                output_tokens: 1_000_000.0,
            },
        ];

        fill_cart(&catalog, &mut cart, &selections, &[0, 7]).unwrap();

        assert_eq!(cart.len(), 1);
        assert!((cart.total() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn cart_with_unknown_version_fails() {
        let selection = Selection::Llm {
            model: "gpt-4o".to_owned(),
            version: Some("1999".to_owned()),
            input_tokens: 1.0,
            output_tokens: 1.0,
        };

        assert!(price_selection(&Catalog::builtin(), &selection).is_err());
    }

    #[test]
    fn storage_selection_uses_the_quote() {
        let selection = Selection::Storage {
            provider: "aws-s3".to_owned(),
            storage_class: None,
            storage_gb: 100.0,
            transfer_gb: 10.0,
        };

        let item = price_selection(&Catalog::builtin(), &selection).unwrap();

        assert!((item.cost() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn tiers_groups_vendor_products() {
        let mut ctx = app(&["ratecard", "tiers", "--kind", "speech"]);
        let rendered = route(&mut ctx).unwrap().render(true, Currency::Usd).unwrap();

        assert!(rendered.contains("speech / AWS / 250000-1000000 min,0.015\n"));
        assert!(rendered.contains("speech / Groq / groq-250x (250x Speed Factor) / 0+ min,0.000333\n"));
        assert!(!rendered.contains("llm /"));
    }

    #[test]
    fn tiers_are_shown_in_the_display_currency() {
        let mut ctx = app(&["ratecard", "tiers", "--currency", "inr"]);
        let rendered = route(&mut ctx)
            .unwrap()
            .render(ctx.cli.unformatted, ctx.cli.currency)
            .unwrap();

        assert!(rendered.contains("speech / AWS / 250000-1000000 min,₹1.245\n"));
        assert!(rendered.contains("storage / Amazon S3 / transfer per GB,₹7.47\n"));
        assert!(rendered.contains("llm / OpenAI / GPT-4 (Default) / input per 1M tokens,₹207.5\n"));
    }

    #[test]
    fn cart_summary_links_the_pricing_page() {
        let mut cart = CartLedger::new();
        let selection = Selection::Speech {
            provider: "aws".to_owned(),
            minutes: 100.0,
        };
        fill_cart(&Catalog::builtin(), &mut cart, &[selection], &[]).unwrap();

        let rendered = cart_summary(&cart, false, true)
            .unwrap()
            .render(true, Currency::Usd)
            .unwrap();

        assert!(rendered.starts_with("0: Speech-to-Text: AWS Amazon Web Services Transcription (100 min) <https://aws.amazon.com/transcribe/pricing/>"));
        assert!(rendered.ends_with("total (2.4),2.4\n"));
    }
}
