use clap::ValueEnum;

use crate::prelude::*;

/// Fixed display-only conversion. Not an exchange rate anyone should trust.
pub const USD_TO_INR: f64 = 83.0;

/// The currency amounts are displayed in. Every cost is computed in USD.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    /// Applied at render time only, never inside a calculation.
    pub fn convert(&self, usd: f64) -> f64 {
        match self {
            Currency::Usd => usd,
            Currency::Inr => usd * USD_TO_INR,
        }
    }
}

/// Something to print.
///
/// Rows keep their order because the rankings are sorted cheapest first.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// A cost in USD.
    Money(f64),
    /// A unit price in USD. Converted like money but never cut to 4 decimals.
    Rate(f64),
    /// A plain quantity: minutes, tokens, gigabytes.
    Units(f64),
    /// Labelled values, one CSV line each.
    Rows(Vec<(String, Report)>),
    /// Already rendered, printed as is (JSON dumps, tier listings).
    Raw(String),
}

impl Report {
    /// Renders the report into a string based on its variant.
    /// - Rows become headerless CSV.
    /// - Money is shown with 4 decimals in the chosen currency.
    pub fn render(&self, no_format: bool, currency: Currency) -> AppResult<String> {
        match self {
            Report::Money(value) => Ok(Self::render_money(*value, no_format, currency, true)),
            Report::Rate(value) => Ok(Self::render_rate(*value, no_format, currency)),
            Report::Units(value) => Ok(Self::render_units(*value)),
            Report::Rows(_) => self.format_csv(no_format, currency),
            Report::Raw(text) => Ok(text.clone()),
        }
    }

    /// Serializes rows into a CSV string, flattening nested rows as "outer / inner".
    fn format_csv(&self, no_format: bool, currency: Currency) -> AppResult<String> {
        /// Two columns: a display name and a sortable value.
        #[derive(Serialize)]
        struct CsvRow {
            display_name: String,
            content: String,
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);

        for (display_name, value) in self.flatten_rows(None) {
            let (display_name, content) = match value {
                // The cost goes in the name as well, so the left cell reads
                // "AWS ($6750.0000)" while the right cell stays a bare number that
                // `sort -n` or a plotting tool can use.
                Report::Money(amount) => {
                    let with_symbol = Self::render_money(*amount, no_format, currency, !no_format);
                    let without_symbol = Self::render_money(*amount, no_format, currency, false);

                    (format!("{} ({})", display_name, with_symbol), without_symbol)
                }
                other => (display_name, other.render(no_format, currency)?),
            };

            writer
                .serialize(CsvRow {
                    display_name,
                    content,
                })
                .into_diagnostic()
                .wrap_err("Failed to serialize a report row to CSV format")?;
        }

        let data = writer
            .into_inner()
            .into_diagnostic()
            .wrap_err("Failed to get writer data.")?;

        String::from_utf8(data)
            .into_diagnostic()
            .wrap_err("Invalid utf-8")
    }

    fn flatten_rows(&self, prefix: Option<&str>) -> Vec<(String, &Report)> {
        let Report::Rows(rows) = self else {
            return vec![(prefix.unwrap_or_default().to_owned(), self)];
        };

        rows.iter()
            .flat_map(|(key, value)| {
                let label = match prefix {
                    Some(outer) => format!("{} / {}", outer, key),
                    None => key.clone(),
                };

                match value {
                    Report::Rows(_) => value.flatten_rows(Some(&label)),
                    _ => vec![(label, value)],
                }
            })
            .collect()
    }

    fn render_units(value: f64) -> String {
        value.to_string()
    }

    /// Prices like 0.000333 per minute need more room than money does.
    fn render_rate(usd: f64, no_format: bool, currency: Currency) -> String {
        let amount = currency.convert(usd);

        if no_format {
            return amount.to_string();
        }

        let amount = (amount * 1_000_000.0).round() / 1_000_000.0;

        format!("{}{}", currency.symbol(), amount)
    }

    fn render_money(usd: f64, no_format: bool, currency: Currency, with_symbol: bool) -> String {
        let amount = currency.convert(usd);

        if no_format {
            return amount.to_string();
        }

        let symbol = if with_symbol { currency.symbol() } else { "" };

        format!("{}{:.4}", symbol, amount)
    }
}

/// Ordered (label, cost) pairs, like a ranking.
impl From<Vec<(String, f64)>> for Report {
    fn from(rows: Vec<(String, f64)>) -> Self {
        Report::Rows(
            rows.into_iter()
                .map(|(label, cost)| (label, Report::Money(cost)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_has_four_decimals_and_a_symbol() {
        let rendered = Report::Money(6750.0).render(false, Currency::Usd).unwrap();
        assert_eq!(rendered, "$6750.0000");
    }

    #[test]
    fn unformatted_money_is_a_bare_number() {
        let rendered = Report::Money(1.5).render(true, Currency::Usd).unwrap();
        assert_eq!(rendered, "1.5");
    }

    #[test]
    fn rupees_are_converted_at_render_time() {
        let rendered = Report::Money(1.0).render(false, Currency::Inr).unwrap();
        assert_eq!(rendered, "₹83.0000");
    }

    #[test]
    fn rates_follow_the_display_currency() {
        let report = Report::Rows(vec![
            ("per min".to_owned(), Report::Rate(0.015)),
            ("minutes".to_owned(), Report::Units(2.0)),
        ]);

        assert_eq!(
            report.render(false, Currency::Inr).unwrap(),
            "per min,₹1.245\nminutes,2\n"
        );
        assert_eq!(
            report.render(false, Currency::Usd).unwrap(),
            "per min,$0.015\nminutes,2\n"
        );
    }

    #[test]
    fn ranking_renders_as_two_column_csv() {
        let report = Report::from(vec![("A".to_owned(), 1.0), ("B".to_owned(), 2.0)]);
        let rendered = report.render(false, Currency::Usd).unwrap();

        assert_eq!(rendered, "A ($1.0000),1.0000\nB ($2.0000),2.0000\n");
    }

    #[test]
    fn nested_rows_are_flattened_in_order() {
        let report = Report::Rows(vec![
            (
                "AWS".to_owned(),
                Report::Rows(vec![
                    ("total".to_owned(), Report::Money(6750.0)),
                    ("250000 min @ 0.024".to_owned(), Report::Money(6000.0)),
                ]),
            ),
            ("minutes".to_owned(), Report::Units(300000.0)),
        ]);

        let rendered = report.render(true, Currency::Usd).unwrap();

        assert_eq!(
            rendered,
            "AWS / total (6750),6750\nAWS / 250000 min @ 0.024 (6000),6000\nminutes,300000\n"
        );
    }
}
