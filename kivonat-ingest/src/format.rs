//! Statement layout conventions: date formats, separators, noise patterns.
//!
//! Every locale-specific choice the classifier and parser need lives in one
//! record instead of being scattered through the matching code.

use chrono::NaiveDate;

/// Layout conventions for one statement export format.
///
/// The default describes the MBH Netbank profile: year-first dotted dates
/// with a trailing dot, comma decimals with space/NBSP/period thousands
/// grouping, HUF/Ft currency suffixes.
#[derive(Debug, Clone)]
pub struct StatementFormat {
    /// chrono format strings tried in order when parsing a date token.
    pub date_formats: Vec<String>,
    /// Comma as decimal separator (thousands grouped by space/NBSP/period);
    /// `false` means period decimals with comma/space grouping.
    pub decimal_comma: bool,
    /// Accept a debit marker minus after the number ("2 000,00-").
    pub trailing_minus: bool,
    /// Currency tokens accepted after an amount and stripped before parsing.
    pub currency_suffixes: Vec<String>,
    /// Regexes for lines carrying no transaction data: statement title,
    /// balances, turnover totals, column headers, page footers.
    pub noise_patterns: Vec<String>,
}

impl Default for StatementFormat {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y.%m.%d".to_string(),
                "%d.%m.%Y".to_string(),
                "%Y-%m-%d".to_string(),
            ],
            decimal_comma: true,
            trailing_minus: true,
            currency_suffixes: vec!["HUF".to_string(), "Ft".to_string()],
            noise_patterns: vec![
                r"(?i)számlakivonat".to_string(),
                r"(?i)\begyenleg\b".to_string(),
                r"(?i)forgalom összesen".to_string(),
                r"(?i)értéknap.*(?:összeg|terhelés|jóváírás)".to_string(),
                r"(?i)^számlaszám\b".to_string(),
                r"(?i)^időszak\b".to_string(),
                r"(?i)\d+\.\s*oldal\b".to_string(),
                r"(?i)\boldal\s*:?\s*\d+".to_string(),
                r"(?i)folytatás a következő oldalon".to_string(),
            ],
        }
    }
}

impl StatementFormat {
    /// Parse a raw date token, tolerating the Hungarian trailing dot
    /// ("2025.08.01."). `None` when no configured format matches.
    pub fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        let s = raw.trim().trim_end_matches('.');
        self.date_formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }

    /// Parse a raw amount token into a signed value. Strips currency
    /// suffixes and thousands grouping (space, NBSP, narrow NBSP, and the
    /// grouping punctuation), normalizes the decimal separator, honors a
    /// trailing minus when configured. `None` when no number remains.
    pub fn parse_amount(&self, raw: &str) -> Option<f64> {
        let mut s = raw.trim().to_string();
        for currency in &self.currency_suffixes {
            s = s.replace(currency.as_str(), "");
        }
        let mut s = s.trim().to_string();

        let mut negate = false;
        if self.trailing_minus && s.ends_with('-') {
            s.pop();
            negate = true;
        }

        let grouping_punct = if self.decimal_comma { '.' } else { ',' };
        s.retain(|c| c != ' ' && c != '\u{00A0}' && c != '\u{202F}' && c != grouping_punct);
        if self.decimal_comma {
            s = s.replace(',', ".");
        }

        let value: f64 = s.trim().parse().ok()?;
        Some(if negate { -value } else { value })
    }

    /// Regex for a calendar date token, year-first or day-first, with an
    /// optional trailing dot.
    pub(crate) fn date_token_pattern(&self) -> String {
        r"\b(?:\d{4}[./-]\d{1,2}[./-]\d{1,2}|\d{1,2}[./-]\d{1,2}[./-]\d{4})\.?".to_string()
    }

    /// Regex for an amount token. A token must show a decimal part,
    /// thousands grouping, or a currency suffix so that bare integers in
    /// free text (years, reference numbers) do not read as amounts.
    pub(crate) fn amount_token_pattern(&self) -> String {
        let currency = self.currency_alternation();
        let (grouping, decimal) = if self.decimal_comma {
            (r"[ \u{00A0}\u{202F}.]", ",")
        } else {
            (r"[ \u{00A0}\u{202F},]", r"\.")
        };

        let currency_opt = if currency.is_empty() {
            String::new()
        } else {
            format!(r"(?:\s*(?:{currency})\b)?")
        };
        let number = format!(
            r"(?:[+-]?\s?\d{{1,3}}(?:{grouping}\d{{3}})+(?:{decimal}\d{{1,2}})?|[+-]?\s?\d+{decimal}\d{{1,2}}){currency_opt}"
        );

        let trailing = if self.trailing_minus { "-?" } else { "" };
        if currency.is_empty() {
            format!("(?:{number}){trailing}")
        } else {
            let bare = format!(r"[+-]?\s?\d+\s*(?:{currency})\b");
            format!("(?:{number}|{bare}){trailing}")
        }
    }

    /// Regex for lines consisting only of digits and separators (running
    /// balances, page numbers), with an optional currency suffix.
    pub(crate) fn balance_line_pattern(&self) -> String {
        let currency = self.currency_alternation();
        if currency.is_empty() {
            r"^[\d\s.,+-]+$".to_string()
        } else {
            format!(r"^[\d\s.,+-]+(?:{currency})?\.?$")
        }
    }

    fn currency_alternation(&self) -> String {
        self.currency_suffixes
            .iter()
            .map(|c| regex::escape(c))
            .collect::<Vec<_>>()
            .join("|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mbh() -> StatementFormat {
        StatementFormat::default()
    }

    #[test]
    fn test_parse_date_year_first_with_trailing_dot() {
        assert_eq!(
            mbh().parse_date("2025.08.01."),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
    }

    #[test]
    fn test_parse_date_day_first() {
        assert_eq!(
            mbh().parse_date("01.08.2025"),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            mbh().parse_date("2025-08-01"),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
    }

    #[test]
    fn test_parse_date_rejects_impossible_month() {
        assert_eq!(mbh().parse_date("31.13.2025"), None);
    }

    #[test]
    fn test_parse_amount_space_grouped_comma_decimal() {
        assert_eq!(mbh().parse_amount("-2 000,00"), Some(-2000.0));
    }

    #[test]
    fn test_parse_amount_strips_currency() {
        assert_eq!(mbh().parse_amount("450 000,00 HUF"), Some(450_000.0));
        assert_eq!(mbh().parse_amount("1500 Ft"), Some(1500.0));
    }

    #[test]
    fn test_parse_amount_nbsp_grouping() {
        assert_eq!(mbh().parse_amount("12\u{00A0}500,00"), Some(12_500.0));
    }

    #[test]
    fn test_parse_amount_period_grouping() {
        assert_eq!(mbh().parse_amount("2.000,50"), Some(2000.5));
    }

    #[test]
    fn test_parse_amount_trailing_minus() {
        assert_eq!(mbh().parse_amount("2 000,00-"), Some(-2000.0));
    }

    #[test]
    fn test_parse_amount_garbage_is_none() {
        assert_eq!(mbh().parse_amount("n/a"), None);
        assert_eq!(mbh().parse_amount(""), None);
    }
}
