//! Line classification: record starts, description continuations, noise.

use anyhow::Result;
use regex::Regex;

use crate::format::StatementFormat;

/// Raw material pulled from a record-start line.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSeed {
    pub date_raw: String,
    pub amount_raw: String,
    /// Text after the amount token; seeds the description buffer.
    pub seed_text: String,
}

/// What one line of extracted text contributes to the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Line opens a new transaction.
    NewRecord(RecordSeed),
    /// Non-empty free text; description material when a record is open.
    Continuation,
    /// Headers, balances, footers, blank lines.
    Noise,
}

/// Classifies extracted-text lines. Token and noise regexes are compiled
/// once per statement format.
pub struct LineClassifier {
    date_re: Regex,
    amount_re: Regex,
    noise_re: Option<Regex>,
    balance_re: Regex,
}

impl LineClassifier {
    pub fn new(format: &StatementFormat) -> Result<Self> {
        let noise_re = if format.noise_patterns.is_empty() {
            None
        } else {
            let joined = format
                .noise_patterns
                .iter()
                .map(|p| format!("(?:{p})"))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&joined)?)
        };

        Ok(Self {
            date_re: Regex::new(&format.date_token_pattern())?,
            amount_re: Regex::new(&format.amount_token_pattern())?,
            noise_re,
            balance_re: Regex::new(&format.balance_line_pattern())?,
        })
    }

    /// Classification order matters: noise keywords win over the record
    /// pattern so balance lines carrying a date and an amount are
    /// discarded, while a bare date+amount line (a record with no trailing
    /// text) still beats the digits-only balance heuristic.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Noise;
        }
        if self
            .noise_re
            .as_ref()
            .is_some_and(|re| re.is_match(trimmed))
        {
            return LineClass::Noise;
        }
        if let Some(seed) = self.record_seed(trimmed) {
            return LineClass::NewRecord(seed);
        }
        if self.balance_re.is_match(trimmed) {
            return LineClass::Noise;
        }
        LineClass::Continuation
    }

    /// A record starts on a line holding a date token with an amount token
    /// somewhere after it. Text between the two (e.g. the duplicated
    /// booking date in the MBH layout) is dropped; text after the amount
    /// seeds the description.
    fn record_seed(&self, line: &str) -> Option<RecordSeed> {
        let date_m = self.date_re.find(line)?;
        let rest = &line[date_m.end()..];
        let amount_m = self.amount_re.find(rest)?;
        let seed_text = rest[amount_m.end()..].trim().to_string();
        Some(RecordSeed {
            date_raw: date_m.as_str().to_string(),
            amount_raw: amount_m.as_str().trim().to_string(),
            seed_text,
        })
    }
}
