//! MBH Netbank statement parser (text).
//!
//! Expected extracted-text shape after `pdftotext -layout`:
//!   Értéknap       Könyvelés       Összeg            Közlemény
//!   2025.08.04.    2025.08.04.     -12 500,00 HUF    POS vásárlás
//!   LIDL ÁRUHÁZ BUDAPEST
//!   Közlemény: Kártyás vásárlás
//!
//! A transaction starts on a date+amount line and owns every continuation
//! line up to the next start; there is no explicit record delimiter.

use anyhow::Result;

use crate::classify::{LineClass, LineClassifier, RecordSeed};
use crate::format::StatementFormat;
use crate::types::TransactionRecord;

/// A record under construction: raw tokens plus the description buffer.
#[derive(Debug)]
struct PendingRecord {
    date_raw: String,
    amount_raw: String,
    description: String,
}

/// Accumulation state: between records, or growing one.
#[derive(Debug)]
enum ParseState {
    Idle,
    Open(PendingRecord),
}

impl PendingRecord {
    fn from_seed(seed: RecordSeed) -> Self {
        Self {
            date_raw: seed.date_raw,
            amount_raw: seed.amount_raw,
            description: seed.seed_text,
        }
    }

    fn push_text(&mut self, text: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }

    /// Field parse failures leave the field empty rather than dropping the
    /// record; partial rows are preferred over lost transactions.
    fn finalize(self, format: &StatementFormat) -> TransactionRecord {
        TransactionRecord {
            date: format.parse_date(&self.date_raw),
            amount: format.parse_amount(&self.amount_raw),
            description: collapse_whitespace(&self.description),
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse extracted statement text into transactions, in document order.
///
/// Noise lines (balances, footers) never close an open record; only the
/// next record start or the end of input does.
pub fn parse_statement_text(
    text: &str,
    format: &StatementFormat,
) -> Result<Vec<TransactionRecord>> {
    let classifier = LineClassifier::new(format)?;
    let mut out = Vec::new();
    let mut state = ParseState::Idle;

    for line in text.lines() {
        match classifier.classify(line) {
            LineClass::NewRecord(seed) => {
                if let ParseState::Open(pending) = std::mem::replace(&mut state, ParseState::Idle) {
                    out.push(pending.finalize(format));
                }
                state = ParseState::Open(PendingRecord::from_seed(seed));
            }
            LineClass::Continuation => {
                if let ParseState::Open(pending) = &mut state {
                    pending.push_text(line.trim());
                }
            }
            LineClass::Noise => {}
        }
    }

    if let ParseState::Open(pending) = state {
        out.push(pending.finalize(format));
    }

    Ok(out)
}
