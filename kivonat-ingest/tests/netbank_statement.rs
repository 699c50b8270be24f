use chrono::NaiveDate;
use kivonat_ingest::{StatementFormat, TransactionKind, parse_statement_text};

/// Text shaped like a full `pdftotext -layout` dump of an MBH Netbank
/// statement: title block, balances and column header interleaved with
/// three transactions carrying multi-line descriptions.
const STATEMENT: &str = "\
                              BANKSZÁMLAKIVONAT
MBH Bank Nyrt.
Számlaszám: 12345678-12345678-12345678
Időszak: 2025.08.01. - 2025.08.31.

Nyitó egyenleg: 2025.08.01.                                  125 000,00 HUF

Értéknap       Könyvelés       Összeg            Közlemény
2025.08.04.    2025.08.04.     -12 500,00 HUF    POS vásárlás
LIDL ÁRUHÁZ BUDAPEST
Közlemény: Kártyás vásárlás
2025.08.10.    2025.08.10.     450 000,00 HUF    Átutalás jóváírás
Megbízó neve: MUNKÁLTATÓ KFT
Közlemény: Munkabér 2025/07
2025.08.15.    2025.08.15.     -35 000,00 HUF
Záró egyenleg: 2025.08.31.                                   527 500,00 HUF
1. oldal
";

#[test]
fn test_full_statement_yields_three_transactions() {
    let records = parse_statement_text(STATEMENT, &StatementFormat::default()).unwrap();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2025, 8, 4));
    assert_eq!(records[0].amount, Some(-12_500.0));
    assert_eq!(records[0].kind(), Some(TransactionKind::Expense));
    assert_eq!(
        records[0].description,
        "POS vásárlás LIDL ÁRUHÁZ BUDAPEST Közlemény: Kártyás vásárlás"
    );

    assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2025, 8, 10));
    assert_eq!(records[1].amount, Some(450_000.0));
    assert_eq!(records[1].kind(), Some(TransactionKind::Income));
    assert_eq!(
        records[1].description,
        "Átutalás jóváírás Megbízó neve: MUNKÁLTATÓ KFT Közlemény: Munkabér 2025/07"
    );

    // Trailing record is closed by end of input, not by another start.
    assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2025, 8, 15));
    assert_eq!(records[2].amount, Some(-35_000.0));
    assert_eq!(records[2].kind(), Some(TransactionKind::Expense));
    assert_eq!(records[2].description, "");
}

#[test]
fn test_balances_and_headers_never_become_transactions() {
    let records = parse_statement_text(STATEMENT, &StatementFormat::default()).unwrap();
    for record in &records {
        assert!(!record.description.to_lowercase().contains("egyenleg"));
    }
}
