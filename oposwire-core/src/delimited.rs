//! Comma-delimited record conversion
//!
//! Statistics and cash-count calls carry small structured records as
//! comma-separated strings. No escaping exists in the format: a token
//! must not itself contain a comma. That is a limitation of the legacy
//! interface, carried as-is.

use oposwire_types::{CashCount, CashCountKind, Statistic};

use crate::error::{Error, Result};

/// Join scalar tokens into a comma-separated string
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a comma-separated string into tokens
///
/// Tokens are trimmed; empty tokens from stray separators are dropped.
///
/// # Examples
///
/// ```
/// use oposwire_core::delimited::split_tokens;
///
/// assert_eq!(split_tokens("a, b ,,c"), vec!["a", "b", "c"]);
/// ```
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join statistics into a `name=value` comma-separated string
pub fn join_statistics(statistics: &[Statistic]) -> String {
    statistics
        .iter()
        .map(Statistic::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a `name=value` comma-separated string into statistics
///
/// Each token splits on its first `=`; values containing `=` are kept
/// verbatim. A token with no `=` yields an empty value.
pub fn split_statistics(text: &str) -> Vec<Statistic> {
    split_tokens(text)
        .into_iter()
        .map(|token| match token.split_once('=') {
            Some((name, value)) => Statistic::new(name, value),
            None => Statistic::new(token, ""),
        })
        .collect()
}

/// Join cash counts into a coin/bill sectioned string
///
/// Coins come first, bills after the `;`, each section a comma-joined
/// list of `nominal:count` pairs. The separator is always present.
pub fn join_cash_counts(counts: &[CashCount]) -> String {
    let section = |kind: CashCountKind| {
        counts
            .iter()
            .filter(|count| count.kind == kind)
            .map(CashCount::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };

    format!(
        "{};{}",
        section(CashCountKind::Coin),
        section(CashCountKind::Bill)
    )
}

/// Split a coin/bill sectioned string into cash counts
///
/// A string without `;` is all coins.
///
/// # Errors
///
/// Returns an error for any pair that is not `nominal:count` with both
/// sides parsing as unsigned integers.
pub fn split_cash_counts(text: &str) -> Result<Vec<CashCount>> {
    let (coins, bills) = match text.split_once(';') {
        Some((coins, bills)) => (coins, bills),
        None => (text, ""),
    };

    let mut counts = Vec::new();
    for (section, kind) in [(coins, CashCountKind::Coin), (bills, CashCountKind::Bill)] {
        for token in split_tokens(section) {
            let Some((nominal, count)) = token.split_once(':') else {
                return Err(Error::InvalidCashCount { token });
            };

            let parsed = nominal
                .trim()
                .parse::<u32>()
                .and_then(|nominal| count.trim().parse::<u32>().map(|count| (nominal, count)));
            let Ok((nominal, count)) = parsed else {
                return Err(Error::InvalidCashCount { token });
            };

            counts.push(CashCount {
                kind,
                nominal,
                count,
            });
        }
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_round_trip() {
        let joined = join_tokens(&["a", "b", "c"]);
        assert_eq!(joined, "a,b,c");
        assert_eq!(split_tokens(&joined), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stray_separators_dropped() {
        assert_eq!(split_tokens("a,,b"), vec!["a", "b"]);
        assert_eq!(split_tokens(",a,"), vec!["a"]);
        assert_eq!(split_tokens(""), Vec::<String>::new());
        assert_eq!(split_tokens(" , "), Vec::<String>::new());
    }

    #[test]
    fn test_tokens_trimmed() {
        assert_eq!(split_tokens(" a , b "), vec!["a", "b"]);
    }

    #[test]
    fn test_statistics_round_trip() {
        let stats = vec![
            Statistic::new("GoodScanCount", 12),
            Statistic::new("HoursPoweredCount", 340),
        ];

        let joined = join_statistics(&stats);
        assert_eq!(joined, "GoodScanCount=12,HoursPoweredCount=340");
        assert_eq!(split_statistics(&joined), stats);
    }

    #[test]
    fn test_statistic_value_keeps_equals() {
        let stats = split_statistics("FirmwareVersion=1=15");
        assert_eq!(stats, vec![Statistic::new("FirmwareVersion", "1=15")]);
    }

    #[test]
    fn test_statistic_without_value() {
        let stats = split_statistics("GoodScanCount");
        assert_eq!(stats, vec![Statistic::new("GoodScanCount", "")]);
    }

    #[test]
    fn test_cash_count_round_trip() {
        let counts = vec![
            CashCount::coin(50, 12),
            CashCount::coin(100, 4),
            CashCount::bill(1000, 25),
        ];

        let joined = join_cash_counts(&counts);
        assert_eq!(joined, "50:12,100:4;1000:25");
        assert_eq!(split_cash_counts(&joined).unwrap(), counts);
    }

    #[test]
    fn test_cash_counts_without_separator_are_coins() {
        let counts = split_cash_counts("1:80,5:77").unwrap();
        assert_eq!(counts, vec![CashCount::coin(1, 80), CashCount::coin(5, 77)]);
    }

    #[test]
    fn test_cash_counts_bills_only() {
        let counts = split_cash_counts(";1000:5").unwrap();
        assert_eq!(counts, vec![CashCount::bill(1000, 5)]);
    }

    #[test]
    fn test_cash_counts_coins_only_round_trip() {
        let counts = vec![CashCount::coin(5, 9)];
        assert_eq!(split_cash_counts(&join_cash_counts(&counts)).unwrap(), counts);
    }

    #[test]
    fn test_invalid_cash_count_token() {
        let result = split_cash_counts("50:12,bogus");
        assert!(matches!(
            result,
            Err(Error::InvalidCashCount { token }) if token == "bogus"
        ));

        assert!(split_cash_counts("x:1").is_err());
        assert!(split_cash_counts("1:x").is_err());
    }
}
