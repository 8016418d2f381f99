//! Turkish lexical predicates backing the named-entity detectors.

use once_cell::sync::Lazy;
use regex::Regex;

/// Honorific titles preceding person names.
const HONORIFICS: &[&str] = &["bay", "bayan"];

/// Suffix tokens that close an organization name.
const ORGANIZATION_SUFFIXES: &[&str] = &["corp", "inc.", "co."];

/// Currency words a money expression can end with.
const CURRENCY_WORDS: &[&str] = &["lira", "kuruş", "dolar", "avro", "sterlin", "tl"];

const MONTHS: &[&str] = &[
    "ocak", "şubat", "mart", "nisan", "mayıs", "haziran", "temmuz", "ağustos", "eylül", "ekim",
    "kasım", "aralık",
];

const WEEKDAYS: &[&str] = &[
    "pazartesi", "salı", "çarşamba", "perşembe", "cuma", "cumartesi", "pazar",
];

static CLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d\d|\d):(\d\d)$").unwrap());

static MONEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+([.,]\d+)?(lira|kuruş|dolar|avro|sterlin|tl)$").unwrap());

/// Lowercase with the Turkish dotted/dotless i distinction. The
/// standard lowercase mapping sends `I` to `i`, which breaks every
/// lexicon lookup for words like `ISPARTA`.
pub fn turkish_lowercase(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            'I' => vec!['ı'],
            'İ' => vec!['i'],
            other => other.to_lowercase().collect(),
        })
        .collect()
}

/// Whether the token is an honorific title such as "bay".
pub fn is_honorific(token: &str) -> bool {
    HONORIFICS.contains(&turkish_lowercase(token).as_str())
}

/// Whether the token closes an organization name ("corp", "inc.", ...).
pub fn is_organization_suffix(token: &str) -> bool {
    ORGANIZATION_SUFFIXES.contains(&turkish_lowercase(token).as_str())
}

/// Whether the token is a time expression: a month or weekday name, or
/// a clock pattern like `17:30`.
pub fn is_time_expression(token: &str) -> bool {
    let lower = turkish_lowercase(token);
    MONTHS.contains(&lower.as_str())
        || WEEKDAYS.contains(&lower.as_str())
        || CLOCK_PATTERN.is_match(&lower)
}

/// Whether the token is a money expression: a currency word or an
/// amount fused with one, like `100dolar`.
pub fn is_money_expression(token: &str) -> bool {
    let lower = turkish_lowercase(token);
    CURRENCY_WORDS.contains(&lower.as_str()) || MONEY_PATTERN.is_match(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_lowercase_dotted_i() {
        assert_eq!(turkish_lowercase("ISPARTA"), "ısparta");
        assert_eq!(turkish_lowercase("İstanbul"), "istanbul");
        assert_eq!(turkish_lowercase("Ali"), "ali");
    }

    #[test]
    fn test_time_expressions() {
        assert!(is_time_expression("Ocak"));
        assert!(is_time_expression("pazartesi"));
        assert!(is_time_expression("17:30"));
        assert!(!is_time_expression("1730"));
        assert!(!is_time_expression("kitap"));
    }

    #[test]
    fn test_money_expressions() {
        assert!(is_money_expression("TL"));
        assert!(is_money_expression("dolar"));
        assert!(is_money_expression("100dolar"));
        assert!(is_money_expression("3,5lira"));
        assert!(!is_money_expression("100"));
    }

    #[test]
    fn test_honorifics_and_suffixes() {
        assert!(is_honorific("Bay"));
        assert!(is_honorific("BAYAN"));
        assert!(!is_honorific("doktor"));
        assert!(is_organization_suffix("Corp"));
        assert!(is_organization_suffix("inc."));
    }
}
