/// Tokens the CSV reader treats as a missing value rather than text.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 1) Trim whitespace + drop a leading byte-order mark, then lower-case.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// 2) Best-effort numeric parse of a raw cell. Surrounding whitespace is ignored.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// 3) Like `parse_number`, but only accepts finite values.
pub fn parse_finite(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|v| v.is_finite())
}

/// 4) Whether a raw cell stands for "no value".
pub fn is_missing(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw.trim())
}
