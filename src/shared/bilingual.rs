//! Marathi/English field helpers shared by exports and services.

/// Pick the Marathi value when present, otherwise the English one.
///
/// Empty strings count as missing on both sides, so a record whose Marathi
/// field was never backfilled still displays its English value.
pub fn prefer_marathi<'a>(marathi: Option<&'a str>, english: Option<&'a str>) -> Option<&'a str> {
    non_empty(marathi).or_else(|| non_empty(english))
}

/// Same as [`prefer_marathi`] but renders a placeholder when both are missing
pub fn prefer_marathi_or<'a>(
    marathi: Option<&'a str>,
    english: Option<&'a str>,
    placeholder: &'a str,
) -> &'a str {
    prefer_marathi(marathi, english).unwrap_or(placeholder)
}

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
