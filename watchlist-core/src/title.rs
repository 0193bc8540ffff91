//! Title normalization.
//!
//! Titles are stored in a canonical display form so duplicate detection and
//! search see the same text the user does:
//! ```text
//! "  the   iron GIANT " -> "The Iron Giant"
//! ```
//! No punctuation or locale-specific handling is applied.

/// Normalize a raw title into its display form.
///
/// Surrounding whitespace is trimmed, interior whitespace runs collapse to a
/// single space, and each word gets an uppercase first character with the
/// rest lowercased. Input that is empty after trimming yields `""`.
///
/// # Examples
///
/// ```
/// use watchlist_core::title::normalize_title;
///
/// assert_eq!(normalize_title(" get   out "), "Get Out");
/// assert_eq!(normalize_title("WALL-E"), "Wall-e");
/// assert_eq!(normalize_title("   "), "");
/// ```
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    // Characters whose uppercase form is several characters (such as 'ß')
    // are kept as-is so a second pass produces the same title.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Parse the raw year field of an add request.
///
/// Returns `Ok(None)` for absent or blank input. Anything else must be an
/// integer within [`MIN_YEAR`](crate::MIN_YEAR)..=[`MAX_YEAR`](crate::MAX_YEAR).
pub(crate) fn parse_year(raw: Option<&str>) -> Result<Option<u16>, crate::ValidationError> {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    match text.parse::<i64>() {
        Ok(year) if (crate::MIN_YEAR as i64..=crate::MAX_YEAR as i64).contains(&year) => {
            Ok(Some(year as u16))
        }
        _ => Err(crate::ValidationError::year_out_of_range(text)),
    }
}
