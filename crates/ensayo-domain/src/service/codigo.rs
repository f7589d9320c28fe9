//! Sample and work-order code normalization
//!
//! Technicians type codes in whatever shorthand is fastest ("123",
//! "123-su", "ot-45-20"); these functions canonicalize the recognized
//! shapes and leave everything else alone so the typo stays visible on
//! the form. The current year is an explicit parameter so callers (and
//! tests) control the clock.

use std::sync::LazyLock;

use regex::Regex;

static MUESTRA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:-SU)?(?:-(\d{2}))?$").unwrap());

// A work order is accepted with the OT/NOT marker as prefix or suffix.
// The prefix pattern is tried first; the first match wins.
static OT_PREFIJO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:N?OT-)?(\d+)(?:-(\d{2}))?$").unwrap());
static OT_SUFIJO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:-(?:N?OT))?(?:-(\d{2}))?$").unwrap());

fn year_short(current_year: i32) -> String {
    format!("{:02}", current_year.rem_euclid(100))
}

/// Canonicalize a sample code to `<digits>-SU-<YY>`.
///
/// Input that does not look like a sample number is returned trimmed and
/// uppercased but otherwise unchanged; that is a deliberate pass-through,
/// not a failure.
pub fn normalize_muestra_code(raw: &str, current_year: i32) -> String {
    let value = raw.trim().to_uppercase();
    if value.is_empty() {
        return String::new();
    }

    let compact: String = value.split_whitespace().collect();
    if let Some(caps) = MUESTRA_RE.captures(&compact) {
        let year = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| year_short(current_year));
        return format!("{}-SU-{}", &caps[1], year);
    }

    value
}

/// Canonicalize a work-order code to `<digits>-<YY>`.
pub fn normalize_numero_ot_code(raw: &str, current_year: i32) -> String {
    let value = raw.trim().to_uppercase();
    if value.is_empty() {
        return String::new();
    }

    let compact: String = value.split_whitespace().collect();
    for pattern in [&*OT_PREFIJO_RE, &*OT_SUFIJO_RE] {
        if let Some(caps) = pattern.captures(&compact) {
            let year = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| year_short(current_year));
            return format!("{}-{}", &caps[1], year);
        }
    }

    value
}
