//! Flexible date normalization to `DD/MM/YY`
//!
//! Lab technicians enter dates in many shorthand forms: "5/3", "0503",
//! "50325", "05032025"... The normalizer accepts anything it can read and
//! hands back anything it cannot, verbatim, so the human corrects it on
//! screen. It never fails.

use chrono::{Datelike, NaiveDate};

/// Last two digits of the year, zero padded
pub fn current_year_short(today: NaiveDate) -> String {
    format!("{:02}", today.year().rem_euclid(100))
}

/// Today rendered the way the forms expect it (`DD/MM/YY`)
pub fn format_short_date(today: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{}",
        today.day(),
        today.month(),
        current_year_short(today)
    )
}

// Left-pad to two characters, then keep the last two. "5" -> "05",
// "123" -> "23".
fn pad2(part: &str) -> String {
    let mut padded: String = part.to_string();
    while padded.chars().count() < 2 {
        padded.insert(0, '0');
    }
    let chars: Vec<char> = padded.chars().collect();
    chars[chars.len() - 2..].iter().collect()
}

fn build(d: &str, m: &str, y: &str) -> String {
    format!("{}/{}/{}", pad2(d), pad2(m), pad2(y))
}

/// Normalize free-text date input to `DD/MM/YY`.
///
/// Slash-delimited input needs at least a day and a month part; the year
/// part may be missing (current year), one digit (zero padded) or four
/// digits (last two kept). Digit-only input is dispatched on length:
/// 2=DM, 3=DMM, 4=DDMM, 5=DMMYY, 6=DDMMYY, 8 or more=DDMMYYYY, where the
/// year of an 8-digit run is its last two digits (positions 4..6 hold the
/// century and are skipped). Anything else is returned trimmed but
/// unmodified. Idempotent for any input containing a slash.
pub fn normalize_flexible_date(raw: &str, current_year: i32) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    let year = format!("{:02}", current_year.rem_euclid(100));

    if value.contains('/') {
        let mut parts = value.split('/');
        let d = parts.next().unwrap_or("").trim();
        let m = parts.next().unwrap_or("").trim();
        let y_raw = parts.next().unwrap_or("").trim();
        if d.is_empty() || m.is_empty() {
            return value.to_string();
        }

        let mut yy: String = y_raw.chars().filter(|c| c.is_ascii_digit()).collect();
        if yy.len() == 4 {
            yy = yy[2..].to_string();
        }
        if yy.len() == 1 {
            yy = format!("0{}", yy);
        }
        if yy.is_empty() {
            yy = year;
        }
        return build(d, m, &yy);
    }

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        2 => build(&digits[0..1], &digits[1..2], &year),
        3 => build(&digits[0..1], &digits[1..3], &year),
        4 => build(&digits[0..2], &digits[2..4], &year),
        5 => build(&digits[0..1], &digits[1..3], &digits[3..5]),
        6 => build(&digits[0..2], &digits[2..4], &digits[4..6]),
        n if n >= 8 => build(&digits[0..2], &digits[2..4], &digits[6..8]),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    #[test]
    fn test_digit_runs_by_length() {
        assert_eq!(normalize_flexible_date("53", YEAR), "05/03/25");
        assert_eq!(normalize_flexible_date("512", YEAR), "05/12/25");
        assert_eq!(normalize_flexible_date("0503", YEAR), "05/03/25");
        assert_eq!(normalize_flexible_date("51224", YEAR), "05/12/24");
        assert_eq!(normalize_flexible_date("050324", YEAR), "05/03/24");
    }

    #[test]
    fn test_eight_digit_run_takes_last_year_digits() {
        // DDMMYYYY: the century digits (positions 4..6) are dropped
        assert_eq!(normalize_flexible_date("05032024", YEAR), "05/03/24");
        assert_eq!(normalize_flexible_date("3112-1999", YEAR), "31/12/99");
    }

    #[test]
    fn test_unparseable_lengths_pass_through() {
        assert_eq!(normalize_flexible_date("5", YEAR), "5");
        assert_eq!(normalize_flexible_date("1234567", YEAR), "1234567");
        assert_eq!(normalize_flexible_date("sin fecha", YEAR), "sin fecha");
        assert_eq!(normalize_flexible_date("", YEAR), "");
        assert_eq!(normalize_flexible_date("   ", YEAR), "");
    }

    #[test]
    fn test_slash_input_fills_missing_year() {
        assert_eq!(normalize_flexible_date("5/3", YEAR), "05/03/25");
        assert_eq!(normalize_flexible_date("5/3/", YEAR), "05/03/25");
        assert_eq!(normalize_flexible_date("05/03/2024", YEAR), "05/03/24");
        assert_eq!(normalize_flexible_date("5/3/4", YEAR), "05/03/04");
    }

    #[test]
    fn test_slash_input_requires_day_and_month() {
        assert_eq!(normalize_flexible_date("/3/24", YEAR), "/3/24");
        assert_eq!(normalize_flexible_date("5//24", YEAR), "5//24");
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let once = normalize_flexible_date("50324", YEAR);
        let twice = normalize_flexible_date(&once, YEAR);
        assert_eq!(once, twice);
        assert_eq!(normalize_flexible_date("07/03/25", YEAR), "07/03/25");
    }

    #[test]
    fn test_output_shape_for_all_digit_runs() {
        let shape = |s: &str| {
            s.len() == 8
                && s.as_bytes()[2] == b'/'
                && s.as_bytes()[5] == b'/'
                && s.chars().filter(|c| c.is_ascii_digit()).count() == 6
        };
        for input in ["12", "123", "1234", "12345", "123456", "12345678", "1234567890"] {
            let out = normalize_flexible_date(input, YEAR);
            assert!(shape(&out), "bad shape for {input}: {out}");
        }
    }

    #[test]
    fn test_format_short_date() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(format_short_date(d), "09/01/26");
        assert_eq!(current_year_short(d), "26");
    }
}
