use regex::Regex;
use std::sync::LazyLock;

static DURATION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(h|min)").expect("duration pattern is valid"));

/// Sums every `<n> h` and `<n> min` token in `text`.
///
/// Returns `None` when the text holds no such token, so callers can tell an
/// unparseable duration apart from a genuine zero.
pub fn parse_duration_tokens(text: &str) -> Option<u64> {
    let mut found = false;
    let mut total: u64 = 0;

    for caps in DURATION_TOKEN.captures_iter(text) {
        // digit runs too long for u64 are skipped like any other noise
        let Ok(value) = caps[1].parse::<u64>() else {
            continue;
        };
        found = true;
        let minutes = match &caps[2] {
            "h" => value.saturating_mul(60),
            _ => value,
        };
        total = total.saturating_add(minutes);
    }

    found.then_some(total)
}

/// Total minutes in a free-text duration such as `"2h 15min"`; 0 when nothing parses.
pub fn parse_duration_minutes(text: &str) -> u64 {
    parse_duration_tokens(text).unwrap_or(0)
}
