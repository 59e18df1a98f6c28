//! Time-range normalization.
//!
//! Times arrive as compact 24-hour tokens without a leading zero
//! (`800-920`, `1400-1520`). A cell holding only the separator means the
//! offering has no scheduled meeting.

/// Separator between start and end, and on its own the "no meeting" marker.
pub const TIME_SEPARATOR: &str = "-";

/// A normalized meeting time with zero-padded 4-character bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Normalizes a raw time cell.
///
/// Returns `None` when the row should contribute no slot: the cell is the
/// bare separator, or it does not split into exactly two non-empty parts.
/// Start and end are not compared against each other.
pub fn normalize_time_range(raw: &str) -> Option<TimeRange> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if compact == TIME_SEPARATOR {
        return None;
    }

    let parts: Vec<&str> = compact.split(TIME_SEPARATOR).collect();
    match parts.as_slice() {
        [start, end] if !start.is_empty() && !end.is_empty() => Some(TimeRange {
            start: pad_time(start),
            end: pad_time(end),
        }),
        _ => None,
    }
}

fn pad_time(part: &str) -> String {
    if part.chars().count() == 3 {
        format!("0{}", part)
    } else {
        part.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn range(start: &str, end: &str) -> Option<TimeRange> {
        Some(TimeRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    #[test]
    fn morning_slot_is_padded() {
        assert_eq!(normalize_time_range("800-920"), range("0800", "0920"));
    }

    #[test]
    fn afternoon_slot_is_unchanged() {
        assert_eq!(normalize_time_range("1400-1520"), range("1400", "1520"));
    }

    #[test]
    fn mixed_width_slot_pads_only_short_part() {
        assert_eq!(normalize_time_range("940-1100"), range("0940", "1100"));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(normalize_time_range(" 800 - 920 "), range("0800", "0920"));
    }

    #[test]
    fn bare_separator_is_skipped() {
        assert_eq!(normalize_time_range("-"), None);
        assert_eq!(normalize_time_range(" - "), None);
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        assert_eq!(normalize_time_range(""), None);
        assert_eq!(normalize_time_range("800"), None);
        assert_eq!(normalize_time_range("800-"), None);
        assert_eq!(normalize_time_range("-920"), None);
        assert_eq!(normalize_time_range("800-920-1000"), None);
    }

    #[test]
    fn reversed_range_is_not_rejected() {
        assert_eq!(normalize_time_range("1100-940"), range("1100", "0940"));
    }

    proptest! {
        #[test]
        fn three_digit_parts_gain_one_zero(start in 100u32..1000, end in 100u32..1000) {
            let raw = format!("{}-{}", start, end);
            let normalized = normalize_time_range(&raw).unwrap();
            prop_assert_eq!(normalized.start, format!("0{}", start));
            prop_assert_eq!(normalized.end, format!("0{}", end));
        }

        #[test]
        fn four_digit_parts_pass_through(start in 1000u32..2400, end in 1000u32..2400) {
            let raw = format!("{}-{}", start, end);
            let normalized = normalize_time_range(&raw).unwrap();
            prop_assert_eq!(normalized.start, start.to_string());
            prop_assert_eq!(normalized.end, end.to_string());
        }
    }
}
