//! Day-code expansion.
//!
//! The portal writes meeting days as dash-joined abbreviations (`M-W`,
//! `T-TH`) and, for some offerings, as run-together compounds (`MTWTHF`).
//! Expansion turns either form into an ordered list of single-day
//! abbreviations; [`weekday_for`] then maps each one to a [`Weekday`].

use chrono::Weekday;

/// Separator between day tokens in a day cell.
pub const DAY_SEPARATOR: char = '-';

/// Run-together day tokens and the explicit sequence each stands for.
const COMPOUND_DAYS: &[(&str, &[&str])] = &[
    ("MTW", &["M", "T", "W"]),
    ("TWTH", &["T", "W", "TH"]),
    ("MTWTH", &["M", "T", "W", "TH"]),
    ("MTWTHF", &["M", "T", "W", "TH", "F"]),
];

/// Expands a raw day cell into ordered day abbreviations.
///
/// Whitespace is stripped before splitting. Known compound tokens are
/// replaced by their explicit sequence; any other token passes through
/// unchanged, including ones [`weekday_for`] will not recognise.
pub fn expand_day_codes(raw: &str) -> Vec<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split(DAY_SEPARATOR)
        .filter(|token| !token.is_empty())
        .flat_map(|token| match compound_expansion(token) {
            Some(days) => days.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            None => vec![token.to_string()],
        })
        .collect()
}

fn compound_expansion(token: &str) -> Option<&'static [&'static str]> {
    COMPOUND_DAYS
        .iter()
        .find(|(compound, _)| compound.eq_ignore_ascii_case(token))
        .map(|(_, days)| *days)
}

/// Maps a single day abbreviation to its weekday.
///
/// Returns `None` for anything outside the fixed table.
pub fn weekday_for(abbreviation: &str) -> Option<Weekday> {
    match abbreviation.to_ascii_uppercase().as_str() {
        "SU" | "SUN" => Some(Weekday::Sun),
        "M" | "MON" => Some(Weekday::Mon),
        "T" | "TUE" => Some(Weekday::Tue),
        "W" | "WED" => Some(Weekday::Wed),
        "TH" | "THU" | "THUR" => Some(Weekday::Thu),
        "F" | "FRI" => Some(Weekday::Fri),
        "SA" | "SAT" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Canonical numeric index of a weekday, counting from Sunday = 0.
pub fn weekday_index(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Expands a raw day cell straight to weekdays, dropping unknown tokens.
pub fn expand_weekdays(raw: &str) -> Vec<Weekday> {
    expand_day_codes(raw)
        .iter()
        .filter_map(|code| weekday_for(code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compound_tokens_expand_in_order() {
        assert_eq!(expand_day_codes("MTW"), vec!["M", "T", "W"]);
        assert_eq!(expand_day_codes("TWTH"), vec!["T", "W", "TH"]);
        assert_eq!(expand_day_codes("MTWTH"), vec!["M", "T", "W", "TH"]);
        assert_eq!(expand_day_codes("MTWTHF"), vec!["M", "T", "W", "TH", "F"]);
    }

    #[test]
    fn dash_joined_tokens_split() {
        assert_eq!(expand_day_codes("M-W"), vec!["M", "W"]);
        assert_eq!(expand_day_codes(" T - TH "), vec!["T", "TH"]);
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(expand_day_codes("XYZ"), vec!["XYZ"]);
        assert_eq!(expand_day_codes("MTW-XYZ"), vec!["M", "T", "W", "XYZ"]);
    }

    #[test]
    fn empty_cell_has_no_days() {
        assert!(expand_day_codes("").is_empty());
        assert!(expand_day_codes(" - ").is_empty());
    }

    #[test]
    fn weekday_table_covers_portal_abbreviations() {
        assert_eq!(weekday_for("M"), Some(Weekday::Mon));
        assert_eq!(weekday_for("T"), Some(Weekday::Tue));
        assert_eq!(weekday_for("W"), Some(Weekday::Wed));
        assert_eq!(weekday_for("TH"), Some(Weekday::Thu));
        assert_eq!(weekday_for("th"), Some(Weekday::Thu));
        assert_eq!(weekday_for("F"), Some(Weekday::Fri));
        assert_eq!(weekday_for("SAT"), Some(Weekday::Sat));
        assert_eq!(weekday_for("SUN"), Some(Weekday::Sun));
        assert_eq!(weekday_for("XYZ"), None);
    }

    #[test]
    fn full_week_maps_to_indices() {
        let indices: Vec<u8> = expand_weekdays("MTWTHF")
            .into_iter()
            .map(weekday_index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_days_are_skipped_when_mapping() {
        assert_eq!(expand_weekdays("M-XYZ-F"), vec![Weekday::Mon, Weekday::Fri]);
    }

    proptest! {
        #[test]
        fn expansion_never_panics(raw in "\\PC{0,24}") {
            let _ = expand_day_codes(&raw);
        }

        #[test]
        fn known_day_sequences_round_trip(
            days in proptest::collection::vec(
                prop_oneof![Just("M"), Just("T"), Just("W"), Just("TH"), Just("F")],
                1..6,
            )
        ) {
            let raw = days.join("-");
            prop_assert_eq!(expand_day_codes(&raw), days.iter().map(|d| d.to_string()).collect::<Vec<_>>());
            prop_assert_eq!(expand_weekdays(&raw).len(), days.len());
        }
    }
}
