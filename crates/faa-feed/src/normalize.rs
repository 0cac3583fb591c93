//! Plain-English rewriting of feed text.
//!
//! Reasons in the NAS feed are written in controller shorthand
//! ("!JFK 12/034 WX / LOW CEILINGS"). The rewrite drops shouting codes,
//! expands the abbreviations in [`REASON_SUBSTITUTIONS`] and tidies spacing.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Ordered abbreviation table, applied case-insensitively top to bottom.
///
/// Longer alternatives come first inside each pattern so that, for example,
/// "DEICING" is not consumed as "DEICE" + "ING".
pub const REASON_SUBSTITUTIONS: &[(&str, &str)] = &[
    (r"\bGDP\b", "Ground Delay Program"),
    (r"\bGS\b", "Ground Stop"),
    (r"\bAFP\b", "Airspace Flow Program (en-route constraint)"),
    (r"WX|WEATHER", "weather"),
    (r"VOLUME", "high traffic volume"),
    (r"LOW CEILINGS?", "low clouds"),
    (r"LOW VIS(IBILITY)?", "low visibility"),
    (r"DEICING|DEICE", "deicing operations"),
    (r"RWY|RUNWAY", "runway"),
    (r"TFR", "temporary flight restriction"),
];

/// `!CODE/REST ` tokens, including one trailing space.
static SHOUT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\w+[^ ]* ?").expect("Invalid shout code regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digits regex"));

static SUBSTITUTION_REGEXES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REASON_SUBSTITUTIONS
        .iter()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&format!("(?i){pattern}"))
                .expect("Invalid reason substitution regex");
            (regex, *replacement)
        })
        .collect()
});

/// Characters trimmed from both ends after rewriting.
const EDGE_PUNCTUATION: &[char] = &[' ', '-', ':', ';'];

/// Rewrite a raw feed reason into readable text.
///
/// Returns `None` for missing or empty input. Never returns an empty
/// string: when rewriting leaves nothing, the raw text comes back as is.
pub fn friendly_reason(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|raw| !raw.is_empty())?;

    let mut text = SHOUT_CODE_REGEX.replace_all(raw, "").trim().to_string();
    for (regex, replacement) in SUBSTITUTION_REGEXES.iter() {
        text = regex.replace_all(&text, NoExpand(*replacement)).into_owned();
    }
    let text = WHITESPACE_REGEX.replace_all(&text, " ");
    let text = text.trim_matches(EDGE_PUNCTUATION);

    if text.is_empty() {
        Some(raw.to_string())
    } else {
        Some(text.to_string())
    }
}

/// First run of decimal digits anywhere in `text`, as an integer.
///
/// `"45 minutes"` gives 45; text without digits, or a run too long for
/// `u64`, gives `None`.
pub fn first_integer(text: Option<&str>) -> Option<u64> {
    let text = text?;
    DIGITS_REGEX.find(text)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friendly(raw: &str) -> String {
        friendly_reason(Some(raw)).expect("non-empty input")
    }

    #[test]
    fn absent_or_empty_is_none() {
        assert_eq!(friendly_reason(None), None);
        assert_eq!(friendly_reason(Some("")), None);
    }

    #[test]
    fn expands_abbreviations() {
        assert_eq!(friendly("WX"), "weather");
        assert_eq!(friendly("weather / low ceilings"), "weather / low clouds");
        assert_eq!(friendly("VOLUME"), "high traffic volume");
        assert_eq!(friendly("LOW VISIBILITY"), "low visibility");
        assert_eq!(friendly("RWY CONSTRUCTION"), "runway CONSTRUCTION");
        assert_eq!(friendly("TFR"), "temporary flight restriction");
        assert_eq!(friendly("DEICING"), "deicing operations");
        assert_eq!(friendly("deice"), "deicing operations");
    }

    #[test]
    fn word_boundaries_protect_short_codes() {
        assert_eq!(friendly("GDP issued"), "Ground Delay Program issued");
        assert_eq!(friendly("GS"), "Ground Stop");
        assert_eq!(friendly("GSP"), "GSP");
    }

    #[test]
    fn strips_shout_codes_and_edge_punctuation() {
        assert_eq!(friendly("!JFK 12/034 WX"), "12/034 weather");
        assert_eq!(friendly("  - TFR ;"), "temporary flight restriction");
        assert_eq!(friendly("WX    and\tVOLUME"), "weather and high traffic volume");
    }

    #[test]
    fn falls_back_to_raw_when_nothing_is_left() {
        assert_eq!(friendly("!ALLCAPS"), "!ALLCAPS");
        assert_eq!(friendly(" - : ; "), " - : ; ");
    }

    #[test]
    fn non_empty_input_never_yields_empty_output() {
        for raw in ["!A", "-", ";;", "!X !Y", " ", "\t", "ok"] {
            assert!(!friendly(raw).is_empty(), "empty result for {raw:?}");
        }
    }

    #[test]
    fn first_integer_takes_leading_digit_run() {
        assert_eq!(first_integer(Some("45 minutes")), Some(45));
        assert_eq!(first_integer(Some("1 hour and 15 minutes")), Some(1));
        assert_eq!(first_integer(Some("avg 007")), Some(7));
        assert_eq!(first_integer(Some("none")), None);
        assert_eq!(first_integer(None), None);
        assert_eq!(first_integer(Some("99999999999999999999999")), None);
    }
}
