use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};

/// Minimum similarity before an unknown label earns a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A closed set of values identified by a human-readable label.
///
/// Parsing is case-insensitive and fails on anything outside [`Labeled::ALL`].
pub trait Labeled: Sized + Copy + 'static {
    /// Name of the value kind used in error messages.
    const KIND: &'static str;

    /// Every value, in display order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn parse_label(input: &str) -> Result<Self> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| PlannerError::UnknownValue {
                kind: Self::KIND,
                value: needle.to_string(),
                suggestion: suggest(needle, Self::ALL.iter().map(|v| v.label())),
            })
    }

    /// Labels of every value, in display order.
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.label()).collect()
    }
}

/// Closest candidate to `input` by Jaro-Winkler similarity, if any is close enough.
pub fn suggest<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let input = input.to_lowercase();
    candidates
        .into_iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c.to_string())
}
