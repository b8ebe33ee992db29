//! Pattern matching and leftmost-match selection.
//!
//! The `regex` crate has no look-around. Rules that need a trailing negative
//! look-ahead (`\*x\*` but not `\*x\*\*`) attach a guard instead. When the
//! preferred match at a start position ends right before the guard, the
//! other ends the pattern can reach from that same start are tried: longer
//! ones first in ascending order, then shorter ones in descending order. Only
//! when none of them is accepted does the search move one character on.

use std::iter;

use regex::{Captures, Regex};

use crate::model::MatchResult;

#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    guard: Option<Guard>,
}

#[derive(Debug, Clone)]
struct Guard {
    /// `^(?:guard)`, tested on the text after a candidate end.
    rejects: Regex,
    /// The pattern followed by exactly one character and the end of text.
    /// Run on the input cut one character past a candidate end, it matches
    /// only when the pattern can end there, with the real next character
    /// still visible to `\b` and `$`.
    ends_before_char: Regex,
    /// The pattern followed by the end of text.
    ends_at_text_end: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    pub fn from_regex(regex: Regex) -> Self {
        Self { regex, guard: None }
    }

    /// Rejects matches immediately followed by `guard`.
    pub fn not_followed_by(mut self, guard: &str) -> Result<Self, regex::Error> {
        let pattern = self.regex.as_str();
        self.guard = Some(Guard {
            rejects: Regex::new(&format!("^(?:{guard})"))?,
            ends_before_char: Regex::new(&format!(r"(?:{pattern})(?s:.)\z"))?,
            ends_at_text_end: Regex::new(&format!(r"(?:{pattern})\z"))?,
        });
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// First accepted match in `input`.
    pub fn find(&self, input: &str) -> Option<MatchResult> {
        let Some(guard) = &self.guard else {
            return self
                .regex
                .captures(input)
                .map(|caps| to_match_result(&caps, input));
        };

        let mut at = 0;
        while at <= input.len() {
            let caps = self.regex.captures_at(input, at)?;
            let whole = caps.get(0)?;
            if guard.accepts(input, whole.end()) {
                return Some(to_match_result(&caps, input));
            }
            if let Some(found) = guard.other_end(input, whole.start(), whole.end()) {
                return Some(found);
            }
            at = whole.start()
                + input[whole.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
        None
    }
}

impl Guard {
    fn accepts(&self, input: &str, end: usize) -> bool {
        !self.rejects.is_match(&input[end..])
    }

    /// Another match starting at `start`, with an end other than `preferred`
    /// that the guard accepts.
    fn other_end(&self, input: &str, start: usize, preferred: usize) -> Option<MatchResult> {
        let ends = input[start..]
            .char_indices()
            .map(|(offset, _)| start + offset)
            .chain(iter::once(input.len()));
        let longer = ends.clone().filter(|&end| end > preferred);
        let shorter = ends.filter(|&end| end < preferred).rev();

        longer
            .chain(shorter)
            .find_map(|end| self.match_ending_at(input, start, end))
    }

    fn match_ending_at(&self, input: &str, start: usize, end: usize) -> Option<MatchResult> {
        if !self.accepts(input, end) {
            return None;
        }

        let (regex, haystack) = match input[end..].chars().next() {
            Some(next) => (&self.ends_before_char, &input[..end + next.len_utf8()]),
            None => (&self.ends_at_text_end, input),
        };
        if regex.find_at(haystack, start)?.start() != start {
            return None;
        }

        let caps = regex.captures_at(haystack, start)?;
        Some(MatchResult {
            full_match: input[start..end].to_string(),
            captures: groups(&caps),
            index: start,
            input: input.to_string(),
        })
    }
}

fn to_match_result(caps: &Captures<'_>, input: &str) -> MatchResult {
    let whole = caps.get(0).map_or((0, ""), |m| (m.start(), m.as_str()));
    MatchResult {
        full_match: whole.1.to_string(),
        captures: groups(caps),
        index: whole.0,
        input: input.to_string(),
    }
}

fn groups(caps: &Captures<'_>) -> Vec<Option<String>> {
    caps.iter()
        .skip(1)
        .map(|group| group.map(|m| m.as_str().to_string()))
        .collect()
}

/// Picks the candidate starting earliest; the first one wins ties.
pub fn leftmost<T>(
    candidates: impl IntoIterator<Item = (T, MatchResult)>,
) -> Option<(T, MatchResult)> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(best) if best.1.index <= candidate.1.index => Some(best),
        _ => Some(candidate),
    })
}
