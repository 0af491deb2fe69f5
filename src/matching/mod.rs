//! Match records and the matcher orchestrator.
//!
//! `Match` is a tagged union rather than the inheritance hierarchy the
//! original algorithm uses: one common header (`i`, `j`, `token`,
//! `pattern`, `cardinality`, `entropy`) plus a `payload` that only the
//! feedback deriver and matcher internals look inside. The DP and
//! gap-filler only ever read `entropy` (and `i`/`j` for positioning);
//! `cardinality` is the per-match "effective alphabet size" the data
//! model calls for, present for introspection and for whatever a
//! downstream consumer wants to do with it, not because the coverage
//! recurrence itself consumes it.

pub mod date;
pub mod dictionary;
pub mod l33t;
pub mod regex_matching;
pub mod repeat;
pub mod sequence;
pub mod spatial;

use crate::MatcherFactory;

/// Which weakness class a [`Match`] belongs to.
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Dictionary,
    L33tDictionary,
    Spatial,
    Repeat,
    Sequence,
    Regex,
    Date,
    Bruteforce,
}

/// Pattern-specific fields, discriminated by [`Match::pattern`].
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPayload {
    Dictionary(DictionaryPayload),
    Spatial(SpatialPayload),
    Repeat(RepeatPayload),
    Sequence(SequencePayload),
    Regex(RegexPayload),
    Date(DatePayload),
    None,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryPayload {
    pub dictionary_name: String,
    pub matched_word: String,
    pub rank: u64,
    pub base_entropy: f64,
    pub uppercase_entropy: f64,
    /// Present only for `Pattern::L33tDictionary` matches.
    pub l33t: Option<L33tPayload>,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct L33tPayload {
    /// The leet-char -> normal-char substitutions actually exercised by
    /// the token that produced this match.
    pub subs: Vec<(char, char)>,
    pub l33t_entropy: f64,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialPayload {
    pub graph_name: &'static str,
    pub turns: u32,
    pub shifted_count: u32,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatPayload {
    pub repeated_char: char,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SequencePayload {
    pub ascending: bool,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RegexPayload {
    pub regex_name: &'static str,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DatePayload {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub has_separator: bool,
}

/// A single recognized weakness spanning `password[i..=j]`.
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub i: usize,
    pub j: usize,
    pub token: String,
    pub pattern: Pattern,
    pub cardinality: u64,
    pub entropy: f64,
    pub payload: MatchPayload,
}

impl Match {
    pub(crate) fn bruteforce(password: &str, i: usize, j: usize, cardinality: u64) -> Match {
        let token: String = char_slice(password, i, j);
        let length = (j - i + 1) as f64;
        let per_char_entropy = if cardinality > 0 {
            (cardinality as f64).log2()
        } else {
            0.0
        };
        Match {
            i,
            j,
            token,
            pattern: Pattern::Bruteforce,
            cardinality,
            entropy: length * per_char_entropy,
            payload: MatchPayload::None,
        }
    }
}

/// Indexes a password by character position (not byte offset), returning
/// the substring `password[i..=j]` inclusive. Every matcher and the DP
/// operate on character indices so multi-byte UTF-8 passwords behave the
/// same as ASCII ones.
pub(crate) fn char_slice(password: &str, i: usize, j: usize) -> String {
    password.chars().skip(i).take(j - i + 1).collect()
}

pub(crate) fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Runs every matcher against `password` and returns the union of all
/// matches found. Order of execution is sequential and deterministic;
/// matchers are mutually independent (spec §4f, §5).
pub fn all_matches(password: &str, user_inputs: &[&str], factory: &MatcherFactory) -> Vec<Match> {
    let mut matches = Vec::new();

    matches.extend(dictionary::matches(password, &factory.dictionaries));

    if !user_inputs.is_empty() {
        let ranked: Vec<String> = user_inputs.iter().map(|s| s.to_string()).collect();
        matches.extend(dictionary::matches_against_list(password, "user_inputs", &ranked));
        matches.extend(l33t::matches_against_list(password, "user_inputs", &ranked));
    }

    matches.extend(l33t::matches(password, &factory.dictionaries));
    matches.extend(spatial::matches(password, &factory.graphs));
    matches.extend(repeat::matches(password));
    matches.extend(sequence::matches(password));
    matches.extend(regex_matching::matches(password));
    matches.extend(date::matches(password));

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_slice_is_char_indexed_not_byte_indexed() {
        let password = "p\u{00e9}ssword"; // 'p' + e-acute + "ssword"
        assert_eq!(char_slice(password, 0, 1), "p\u{00e9}");
        assert_eq!(char_len(password), 8);
    }
}
