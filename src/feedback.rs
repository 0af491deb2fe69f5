//! Feedback deriver (spec §4h). Maps the DP's chosen decomposition to
//! warning/suggestion tags; the actual strings are an external
//! collaborator's job (spec §1, §6) -- this module only emits the tags.
//!
//! Reproduces two documented fixes to the source algorithm's behavior
//! (spec §9 Open Questions #2, #3): the name/surname warning is assigned
//! once, not twice with the second assignment silently winning; and
//! repeat feedback always emits the single `RepeatsLikeAaaEasy` message
//! (no dead "multi-character repeat" branch).

use crate::matching::{Match, MatchPayload, Pattern};

/// One of the fixed warning tags listed in the glossary.
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    Default,
    Empty,
    StraightRow,
    ShortKeyboardPatterns,
    RepeatsLikeAaaEasy,
    RepeatsLikeAbcSlighterHarder,
    SequenceAbcEasy,
    RecentYearsEasy,
    DatesEasy,
    Top10Passwords,
    Top100Passwords,
    CommonPasswords,
    SimilarCommonPasswords,
    WordEasy,
    NameSurnamesEasy,
    CommonNameSurnamesEasy,
}

/// One of the fixed suggestion tags listed in the glossary.
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Default,
    Empty,
    AddAnotherWordOrTwo,
    UseLongerKeyboardPattern,
    AvoidRepeatedWordsAndChars,
    AvoidSequences,
    AvoidYearsAssociatedYou,
    AvoidDatesYearsAssociatedYou,
    CapsDontHelp,
    AllCapsEasy,
    ReversedWordEasy,
    PredictableSubstitutionsEasy,
}

#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub warning: Option<Warning>,
    pub suggestions: Vec<Suggestion>,
}

/// Derives feedback from the DP's chosen match sequence and the final
/// ordinal score (spec §4h).
pub fn derive(sequence: &[Match], score: u8) -> Feedback {
    if sequence.is_empty() {
        return Feedback {
            warning: Some(Warning::Default),
            suggestions: vec![Suggestion::Default],
        };
    }
    if score > 2 {
        return Feedback {
            warning: Some(Warning::Empty),
            suggestions: vec![Suggestion::Empty],
        };
    }

    let longest = sequence
        .iter()
        .max_by_key(|m| m.token.chars().count())
        .expect("sequence is non-empty");

    let real_matches: Vec<&Match> = sequence.iter().filter(|m| m.pattern != Pattern::Bruteforce).collect();
    let sole_match = real_matches.len() == 1;

    let mut warning = None;
    let mut suggestions = vec![Suggestion::AddAnotherWordOrTwo];

    match longest.pattern {
        Pattern::Spatial => {
            let MatchPayload::Spatial(p) = &longest.payload else { unreachable!() };
            warning = Some(if p.turns == 1 {
                Warning::StraightRow
            } else {
                Warning::ShortKeyboardPatterns
            });
            suggestions.push(Suggestion::UseLongerKeyboardPattern);
        }
        Pattern::Repeat => {
            warning = Some(Warning::RepeatsLikeAaaEasy);
            suggestions.push(Suggestion::AvoidRepeatedWordsAndChars);
        }
        Pattern::Sequence => {
            warning = Some(Warning::SequenceAbcEasy);
            suggestions.push(Suggestion::AvoidSequences);
        }
        Pattern::Date => {
            warning = Some(Warning::DatesEasy);
            suggestions.push(Suggestion::AvoidDatesYearsAssociatedYou);
        }
        Pattern::Dictionary | Pattern::L33tDictionary => {
            let MatchPayload::Dictionary(p) = &longest.payload else { unreachable!() };
            let is_l33t = p.l33t.is_some();

            warning = match p.dictionary_name.as_str() {
                "passwords" if sole_match && !is_l33t => {
                    if p.rank <= 10 {
                        Some(Warning::Top10Passwords)
                    } else if p.rank <= 100 {
                        Some(Warning::Top100Passwords)
                    } else {
                        Some(Warning::CommonPasswords)
                    }
                }
                "passwords" => {
                    if crate::entropy::crack_time_to_score(crate::entropy::entropy_to_crack_time(longest.entropy)) <= 1 {
                        Some(Warning::SimilarCommonPasswords)
                    } else {
                        None
                    }
                }
                "english" if sole_match => Some(Warning::WordEasy),
                "surnames" | "male_names" | "female_names" => {
                    // single assignment: the sole-match branch is the
                    // final value, not overwritten by a later one.
                    if sole_match {
                        Some(Warning::NameSurnamesEasy)
                    } else {
                        Some(Warning::CommonNameSurnamesEasy)
                    }
                }
                _ => None,
            };

            let first_upper = longest.token.chars().next().map(|c| c.is_ascii_uppercase()).unwrap_or(false);
            if first_upper {
                suggestions.push(Suggestion::CapsDontHelp);
            }
            let has_letter = longest.token.chars().any(|c| c.is_alphabetic());
            let all_upper = has_letter && longest.token.chars().all(|c| !c.is_lowercase());
            if all_upper {
                suggestions.push(Suggestion::AllCapsEasy);
            }
            if is_l33t {
                suggestions.push(Suggestion::PredictableSubstitutionsEasy);
            }
        }
        Pattern::Regex | Pattern::Bruteforce => {}
    }

    Feedback { warning, suggestions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{DictionaryPayload, L33tPayload, RepeatPayload, SequencePayload, SpatialPayload};

    fn dict_match(token: &str, name: &str, rank: u64, l33t: bool) -> Match {
        Match {
            i: 0,
            j: token.chars().count().saturating_sub(1),
            token: token.to_string(),
            pattern: if l33t { Pattern::L33tDictionary } else { Pattern::Dictionary },
            cardinality: rank,
            entropy: (rank as f64).log2(),
            payload: MatchPayload::Dictionary(DictionaryPayload {
                dictionary_name: name.to_string(),
                matched_word: token.to_lowercase(),
                rank,
                base_entropy: (rank as f64).log2(),
                uppercase_entropy: 0.0,
                l33t: if l33t {
                    Some(L33tPayload { subs: vec![('@', 'a')], l33t_entropy: 1.0 })
                } else {
                    None
                },
            }),
        }
    }

    #[test]
    fn empty_sequence_is_default() {
        let fb = derive(&[], 0);
        assert_eq!(fb.warning, Some(Warning::Default));
        assert_eq!(fb.suggestions, vec![Suggestion::Default]);
    }

    #[test]
    fn high_score_has_no_feedback() {
        let fb = derive(&[dict_match("xyzzy", "english", 50000, false)], 4);
        assert_eq!(fb.warning, Some(Warning::Empty));
        assert_eq!(fb.suggestions, vec![Suggestion::Empty]);
    }

    #[test]
    fn top_ten_password_warning() {
        let fb = derive(&[dict_match("password", "passwords", 1, false)], 0);
        assert_eq!(fb.warning, Some(Warning::Top10Passwords));
    }

    #[test]
    fn l33t_suggests_predictable_substitutions() {
        let fb = derive(&[dict_match("p@ssword", "passwords", 500, true)], 1);
        assert!(fb.suggestions.contains(&Suggestion::PredictableSubstitutionsEasy));
    }

    #[test]
    fn spatial_straight_row_warning() {
        let m = Match {
            i: 0,
            j: 5,
            token: "qwerty".to_string(),
            pattern: Pattern::Spatial,
            cardinality: 6,
            entropy: 10.0,
            payload: MatchPayload::Spatial(SpatialPayload { graph_name: "qwerty", turns: 1, shifted_count: 0 }),
        };
        let fb = derive(&[m], 0);
        assert_eq!(fb.warning, Some(Warning::StraightRow));
        assert!(fb.suggestions.contains(&Suggestion::UseLongerKeyboardPattern));
    }

    #[test]
    fn repeat_warning_is_single_message() {
        let m = Match {
            i: 0,
            j: 5,
            token: "aaaaaa".to_string(),
            pattern: Pattern::Repeat,
            cardinality: 26,
            entropy: 5.0,
            payload: MatchPayload::Repeat(RepeatPayload { repeated_char: 'a' }),
        };
        let fb = derive(&[m], 0);
        assert_eq!(fb.warning, Some(Warning::RepeatsLikeAaaEasy));
    }

    #[test]
    fn sequence_warning() {
        let m = Match {
            i: 0,
            j: 5,
            token: "abcdef".to_string(),
            pattern: Pattern::Sequence,
            cardinality: 26,
            entropy: 5.0,
            payload: MatchPayload::Sequence(SequencePayload { ascending: true }),
        };
        let fb = derive(&[m], 0);
        assert_eq!(fb.warning, Some(Warning::SequenceAbcEasy));
    }

    #[test]
    fn name_surname_single_assignment_sole_match() {
        let fb = derive(&[dict_match("Smith", "surnames", 20, false)], 0);
        assert_eq!(fb.warning, Some(Warning::NameSurnamesEasy));
    }
}
