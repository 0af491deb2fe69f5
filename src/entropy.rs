//! Scoring primitives shared by every matcher and by the top-level result:
//! alphabet cardinality, the entropy/crack-time/score chain, and the
//! binomial coefficient helper the dictionary and spatial matchers use to
//! price uppercase/l33t/shift variations.

use std::cmp;

/// Number of distinct unicode codepoints above ASCII that `zxcvbn`'s source
/// data assumes an attacker has to consider once a single non-ASCII
/// character shows up in the password.
const UNICODE_COUNT: u64 = 120_672;
const ASCII_COUNT: u64 = 95;

/// Single guess, amortized across 100 simultaneous attackers, at 0.01s per
/// guess. `entropy_to_crack_time` turns bits of entropy into seconds using
/// this constant guesses-per-second model (spec §4a).
const SECONDS_PER_GUESS: f64 = 0.01 / 100.0;

/// Crack-time band thresholds, in seconds, each offset by +7 so that a
/// crack time landing exactly on a power of ten resolves to the *lower*
/// score rather than tripping a floating point boundary either way.
const SCORE_THRESHOLDS: [f64; 7] = [
    1e3 + 7.0,
    1e6 + 7.0,
    1e8 + 7.0,
    1e10 + 7.0,
    1e11 + 7.0,
    1e12 + 7.0,
    1e13 + 7.0,
];

/// Sums the sizes of every character class actually present in `password`.
/// Lowercase/uppercase/digit/symbol contribute their fixed ASCII-range
/// size; any codepoint above `0x7F` adds the remaining unicode budget once,
/// no matter how many distinct non-ASCII codepoints appear.
pub fn password_cardinality(password: &str) -> u64 {
    if password.is_empty() {
        return 0;
    }
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;
    let mut has_unicode = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if is_ascii_symbol(c) {
            has_symbol = true;
        } else if (c as u32) > 0x7F {
            has_unicode = true;
        }
    }

    let mut cardinality = 0;
    if has_lower {
        cardinality += 26;
    }
    if has_upper {
        cardinality += 26;
    }
    if has_digit {
        cardinality += 10;
    }
    if has_symbol {
        cardinality += 33;
    }
    if has_unicode {
        cardinality += UNICODE_COUNT - ASCII_COUNT;
    }
    cardinality
}

fn is_ascii_symbol(c: char) -> bool {
    let b = c as u32;
    (0x20..=0x2F).contains(&b)
        || (0x3A..=0x40).contains(&b)
        || (0x5B..=0x60).contains(&b)
        || (0x7B..=0x7E).contains(&b)
}

/// Converts bits of entropy into an expected crack time, in seconds, under
/// the fixed guesses-per-second model documented on `SECONDS_PER_GUESS`.
pub fn entropy_to_crack_time(entropy_bits: f64) -> f64 {
    0.5 * 2f64.powf(entropy_bits) * SECONDS_PER_GUESS
}

/// Maps a crack time (seconds) onto the fixed 0..6 ordinal score. Seven
/// thresholds partition time into seven bands; a crack time at or beyond the
/// last threshold is capped at the top score rather than overflowing it.
pub fn crack_time_to_score(crack_time_seconds: f64) -> u8 {
    for (i, threshold) in SCORE_THRESHOLDS.iter().enumerate() {
        if crack_time_seconds < *threshold {
            return i as u8;
        }
    }
    (SCORE_THRESHOLDS.len() - 1) as u8
}

/// Exact nCk via the iterative multiplicative identity `r <- r * n / d`.
/// Returns 0 when `k > n`, 1 when `k == 0`. Saturates rather than
/// overflowing for large `n`/`k` -- still meaningful once `log2`'d.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    if k == 0 {
        return 1;
    }
    let k = cmp::min(k, n - k);
    let mut r: u64 = 1;
    let mut n = n;
    for d in 1..=k {
        r = match r.checked_mul(n) {
            Some(v) => v,
            None => return u64::MAX,
        };
        r /= d;
        n -= 1;
    }
    r
}

/// Extra bits of entropy contributed by a word's capitalization scheme.
///
/// 0 if the word is entirely lowercase; 1 bit if only the first or last
/// letter is uppercase, or the whole word is uppercase (these are common
/// enough schemes that we don't reward an attacker-unaware model for
/// missing them); otherwise the log2 of the number of ways to choose which
/// of the `U + L` letters are uppercase, capped at `min(U, L)` choices.
pub fn uppercase_entropy(word: &str) -> f64 {
    if word.chars().all(|c| !c.is_uppercase()) {
        return 0.0;
    }
    let first_upper = word.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
    let last_upper = word.chars().last().map(|c| c.is_uppercase()).unwrap_or(false);
    let all_upper = word.chars().all(|c| !c.is_lowercase());
    if (first_upper ^ last_upper) || all_upper {
        return 1.0;
    }

    let upper = word.chars().filter(|c| c.is_uppercase()).count() as u64;
    let lower = word.chars().filter(|c| c.is_lowercase()).count() as u64;
    let limit = cmp::min(upper, lower);
    let total: u64 = (0..=limit).map(|i| binomial(upper + lower, i)).sum();
    (total as f64).log2()
}
