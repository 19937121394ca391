// File: src/core/features.rs
//! Orthographic stand-ins for phonetic features.
//!
//! None of these look at pronunciation. They are cheap spelling heuristics
//! that group words a child is likely to confuse by ear, and every one of
//! them accepts any string (empty, digits, punctuation) without failing.

/// Checked before blends, otherwise "th" would never win over "t".
const DIGRAPHS: [&str; 6] = ["ch", "sh", "th", "wh", "ph", "gh"];

const BLENDS: [&str; 21] = [
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "sc", "sk", "sl", "sm",
    "sn", "sp", "st", "sw", "tr", "tw",
];

const VOWEL_DIGRAPHS: [&str; 12] = [
    "ai", "ay", "ea", "ee", "ei", "ie", "oa", "oo", "ou", "ow", "ue", "ui",
];

pub const NO_VOWELS: &str = "none";
pub const VOWEL_PATTERN_DELIMITER: &str = "-";

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// `y` counts as a syllable nucleus even though it is not a pattern vowel.
fn is_nucleus(c: char) -> bool {
    is_vowel(c) || c == 'y'
}

/// The leading digraph, blend, or single letter of the word.
pub fn extract_initial_sound(word: &str) -> String {
    let lower = word.to_lowercase();

    if let Some(digraph) = DIGRAPHS.iter().find(|d| lower.starts_with(*d)) {
        return digraph.to_string();
    }
    if let Some(blend) = BLENDS.iter().find(|b| lower.starts_with(*b)) {
        return blend.to_string();
    }
    lower.chars().next().map(String::from).unwrap_or_default()
}

/// The rhyme pattern: whole word up to 2 chars, last 2 up to 4, else last 3.
pub fn extract_rhyme_pattern(word: &str) -> String {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let take = match chars.len() {
        0..=2 => chars.len(),
        3..=4 => 2,
        _ => 3,
    };
    chars[chars.len() - take..].iter().collect()
}

/// Vowels and vowel digraphs in reading order, e.g. "rain" -> "ai",
/// "banana" -> "a-a-a". Words without vowels give [`NO_VOWELS`].
pub fn extract_vowel_pattern(word: &str) -> String {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if VOWEL_DIGRAPHS.contains(&pair.as_str()) {
                tokens.push(pair);
                i += 2;
                continue;
            }
        }
        if is_vowel(chars[i]) {
            tokens.push(chars[i].to_string());
        }
        i += 1;
    }

    if tokens.is_empty() {
        NO_VOWELS.to_string()
    } else {
        tokens.join(VOWEL_PATTERN_DELIMITER)
    }
}

/// Counts vowel groups, with a silent trailing "e" correction ("cake" is one
/// syllable, "table" keeps its "le" syllable). Never returns less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let mut count = 0;
    let mut in_group = false;

    for c in lower.chars() {
        let nucleus = is_nucleus(c);
        if nucleus && !in_group {
            count += 1;
        }
        in_group = nucleus;
    }

    if lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}
