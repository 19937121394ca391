// File: src/fuzzy/levenshtein.rs
use crate::core::types::PhoneticNeighbor;

/// Classic Levenshtein distance: insertions, deletions and substitutions all
/// cost 1. Compared case-insensitively, char by char.
/// Complexity: O(n*m) time and space for the full DP table.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[a.len()][b.len()]
}

/// Finds every candidate within `max_distance` of `word`, closest first.
///
/// The sort is stable, so words at the same distance keep the order they had
/// in `candidates`. The word itself (any casing) is never returned.
pub fn nearest_neighbors<'a, I>(
    word: &str,
    candidates: I,
    max_distance: usize,
    cap: usize,
) -> Vec<PhoneticNeighbor>
where
    I: IntoIterator<Item = &'a str>,
{
    let word_lower = word.to_lowercase();
    let mut neighbors: Vec<PhoneticNeighbor> = candidates
        .into_iter()
        .filter(|candidate| candidate.to_lowercase() != word_lower)
        .filter_map(|candidate| {
            let distance = levenshtein_distance(&word_lower, candidate);
            (distance <= max_distance).then(|| PhoneticNeighbor {
                word: candidate.to_string(),
                distance,
            })
        })
        .collect();

    neighbors.sort_by_key(|n| n.distance);
    neighbors.truncate(cap);
    neighbors
}
