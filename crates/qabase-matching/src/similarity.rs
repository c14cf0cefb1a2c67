//! Ratcliff/Obershelp sequence similarity.
//!
//! `ratio = 2·M / T`, where `M` is the total size of the matching blocks
//! found by taking the longest common contiguous block, then recursing on
//! the pieces to its left and right, and `T` is the combined length.
//! Ties for the longest block go to the earliest start in the first
//! sequence, then the earliest start in the second. No junk heuristic.

use std::collections::HashMap;
use std::hash::Hash;

/// A matching block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

fn longest_match<T: Eq + Hash>(
    a: &[T],
    b2j: &HashMap<&T, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        size: 0,
    };
    // j2len[j] = length of the match ending at a[i - 1] and b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for (i, item) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(item) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best.size {
                    best = Block {
                        a_start: i + 1 - k,
                        b_start: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        j2len = next;
    }
    best
}

/// Matching blocks of `a` against `b`, sorted by position.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<Block> {
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        b2j.entry(item).or_default().push(j);
    }

    let mut blocks = Vec::new();
    let mut queue = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = queue.pop() {
        let block = longest_match(a, &b2j, (alo, ahi), (blo, bhi));
        if block.size == 0 {
            continue;
        }
        let (i, j, k) = (block.a_start, block.b_start, block.size);
        if alo < i && blo < j {
            queue.push(((alo, i), (blo, j)));
        }
        if i + k < ahi && j + k < bhi {
            queue.push(((i + k, ahi), (j + k, bhi)));
        }
        blocks.push(block);
    }
    blocks.sort_by_key(|b| (b.a_start, b.b_start));
    blocks
}

/// Directed ratio of `a` against `b`. May differ from `sequence_ratio(b, a)`
/// when tie-breaking picks different blocks.
pub fn directed_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(a, b).iter().map(|b| b.size).sum();
    2.0 * matched as f64 / total as f64
}

/// Symmetric ratio over arbitrary sequences: the better of both directions.
pub fn sequence_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    directed_ratio(a, b).max(directed_ratio(b, a))
}

/// Symmetric character-level ratio of two strings, in `[0.0, 1.0]`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    sequence_ratio(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(ratio("мыть машина", "мыть машина"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratio("абв", "где"), 0.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("шланг", ""), 0.0);
    }

    #[test]
    fn known_value() {
        // "abcd" vs "bcde": block "bcd", M = 3, T = 8.
        assert!((ratio("abcd", "bcde") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn blocks_recurse_on_both_sides() {
        let blocks = matching_blocks(&chars("xabcyde"), &chars("abczde"));
        let sizes: Vec<usize> = blocks.iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![3, 2]);
    }

    #[test]
    fn directed_ratio_can_be_asymmetric() {
        // "tide"→"diet" matches only "t"; "diet"→"tide" matches "d" and "e".
        assert_eq!(directed_ratio(&chars("tide"), &chars("diet")), 0.25);
        assert_eq!(directed_ratio(&chars("diet"), &chars("tide")), 0.5);
        assert_eq!(ratio("tide", "diet"), 0.5);
        assert_eq!(ratio("diet", "tide"), 0.5);
    }

    #[test]
    fn works_over_word_sequences() {
        let a = ["мыть", "машина"];
        let b = ["правильно", "мыть", "машина"];
        assert!((sequence_ratio(&a, &b) - 0.8).abs() < 1e-12);
    }
}
