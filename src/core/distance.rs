//! Levenshtein edit distance over `char` units.
//!
//! Kana are multi-byte in UTF-8, so the comparison works on decoded characters:
//! `distance("きかい", "ぎかい") == 1` rather than the byte-level difference.

/// Minimum number of single-character insertions, deletions and substitutions
/// turning `source` into `target`.
pub fn distance(source: &str, target: &str) -> usize {
    let source_chars: Vec<char> = source.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();

    // Keep the rows as short as possible
    let (long, short) = if source_chars.len() >= target_chars.len() {
        (&source_chars, &target_chars)
    } else {
        (&target_chars, &source_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, short_char) in short.iter().enumerate() {
            let cost = usize::from(long_char != short_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// True when `distance(a, b) <= threshold`. Skips the matrix when the length gap
/// alone already exceeds the threshold.
pub fn within(a: &str, b: &str, threshold: usize) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > threshold {
        return false;
    }
    distance(a, b) <= threshold
}
