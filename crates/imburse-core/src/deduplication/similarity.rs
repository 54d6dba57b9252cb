//! Text similarity scoring for duplicate detection

/// Similarity between two text values, in `[0.0, 1.0]`.
///
/// Both inputs are trimmed and lowercased before comparison. Equal
/// normalized strings score exactly 1.0 (including two empty strings); if
/// only one side is empty after trimming the score is 0.0. Otherwise the
/// score is `(len(longer) - distance) / len(longer)` over character counts,
/// where `distance` is the Levenshtein edit distance, so unrelated strings
/// approach 0.0 and near-identical strings approach 1.0.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Equal lengths keep the first argument as the longer side; the rolling
    // row in `levenshtein` always covers the shorter operand.
    let (longer, longer_len, shorter) = if b_len > a_len {
        (&b, b_len, &a)
    } else {
        (&a, a_len, &b)
    };

    let distance = levenshtein(longer, shorter);
    (longer_len - distance) as f64 / longer_len as f64
}

/// Levenshtein edit distance over characters, single rolling row over `b`.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut prev_diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (row[j] + 1).min(row[j + 1] + 1).min(prev_diag + cost);
            prev_diag = row[j + 1];
            row[j + 1] = next;
        }
    }

    row[b_chars.len()]
}
