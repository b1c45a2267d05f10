// ABOUTME: Edit-distance ranking used for "did you mean" hints on unknown names
// ABOUTME: Case-insensitive Levenshtein over chars, ties keep directory order

/// Minimum single-character insertions, deletions and substitutions turning `a` into `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Up to `k` candidates closest to `input`, nearest first.
///
/// Comparison is case-insensitive and ignores surrounding whitespace; returned names
/// are exactly as listed. Blank candidates are never suggested.
pub fn closest_matches<S: AsRef<str>>(input: &str, candidates: &[S], k: usize) -> Vec<String> {
    if k == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let needle = input.trim().to_lowercase();
    let mut ranked: Vec<(usize, &str)> = candidates
        .iter()
        .map(|c| c.as_ref())
        .filter(|name| !name.trim().is_empty())
        .map(|name| (levenshtein(&needle, &name.trim().to_lowercase()), name))
        .collect();

    // stable: equal distances keep candidate order
    ranked.sort_by_key(|(distance, _)| *distance);

    ranked
        .into_iter()
        .take(k)
        .map(|(_, name)| name.to_string())
        .collect()
}
