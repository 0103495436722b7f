/// Finds the length of the common prefix between a key and a compressed chain.
///
/// Returns the number of symbols that match starting from the given offset.
pub fn prefix_match<S: PartialEq>(key: &[S], start_idx: usize, chain: &[S]) -> usize {
    key.get(start_idx..)
        .unwrap_or(&[])
        .iter()
        .zip(chain)
        .take_while(|(a, b)| a == b)
        .count()
}

/// Builds the key reached by following `tail` from `path`.
pub fn join_path<S: Clone>(path: &[S], tail: &[S]) -> Vec<S> {
    let mut joined = Vec::with_capacity(path.len() + tail.len());
    joined.extend_from_slice(path);
    joined.extend_from_slice(tail);
    joined
}
