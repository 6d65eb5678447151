//! Argument tokenizing for the dispatch layer.
//!
//! Pure functions with no dependency on the container: the dispatcher hands
//! them the raw argument blob and gets ordered tokens (or a decoded index)
//! back. Splitting is on the single byte `,`; there is no escaping or
//! quoting at this layer.

#[cfg(test)]
mod tests;

/// Split a comma-delimited argument blob into ordered tokens, trimming
/// surrounding whitespace from each.
///
/// A blob that is empty (or whitespace only) and contains no separator
/// yields zero tokens. Once a separator is present, empty tokens are kept:
/// `","` is two empty tokens and `"a,,b"` is `["a", "", "b"]`.
pub fn split_args(blob: &str) -> Vec<&str> {
    if !blob.contains(',') && blob.trim().is_empty() {
        return Vec::new();
    }
    blob.split(',').map(str::trim).collect()
}

/// Parse a token as a non-negative base-10 index, tolerating surrounding
/// whitespace. Negative or otherwise non-numeric text is `None` — a decode
/// failure, never a silent zero.
pub fn parse_index(token: &str) -> Option<usize> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    token.parse::<usize>().ok()
}
