// Text normalization for classifier input

/// Normalize raw feedback text for vectorization.
///
/// Lowercases, drops everything that is not an ASCII letter or whitespace,
/// collapses whitespace runs to single spaces, and trims. The vectorizer
/// vocabulary is built from text cleaned the same way, so prediction input
/// must pass through here first.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else if c.is_whitespace() {
            pending_space = true;
        }
        // Anything else (digits, punctuation, non-ASCII) is dropped without
        // introducing a word boundary, matching the vocabulary build.
    }

    out
}
