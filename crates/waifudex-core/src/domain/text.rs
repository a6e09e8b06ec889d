/// Discord's per-field value limit.
pub const DEFAULT_FIELD_LIMIT: usize = 1024;

const ELLIPSIS: &str = "...";

/// Cuts `text` to `limit` characters, replacing the tail with `...` when it is too long.
///
/// Counts Unicode scalar values, so multi-byte names are never split mid-character.
/// A `limit` of three or less yields just the ellipsis for over-long input.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut output: String = text.chars().take(keep).collect();
    output.push_str(ELLIPSIS);
    output
}
