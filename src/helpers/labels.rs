/// Truncate a chart label to `max_chars` characters, appending "..." when
/// anything was cut. Operates on characters, not bytes, so multi-byte food
/// names never split mid-codepoint.
pub fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let cut: String = name.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}
