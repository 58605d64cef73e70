#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("failed to read catalog") {
        suggestions.push(
            "Check the `catalog` path in ~/.config/bitbar/config.toml, or remove it to use the built-in catalog"
                .to_string(),
        );
    }

    if msg_lower.contains("invalid catalog") {
        suggestions.push(
            "The catalog must be a JSON array of processors with `name` and `kind`".to_string(),
        );
    }

    if msg_lower.contains("catalog") && msg_lower.contains("changed") {
        suggestions.push("Press F5 to reload the processor catalog".to_string());
    }

    if msg_lower.contains("invalid config") {
        suggestions.push("Fix the TOML syntax in ~/.config/bitbar/config.toml".to_string());
    }

    if msg_lower.contains("permission denied") {
        suggestions.push("Check file permissions under ~/.config/bitbar".to_string());
    }

    suggestions
}
