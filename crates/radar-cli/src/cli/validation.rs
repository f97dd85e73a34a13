/// Parse a glob pattern for --include/--exclude.
///
/// The pattern must be non-empty after trimming and must not start with
/// '!'; exclusion is spelled with --exclude instead.
pub fn parse_glob(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Glob pattern cannot be empty".to_string());
    }
    if trimmed.starts_with('!') {
        return Err(format!(
            "Negated globs are not supported, use --exclude '{}' instead",
            &trimmed[1..]
        ));
    }
    Ok(trimmed.to_string())
}

/// Parse a strictly positive integer.
pub fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Expected a positive integer, got '{}'", s))?;
    if value == 0 {
        return Err("Value must be at least 1".to_string());
    }
    Ok(value)
}
