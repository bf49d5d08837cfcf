/// Compute effective limit with precedence: local arg -> global flag -> fallback.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Truncate `items` to the global `--limit`, if one was given.
pub fn apply_global_limit<T>(items: &mut Vec<T>, global: Option<u32>) {
    if let Some(limit) = global {
        items.truncate(limit as usize);
    }
}
