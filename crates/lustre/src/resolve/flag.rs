//! Opt-out boolean flags.

/// Resolves a boolean flag stored as a string.
///
/// Only the exact string `"false"` disables a flag. Anything else, including
/// an absent value, leaves it enabled.
///
/// ```rust
/// use lustre::resolve_flag;
///
/// assert!(!resolve_flag(Some("false")));
/// assert!(resolve_flag(Some("true")));
/// assert!(resolve_flag(Some("")));
/// assert!(resolve_flag(None));
/// ```
pub fn resolve_flag(raw: Option<&str>) -> bool {
    raw != Some("false")
}
