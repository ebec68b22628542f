use std::env;

/// Parse a boolean flag from a string value, or return the given default value otherwise.
pub fn parse_boolean_flag(value: Option<String>, default: bool) -> bool {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

/// Reads an optional environment variable, treating blank values as unset.
pub fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Extracts the UTC offset from a store timezone display name, e.g. `(GMT+01:00) Europe/Paris` yields `+01:00`.
///
/// Returns `None` when the name doesn't carry an offset of the form `±hh:mm` in that position.
pub fn timezone_offset_from_display(timezone: &str) -> Option<String> {
    let offset = timezone.get(4..10)?;
    if is_utc_offset(offset) {
        Some(offset.to_string())
    } else {
        None
    }
}

/// True iff `s` looks like `+hh:mm` or `-hh:mm`
pub fn is_utc_offset(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 6
        && (b[0] == b'+' || b[0] == b'-')
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3] == b':'
        && b[4].is_ascii_digit()
        && b[5].is_ascii_digit()
}
