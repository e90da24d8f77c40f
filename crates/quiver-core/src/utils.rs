/// Convert PascalCase or camelCase to snake_case.
///
/// Particle references are written `Team` in patterns and captured as `team`.
///
/// # Examples
/// ```
/// use quiver_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("Team"), "team");
/// assert_eq!(to_snake_case("MusicGenre"), "music_genre");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Whether a name is a valid capture name: lowercase ASCII, digits, `_`,
/// not starting with a digit.
pub fn is_capture_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
