//! Name normalization for grouping and display.

/// Grouping key for a name: trimmed and lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Title-cases a name: a letter is upper-cased when it does not follow
/// another letter, and lower-cased otherwise.
///
/// # Example
///
/// ```
/// use attendance_engine::aggregation::title_case;
///
/// assert_eq!(title_case("jane smith"), "Jane Smith");
/// assert_eq!(title_case("maría o'neil-ruiz"), "María O'Neil-Ruiz");
/// ```
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}
