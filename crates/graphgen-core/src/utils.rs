/// Convert PascalCase or camelCase to snake_case.
///
/// Runs of capitals are treated as one word, so acronyms stay together.
///
/// # Examples
/// ```
/// use graphgen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// assert_eq!(to_snake_case("ID"), "id");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let word_start = match prev {
                None => false,
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                Some(_) => false,
            };
            if word_start && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert PascalCase or camelCase to SCREAMING_SNAKE_CASE.
///
/// # Examples
/// ```
/// use graphgen_core::utils::to_screaming_snake_case;
/// assert_eq!(to_screaming_snake_case("TodoList"), "TODO_LIST");
/// ```
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_ascii_uppercase()
}
