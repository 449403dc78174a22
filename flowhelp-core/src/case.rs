//! Identifier case conversion

/// Convert a camel-case identifier to snake case.
///
/// An underscore is inserted before every uppercase letter that directly
/// follows a lowercase letter or a numeric character, then the result is
/// lowercased.
/// Runs of uppercase letters are not split: `HTTPServer` becomes
/// `httpserver`.
pub fn convert_camel_to_snake(camel: &str) -> String {
    let mut snake = String::with_capacity(camel.len() + camel.len() / 4);
    let mut prev: Option<char> = None;

    for c in camel.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_numeric()) {
            snake.push('_');
        }
        snake.extend(c.to_lowercase());
        prev = Some(c);
    }

    snake
}
