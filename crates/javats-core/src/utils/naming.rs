//! Identifier case classification and conversion.

/// `^[A-Z][A-Za-z0-9]*$`
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[a-z][A-Za-z0-9]*$`
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[A-Z0-9]+(_[A-Z0-9]+)*$`
#[must_use]
pub fn is_upper_snake_case(name: &str) -> bool {
    !name.is_empty()
        && name.split('_').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        })
}

/// Splits an identifier into lowercase words on `_`, `$` and case changes.
fn words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_ascii_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

/// Converts an identifier to PascalCase (`my_class` -> `MyClass`).
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    words(name).iter().map(|w| capitalize(w)).collect()
}

/// Converts an identifier to camelCase (`DoWork` -> `doWork`).
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_lowercase().to_string() + chars.as_str()
    })
}

/// Converts an identifier to UPPER_SNAKE_CASE (`maxSize` -> `MAX_SIZE`).
#[must_use]
pub fn to_upper_snake_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|w| w.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert!(is_pascal_case("MyClass"));
        assert!(is_pascal_case("A"));
        assert!(is_pascal_case("Http2Server"));
        assert!(!is_pascal_case("myClass"));
        assert!(!is_pascal_case("My_Class"));
        assert!(!is_pascal_case(""));
    }

    #[test]
    fn test_camel_case() {
        assert!(is_camel_case("doWork"));
        assert!(is_camel_case("x"));
        assert!(!is_camel_case("DoWork"));
        assert!(!is_camel_case("do_work"));
        assert!(!is_camel_case("_private"));
    }

    #[test]
    fn test_upper_snake_case() {
        assert!(is_upper_snake_case("MAX_SIZE"));
        assert!(is_upper_snake_case("V2"));
        assert!(!is_upper_snake_case("maxSize"));
        assert!(!is_upper_snake_case("MAX__SIZE"));
        assert!(!is_upper_snake_case("_MAX"));
        assert!(!is_upper_snake_case(""));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(to_pascal_case("myClass"), "MyClass");
        assert_eq!(to_pascal_case("my_class"), "MyClass");
        assert_eq!(to_camel_case("DoWork"), "doWork");
        assert_eq!(to_camel_case("do_work"), "doWork");
        assert_eq!(to_upper_snake_case("maxSize"), "MAX_SIZE");
        assert_eq!(to_upper_snake_case("max_size"), "MAX_SIZE");
    }
}
