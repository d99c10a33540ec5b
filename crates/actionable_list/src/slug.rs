//! Default slug generator for column names.

/// Signature of a slug generator: deterministic and total over any input.
pub type SlugGenerator = fn(&str) -> String;

/// Build a URL / CSS safe slug from a display name using `-` as separator.
///
/// # Examples
/// ```
/// use actionable_list::slug::slugify;
/// assert_eq!(slugify("Created At"), "created-at");
/// assert_eq!(slugify("user_name"), "user-name");
/// assert_eq!(slugify("Email @ Work"), "email-at-work");
/// ```
pub fn slugify(title: &str) -> String {
    slugify_with(title, '-')
}

/// Same as [`slugify`] with a custom separator.
///
/// The title is transliterated to ASCII first (`"Größe"` → `"grosse"`).
/// Underscores, dashes, the separator and whitespace act as word boundaries,
/// `@` becomes the word `at`, and any other punctuation is dropped without
/// splitting the word (`"it's"` → `"its"`).
pub fn slugify_with(title: &str, separator: char) -> String {
    let ascii = deunicode::deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch == '@' {
            if !slug.is_empty() {
                slug.push(separator);
            }
            slug.push_str("at");
            pending_separator = true;
        } else if ch == '-' || ch == '_' || ch == separator || ch.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Age"), "age");
        assert_eq!(slugify("Created At"), "created-at");
        assert_eq!(slugify("  Leading and trailing  "), "leading-and-trailing");
    }

    #[test]
    fn test_slugify_separators_collapse() {
        assert_eq!(slugify("first__second--third"), "first-second-third");
        assert_eq!(slugify("a - b _ c"), "a-b-c");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_drops_punctuation() {
        assert_eq!(slugify("It's done!"), "its-done");
        assert_eq!(slugify("Price (net)"), "price-net");
        assert_eq!(slugify("v1.2"), "v12");
    }

    #[test]
    fn test_slugify_at_sign() {
        assert_eq!(slugify("me@example"), "me-at-example");
        assert_eq!(slugify("@handle"), "at-handle");
    }

    #[test]
    fn test_slugify_transliterates_to_ascii() {
        assert_eq!(slugify("Größe"), "grosse");
        assert_eq!(slugify("Café Crème"), "cafe-creme");

        let slug = slugify("Größe Цена");
        assert!(slug.starts_with("grosse-"), "{}", slug);
        assert!(slug.len() > "grosse-".len());
        assert!(slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'));
    }

    #[test]
    fn test_slugify_with_custom_separator() {
        assert_eq!(slugify_with("Created At", '_'), "created_at");
        assert_eq!(slugify_with("created-at", '_'), "created_at");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }
}
