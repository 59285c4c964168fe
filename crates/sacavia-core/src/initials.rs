//! Avatar initials from a display name.

/// Shown when the name has nothing to take initials from.
const FALLBACK_INITIALS: &str = "U";

/// Derives up to two uppercase initials from `name`.
///
/// The name is split on single spaces and empty segments are kept, so
/// `" John"` yields `["", "John"]` and contributes nothing for the first
/// segment. With two or more segments the first character of each of the
/// first two is used; with one segment its first two characters. An empty
/// name has no segments and yields `"U"`.
///
/// A "character" is one Unicode scalar value, not a grapheme cluster: a
/// decomposed `"e\u{301}lodie"` contributes `E` without its combining accent.
/// Normalize to NFC first if names may arrive decomposed.
///
/// # Examples
///
/// - `initials("John Smith")` → `"JS"`
/// - `initials("Madonna")` → `"MA"`
/// - `initials("")` → `"U"`
pub fn initials(name: &str) -> String {
    if name.is_empty() {
        return FALLBACK_INITIALS.to_string();
    }

    let mut parts = name.split(' ');
    let first = parts.next().unwrap_or_default();
    let out: String = match parts.next() {
        Some(second) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        None => first.chars().take(2).collect(),
    };
    out.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_words() {
        assert_eq!(initials("John Smith"), "JS");
        assert_eq!(initials("ada lovelace"), "AL");
    }

    #[test]
    fn more_than_two_words_uses_first_two() {
        assert_eq!(initials("John Ronald Tolkien"), "JR");
    }

    #[test]
    fn single_word() {
        assert_eq!(initials("Madonna"), "MA");
        assert_eq!(initials("x"), "X");
    }

    #[test]
    fn empty_name() {
        assert_eq!(initials(""), "U");
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(initials(" John"), "J");
        assert_eq!(initials("John "), "J");
        assert_eq!(initials("John  Smith"), "J");
        assert_eq!(initials(" "), "");
    }

    #[test]
    fn only_spaces_split_words() {
        assert_eq!(initials("John\tSmith"), "JO");
    }

    #[test]
    fn unicode() {
        assert_eq!(initials("élodie durand"), "ÉD");
        assert_eq!(initials("ßa"), "SSA");
        assert_eq!(initials("李 小龙"), "李小");
    }

    #[test]
    fn decomposed_accent_is_dropped() {
        assert_eq!(initials("e\u{301}lodie durand"), "ED");
        assert_eq!(initials("\u{e9}lodie durand"), "ÉD");
        // Single segment keeps the combining mark as its second character.
        assert_eq!(initials("e\u{301}lodie"), "E\u{301}");
    }
}
