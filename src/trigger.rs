// prefix detection and trigger extraction shared by every plugin

/// Returns the first prefix, in configured order, that `text` starts with.
/// Empty prefixes never match.
pub fn match_prefix<'a, S: AsRef<str>>(text: &str, prefixes: &'a [S]) -> Option<&'a str> {
    prefixes
        .iter()
        .map(AsRef::as_ref)
        .find(|prefix| !prefix.is_empty() && text.starts_with(prefix))
}

/// Strips `prefix` from the head of `text` when present.
pub fn strip_prefix<'a, S: AsRef<str>>(text: &'a str, prefixes: &[S]) -> &'a str {
    match match_prefix(text, prefixes) {
        Some(prefix) => &text[prefix.len()..],
        None => text,
    }
}

/// Lower-cased first token after `prefix`, or `None` when nothing follows it.
pub fn extract_trigger(text: &str, prefix: &str) -> Option<String> {
    split_trigger(text, prefix).map(|(trigger, _)| trigger)
}

/// Like [`extract_trigger`], also returning everything after the raw token.
///
/// The remainder is sliced from the input text, so an alias can be rebuilt
/// as `prefix + replacement + rest` without losing the user's arguments.
pub fn split_trigger<'a>(text: &'a str, prefix: &str) -> Option<(String, &'a str)> {
    let body = text.strip_prefix(prefix)?;
    let token = body.split(char::is_whitespace).next().unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    Some((token.to_lowercase(), &body[token.len()..]))
}

/// A trigger is valid when it is exactly one non-empty token.
pub fn is_single_word(trigger: &str) -> bool {
    !trigger.is_empty() && !trigger.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_configured_prefix_wins() {
        let prefixes = ["!", "!!", "?"];
        assert_eq!(match_prefix("!!ping", &prefixes), Some("!"));
        assert_eq!(match_prefix("?ping", &prefixes), Some("?"));

        let reversed = ["!!", "!"];
        assert_eq!(match_prefix("!!ping", &reversed), Some("!!"));
    }

    #[test]
    fn no_prefix_matches() {
        let empty: [&str; 0] = [];
        assert_eq!(match_prefix("!ping", &empty), None);
        assert_eq!(match_prefix("ping", &["!"]), None);
        assert_eq!(match_prefix("ping", &[""]), None);
    }

    #[test]
    fn trigger_is_lowercased_first_token() {
        assert_eq!(extract_trigger("!Test extra", "!"), Some("test".to_string()));
        assert_eq!(extract_trigger("!flip", "!"), Some("flip".to_string()));
        assert_eq!(extract_trigger("!", "!"), None);
        assert_eq!(extract_trigger("! flip", "!"), None);
        assert_eq!(extract_trigger("?flip", "!"), None);
    }

    #[test]
    fn remainder_is_kept_verbatim() {
        let (trigger, rest) = split_trigger("!TeSt  two words", "!").unwrap();
        assert_eq!(trigger, "test");
        assert_eq!(rest, "  two words");

        let (_, rest) = split_trigger("!test", "!").unwrap();
        assert_eq!(rest, "");
    }

    #[test]
    fn prefix_stripping() {
        assert_eq!(strip_prefix("!flip @Bob", &["?", "!"]), "flip @Bob");
        assert_eq!(strip_prefix("flip @Bob", &["!"]), "flip @Bob");
    }

    #[test]
    fn single_word_check() {
        assert!(is_single_word("flip"));
        assert!(!is_single_word("flip coin"));
        assert!(!is_single_word("flip\tcoin"));
        assert!(!is_single_word(""));
    }
}
