//! Mention token parsing for Discord message content.
//!
//! Discord encodes user mentions as `<@id>` or `<@!id>` inside the raw
//! content. The payload's `mentions` array carries no ordering guarantee,
//! so the ordered list is recovered from the content itself.

use std::collections::HashMap;

/// Extract mentioned user ids in order of appearance in the raw content.
pub(crate) fn mention_ids(content: &str) -> Vec<String> {
    let mut ids = Vec::new();
    scan(content, |id, _| ids.push(id.to_string()));
    ids
}

/// Replace each mention token with `@Name`, resolving names from the
/// payload's mentions array. Tokens for unknown ids are kept verbatim.
pub(crate) fn clean_content(content: &str, names: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    scan(content, |id, span| {
        out.push_str(&content[last..span.0]);
        match names.get(id) {
            Some(name) => {
                out.push('@');
                out.push_str(name);
            }
            None => out.push_str(&content[span.0..span.1]),
        }
        last = span.1;
    });
    out.push_str(&content[last..]);
    out
}

/// Walk the content, invoking `f(id, (token_start, token_end))` for each
/// well-formed mention token.
fn scan(content: &str, mut f: impl FnMut(&str, (usize, usize))) {
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'<' && i + 1 < bytes.len() && bytes[i + 1] == b'@' {
            let mut j = i + 2;
            if j < bytes.len() && bytes[j] == b'!' {
                j += 1;
            }
            let start = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > start && j < bytes.len() && bytes[j] == b'>' {
                f(&content[start..j], (i, j + 1));
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_mention_ids_in_content_order() {
        let ids = mention_ids("<@222> hey <@!111> and <@222> again");
        assert_eq!(ids, vec!["222", "111", "222"]);
    }

    #[test]
    fn test_no_mentions() {
        assert!(mention_ids("plain text with < and @").is_empty());
    }

    #[test]
    fn test_malformed_tokens_ignored() {
        assert!(mention_ids("<@> <@abc> <@123").is_empty());
    }

    #[test]
    fn test_nickname_form_parsed() {
        assert_eq!(mention_ids("<@!42>"), vec!["42"]);
    }

    #[test]
    fn test_clean_content_substitutes_names() {
        let cleaned = clean_content(
            "<@1> tell me a joke",
            &names(&[("1", "Mimus")]),
        );
        assert_eq!(cleaned, "@Mimus tell me a joke");
    }

    #[test]
    fn test_clean_content_keeps_unknown_tokens() {
        let cleaned = clean_content("<@1> and <@2>", &names(&[("1", "Mimus")]));
        assert_eq!(cleaned, "@Mimus and <@2>");
    }

    #[test]
    fn test_clean_content_no_mentions_is_verbatim() {
        let text = "nothing to see here";
        assert_eq!(clean_content(text, &HashMap::new()), text);
    }
}
