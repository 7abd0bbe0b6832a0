//! Document normalization and corpus loading.
//!
//! Raw corpus lines are pipe-delimited records whose third field is the tweet
//! text. [`load_corpus`] turns such input into the ordered sequence of
//! cleaned documents the clustering engine consumes:
//!
//! - `#` characters are stripped (the hashtag's word is kept)
//! - `@handle` tokens are removed entirely, from `@` to the next whitespace
//! - URL-like substrings are removed, from `http` to the next whitespace
//! - the result is trimmed, lowercased, and internal whitespace is collapsed
//!   to single spaces

use log::warn;

/// Clean one raw tweet text into a normalized document.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace('#', "");
    let text = strip_from_marker(&text, '@');
    let text = strip_url_spans(&text);
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract the text field (third `|`-separated field) from one record line.
pub fn record_text(line: &str) -> Option<&str> {
    line.split('|').nth(2)
}

/// Load a whole pipe-delimited corpus into cleaned documents, one per line.
///
/// Lines with fewer than three fields carry no text and are skipped; the core
/// contract requires no error signaling for malformed input.
pub fn load_corpus(input: &str) -> Vec<String> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match record_text(line) {
            Some(text) => Some(normalize(text)),
            None => {
                warn!("skipping malformed record on line {}", idx + 1);
                None
            }
        })
        .collect()
}

/// Remove every span starting at `marker` up to the next whitespace.
fn strip_from_marker(text: &str, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == marker {
            while chars.peek().is_some_and(|c| !c.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove every span starting at `http` up to the next whitespace.
fn strip_url_spans(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("http") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        rest = match tail.find(char::is_whitespace) {
            Some(end) => &tail[end..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashtag_keeps_word() {
        assert_eq!(normalize("feeling #healthy today"), "feeling healthy today");
    }

    #[test]
    fn test_mention_removed_entirely() {
        assert_eq!(normalize("thanks @someone for the tip"), "thanks for the tip");
        // Mention at end of string, no trailing whitespace.
        assert_eq!(normalize("thanks @someone"), "thanks");
    }

    #[test]
    fn test_url_removed() {
        assert_eq!(
            normalize("read more at http://t.co/abc123 now"),
            "read more at now"
        );
        assert_eq!(normalize("https://example.com/x only"), "only");
    }

    #[test]
    fn test_lowercase_and_whitespace_collapse() {
        assert_eq!(normalize("  Hello   WORLD\tagain  "), "hello world again");
    }

    #[test]
    fn test_combined() {
        let raw = "RT @Health: 5 Tips for #BetterSleep http://bit.ly/xyz";
        assert_eq!(normalize(raw), "rt 5 tips for bettersleep");
    }

    #[test]
    fn test_record_text_third_field() {
        let line = "123456|Mon Apr 01 00:00:00 2013|some tweet text here";
        assert_eq!(record_text(line), Some("some tweet text here"));
        assert_eq!(record_text("only|two"), None);
    }

    #[test]
    fn test_load_corpus_skips_malformed_lines() {
        let input = "1|t1|First Tweet #fun\nbad line\n2|t2|second @who tweet\n";
        let docs = load_corpus(input);
        assert_eq!(docs, vec!["first tweet fun", "second tweet"]);
    }

    #[test]
    fn test_corpus_order_preserved() {
        let input = "1|a|zebra\n2|b|apple\n3|c|mango";
        assert_eq!(load_corpus(input), vec!["zebra", "apple", "mango"]);
    }
}
