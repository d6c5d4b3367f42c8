//! Tweet text cleaning with pre-compiled regexes.
//!
//! Steps run in a fixed order, each on the previous step's output:
//! URLs, @mentions, `#`, `RT`, `:`, newlines.

use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    url: Regex,
    mention: Regex,
}

fn patterns() -> &'static Patterns {
    static P: OnceLock<Patterns> = OnceLock::new();
    P.get_or_init(|| Patterns {
        url: Regex::new(r"http\S+").expect("static regex"),
        mention: Regex::new(r"@\w+").expect("static regex"),
    })
}

pub struct TextCleaner;

impl TextCleaner {
    pub fn clean(text: &str) -> String {
        let p = patterns();
        let t = p.url.replace_all(text, "");
        let t = p.mention.replace_all(&t, "");
        // literal removals; "RT" goes even inside words
        t.replace('#', "")
            .replace("RT", "")
            .replace(':', "")
            .replace('\n', "")
    }

    pub fn clean_all<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
        texts.iter().map(|t| Self::clean(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retweet_example_residue() {
        let raw = "RT @alice: check this out! http://x.co #cool\nbye";
        assert_eq!(TextCleaner::clean(raw), "  check this out!  coolbye");
    }

    #[test]
    fn step_order_matters() {
        // "#" is stripped after mentions, so "@#tag" leaves "@tag" text behind.
        assert_eq!(TextCleaner::clean("@#tag"), "@tag");
        // URL removal eats trailing punctuation up to whitespace.
        assert_eq!(TextCleaner::clean("see https://a.b/c?d=1, ok"), "see  ok");
        assert_eq!(TextCleaner::clean("ARTIST: PARTY"), "AIST PAY");
    }

    #[test]
    fn idempotent_on_clean_text() {
        let plain = "just a calm sentence, nothing else!";
        let once = TextCleaner::clean(plain);
        assert_eq!(once, plain);
        assert_eq!(TextCleaner::clean(&once), once);
    }

    #[test]
    fn clean_all_keeps_order() {
        let out = TextCleaner::clean_all(&["#a", "b\nc", ""]);
        assert_eq!(out, vec!["a", "bc", ""]);
    }
}
