//! Lexicon-based polarity/subjectivity scoring.
//!
//! Each lexicon word carries a (polarity, subjectivity) pair. An intensifier
//! directly before a sentiment word scales both; a negation flips polarity by
//! -0.5, but only for the word right after it (intensifiers may sit between). A text scores the mean over
//! its matched words; no matches means (0.0, 0.0).

use ahash::AHashMap;
use indicatif::ProgressBar;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub struct SentimentAnalyzer {
    lexicon: AHashMap<&'static str, (f64, f64)>,
    intensifiers: AHashMap<&'static str, f64>,
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}']+").expect("static regex"))
}

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "neither", "without", "cannot"];

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: build_lexicon(),
            intensifiers: build_intensifiers(),
        }
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let mut scored: Vec<(f64, f64)> = Vec::new();
        let mut intensity = 1.0;
        let mut negated = false;

        for m in token_re().find_iter(&lower) {
            let tok = m.as_str().trim_matches('\'');
            if tok.is_empty() { continue; }
            if NEGATIONS.contains(&tok) || tok.ends_with("n't") {
                negated = true;
                continue;
            }
            if let Some(&k) = self.intensifiers.get(tok) {
                intensity *= k;
                continue;
            }
            if let Some(&(p, s)) = self.lexicon.get(tok) {
                let mut p = p * intensity;
                if negated { p *= -0.5; }
                scored.push((p.clamp(-1.0, 1.0), (s * intensity).clamp(0.0, 1.0)));
            }
            intensity = 1.0;
            negated = false;
        }

        if scored.is_empty() {
            return Sentiment::default();
        }
        let n = scored.len() as f64;
        let (p_sum, s_sum) = scored.iter().fold((0.0, 0.0), |(a, b), (p, s)| (a + p, b + s));
        Sentiment {
            polarity: (p_sum / n).clamp(-1.0, 1.0),
            subjectivity: (s_sum / n).clamp(0.0, 1.0),
        }
    }

    /// Score every text; returns parallel polarity and subjectivity columns.
    pub fn find_sentiments<S: AsRef<str>>(&self, texts: &[S]) -> (Vec<f64>, Vec<f64>) {
        self.find_sentiments_with_progress(texts, None)
    }

    pub fn find_sentiments_with_progress<S: AsRef<str>>(
        &self,
        texts: &[S],
        pb: Option<&ProgressBar>,
    ) -> (Vec<f64>, Vec<f64>) {
        let mut polarity = Vec::with_capacity(texts.len());
        let mut subjectivity = Vec::with_capacity(texts.len());
        for t in texts {
            let s = self.analyze(t.as_ref());
            polarity.push(s.polarity);
            subjectivity.push(s.subjectivity);
            if let Some(pb) = pb { pb.inc(1); }
        }
        (polarity, subjectivity)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_intensifiers() -> AHashMap<&'static str, f64> {
    [
        ("very", 1.3), ("really", 1.3), ("so", 1.3), ("too", 1.3),
        ("extremely", 1.5), ("incredibly", 1.5), ("super", 1.4), ("totally", 1.4),
        ("absolutely", 1.4), ("highly", 1.3), ("truly", 1.2), ("pretty", 1.1),
        ("quite", 1.1), ("most", 1.2), ("more", 1.1),
        ("slightly", 0.6), ("somewhat", 0.7), ("fairly", 0.8), ("barely", 0.5),
    ]
    .into_iter()
    .collect()
}

fn build_lexicon() -> AHashMap<&'static str, (f64, f64)> {
    [
        // positive
        ("good", (0.7, 0.6)), ("great", (0.8, 0.75)), ("best", (1.0, 0.3)),
        ("better", (0.5, 0.5)), ("excellent", (1.0, 1.0)), ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)), ("wonderful", (1.0, 1.0)), ("fantastic", (0.4, 0.9)),
        ("perfect", (1.0, 1.0)), ("nice", (0.6, 1.0)), ("happy", (0.8, 1.0)),
        ("glad", (0.5, 1.0)), ("love", (0.5, 0.6)), ("loved", (0.7, 0.8)),
        ("lovely", (0.5, 0.75)), ("like", (0.2, 0.4)), ("beautiful", (0.85, 1.0)),
        ("brilliant", (0.9, 1.0)), ("positive", (0.23, 0.55)), ("fun", (0.3, 0.2)),
        ("funny", (0.25, 1.0)), ("interesting", (0.5, 0.5)), ("cool", (0.35, 0.65)),
        ("safe", (0.5, 0.5)), ("strong", (0.43, 0.73)), ("success", (0.3, 0.0)),
        ("successful", (0.75, 0.95)), ("win", (0.8, 0.4)), ("hope", (0.2, 0.5)),
        ("hopeful", (0.5, 0.7)), ("thank", (0.2, 0.2)), ("thanks", (0.2, 0.2)),
        ("grateful", (0.7, 0.9)), ("proud", (0.8, 1.0)), ("exciting", (0.3, 0.8)),
        ("excited", (0.38, 0.75)), ("free", (0.4, 0.8)), ("easy", (0.43, 0.83)),
        ("important", (0.4, 1.0)), ("new", (0.14, 0.45)), ("right", (0.29, 0.54)),
        ("true", (0.35, 0.65)), ("clear", (0.1, 0.38)), ("welcome", (0.8, 0.9)),
        ("effective", (0.6, 0.8)), ("peaceful", (0.25, 0.5)), ("healthy", (0.5, 0.5)),
        ("fair", (0.7, 0.9)), ("helpful", (0.5, 0.3)), ("incredible", (0.9, 0.9)),
        ("impressive", (1.0, 1.0)), ("enjoy", (0.4, 0.5)), ("support", (0.1, 0.2)),
        // negative
        ("bad", (-0.7, 0.67)), ("worse", (-0.4, 0.6)), ("worst", (-1.0, 1.0)),
        ("terrible", (-1.0, 1.0)), ("horrible", (-1.0, 1.0)), ("awful", (-1.0, 1.0)),
        ("poor", (-0.4, 0.6)), ("sad", (-0.5, 1.0)), ("angry", (-0.5, 1.0)),
        ("hate", (-0.8, 0.9)), ("hated", (-0.9, 0.7)), ("ugly", (-0.7, 1.0)),
        ("wrong", (-0.5, 0.9)), ("stupid", (-0.8, 1.0)), ("dangerous", (-0.6, 0.9)),
        ("difficult", (-0.5, 1.0)), ("hard", (-0.29, 0.54)), ("sick", (-0.71, 0.86)),
        ("dead", (-0.2, 0.4)), ("deadly", (-0.2, 0.4)), ("fear", (-0.4, 0.6)),
        ("scary", (-0.5, 1.0)), ("crazy", (-0.6, 0.9)), ("fake", (-0.5, 1.0)),
        ("false", (-0.4, 0.6)), ("boring", (-1.0, 1.0)), ("disappointed", (-0.75, 0.75)),
        ("disappointing", (-0.6, 0.7)), ("negative", (-0.3, 0.4)), ("serious", (-0.33, 0.67)),
        ("severe", (-0.5, 1.0)), ("worried", (-0.4, 0.8)), ("failed", (-0.5, 0.3)),
        ("fail", (-0.5, 0.3)), ("lost", (-0.4, 0.4)), ("low", (-0.2, 0.35)),
        ("crisis", (-0.3, 0.4)), ("tragic", (-0.75, 1.0)), ("shameful", (-0.8, 1.0)),
        ("corrupt", (-0.5, 0.8)), ("evil", (-1.0, 1.0)), ("painful", (-0.7, 0.9)),
        ("unfair", (-0.5, 0.8)), ("useless", (-0.5, 0.2)), ("annoying", (-0.8, 0.9)),
        ("broken", (-0.4, 0.4)), ("cruel", (-1.0, 1.0)), ("wrongful", (-0.5, 0.7)),
        // neutral-polarity, subjective
        ("maybe", (0.0, 0.5)), ("probably", (0.0, 0.5)), ("personal", (0.0, 0.3)),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_signs() {
        let a = SentimentAnalyzer::new();
        assert!(a.analyze("What a great day, I love it").polarity > 0.0);
        assert!(a.analyze("This is a terrible, awful idea").polarity < 0.0);
    }

    #[test]
    fn no_sentiment_words_is_neutral() {
        let a = SentimentAnalyzer::new();
        assert_eq!(a.analyze(""), Sentiment::default());
        assert_eq!(a.analyze("the cat sat on the mat 123"), Sentiment::default());
    }

    #[test]
    fn intensifier_and_negation() {
        let a = SentimentAnalyzer::new();
        let good = a.analyze("good").polarity;
        assert!((good - 0.7).abs() < 1e-9);
        assert!(a.analyze("very good").polarity > good);
        assert!((a.analyze("not good").polarity + 0.35).abs() < 1e-9);
        assert!(a.analyze("this isn't good").polarity < 0.0);
        // intensifier must sit directly before the word
        assert!((a.analyze("very much good").polarity - good).abs() < 1e-9);
    }

    #[test]
    fn negation_reaches_only_the_next_word() {
        let a = SentimentAnalyzer::new();
        assert!(a.analyze("not sure. a great day").polarity > 0.0);
        let s = a.analyze("I am not sure. Today is a great day");
        assert_eq!(s, a.analyze("Today is a great day"));
        // an intensifier between negation and word keeps the negation
        assert!(a.analyze("not very good").polarity < 0.0);
    }

    #[test]
    fn scores_stay_in_range() {
        let a = SentimentAnalyzer::new();
        for t in ["extremely incredibly excellent", "absolutely totally worst", "very very sad"] {
            let s = a.analyze(t);
            assert!((-1.0..=1.0).contains(&s.polarity), "{t}: {s:?}");
            assert!((0.0..=1.0).contains(&s.subjectivity), "{t}: {s:?}");
        }
    }

    #[test]
    fn columns_are_deterministic_and_parallel() {
        let a = SentimentAnalyzer::new();
        let texts = vec!["good news", "", "bad news", "hate this so much"];
        let first = a.find_sentiments(&texts);
        let second = a.find_sentiments(&texts);
        assert_eq!(first, second);
        assert_eq!(first.0.len(), texts.len());
        assert_eq!(first.1.len(), texts.len());
        assert_eq!((first.0[1], first.1[1]), (0.0, 0.0));
    }
}
