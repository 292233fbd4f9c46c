// SPDX-License-Identifier: MPL-2.0
//! Splits a message into plain and emphasized spans.

use regex::RegexBuilder;

/// A run of message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Emphasizes every case-insensitive occurrence of `terms` in `message`.
///
/// Terms are matched literally; longer terms win over their own prefixes.
/// Without usable terms the whole message is one plain span.
#[must_use]
pub fn highlight(message: &str, terms: &[String]) -> Vec<Span> {
    let mut escaped: Vec<String> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .map(|term| regex::escape(term))
        .collect();
    if escaped.is_empty() || message.is_empty() {
        return vec![Span::plain(message)];
    }
    escaped.sort_by_key(|term| std::cmp::Reverse(term.len()));

    let Ok(pattern) = RegexBuilder::new(&escaped.join("|"))
        .case_insensitive(true)
        .build()
    else {
        return vec![Span::plain(message)];
    };

    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in pattern.find_iter(message) {
        if found.start() > cursor {
            spans.push(Span::plain(&message[cursor..found.start()]));
        }
        spans.push(Span::emphasized(found.as_str()));
        cursor = found.end();
    }
    if cursor < message.len() {
        spans.push(Span::plain(&message[cursor..]));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn emphasized(spans: &[Span]) -> Vec<&str> {
        spans
            .iter()
            .filter(|span| span.emphasized)
            .map(|span| span.text.as_str())
            .collect()
    }

    #[test]
    fn highlights_single_term() {
        let spans = highlight("Big sale today", &terms(&["sale"]));
        assert_eq!(
            spans,
            vec![
                Span::plain("Big "),
                Span::emphasized("sale"),
                Span::plain(" today"),
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_original_case() {
        let spans = highlight("SALE! Sale! sale!", &terms(&["sale"]));
        assert_eq!(emphasized(&spans), vec!["SALE", "Sale", "sale"]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let spans = highlight("Total: $5.00 (approx)", &terms(&["$5.00", "(approx)"]));
        assert_eq!(emphasized(&spans), vec!["$5.00", "(approx)"]);
    }

    #[test]
    fn longer_terms_take_precedence() {
        let spans = highlight("Download complete", &terms(&["down", "download"]));
        assert_eq!(emphasized(&spans), vec!["Download"]);
    }

    #[test]
    fn no_terms_yields_single_plain_span() {
        assert_eq!(highlight("Saved", &[]), vec![Span::plain("Saved")]);
        assert_eq!(highlight("Saved", &terms(&[""])), vec![Span::plain("Saved")]);
    }

    #[test]
    fn spans_reassemble_the_message() {
        let message = "Your cart has 3 items in the cart";
        let joined: String = highlight(message, &terms(&["cart"]))
            .into_iter()
            .map(|span| span.text)
            .collect();
        assert_eq!(joined, message);
    }
}
