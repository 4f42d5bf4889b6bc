//! Text rendering of documentation comments
//!
//!     Two views of the same raw comment are produced for every documented entity:
//!
//!     - [summary]: the first sentence, on one line, for listings and tables of contents
//!     - [description]: the whole comment reflowed to plain text
//!
//!     Both go through the same [comment] block parser, so headings, code blocks and lists
//!     come out as their plain-text equivalents instead of being stripped. With the default
//!     options paragraphs are never wrapped: every paragraph prints as a single line, and
//!     code lines are indented by four spaces.

pub mod comment;
pub mod printer;

use comment::Block;
use docfx_config::TextConfig;

pub const DEFAULT_CODE_PREFIX: &str = "    ";
pub const DEFAULT_WIDTH: usize = 999_999;

/// Synopses opening with these (in any case) are boilerplate, not summaries.
const ILLEGAL_PREFIXES: &[&str] = &["copyright", "all rights", "author"];

/// Layout of reflowed descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Written before every prose line
    pub prefix: String,
    /// Written before every code line; empty means `prefix` followed by a tab
    pub code_prefix: String,
    /// Wrap width, `None` never wraps
    pub width: Option<usize>,
}

impl TextOptions {
    /// Options that print every paragraph on exactly one line.
    pub fn one_line() -> Self {
        Self {
            prefix: String::new(),
            code_prefix: String::new(),
            width: None,
        }
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            code_prefix: DEFAULT_CODE_PREFIX.to_string(),
            width: Some(DEFAULT_WIDTH),
        }
    }
}

impl From<&TextConfig> for TextOptions {
    fn from(config: &TextConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            code_prefix: config.code_prefix.clone(),
            width: (config.width > 0).then_some(config.width),
        }
    }
}

/// Renders summaries and descriptions with a fixed set of [TextOptions].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRenderer {
    options: TextOptions,
}

impl TextRenderer {
    pub fn new(options: TextOptions) -> Self {
        Self { options }
    }

    /// Summaries are always a single line, whatever the options say.
    pub fn summary(&self, doc: &str) -> String {
        summary(doc)
    }

    pub fn description(&self, doc: &str) -> String {
        printer::print(&comment::parse(doc), &self.options)
    }
}

/// Extracts the one-sentence synopsis of a comment.
///
/// Returns an empty string for empty comments, for comments that open with a heading or
/// code block, and for copyright or authorship boilerplate.
pub fn summary(doc: &str) -> String {
    let sentence = first_sentence(doc);
    let lower = sentence.to_lowercase();
    if ILLEGAL_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        return String::new();
    }

    let mut doc = comment::parse(sentence);
    if !matches!(doc.blocks.first(), Some(Block::Paragraph(_))) {
        return String::new();
    }
    // Only the opening paragraph, without trailing link definitions.
    doc.blocks.truncate(1);
    doc.links.clear();
    printer::print(&doc, &TextOptions::one_line())
        .trim()
        .to_string()
}

/// Reflows a whole comment to plain text with the default [TextOptions].
pub fn description(doc: &str) -> String {
    TextRenderer::default().description(doc)
}

/// The leading text up to the first sentence end.
///
/// A sentence ends at a period followed by whitespace, unless the period follows a single
/// uppercase letter as in "U.S.", or right after an ideographic full stop.
pub fn first_sentence(text: &str) -> &str {
    let (mut ppp, mut pp, mut p) = (' ', ' ', ' ');
    for (i, q) in text.char_indices() {
        let q = if matches!(q, '\n' | '\r' | '\t') { ' ' } else { q };
        if q == ' ' && p == '.' && (!pp.is_uppercase() || ppp.is_uppercase()) {
            return &text[..i];
        }
        if p == '。' || p == '．' {
            return &text[..i];
        }
        (ppp, pp, p) = (pp, p, q);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A short sentence. More text follows.", "A short sentence.")]
    #[case("", "")]
    #[case("  \n\t ", "")]
    #[case("Ends with period.", "Ends with period.")]
    #[case("First line.\nSecond line.", "First line.")]
    #[case(
        "Package sort provides\nprimitives   for sorting.",
        "Package sort provides primitives for sorting."
    )]
    #[case("The U.S. flag. Next.", "The U.S. flag.")]
    #[case("これは文です。次の文。", "これは文です。")]
    #[case("Use ``go vet'' often. Really.", "Use “go vet” often.")]
    #[case("Copyright 2013 The Authors. All rights reserved.", "")]
    #[case("AUTHOR: someone. Then.", "")]
    #[case("# Overview\n\nBody text.", "")]
    fn summary_takes_first_sentence(#[case] doc: &str, #[case] expected: &str) {
        assert_eq!(summary(doc), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case(
        "Package sort provides primitives.\nIt is fast.\n\nSecond paragraph.",
        "Package sort provides primitives. It is fast.\n\nSecond paragraph.\n"
    )]
    #[case(
        "Example:\n\n\tx := 1\n\ty := 2\n\nDone.",
        "Example:\n\n    x := 1\n    y := 2\n\nDone.\n"
    )]
    #[case(
        "Options:\n\n  - fast\n  - small\n\nEnd.",
        "Options:\n\n  - fast\n  - small\n\nEnd.\n"
    )]
    #[case("Steps:\n\n 1. open\n 2. close", "Steps:\n\n 1. open\n 2. close\n")]
    #[case(
        "Intro text.\n\n# Usage\n\nCall it.",
        "Intro text.\n\n# Usage\n\nCall it.\n"
    )]
    #[case(
        "Intro text.\n\nUsage Notes\n\nCall it.",
        "Intro text.\n\n# Usage Notes\n\nCall it.\n"
    )]
    #[case(
        "  Indented comment\n  continues here.",
        "Indented comment continues here.\n"
    )]
    #[case("List:\n\n  - one\n\n  - two", "List:\n\n  - one\n\n  - two\n")]
    #[case("Use ``go test'' to run.", "Use “go test” to run.\n")]
    #[case(
        "See [Go] and [fmt].\n\n[Go]: https://go.dev",
        "See Go and [fmt].\n\n[Go]: https://go.dev\n"
    )]
    #[case("Example:\n\n\tx := 1   \n\ty := 2\n", "Example:\n\n    x := 1\n    y := 2\n")]
    fn description_reflows_blocks(#[case] doc: &str, #[case] expected: &str) {
        assert_eq!(description(doc), expected);
    }

    #[test]
    fn long_paragraphs_are_not_wrapped_by_default() {
        let doc = "word ".repeat(500);
        let text = description(&doc);
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with("word\n"));
    }

    #[test]
    fn renderer_uses_configured_options() {
        let renderer = TextRenderer::new(TextOptions {
            prefix: String::new(),
            code_prefix: "\t".to_string(),
            width: Some(10),
        });
        assert_eq!(
            renderer.description("alpha beta gamma\n\n  code"),
            "alpha beta\ngamma\n\n\tcode\n"
        );
        assert_eq!(renderer.summary("alpha beta gamma. delta"), "alpha beta gamma.");
    }

    #[test]
    fn options_from_config_treat_zero_width_as_unbounded() {
        let config = TextConfig {
            prefix: String::new(),
            code_prefix: "  ".to_string(),
            width: 0,
        };
        let options = TextOptions::from(&config);
        assert_eq!(options.width, None);
        assert_eq!(options.code_prefix, "  ");
    }

    #[test]
    fn rendering_is_deterministic() {
        let doc = "Heading test.\n\nSome Heading\n\nBody with\n\n\tcode\n\n  - a\n  - b";
        assert_eq!(description(doc), description(doc));
        assert_eq!(summary(doc), summary(doc));
    }
}
