//! Block structure of documentation comments
//!
//!     A comment is split into spans of lines first, then each span becomes a block:
//!
//!     - unindented lines form paragraphs, or headings when they stand alone
//!     - indented lines form code blocks, or lists when the first line carries a marker
//!
//!     Blank lines separate spans but may appear inside indented spans. A couple of
//!     recovery rules handle comments that were not formatted carefully: code pasted without
//!     indentation but opened by a line ending in `{` or `\`, and lists written flush left
//!     right before indented continuation lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a trimmed list item line: the marker, then whitespace, then the item text.
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•*+\-]|([0-9]+)[.)])[ \t]+(\S.*)$").unwrap());

/// Characters that disqualify a line from being a legacy heading.
const OLD_HEADING_ILLEGAL: &str = ";:!?+*/=[]{}_^°&§~%#@<\">\\";

/// URL schemes accepted in a link definition.
const LINK_SCHEMES: &[&str] = &["file", "ftp", "gopher", "http", "https", "mailto", "nntp"];

/// A parsed comment: its blocks, plus the link definitions that were lifted out of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Doc {
    pub blocks: Vec<Block>,
    pub links: Vec<LinkDef>,
}

/// A `[Text]: URL` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDef {
    pub text: String,
    pub url: String,
    /// Some paragraph or list item refers to it as `[Text]`
    pub used: bool,
}

/// A block of a parsed comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Paragraph text, lines joined with newlines
    Paragraph(String),
    Heading(String),
    /// Code text with the common indentation removed, every line newline-terminated
    Code(String),
    List(List),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub items: Vec<ListItem>,
    /// The list was separated from the previous block by a blank line
    pub force_blank_before: bool,
    /// Blank lines appeared between items
    pub force_blank_between: bool,
}

impl List {
    pub fn blank_between(&self) -> bool {
        self.force_blank_between || self.items.iter().any(|item| item.content.len() > 1)
    }

    pub fn blank_before(&self) -> bool {
        self.force_blank_before || self.blank_between()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Number of an ordered item, `None` for bullets
    pub number: Option<String>,
    /// Paragraphs of the item
    pub content: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanKind {
    Paragraph,
    Heading,
    OldHeading,
    Code,
    List,
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    kind: SpanKind,
}

/// Parses a raw comment into blocks.
///
/// Paragraphs made only of link definitions become [LinkDef]s instead of blocks, and
/// `[Text]` references to them lose their brackets.
pub fn parse(text: &str) -> Doc {
    let raw: Vec<&str> = text.split('\n').collect();
    let lines = unindent(&raw);

    let mut doc = Doc::default();
    let mut prev_end = 0;
    for span in parse_spans(&lines) {
        let body = &lines[span.start..span.end];
        let block = match span.kind {
            SpanKind::Paragraph => match link_defs(body) {
                Some(defs) => {
                    doc.links.extend(defs);
                    None
                }
                None => Some(Block::Paragraph(body.join("\n"))),
            },
            SpanKind::Heading => Some(Block::Heading(inline_text(lines[span.start][1..].trim()))),
            SpanKind::OldHeading => Some(Block::Heading(inline_text(lines[span.start].trim()))),
            SpanKind::Code => Some(Block::Code(code_text(body))),
            SpanKind::List => Some(Block::List(list(body, prev_end < span.start))),
        };
        doc.blocks.extend(block);
        prev_end = span.end;
    }

    // References resolve once every definition is known.
    for block in &mut doc.blocks {
        match block {
            Block::Paragraph(text) => *text = linked_text(text, &mut doc.links),
            Block::List(list) => {
                for item in &mut list.items {
                    for paragraph in &mut item.content {
                        *paragraph = linked_text(paragraph, &mut doc.links);
                    }
                }
            }
            Block::Heading(_) | Block::Code(_) => {}
        }
    }
    doc
}

fn parse_spans(lines: &[&str]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut i = 0;
    // Lines before this index are treated as indented even when they are not.
    let mut force_indent = 0;

    'spans: loop {
        while i < lines.len() && lines[i].is_empty() {
            i += 1;
        }
        if i >= lines.len() {
            break;
        }

        let start = i;
        let end;
        let kind;
        if i < force_indent || indented(lines[i]) {
            // Runs until the next unindented line; blank lines are fine.
            let mut unindented_list_ok = is_list(lines[i]) && i < force_indent;
            i += 1;
            while i < lines.len()
                && (lines[i].is_empty()
                    || i < force_indent
                    || indented(lines[i])
                    || (unindented_list_ok && is_list(lines[i])))
            {
                if lines[i].is_empty() {
                    unindented_list_ok = false;
                }
                i += 1;
            }

            let mut e = i;
            while e > start && lines[e - 1].is_empty() {
                e -= 1;
            }
            // A closing brace right after indented code belongs to it.
            if e < lines.len() && lines[e].starts_with('}') {
                e += 1;
            }
            end = e;
            kind = if is_list(lines[start]) {
                SpanKind::List
            } else {
                SpanKind::Code
            };
        } else {
            // Runs until the next blank or indented line.
            i += 1;
            while i < lines.len() && !lines[i].is_empty() && !indented(lines[i]) {
                i += 1;
            }
            let mut e = i;

            if i < lines.len() && !lines[i].is_empty() && !is_list(lines[i]) {
                if is_list(lines[i - 1]) {
                    // Flush-left list items followed by indented wrap lines.
                    force_indent = e;
                    e -= 1;
                    while e > start && is_list(lines[e - 1]) {
                        e -= 1;
                    }
                } else if lines[i - 1].ends_with('{') || lines[i - 1].ends_with('\\') {
                    // Unindented first line of a code block.
                    force_indent = e;
                    e -= 1;
                }
                if start == e && force_indent > start {
                    i = start;
                    continue 'spans;
                }
            }

            end = e;
            kind = if end - start == 1 && is_heading(lines[start]) {
                SpanKind::Heading
            } else if end - start == 1 && is_old_heading(lines[start], lines, start) {
                SpanKind::OldHeading
            } else {
                SpanKind::Paragraph
            };
        }

        spans.push(Span { start, end, kind });
        i = end;
    }
    spans
}

/// Drops leading and trailing blank lines and the indentation shared by all lines.
/// Whitespace-only lines come back empty.
fn unindent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return Vec::new();
    };
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    let lines = &lines[first..=last];

    let mut prefix = leading_space(lines[0]);
    for &line in &lines[1..] {
        if !is_blank(line) {
            prefix = common_prefix(prefix, leading_space(line));
        }
    }

    lines
        .iter()
        .map(|&line| {
            let line = line.strip_prefix(prefix).unwrap_or(line);
            if is_blank(line) {
                ""
            } else {
                line
            }
        })
        .collect()
}

fn list(lines: &[&str], force_blank_before: bool) -> List {
    let ordered = matches!(list_marker(lines[0]), Some((Some(_), _)));
    let mut list = List {
        items: Vec::new(),
        force_blank_before,
        force_blank_between: false,
    };
    let mut text: Vec<&str> = Vec::new();

    for &line in lines {
        let mut line = line;
        if let Some((number, rest)) = list_marker(line) {
            // Bullets inside a numbered list (and vice versa) are item text.
            if number.is_some() == ordered {
                flush_item(&mut list, &mut text);
                list.items.push(ListItem {
                    number: number.map(str::to_string),
                    content: Vec::new(),
                });
                line = rest;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            list.force_blank_between = true;
            flush_item(&mut list, &mut text);
            continue;
        }
        text.push(line);
    }
    flush_item(&mut list, &mut text);
    list
}

fn flush_item(list: &mut List, text: &mut Vec<&str>) {
    if let Some(item) = list.items.last_mut() {
        if !text.is_empty() {
            item.content.push(text.join("\n"));
        }
    }
    text.clear();
}

/// All lines are link definitions, or `None`.
fn link_defs(lines: &[&str]) -> Option<Vec<LinkDef>> {
    lines.iter().map(|&line| link_def(line)).collect()
}

fn link_def(line: &str) -> Option<LinkDef> {
    if !line.starts_with('[') {
        return None;
    }
    let close = line.find("]:")?;
    let after = &line[close + 2..];
    if after.len() < 2 || !after.starts_with(|c: char| c == ' ' || c == '\t') {
        return None;
    }
    let url = after[1..].trim();
    let (scheme, _) = url.split_once("://")?;
    if !LINK_SCHEMES.contains(&scheme) {
        return None;
    }
    Some(LinkDef {
        text: line[1..close].to_string(),
        url: url.to_string(),
        used: false,
    })
}

/// Drops the brackets of `[Text]` references to known definitions and marks those used.
fn linked_text(text: &str, links: &mut [LinkDef]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut written = 0;
    let mut open: Option<usize> = None;
    // Bracketed text with line breaks and tabs read as spaces.
    let mut key = String::new();

    for (i, c) in text.char_indices() {
        let c = if matches!(c, '\n' | '\t') { ' ' } else { c };
        match c {
            '[' => open = Some(i),
            ']' => {
                if let Some(start) = open {
                    if let Some(def) = links.iter_mut().find(|def| def.text == key) {
                        def.used = true;
                        out.push_str(&text[written..start]);
                        out.push_str(&text[start + 1..i]);
                        written = i + 1;
                    }
                }
                open = None;
                key.clear();
            }
            _ => {}
        }
        if open.is_some_and(|start| start != i) {
            key.push(c);
        }
    }
    out.push_str(&text[written..]);
    inline_text(&out)
}

fn code_text(lines: &[&str]) -> String {
    let mut text = String::new();
    for line in unindent(lines) {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Typographic quotes for the ``doubled'' ASCII forms.
fn inline_text(text: &str) -> String {
    text.replace("``", "“").replace("''", "”")
}

fn list_marker(line: &str) -> Option<(Option<&str>, &str)> {
    let caps = LIST_MARKER.captures(line.trim())?;
    let number = caps.get(1).map(|m| m.as_str());
    let rest = caps.get(2).map_or("", |m| m.as_str());
    Some((number, rest))
}

fn is_list(line: &str) -> bool {
    list_marker(line).is_some()
}

fn is_heading(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'#' && matches!(bytes[1], b' ' | b'\t') && line.trim() != "#"
}

/// A legacy heading: a lone capitalized line between blank lines, followed by an
/// unindented paragraph, without sentence punctuation.
fn is_old_heading(line: &str, all: &[&str], off: usize) -> bool {
    if off == 0
        || !all[off - 1].is_empty()
        || off + 2 >= all.len()
        || !all[off + 1].is_empty()
        || indented(all[off + 2])
    {
        return false;
    }

    let line = line.trim();
    match line.chars().next() {
        Some(c) if c.is_alphabetic() && c.is_uppercase() => {}
        _ => return false,
    }
    match line.chars().next_back() {
        Some(c) if c.is_alphanumeric() => {}
        _ => return false,
    }
    if line.contains(|c: char| OLD_HEADING_ILLEGAL.contains(c)) {
        return false;
    }
    // Apostrophes only for a possessive "'s".
    for (idx, _) in line.match_indices('\'') {
        let rest = &line[idx + 1..];
        if rest != "s" && !rest.starts_with("s ") {
            return false;
        }
    }
    // Periods only inside words, as in "v1.2".
    for (idx, _) in line.match_indices('.') {
        let rest = &line[idx + 1..];
        if rest.is_empty() || rest.starts_with(' ') {
            return false;
        }
    }
    true
}

fn indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_space(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c == ' ' || c == '\t');
    &line[..line.len() - rest.len()]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let n = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..n]
}
