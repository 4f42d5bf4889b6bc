//! Plain-text printer for parsed comment blocks

use super::comment::{Block, Doc, List};
use super::TextOptions;

/// Indent of the continuation lines of a list item.
const LIST_INDENT: &str = "    ";

/// Prints blocks as plain text, separating them with blank lines.
///
/// Link definitions that some block referred to are listed after the last block.
pub fn print(doc: &Doc, options: &TextOptions) -> String {
    let printer = Printer::new(options);
    let mut out = String::new();
    for (i, block) in doc.blocks.iter().enumerate() {
        if i > 0 && blank_before(block) {
            out.push_str(printer.prefix);
            write_nl(&mut out);
        }
        printer.block(&mut out, block);
    }

    if doc.links.iter().any(|def| def.used) {
        write_nl(&mut out);
        for def in doc.links.iter().filter(|def| def.used) {
            out.push('[');
            out.push_str(&def.text);
            out.push_str("]: ");
            out.push_str(&def.url);
            out.push('\n');
        }
    }
    out
}

struct Printer<'a> {
    prefix: &'a str,
    code_prefix: String,
    width: Option<usize>,
}

impl<'a> Printer<'a> {
    fn new(options: &'a TextOptions) -> Self {
        let code_prefix = if options.code_prefix.is_empty() {
            format!("{}\t", options.prefix)
        } else {
            options.code_prefix.clone()
        };
        Self {
            prefix: &options.prefix,
            code_prefix,
            width: options.width,
        }
    }

    fn block(&self, out: &mut String, block: &Block) {
        match block {
            Block::Paragraph(text) => {
                out.push_str(self.prefix);
                self.text(out, "", text);
            }
            Block::Heading(text) => {
                out.push_str(self.prefix);
                out.push_str("# ");
                self.text(out, "", text);
            }
            Block::Code(text) => {
                for line in text.split_terminator('\n') {
                    if !line.is_empty() {
                        out.push_str(&self.code_prefix);
                        out.push_str(line);
                    }
                    write_nl(out);
                }
            }
            Block::List(list) => self.list(out, list),
        }
    }

    fn list(&self, out: &mut String, list: &List) {
        let loose = list.blank_between();
        for (i, item) in list.items.iter().enumerate() {
            if i > 0 && loose {
                out.push_str(self.prefix);
                write_nl(out);
            }
            out.push_str(self.prefix);
            out.push(' ');
            match &item.number {
                None => out.push_str(" - "),
                Some(number) => {
                    out.push_str(number);
                    out.push_str(". ");
                }
            }
            for (j, paragraph) in item.content.iter().enumerate() {
                if j > 0 {
                    out.push('\n');
                    out.push_str(self.prefix);
                    out.push_str(LIST_INDENT);
                }
                self.text(out, LIST_INDENT, paragraph);
            }
        }
    }

    /// Writes the words of `text` on as many lines as the width requires.
    fn text(&self, out: &mut String, indent: &str, text: &str) {
        let words: Vec<&str> = text.split_whitespace().collect();
        let lines = match self.width {
            Some(width) if !words.is_empty() => {
                wrap(&words, width.saturating_sub(indent.chars().count()))
            }
            _ => vec![0..words.len()],
        };
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                out.push_str(self.prefix);
                out.push_str(indent);
            }
            out.push_str(&words[line].join(" "));
            write_nl(out);
        }
    }
}

fn blank_before(block: &Block) -> bool {
    match block {
        Block::List(list) => list.blank_before(),
        _ => true,
    }
}

/// Greedy line filling; a word longer than `width` gets a line of its own.
fn wrap(words: &[&str], width: usize) -> Vec<std::ops::Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut len = 0;
    for (i, word) in words.iter().enumerate() {
        let n = word.chars().count();
        if i > start && len + 1 + n > width {
            lines.push(start..i);
            start = i;
            len = n;
        } else if i > start {
            len += 1 + n;
        } else {
            len = n;
        }
    }
    lines.push(start..words.len());
    lines
}

/// Ends the current line, dropping trailing spaces and tabs first.
fn write_nl(out: &mut String) {
    let kept = out.trim_end_matches(|c: char| c == ' ' || c == '\t').len();
    out.truncate(kept);
    out.push('\n');
}
