//! Code rendering contract
//!
//! Printing declarations is not this crate's business: whoever builds the page knows how
//! source should look (formatting, links, highlighting). The mapper asks a [CodeRenderer]
//! for the text of every node and stores whatever comes back.

use crate::error::RenderError;
use pkgdoc::{Code, Comment, Decl, PageInfo};

/// A syntax node handed to a [CodeRenderer].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// A type, function, or grouped const/var declaration
    Decl(&'a Decl),
    /// An example body together with the comments found inside it
    Commented(CommentedNode<'a>),
}

/// Pairs example code with its comments so they print in their original position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentedNode<'a> {
    pub node: &'a Code,
    pub comments: &'a [Comment],
}

/// Turns syntax nodes into source text for a given page.
///
/// Implementations must tolerate repeated calls. When pages are mapped from several
/// threads at once the renderer is shared between them and has to be `Sync`.
pub trait CodeRenderer {
    type Error;

    fn render(&self, page: &PageInfo, node: Node<'_>) -> Result<String, Self::Error>;
}

/// Renders nodes from the source text the analyzer recorded.
///
/// Declarations print verbatim. Example comments are spliced back into the code at their
/// recorded offsets, in offset order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceRenderer;

impl CodeRenderer for SourceRenderer {
    type Error = RenderError;

    fn render(&self, _page: &PageInfo, node: Node<'_>) -> Result<String, RenderError> {
        match node {
            Node::Decl(decl) => Ok(decl.source.clone()),
            Node::Commented(commented) => splice_comments(commented),
        }
    }
}

fn splice_comments(commented: CommentedNode<'_>) -> Result<String, RenderError> {
    let source = &commented.node.source;
    let mut comments: Vec<&Comment> = commented.comments.iter().collect();
    comments.sort_by_key(|comment| comment.offset);

    let mut out = String::with_capacity(
        source.len() + comments.iter().map(|c| c.text.len()).sum::<usize>(),
    );
    let mut pos = 0;
    for comment in comments {
        if !source.is_char_boundary(comment.offset) {
            return Err(RenderError::CommentOutOfRange {
                offset: comment.offset,
                len: source.len(),
            });
        }
        out.push_str(&source[pos..comment.offset]);
        out.push_str(&comment.text);
        pos = comment.offset;
    }
    out.push_str(&source[pos..]);
    Ok(out)
}
