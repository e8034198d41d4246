//! Extraction of `tech-radar` fenced blocks from a markdown note.
//!
//! The note is read with a CommonMark parser, so fences nested in
//! blockquotes, callouts and list items are found the same way the note
//! renders them. The first word of a fence's info string is the block
//! language. An unclosed block runs to the end of its container.

use std::ops::Range;

use log::{debug, trace};
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::{alt, eof},
    error::{ContextError, ErrMode},
    token::take_while,
};

use crate::span::Span;

/// Language tag of radar blocks.
pub const RADAR_LANGUAGE: &str = "tech-radar";

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A fenced block found in a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    ordinal: usize,
    source: String,
    span: Span,
    closed: bool,
}

impl CodeBlock {
    /// Position of the block among the radar blocks of its note, from zero.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The block text with fence lines and container markers removed.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Span of the block content within the note.
    ///
    /// Inside a blockquote or callout the span also covers the `>` markers
    /// of the content lines, so the note text it points at differs from
    /// [`CodeBlock::source`].
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `false` if the block ended before a closing fence.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A radar block whose closing event has not been seen yet.
struct OpenBlock {
    source: String,
    content: Option<Range<usize>>,
}

/// A run of three or more backticks or tildes.
fn fence_run<'src>(input: &mut &'src str) -> IResult<&'src str> {
    alt((take_while(3.., '`'), take_while(3.., '~'))).parse_next(input)
}

/// Drop indentation and blockquote markers in front of a fence.
fn strip_container(line: &str) -> &str {
    line.trim_start_matches([' ', '\t', '>'])
}

/// Checks that the last line of a fenced block closes its opening fence.
fn is_closed(block: &str) -> bool {
    let mut lines = block.lines();
    let Some(opening) = lines.next() else {
        return false;
    };
    let Some(closing) = lines.last() else {
        return false;
    };

    let mut input = strip_container(opening);
    let Ok(run) = fence_run(&mut input) else {
        return false;
    };
    let Some(marker) = run.chars().next() else {
        return false;
    };

    let mut input = strip_container(closing);
    let result: IResult<_> =
        (take_while(run.len().., marker), space0, eof).parse_next(&mut input);
    result.is_ok()
}

/// Extract every fenced block whose language is `language`.
pub fn extract_blocks_with_language(note: &str, language: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<OpenBlock> = None;

    for (event, range) in Parser::new(note).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let wanted = info.split_whitespace().next() == Some(language);
                trace!(info = &*info, wanted; "Fenced block");
                if wanted {
                    open = Some(OpenBlock {
                        source: String::new(),
                        content: None,
                    });
                }
            }
            Event::Text(text) => {
                if let Some(block) = open.as_mut() {
                    block.source.push_str(&text);
                    block.content = Some(match block.content.take() {
                        Some(content) => content.start..range.end,
                        None => range,
                    });
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = open.take() {
                    let closed = is_closed(&note[range.clone()]);
                    if !closed {
                        debug!(start = range.start; "Radar block not closed");
                    }
                    blocks.push(CodeBlock {
                        ordinal: blocks.len(),
                        source: block.source,
                        span: Span::new(block.content.unwrap_or(range.start..range.start)),
                        closed,
                    });
                }
            }
            _ => {}
        }
    }

    debug!(language, blocks = blocks.len(); "Extracted fenced blocks");
    blocks
}

/// Extract every `tech-radar` block of a note.
pub fn extract_blocks(note: &str) -> Vec<CodeBlock> {
    extract_blocks_with_language(note, RADAR_LANGUAGE)
}
