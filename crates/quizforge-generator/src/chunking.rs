//! Text chunking for source documents
//!
//! Text is split on the coarsest separator present (paragraph, line, sentence,
//! word, character) and only pieces that are still too large are re-split with
//! the finer ones. Pieces are then packed into windows of at most
//! `chunk_size` characters, each window starting with up to `overlap` characters
//! carried over from the previous one. The carry-over also crosses the
//! boundaries around a re-split piece: when no whole piece fits, the last
//! `overlap` characters of the previous chunk are used instead.
//!
//! All sizes count `char`s, not bytes.

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::types::DocumentText;
use std::borrow::Cow;
use std::collections::VecDeque;

/// Split points, coarsest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    Paragraph,
    Line,
    Sentence,
    Word,
    Char,
}

const SEPARATORS: [Separator; 5] = [
    Separator::Paragraph,
    Separator::Line,
    Separator::Sentence,
    Separator::Word,
    Separator::Char,
];

impl Separator {
    fn occurs_in(self, text: &str) -> bool {
        match self {
            Separator::Paragraph => text.contains("\n\n"),
            Separator::Line => text.contains('\n'),
            Separator::Sentence => text
                .chars()
                .zip(text.chars().skip(1))
                .any(|(c, next)| is_sentence_end(c) && next.is_whitespace()),
            Separator::Word => text.contains(' '),
            Separator::Char => !text.is_empty(),
        }
    }

    /// Split keeping each separator at the end of the piece it terminates
    fn split(self, text: &str) -> Vec<&str> {
        match self {
            Separator::Paragraph => text.split_inclusive("\n\n").collect(),
            Separator::Line => text.split_inclusive('\n').collect(),
            Separator::Sentence => split_after_sentences(text),
            Separator::Word => text.split_inclusive(' ').collect(),
            Separator::Char => text
                .char_indices()
                .map(|(idx, c)| &text[idx..idx + c.len_utf8()])
                .collect(),
        }
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn split_after_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_sentence_end(c) {
            continue;
        }
        if let Some(&(next_idx, next)) = chars.peek() {
            if next.is_whitespace() {
                let end = next_idx + next.len_utf8();
                pieces.push(&text[start..end]);
                start = end;
                chars.next();
            }
        }
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits text into bounded, overlapping chunks
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    chunk_size: usize,
    overlap: usize,
}

impl TextChunker {
    /// Create a new text chunker
    ///
    /// Fails unless `chunk_size > 0` and `overlap < chunk_size`.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, GeneratorError> {
        if chunk_size == 0 {
            return Err(GeneratorError::Config(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(GeneratorError::Config(format!(
                "overlap ({}) must be less than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from generator configuration
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Chunk the text and normalize the result into a [`DocumentText`]
    pub fn chunk(&self, text: &str) -> Result<DocumentText, GeneratorError> {
        DocumentText::from_chunks(self.split(text))
    }

    /// Split the text into raw chunks; empty text gives no chunks
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        if char_len(text) <= self.chunk_size {
            return vec![text.to_string()];
        }

        let mut pieces = Vec::new();
        self.collect_pieces(text, &SEPARATORS, &mut pieces);

        let mut window = Window::new(self.chunk_size, self.overlap);
        for piece in pieces {
            match piece {
                Piece::Text(text) => window.push(text),
                Piece::Break => window.flush(),
            }
        }
        window.finish()
    }

    fn collect_pieces<'t>(
        &self,
        text: &'t str,
        separators: &[Separator],
        out: &mut Vec<Piece<'t>>,
    ) {
        let Some(idx) = separators.iter().position(|sep| sep.occurs_in(text)) else {
            out.push(Piece::Text(text));
            return;
        };
        let separator = separators[idx];
        let finer = &separators[idx + 1..];

        for piece in separator.split(text) {
            if char_len(piece) < self.chunk_size || finer.is_empty() {
                out.push(Piece::Text(piece));
            } else {
                out.push(Piece::Break);
                self.collect_pieces(piece, finer, out);
                out.push(Piece::Break);
            }
        }
    }
}

/// Output of the recursive split, in text order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'t> {
    Text(&'t str),
    /// Boundary around a re-split piece; the open window is emitted here
    Break,
}

/// Packs pieces into chunks, carrying up to `overlap` chars into each new one
struct Window<'t> {
    chunk_size: usize,
    overlap: usize,
    pieces: VecDeque<(Cow<'t, str>, usize)>,
    total: usize,
    /// Whether the window holds anything beyond carried-over context
    has_new: bool,
    chunks: Vec<String>,
}

impl<'t> Window<'t> {
    fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
            pieces: VecDeque::new(),
            total: 0,
            has_new: false,
            chunks: Vec::new(),
        }
    }

    fn push(&mut self, piece: &'t str) {
        let len = char_len(piece);
        if self.has_new && self.total + len > self.chunk_size {
            self.emit();
        }
        if !self.has_new {
            self.fit_carried(len);
        }
        self.pieces.push_back((Cow::Borrowed(piece), len));
        self.total += len;
        self.has_new = true;
    }

    fn flush(&mut self) {
        if self.has_new {
            self.emit();
        }
    }

    fn finish(mut self) -> Vec<String> {
        if self.has_new {
            let last = self.contents();
            self.chunks.push(last);
        }
        self.chunks
    }

    fn contents(&self) -> String {
        self.pieces.iter().map(|(p, _)| p.as_ref()).collect()
    }

    fn emit(&mut self) {
        let chunk = self.contents();
        self.chunks.push(chunk);
        while self.total > self.overlap {
            self.pop_front();
        }
        self.has_new = false;
    }

    fn pop_front(&mut self) {
        match self.pieces.pop_front() {
            Some((_, dropped)) => self.total -= dropped,
            None => self.total = 0,
        }
    }

    /// Trim carried context so `len` more chars fit. Context that is blank
    /// is replaced by the last `overlap` chars of the previous chunk.
    fn fit_carried(&mut self, len: usize) {
        while self.total > 0 && self.total + len > self.chunk_size {
            self.pop_front();
        }
        if self.pieces.iter().any(|(p, _)| !p.trim().is_empty()) {
            return;
        }

        self.pieces.clear();
        self.total = 0;

        let room = self.overlap.min(self.chunk_size.saturating_sub(len));
        let Some(previous) = self.chunks.last() else {
            return;
        };
        let mut tail = char_tail(previous, room);
        if tail.trim().is_empty() {
            tail = char_tail(previous.trim_end(), room);
        }
        if !tail.is_empty() {
            let tail = tail.to_string();
            let tail_len = char_len(&tail);
            self.pieces.push_back((Cow::Owned(tail), tail_len));
            self.total = tail_len;
        }
    }
}

/// Last `n` chars of `text`
fn char_tail(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
