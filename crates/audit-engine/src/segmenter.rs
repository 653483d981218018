//! Sentence segmentation with exact offsets
//!
//! A boundary falls after `.`, `!` or `?` when the terminator is the last
//! character of the text or is followed by whitespace. No abbreviation
//! handling is done: "Dr. Smith" splits after "Dr.". Offsets are byte
//! offsets into the original `&str`.
//!
//! Whitespace is Unicode White_Space plus U+FEFF, minus U+0085. Extracted
//! PDF and DOCX text often carries a stray byte order mark between sentences.

/// One sentence, borrowed from the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub value: &'a str,
    pub start: usize,
    pub end: usize,
    pub index: usize,
}

impl<'a> Sentence<'a> {
    /// Sentence text without surrounding whitespace
    pub fn trimmed(&self) -> &'a str {
        self.value.trim_matches(is_space)
    }
}

/// Whitespace as seen by the boundary test and by trimming
pub fn is_space(ch: char) -> bool {
    match ch {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Split `text` into consecutive sentences.
///
/// Sentences are contiguous: the first starts at 0 and each one starts where
/// the previous one ended. Trailing text without a terminator becomes a final
/// sentence ending at `text.len()`, unless it is whitespace only, in which case
/// it is not emitted.
pub fn split_into_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut sentence_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        let at_boundary = chars.peek().map_or(true, |(_, next)| is_space(*next));
        if at_boundary {
            // Terminators are ASCII, so i + 1 is always a char boundary
            let end = i + 1;
            sentences.push(Sentence {
                value: &text[sentence_start..end],
                start: sentence_start,
                end,
                index: sentences.len(),
            });
            sentence_start = end;
        }
    }

    let rest = &text[sentence_start..];
    if !rest.trim_matches(is_space).is_empty() {
        sentences.push(Sentence {
            value: rest,
            start: sentence_start,
            end: text.len(),
            index: sentences.len(),
        });
    }

    sentences
}
