//! Text normalization and Arabic-aware tokenization.
//!
//! Tokenizes text by lowercasing and splitting on any character that is
//! neither a word character (alphanumeric or underscore) nor inside the
//! Arabic Unicode block (U+0600–U+06FF). Derja text freely mixes Arabic
//! script with Latin words and digits, so both ranges count as token
//! constituents. Uses a zero-per-token allocation design via byte spans.

/// Trim the ends and collapse internal whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Tokenized text: owns the lowercased buffer, provides &str slices via byte spans.
/// Only 1 heap allocation (the lowercased String) instead of N per-token Strings.
pub struct Tokens {
    buffer: String,
    spans: Vec<(u32, u32)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Tokenize text: lowercase, split on separators, keep token order and
/// multiplicity (term frequency needs repeats). No stemming, no stop words.
/// Returns a Tokens struct that owns the lowercased buffer.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if is_token_char(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            spans.push((s as u32, i as u32));
            start = None;
        }
    }
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        spans.push((s as u32, buffer.len() as u32));
    }

    Tokens { buffer, spans }
}
