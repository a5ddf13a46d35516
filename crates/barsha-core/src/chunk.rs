//! The retrievable unit of corpus text and its fixed-size windowing.

use crate::config;
use crate::text::normalize;

/// A bounded span of normalized record text with provenance.
///
/// A chunk's position in the index is a plain vector offset, valid only
/// within one index generation. Chunks are immutable once created and are
/// discarded wholesale on rebuild.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Normalized text, at least [`config::MIN_CHUNK_CHARS`] characters.
    pub text: String,
    /// Provenance URL or identifier, absent for records without one.
    pub link: Option<String>,
    /// Name of the originating record file. Diagnostic only.
    pub source_file: String,
}

/// Split record text into non-overlapping windows of at most
/// [`config::CHUNK_WINDOW_CHARS`] characters, normalize each window, and
/// drop windows shorter than [`config::MIN_CHUNK_CHARS`].
///
/// Boundaries are counted in chars, never bytes, so Arabic text is never
/// split mid-code-point.
pub fn window_text(text: &str) -> Vec<String> {
    let mut windows = Vec::new();
    let mut chars = text.chars();
    loop {
        let window: String = chars.by_ref().take(config::CHUNK_WINDOW_CHARS).collect();
        if window.is_empty() {
            break;
        }
        let normalized = normalize(&window);
        if normalized.chars().count() >= config::MIN_CHUNK_CHARS {
            windows.push(normalized);
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_dropped() {
        assert!(window_text("قصير ياسر").is_empty());
        assert!(window_text("").is_empty());
    }

    #[test]
    fn test_exact_floor_is_kept() {
        let text = "ب".repeat(config::MIN_CHUNK_CHARS);
        let windows = window_text(&text);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].chars().count(), config::MIN_CHUNK_CHARS);
    }

    #[test]
    fn test_one_below_floor_is_dropped() {
        let text = "ب".repeat(config::MIN_CHUNK_CHARS - 1);
        assert!(window_text(&text).is_empty());
    }

    #[test]
    fn test_long_text_splits_at_char_boundaries() {
        // 900 Arabic chars: one full window plus a 100-char remainder.
        let text = "ت".repeat(900);
        let windows = window_text(&text);
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].chars().count(), config::CHUNK_WINDOW_CHARS);
        assert_eq!(windows[1].chars().count(), 100);
    }

    #[test]
    fn test_trailing_scrap_below_floor_is_dropped() {
        // 810 chars: window of 800 kept, 10-char tail discarded.
        let text = "س".repeat(810);
        let windows = window_text(&text);
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].chars().count(), config::CHUNK_WINDOW_CHARS);
    }

    #[test]
    fn test_windows_are_normalized() {
        let word = "كلمة";
        let mut text = String::new();
        for _ in 0..40 {
            text.push_str(word);
            text.push_str("   \n ");
        }
        let windows = window_text(&text);
        assert!(!windows.is_empty());
        for w in &windows {
            assert!(!w.contains('\n'));
            assert!(!w.contains("  "));
        }
    }

    #[test]
    fn test_normalization_can_drop_a_window() {
        // 100 chars of raw window, mostly whitespace: normalizes below the floor.
        let mut text = "م".repeat(40);
        text.push_str(&" ".repeat(60));
        assert_eq!(text.chars().count(), 100);
        assert!(window_text(&text).is_empty());
    }
}
