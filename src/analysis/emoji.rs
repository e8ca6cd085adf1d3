//! Emoji stripping for word tokens.

use std::sync::LazyLock;

use regex::Regex;

// Keycap sequences first so the base digit goes with them; then single code
// points: pictographs, skin tones, flags, ZWJ, variation selectors, tag chars
static EMOJI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9#*]\x{FE0F}?\x{20E3}|[\p{Extended_Pictographic}\p{Emoji_Modifier}\x{1F1E6}-\x{1F1FF}\x{200D}\x{FE0E}\x{FE0F}\x{20E3}\x{E0020}-\x{E007F}]",
    )
    .unwrap()
});

/// Removes emoji from a token.
///
/// An empty return value means nothing visible was left; the lexical engine
/// turns that into the `"null"` sentinel and drops it.
pub trait EmojiFilter {
    fn strip(&self, token: &str) -> String;
}

/// Strips Unicode emoji code points and the joiners that glue them together.
///
/// ```
/// use chatstats::analysis::{EmojiFilter, UnicodeEmojiFilter};
///
/// let filter = UnicodeEmojiFilter;
/// assert_eq!(filter.strip("ciao😂"), "ciao");
/// assert_eq!(filter.strip("👍🏽"), "");
/// assert_eq!(filter.strip("42"), "42");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmojiFilter;

impl EmojiFilter for UnicodeEmojiFilter {
    fn strip(&self, token: &str) -> String {
        EMOJI_REGEX.replace_all(token, "").into_owned()
    }
}

/// Leaves tokens untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepEmoji;

impl EmojiFilter for KeepEmoji {
    fn strip(&self, token: &str) -> String {
        token.to_string()
    }
}

impl<F: EmojiFilter + ?Sized> EmojiFilter for &F {
    fn strip(&self, token: &str) -> String {
        (**self).strip(token)
    }
}
