/// Frames spent on each revealed character.
pub const FRAMES_PER_CHAR: i64 = 2;
/// Cursor blink period in frames.
pub const CURSOR_PERIOD: i64 = 10;
/// Frames per period during which the cursor is drawn.
pub const CURSOR_ON_FRAMES: i64 = 5;

/// Number of characters of a `len`-character string shown after `elapsed` frames.
pub fn revealed_chars(elapsed: i64, len: usize) -> usize {
    if elapsed < 0 {
        return 0;
    }
    let n = usize::try_from(elapsed / FRAMES_PER_CHAR).unwrap_or(usize::MAX);
    n.min(len)
}

/// Prefix of `text` containing its first `chars` Unicode scalar values.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Portion of `text` typed after `elapsed` frames.
pub fn typed_prefix(text: &str, elapsed: i64) -> &str {
    char_prefix(text, revealed_chars(elapsed, text.chars().count()))
}

/// Blink phase of the typing cursor at `frame`.
pub fn cursor_visible(frame: i64) -> bool {
    frame.rem_euclid(CURSOR_PERIOD) < CURSOR_ON_FRAMES
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typewriter.rs"]
mod tests;
