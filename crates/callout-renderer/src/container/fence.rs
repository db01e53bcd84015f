//! Code fence tracking for container marker detection.
//!
//! `:::` lines inside fenced code blocks are code, not container markers.

use super::parser::strip_indent;

/// Tracks code fence state during line-by-line processing.
///
/// Code fences in `CommonMark` can use backticks or tildes (three or more).
/// The closing fence must use the same character and be at least as long
/// as the opening fence.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Character and length of the open fence, if any.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Check if currently inside a fenced code block.
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line.
    ///
    /// Returns `true` if the line belongs to a fenced code block: the opening
    /// fence, a content line, or the closing fence. Fences indented by four
    /// or more spaces are indented code, not fences.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = strip_indent(line);

        match self.open {
            Some((fence_char, fence_len)) => {
                if trimmed.is_some_and(|t| is_closing_fence(t, fence_char, fence_len)) {
                    self.open = None;
                }
                true
            }
            None => {
                self.open = trimmed.and_then(detect_fence);
                self.open.is_some()
            }
        }
    }

    /// Close the open fence, if any, returning the closing fence line.
    pub(crate) fn close(&mut self) -> Option<String> {
        self.open
            .take()
            .map(|(fence_char, fence_len)| fence_char.to_string().repeat(fence_len))
    }
}

/// Detect if a line starts a code fence.
fn detect_fence(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }

    let count = trimmed.chars().take_while(|&c| c == first).count();
    (count >= 3).then_some((first, count))
}

/// Same character, at least as long as the opener, only whitespace after.
fn is_closing_fence(trimmed: &str, expected_char: char, min_len: usize) -> bool {
    if !trimmed.starts_with(expected_char) {
        return false;
    }

    let count = trimmed.chars().take_while(|&c| c == expected_char).count();
    count >= min_len && trimmed[count..].chars().all(char::is_whitespace)
}
