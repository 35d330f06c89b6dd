// src/util/string.rs
// Display-width helpers shared by both form layouts

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct StringUtils {}

impl StringUtils {
    /// Terminal column width of `s`.
    pub fn width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Truncate to at most `width` columns, ending with `…` when something was cut.
    pub fn truncate(s: &str, width: usize) -> String {
        if Self::width(s) <= width {
            return s.to_string();
        }
        if width == 0 {
            return String::new();
        }

        let mut out = String::new();
        let mut used = 0;
        for c in s.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            out.push(c);
            used += w;
        }
        out.push('…');
        out
    }

    /// Truncate or right-pad with spaces to exactly `width` columns. Every region a
    /// layout writes goes through here so a shorter value always overwrites a longer one.
    pub fn pad_to_width(s: &str, width: usize) -> String {
        let mut out = Self::truncate(s, width);
        let used = Self::width(&out);
        out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
        out
    }

    /// Slice of `chars` (by char index) that fits in `width` columns and keeps
    /// `cursor` visible. Returns the visible text and the caret column inside it.
    pub fn window_around_cursor(chars: &[char], cursor: usize, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }

        // Reserve one column so the caret can sit after the last char
        let budget = width.saturating_sub(1).max(1);
        let mut start = 0;
        loop {
            let used: usize = chars[start..cursor.min(chars.len())]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            if used <= budget || start >= cursor {
                break;
            }
            start += 1;
        }

        let mut visible = String::new();
        let mut used = 0;
        let mut caret_col = 0;
        for (i, c) in chars.iter().enumerate().skip(start) {
            if i == cursor {
                caret_col = used;
            }
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            visible.push(*c);
            used += w;
        }
        if cursor >= chars.len() {
            caret_col = used.min(width - 1);
        }
        (visible, caret_col)
    }
}
