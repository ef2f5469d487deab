//! Text helpers

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` display columns, ending with an ellipsis if cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Pad `text` so it sits centred in `width` columns
pub fn center_in(text: &str, width: usize) -> String {
    let text = truncate_ellipsis(text, width);
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}
