//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: screen clearing and
//! width-safe text fitting. Everything here is presentation plumbing with no
//! knowledge of the view models.

/// Clears the screen and homes the cursor.
///
/// Uses ANSI `\u{1b}[2J` (erase display) followed by `\u{1b}[H` (cursor to
/// 1,1). Each render pass starts from a clean frame.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Pads or truncates `text` to exactly `width` display characters.
///
/// Operates on characters, not bytes. Truncation drops the tail without an
/// ellipsis; callers that want one truncate upstream in the view model.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count >= width {
        return text.chars().take(width).collect();
    }
    let mut fitted = String::with_capacity(width);
    fitted.push_str(text);
    fitted.extend(std::iter::repeat(' ').take(width - count));
    fitted
}
