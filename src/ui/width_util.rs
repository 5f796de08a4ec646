use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;

const FALLBACK_TERMINAL_WIDTH: usize = 80;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops CSI sequences (`ESC [ ... letter`), the only kind the tables emit.
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c as u32 == ESC_BYTE as u32 && chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let pad = width.saturating_sub(self.visible_width(s));
        format!("{s}{}", " ".repeat(pad))
    }

    pub fn terminal_width(&self) -> usize {
        terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_TERMINAL_WIDTH)
    }

    /// Left padding that centers `content_width` in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
