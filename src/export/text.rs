//! Text preparation for PDF layout
//!
//! The PDF writer uses the standard Helvetica font with WinAnsiEncoding, so
//! every string is reduced to characters that encoding can show. Markdown
//! emphasis is flattened first and lines are wrapped from a glyph-width
//! estimate rather than real font metrics.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Average Helvetica glyph width as a fraction of the font size.
pub const AVERAGE_GLYPH_WIDTH: f32 = 0.5;

/// Map typographic punctuation to ASCII and drop anything outside Latin-1.
///
/// Control characters other than newline are dropped as well.
pub fn sanitize_winansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{25CF}' | '\u{25AA}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            c if c.is_control() => {}
            c if (c as u32) < 0x100 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Bytes for a PDF literal string. Input must already be sanitized.
pub fn winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| u8::try_from(c as u32).ok())
        .collect()
}

/// Flatten Markdown into plain paragraphs.
///
/// Emphasis markers are removed. Line breaks inside a paragraph are kept as
/// `\n` so list-like lines stay on their own line.
pub fn flatten_markdown(markdown: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => current.push('\n'),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Item) => {
                push_paragraph(&mut paragraphs, &mut current);
            }
            _ => {}
        }
    }
    push_paragraph(&mut paragraphs, &mut current);

    paragraphs
}

fn push_paragraph(paragraphs: &mut Vec<String>, current: &mut String) {
    let lines: Vec<&str> = current
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if !lines.is_empty() {
        paragraphs.push(lines.join("\n"));
    }
    current.clear();
}

/// Characters that fit in `max_width` points at `font_size`.
pub fn chars_per_line(font_size: f32, max_width: f32) -> usize {
    let glyph = font_size * AVERAGE_GLYPH_WIDTH;
    if glyph <= 0.0 {
        return 1;
    }
    ((max_width / glyph).floor() as usize).max(1)
}

/// Greedy word wrap. Words longer than a line are split.
///
/// Each `\n` in `text` starts a new line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            if word.is_empty() {
                continue;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        if line_len > 0 || raw_line.trim().is_empty() {
            lines.push(line);
        }
    }

    lines
}
