//! TerminalRenderer: writes view lines and messages to a terminal.
//!
//! Output is line-oriented so it works with a plain cooked-mode stdin. Each
//! write is encoded into a byte buffer first and flushed in one go.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::game_view::{Line, Rgb, SpanStyle};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print one message line.
    pub fn message(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(text))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode lines into `out`, with colors when `color` is set.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_lines_into(lines: &[Line], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for line in lines {
        for span in &line.spans {
            if color && span.style != SpanStyle::PLAIN {
                apply_style_into(out, span.style)?;
                out.queue(Print(&span.text))?;
                out.queue(ResetColor)?;
                out.queue(SetAttribute(Attribute::Reset))?;
            } else {
                out.queue(Print(&span.text))?;
            }
        }
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_view::Span;

    fn sample() -> Vec<Line> {
        vec![
            Line::plain("title"),
            Line {
                spans: vec![
                    Span::plain("0  "),
                    Span::new("A", SpanStyle::MATCHED),
                ],
            },
        ]
    }

    #[test]
    fn test_plain_encoding_has_no_escapes() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "title\n0  A\n");
    }

    #[test]
    fn test_color_encoding_wraps_styled_spans() {
        let mut out = Vec::new();
        encode_lines_into(&sample(), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("title\n0  \x1b["));
        assert!(text.contains('A'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_rgb_to_color() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_renderer_writes_to_sink() {
        let mut r = TerminalRenderer::new(Vec::new(), false);
        r.draw(&sample()).unwrap();
        r.message("Match found!").unwrap();
        r.prompt("> ").unwrap();
        let text = String::from_utf8(r.get_ref().clone()).unwrap();
        assert_eq!(text, "title\n0  A\nMatch found!\n> ");
    }
}
