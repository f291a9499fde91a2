//! GameView: maps a `GameSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TileSnapshot};

/// Tiles per board row.
pub const DEFAULT_COLUMNS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const PLAIN: Self = Self {
        fg: None,
        bold: false,
        dim: false,
    };
    pub const HIDDEN: Self = Self {
        fg: Some(Rgb::new(140, 140, 150)),
        bold: false,
        dim: true,
    };
    pub const FACE_UP: Self = Self {
        fg: Some(Rgb::new(240, 200, 60)),
        bold: true,
        dim: false,
    };
    pub const MATCHED: Self = Self {
        fg: Some(Rgb::new(80, 200, 120)),
        bold: true,
        dim: false,
    };
    pub const TITLE: Self = Self {
        fg: Some(Rgb::new(120, 170, 240)),
        bold: true,
        dim: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::PLAIN)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// The line without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Lays the board out as a grid with row and column headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    columns: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl GameView {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Render the board and status line into `out`, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, out: &mut Vec<Line>) {
        out.clear();
        let cell_w = cell_width(snap.tiles.len());
        // Row labels are as wide as the largest row number.
        let rows = snap.tiles.len().div_ceil(self.columns);
        let label_w = digits(rows.saturating_sub(1)) + 2;

        out.push(Line {
            spans: vec![Span::new("------- Memory Game -------", SpanStyle::TITLE)],
        });

        let mut header = " ".repeat(label_w);
        for col in 0..self.columns.min(snap.tiles.len()) {
            header.push_str(&format!("{col:<cell_w$}"));
        }
        out.push(Line::plain(header.trim_end()));

        for (row, chunk) in snap.tiles.chunks(self.columns).enumerate() {
            let mut spans = Vec::with_capacity(chunk.len() + 1);
            spans.push(Span::plain(format!("{row:<label_w$}")));
            for tile in chunk {
                let (text, style) = tile_label(tile);
                spans.push(Span::new(format!("{text:<cell_w$}"), style));
            }
            out.push(Line { spans });
        }

        out.push(Line {
            spans: vec![Span::new("---------------------------", SpanStyle::TITLE)],
        });
        out.push(Line::plain(status_text(snap)));
    }

    pub fn render(&self, snap: &GameSnapshot) -> Vec<Line> {
        let mut out = Vec::new();
        self.render_into(snap, &mut out);
        out
    }
}

/// How one tile is drawn: its symbol once face up, its index otherwise.
pub fn tile_label(tile: &TileSnapshot) -> (String, SpanStyle) {
    match tile.symbol {
        Some(symbol) if tile.matched => (symbol.to_string(), SpanStyle::MATCHED),
        Some(symbol) => (symbol.to_string(), SpanStyle::FACE_UP),
        None => (format!("[{}]", tile.index), SpanStyle::HIDDEN),
    }
}

pub fn status_text(snap: &GameSnapshot) -> String {
    format!(
        "Score: {}  Matches: {}/{}  Time: {}/{}s",
        snap.score,
        snap.matches_found,
        snap.total_pairs,
        snap.elapsed_seconds,
        snap.duration_seconds
    )
}

fn cell_width(tiles: usize) -> usize {
    // "[NN]" plus one space of padding.
    digits(tiles.saturating_sub(1)) + 3
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn abab_snapshot() -> GameSnapshot {
        GameState::with_layout(&['A', 'B', 'A', 'B'], 60)
            .unwrap()
            .snapshot()
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(128), 3);
    }

    #[test]
    fn test_hidden_tiles_show_index() {
        let lines = GameView::default().render(&abab_snapshot());
        assert_eq!(lines[2].text().trim_end(), "0  [0] [1] [2] [3]");
    }

    #[test]
    fn test_tile_label_styles() {
        let mut tile = TileSnapshot {
            index: 4,
            symbol: None,
            face_up: false,
            matched: false,
        };
        assert_eq!(tile_label(&tile), ("[4]".to_string(), SpanStyle::HIDDEN));

        tile.symbol = Some('C');
        tile.face_up = true;
        assert_eq!(tile_label(&tile), ("C".to_string(), SpanStyle::FACE_UP));

        tile.matched = true;
        assert_eq!(tile_label(&tile), ("C".to_string(), SpanStyle::MATCHED));
    }

    #[test]
    fn test_rows_wrap_at_column_count() {
        let snap = GameState::new(6, 3).snapshot();
        let lines = GameView::default().render(&snap);
        // title, header, two rows, rule, status
        assert_eq!(lines.len(), 6);
        assert!(lines[3].text().starts_with("1  [6]"));
        assert!(lines[3].text().contains("[11]"));
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let view = GameView::new(2);
        let mut out = vec![Line::plain("stale")];
        view.render_into(&abab_snapshot(), &mut out);
        assert_eq!(out[0].text(), "------- Memory Game -------");
        assert_eq!(out.len(), 6);
    }
}
