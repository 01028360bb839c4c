//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ObstacleColor, Rect, GAME_OVER_MESSAGE, TRACK_HEIGHT, TRACK_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board-space cell rectangle (column/row origin and size).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

const SHOULDER_BG: Rgb = Rgb::new(96, 96, 96);
const ROAD_BG: Rgb = Rgb::new(20, 20, 24);
const LANE_FG: Rgb = Rgb::new(235, 235, 235);
const PLAYER_FG: Rgb = Rgb::new(90, 150, 255);

/// A lightweight terminal renderer for the racing game.
pub struct GameView {
    /// World units covered by one terminal column.
    units_per_col: i32,
    /// World units covered by one terminal row.
    units_per_row: i32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x20 keeps the track roughly square-ish given tall terminal glyphs:
        // 400x600 world units become a 40x30 cell board.
        Self {
            units_per_col: 10,
            units_per_row: 20,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Create a view with a custom world-to-cell scale (both clamped to >= 1).
    pub fn new(units_per_col: i32, units_per_row: i32) -> Self {
        Self {
            units_per_col: units_per_col.max(1),
            units_per_row: units_per_row.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in cells (without the border).
    pub fn board_cells(&self) -> (u16, u16) {
        let cols = (TRACK_WIDTH + self.units_per_col - 1) / self.units_per_col;
        let rows = (TRACK_HEIGHT + self.units_per_row - 1) / self.units_per_row;
        (cols as u16, rows as u16)
    }

    /// Map a world rectangle onto board cells, clipped to the board.
    ///
    /// Degenerate rectangles (zero width or height) still cover one cell.
    /// Returns `None` when nothing is visible.
    pub fn world_to_cells(&self, rect: &Rect) -> Option<CellRect> {
        let (cols, rows) = self.board_cells();
        let (col, w) = cell_span(rect.x_min, rect.x_max, self.units_per_col, cols as i32)?;
        let (row, h) = cell_span(rect.y_min, rect.y_max, self.units_per_row, rows as i32)?;
        Some(CellRect {
            col,
            row,
            cols: w,
            rows: h,
        })
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (cols, rows) = self.board_cells();
        let frame_w = cols + 2;
        let frame_h = rows + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let board = BoardOrigin {
            x: origin_x + 1,
            y: origin_y + 1,
        };

        let shoulder = CellStyle::new(SHOULDER_BG, SHOULDER_BG);
        let road = CellStyle::new(ROAD_BG, ROAD_BG);
        fb.fill_rect(board.x, board.y, cols, rows, ' ', shoulder);

        for segment in snap.segments.iter() {
            if let Some(cells) = self.world_to_cells(segment) {
                board.fill(fb, cells, ' ', road);
            }
        }

        // One glyph per dash, on the row holding the dash midpoint.
        let lane = CellStyle::new(LANE_FG, ROAD_BG);
        for marker in snap.lane_markers.iter() {
            let mid = Rect::new(
                marker.x_min,
                (marker.y_min + marker.y_max) / 2,
                marker.x_max,
                (marker.y_min + marker.y_max) / 2,
            );
            if let Some(cells) = self.world_to_cells(&mid) {
                board.fill(fb, CellRect { rows: 1, cols: 1, ..cells }, '┃', lane);
            }
        }

        for obstacle in snap.obstacles.iter() {
            if let Some(cells) = self.world_to_cells(&obstacle.body) {
                let style = CellStyle::new(obstacle_rgb(obstacle.color), ROAD_BG);
                board.fill(fb, cells, '█', style);
            }
        }

        if let Some(cells) = self.world_to_cells(&snap.player) {
            board.fill(fb, cells, '▓', CellStyle::new(PLAYER_FG, ROAD_BG).bold());
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w, origin_y);

        if snap.paused {
            draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, "PAUSED", None);
        } else if snap.game_over {
            draw_overlay(
                fb,
                origin_x,
                origin_y,
                frame_w,
                frame_h,
                GAME_OVER_MESSAGE,
                Some("r: restart  q: quit"),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "EPISODE", label);
        fb.put_u32(panel_x, y + 1, snap.episode_id, value);
        y += 3;

        fb.put_str(panel_x, y, "CARS", label);
        fb.put_u32(panel_x, y + 1, snap.obstacles.len() as u32, value);
        y += 3;

        for line in ["arrows/wasd", "p: pause", "r: restart", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BoardOrigin {
    x: u16,
    y: u16,
}

impl BoardOrigin {
    fn fill(self, fb: &mut FrameBuffer, cells: CellRect, ch: char, style: CellStyle) {
        fb.fill_rect(
            self.x + cells.col,
            self.y + cells.row,
            cells.cols,
            cells.rows,
            ch,
            style,
        );
    }
}

/// Covered cell range `[start, start + len)` for world span `[lo, hi]`.
fn cell_span(lo: i32, hi: i32, unit: i32, limit: i32) -> Option<(u16, u16)> {
    let first = lo.div_euclid(unit);
    let end = (hi + unit - 1).div_euclid(unit).max(first + 1);
    let first = first.max(0);
    let end = end.min(limit);
    if first >= end {
        return None;
    }
    Some((first as u16, (end - first) as u16))
}

fn obstacle_rgb(color: ObstacleColor) -> Rgb {
    match color {
        ObstacleColor::Red => Rgb::new(220, 60, 60),
        ObstacleColor::Yellow => Rgb::new(240, 220, 80),
        ObstacleColor::Green => Rgb::new(90, 210, 110),
        ObstacleColor::Blue => Rgb::new(60, 90, 220),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    text: &str,
    subtitle: Option<&str>,
) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let mid_y = y.saturating_add(h / 2);

    let centered = |s: &str| x.saturating_add(w.saturating_sub(s.chars().count() as u16) / 2);
    fb.put_str(centered(text), mid_y, text, style);

    if let Some(sub) = subtitle {
        fb.put_str(centered(sub), mid_y.saturating_add(1), sub, style.dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_span_clips_and_rounds_outward() {
        assert_eq!(cell_span(0, 40, 10, 40), Some((0, 4)));
        assert_eq!(cell_span(5, 45, 10, 40), Some((0, 5)));
        assert_eq!(cell_span(-30, 10, 10, 40), Some((0, 1)));
        assert_eq!(cell_span(390, 430, 10, 40), Some((39, 1)));
        assert_eq!(cell_span(600, 650, 20, 30), None);
        assert_eq!(cell_span(-100, -20, 20, 30), None);
    }

    #[test]
    fn degenerate_span_covers_one_cell() {
        assert_eq!(cell_span(200, 200, 10, 40), Some((20, 1)));
    }

    #[test]
    fn board_is_forty_by_thirty_by_default() {
        assert_eq!(GameView::default().board_cells(), (40, 30));
    }

    #[test]
    fn player_maps_to_expected_cells() {
        let view = GameView::default();
        let cells = view.world_to_cells(&Rect::new(170, 500, 230, 550)).unwrap();
        assert_eq!(
            cells,
            CellRect {
                col: 17,
                row: 25,
                cols: 6,
                rows: 3
            }
        );
    }
}
