//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! The voxel grid is shown as two orthographic projections side by side:
//!
//! - front: X across, Y up, looking into the grid along +Z
//! - side: Z across, Y up, looking into the grid along +X
//!
//! Each screen cell shows the nearest settled block along the view ray,
//! darkened with distance. The ghost is drawn where nothing settled is in
//! front of it; the active piece is always drawn on top.
//!
//! This module is pure (no I/O). It can be unit-tested.

use glam::IVec3;

use crate::core::{GameSnapshot, GridDimensions};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

const PANEL_W: u16 = 18;
const GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Which face of the grid a board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Front,
    Side,
}

impl Projection {
    pub const ALL: [Projection; 2] = [Projection::Front, Projection::Side];

    pub fn title(self) -> &'static str {
        match self {
            Projection::Front => "FRONT",
            Projection::Side => "SIDE",
        }
    }

    /// Cells across the screen
    pub fn columns(self, dims: GridDimensions) -> u32 {
        match self {
            Projection::Front => dims.width(),
            Projection::Side => dims.depth(),
        }
    }

    /// Cells along the view ray
    pub fn depth(self, dims: GridDimensions) -> u32 {
        match self {
            Projection::Front => dims.depth(),
            Projection::Side => dims.width(),
        }
    }

    /// Screen column and ray distance of a voxel
    pub fn project(self, p: IVec3) -> (i32, i32) {
        match self {
            Projection::Front => (p.x, p.z),
            Projection::Side => (p.z, p.x),
        }
    }

    fn voxel(self, column: i32, y: i32, distance: i32) -> IVec3 {
        match self {
            Projection::Front => IVec3::new(column, y, distance),
            Projection::Side => IVec3::new(distance, y, column),
        }
    }
}

/// Screen rectangle, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Where each part of the screen goes for a given grid and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub front: Rect,
    pub side: Rect,
    pub panel_x: u16,
    cell_w: u16,
    cell_h: u16,
    grid_height: u16,
}

impl Layout {
    pub fn board(&self, projection: Projection) -> Rect {
        match projection {
            Projection::Front => self.front,
            Projection::Side => self.side,
        }
    }

    /// Top-left screen position of a projected cell (Y grows upwards)
    pub fn cell_origin(&self, projection: Projection, column: u16, y: u16) -> Option<(u16, u16)> {
        let rect = self.board(projection);
        if y >= self.grid_height {
            return None;
        }
        let row = self.grid_height - 1 - y;
        Some((
            rect.x
                .saturating_add(1)
                .saturating_add(column.saturating_mul(self.cell_w)),
            rect.y
                .saturating_add(1)
                .saturating_add(row.saturating_mul(self.cell_h)),
        ))
    }

    fn playfield(&self) -> Rect {
        Rect {
            x: self.front.x,
            y: self.front.y,
            w: (self.side.x.saturating_add(self.side.w)).saturating_sub(self.front.x),
            h: self.front.h,
        }
    }
}

/// A lightweight terminal renderer for the 3-D game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn layout(&self, dims: GridDimensions, viewport: Viewport) -> Layout {
        let grid_height = to_u16(dims.height());
        let board_h = grid_height.saturating_mul(self.cell_h).saturating_add(2);
        let board_w = |projection: Projection| {
            to_u16(projection.columns(dims))
                .saturating_mul(self.cell_w)
                .saturating_add(2)
        };
        let front_w = board_w(Projection::Front);
        let side_w = board_w(Projection::Side);

        let total_w = front_w
            .saturating_add(GAP)
            .saturating_add(side_w)
            .saturating_add(GAP)
            .saturating_add(PANEL_W);
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h) / 2;

        let front = Rect {
            x: start_x,
            y: start_y,
            w: front_w,
            h: board_h,
        };
        let side = Rect {
            x: start_x.saturating_add(front_w).saturating_add(GAP),
            y: start_y,
            w: side_w,
            h: board_h,
        };
        Layout {
            front,
            side,
            panel_x: side.x.saturating_add(side_w).saturating_add(GAP),
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            grid_height,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.dimensions, viewport);
        for projection in Projection::ALL {
            self.draw_board(fb, snap, &layout, projection);
        }
        self.draw_side_panel(fb, snap, &layout, viewport);

        let overlay = match snap.status {
            GameStatus::StartScreen => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::GameOver => Some("GAME OVER"),
            GameStatus::Playing => None,
        };
        if let Some(text) = overlay {
            draw_overlay_text(fb, layout.playfield(), text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        projection: Projection,
    ) {
        let rect = layout.board(projection);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.fill_rect(
            rect.x + 1,
            rect.y + 1,
            rect.w.saturating_sub(2),
            rect.h.saturating_sub(2),
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        draw_border(fb, rect, border);
        fb.put_str(rect.x + 1, rect.y, projection.title(), border.bold());

        let dims = snap.dimensions;
        let columns = projection.columns(dims) as i32;
        let depth = projection.depth(dims);

        // Settled blocks.
        for y in 0..dims.height() as i32 {
            for column in 0..columns {
                match nearest(snap, projection, column, y) {
                    Some((distance, color)) => {
                        let style =
                            CellStyle::new(shade(color, distance, depth), BOARD_BG);
                        self.fill_cell(fb, layout, projection, column, y, '█', style);
                    }
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
                        self.fill_cell(fb, layout, projection, column, y, '·', style);
                    }
                }
            }
        }

        let Some(active) = snap.active else {
            return;
        };

        // Ghost piece, hidden behind nearer settled blocks.
        if let Some(ghost) = snap.ghost {
            let style = CellStyle::new(active.color, BOARD_BG).dim();
            for p in ghost {
                let (column, distance) = projection.project(p);
                let hidden = nearest(snap, projection, column, p.y)
                    .is_some_and(|(d, _)| (d as i32) < distance);
                if !hidden {
                    self.fill_cell(fb, layout, projection, column, p.y, '░', style);
                }
            }
        }

        // Active piece.
        let style = CellStyle::new(active.color, BOARD_BG).bold();
        for p in active.cells {
            let (column, _) = projection.project(p);
            self.fill_cell(fb, layout, projection, column, p.y, '█', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        projection: Projection,
        column: i32,
        y: i32,
        ch: char,
        style: CellStyle,
    ) {
        let (Ok(column), Ok(y)) = (u16::try_from(column), u16::try_from(y)) else {
            return;
        };
        let rect = layout.board(projection);
        if column.saturating_mul(self.cell_w).saturating_add(2) > rect.w {
            return;
        }
        if let Some((px, py)) = layout.cell_origin(projection, column, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        let panel_x = layout.panel_x;
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = layout.front.y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "STATUS", label);
        fb.put_str(panel_x, y.saturating_add(1), status_label(snap.status), value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next.kind.as_str(), value);
        y = y.saturating_add(1);
        y = self.draw_preview(fb, panel_x, y, &snap.next.shape, snap.next.color);
        y = y.saturating_add(1);

        let help = CellStyle { dim: true, ..value };
        for line in [
            "←→↑↓ move",
            "spc  down",
            "x    drop",
            "q/e  turn Y",
            "r/R  turn X",
            "f/F  turn Z",
            "ent  pause",
            "esc  quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    /// Draw a base shape (flat in Z) and return the row below it.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        shape: &[IVec3; 4],
        color: Rgb,
    ) -> u16 {
        let min_x = shape.iter().map(|p| p.x).min().unwrap_or(0);
        let max_y = shape.iter().map(|p| p.y).max().unwrap_or(0);
        let min_y = shape.iter().map(|p| p.y).min().unwrap_or(0);
        let style = CellStyle::new(color, SCREEN_BG);

        for p in shape {
            let col = (p.x - min_x) as u16;
            let row = (max_y - p.y) as u16;
            fb.fill_rect(
                x.saturating_add(col * self.cell_w),
                y.saturating_add(row * self.cell_h),
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
        let rows = (max_y - min_y + 1) as u16;
        y.saturating_add(rows * self.cell_h)
    }
}

/// Nearest settled block along the view ray through `(column, y)`
fn nearest(snap: &GameSnapshot, projection: Projection, column: i32, y: i32) -> Option<(u32, Rgb)> {
    (0..projection.depth(snap.dimensions)).find_map(|d| {
        let p = projection.voxel(column, y, d as i32);
        snap.cell(p.x, p.y, p.z).map(|color| (d, color))
    })
}

/// Darken with distance: full brightness in front, half at the back.
fn shade(color: Rgb, distance: u32, depth: u32) -> Rgb {
    let den = depth.clamp(1, u16::MAX as u32 / 2) * 2;
    let num = den.saturating_sub(distance.min(den / 2));
    color.scaled(num as u16, den as u16)
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::StartScreen => "READY",
        GameStatus::Playing => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
    }
}

fn draw_border(fb: &mut FrameBuffer, rect: Rect, style: CellStyle) {
    let Rect { x, y, w, h } = rect;
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

fn draw_overlay_text(fb: &mut FrameBuffer, area: Rect, text: &str) {
    let mid_y = area.y.saturating_add(area.h / 2);
    let text_w = text.chars().count() as u16;
    let x = area.x.saturating_add(area.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

fn to_u16(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
