//! Drawing of a [`Snapshot`] with macroquad. Board pixels map 1:1 to the window.

use macroquad::prelude::*;

use crate::{
    board::{Board, Cell},
    engine::Snapshot,
};

const BACKGROUND: Color = Color::new(0.05, 0.05, 0.05, 1.0);
const GRID_LINE: Color = Color::new(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0);
const BORDER: Color = Color::new(80.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0);
const HEAD: Color = Color::new(50.0 / 255.0, 205.0 / 255.0, 50.0 / 255.0, 1.0);
const BODY: Color = Color::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 1.0);
const APPLE: Color = RED;
const BUTTON: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 220.0 / 255.0);
const BUTTON_HOVER: Color = Color::new(60.0 / 255.0, 60.0 / 255.0, 60.0 / 255.0, 240.0 / 255.0);
const BUTTON_EDGE: Color = Color::new(70.0 / 255.0, 70.0 / 255.0, 70.0 / 255.0, 1.0);

const BUTTON_WIDTH: f32 = 50.0;
const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_MARGIN: f32 = 12.0;

/// Window area of the restart button, anchored to the top-right corner.
pub fn restart_button_bounds(board: Board) -> Rect {
    Rect::new(
        board.width_px() as f32 - BUTTON_WIDTH - BUTTON_MARGIN,
        BUTTON_MARGIN,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn restart_button_hit(board: Board, point: Vec2) -> bool {
    restart_button_bounds(board).contains(point)
}

pub fn draw(snapshot: &Snapshot, mouse: Vec2) {
    clear_background(BACKGROUND);
    if snapshot.running {
        draw_grid(snapshot.board);
        draw_apple(snapshot.board, snapshot.apple);
        draw_snake(snapshot.board, &snapshot.body);
        draw_score(snapshot);
    } else {
        draw_game_over(snapshot);
    }
    draw_restart_button(snapshot.board, mouse);
}

fn draw_grid(board: Board) {
    let (w, h) = (board.width_px() as f32, board.height_px() as f32);
    let size = board.cell_size() as f32;
    for i in 0..=board.columns() {
        let x = i as f32 * size;
        draw_line(x, 0.0, x, h, 1.0, GRID_LINE);
    }
    for i in 0..=board.rows() {
        let y = i as f32 * size;
        draw_line(0.0, y, w, y, 1.0, GRID_LINE);
    }
    draw_rectangle_lines(0.0, 0.0, w, h, 4.0, BORDER);
}

fn draw_apple(board: Board, apple: Cell) {
    let (x, y) = board.pixel_origin(apple);
    let size = board.cell_size() as f32;
    let r = size / 2.0;
    draw_circle(x as f32 + r, y as f32 + r, r, APPLE);
    let shine = size / 8.0;
    draw_circle(
        x as f32 + size / 3.0 + shine,
        y as f32 + size / 4.0 + shine,
        shine,
        WHITE,
    );
}

fn draw_snake(board: Board, body: &[Cell]) {
    let size = board.cell_size() as f32;
    for (i, cell) in body.iter().enumerate() {
        let (x, y) = board.pixel_origin(*cell);
        let color = if i == 0 { HEAD } else { BODY };
        draw_rectangle(x as f32, y as f32, size, size, color);
        draw_rectangle_lines(x as f32, y as f32, size, size, 1.0, DARKGRAY);
    }
}

fn draw_score(snapshot: &Snapshot) {
    let text = format!("Apples: {}  Record: {}", snapshot.score, snapshot.high_score);
    draw_text(&text, 12.0, 24.0, 22.0, WHITE);
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color, board_width: f32) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (board_width - m.width) * 0.5, y, font_size as f32, color);
}

fn draw_game_over(snapshot: &Snapshot) {
    let board = snapshot.board;
    let (w, h) = (board.width_px() as f32, board.height_px() as f32);
    draw_rectangle(0.0, 0.0, w, h, Color::new(0.0, 0.0, 0.0, 180.0 / 255.0));

    draw_centered("Game Over!", h / 2.0 - 30.0, 56, RED, w);
    let score = format!("Score: {}", snapshot.score);
    draw_centered(&score, h / 2.0 + 20.0, 34, WHITE, w);
    let record = format!("Record: {}", snapshot.high_score);
    draw_centered(&record, h / 2.0 + 52.0, 22, LIGHTGRAY, w);
    draw_centered("Press 'R' to restart", h / 2.0 + 86.0, 22, WHITE, w);
}

fn draw_restart_button(board: Board, mouse: Vec2) {
    let rect = restart_button_bounds(board);
    let fill = if rect.contains(mouse) { BUTTON_HOVER } else { BUTTON };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, BUTTON_EDGE);
    let m = measure_text("R", None, 24, 1.0);
    draw_text(
        "R",
        rect.x + (rect.w - m.width) * 0.5,
        rect.y + (rect.h + m.height) * 0.5,
        24.0,
        WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_button_sits_in_top_right_corner() {
        let rect = restart_button_bounds(Board::CLASSIC);
        assert_eq!(rect.x, 538.0);
        assert_eq!(rect.y, 12.0);
        assert!(restart_button_hit(Board::CLASSIC, vec2(560.0, 30.0)));
        assert!(!restart_button_hit(Board::CLASSIC, vec2(20.0, 30.0)));
    }
}
