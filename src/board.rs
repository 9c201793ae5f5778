use serde::Serialize;

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 600;
pub const GRID_SIZE: i32 = 25;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// A board position in grid units (column, row).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Cell { x: self.x, y: self.y - 1 },
            Direction::Down => Cell { x: self.x, y: self.y + 1 },
            Direction::Left => Cell { x: self.x - 1, y: self.y },
            Direction::Right => Cell { x: self.x + 1, y: self.y },
        }
    }
}

/// Fixed playing field: `columns` x `rows` square cells of `cell_size` pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: i32,
    rows: i32,
    cell_size: i32,
}

impl Board {
    pub const CLASSIC: Board = Board::from_pixels(BOARD_WIDTH, BOARD_HEIGHT, GRID_SIZE);

    pub const fn new(columns: i32, rows: i32, cell_size: i32) -> Self {
        Self { columns, rows, cell_size }
    }

    pub const fn from_pixels(width: i32, height: i32, grid_size: i32) -> Self {
        Self::new(width / grid_size, height / grid_size, grid_size)
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn width_px(&self) -> i32 {
        self.columns * self.cell_size
    }

    pub fn height_px(&self) -> i32 {
        self.rows * self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.columns && cell.y < self.rows
    }

    /// Top-left pixel of `cell`; always a multiple of the cell size.
    pub fn pixel_origin(&self, cell: Cell) -> (i32, i32) {
        (cell.x * self.cell_size, cell.y * self.cell_size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_is_24_by_24() {
        let board = Board::CLASSIC;
        assert_eq!(board.columns(), 24);
        assert_eq!(board.rows(), 24);
        assert_eq!(board.width_px(), 600);
        assert_eq!(board.height_px(), 600);
        assert_eq!(board.cell_count(), 576);
    }

    #[test]
    fn contains_rejects_cells_past_each_edge() {
        let board = Board::CLASSIC;
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(23, 23)));
        assert!(!board.contains(Cell::new(24, 5)));
        assert!(!board.contains(Cell::new(5, 24)));
        assert!(!board.contains(Cell::new(-1, 5)));
        assert!(!board.contains(Cell::new(5, -1)));
    }

    #[test]
    fn pixel_origin_is_grid_aligned() {
        let board = Board::CLASSIC;
        assert_eq!(board.pixel_origin(Cell::new(23, 12)), (575, 300));
    }

    #[test]
    fn every_direction_reverses_its_opposite_only() {
        let all = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for a in all {
            for b in all {
                assert_eq!(a.is_reverse_of(b), b == a.opposite(), "{a:?} vs {b:?}");
            }
        }
    }
}
