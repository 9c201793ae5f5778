use std::{collections::VecDeque, time::Duration};

use serde::Serialize;

use crate::{
    board::{Board, Cell, Direction},
    input::Command,
    rng::CellRng,
    scheduler::Ticker,
    score::ScoreStore,
    sound::{Clip, SoundPlayer},
};

pub const INITIAL_BODY_PARTS: usize = 6;

/// What a single call to [`Engine::tick`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// The session is over; nothing moved.
    Idle,
    Moved,
    AteApple,
    GameOver,
}

/// Read-only view of a session for the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub board: Board,
    pub body: Vec<Cell>,
    pub apple: Cell,
    pub score: u32,
    pub high_score: u32,
    pub running: bool,
}

/// One Snake game session and the high score that outlives it.
pub struct Engine {
    board: Board,
    body: VecDeque<Cell>,
    apple: Cell,
    direction: Direction,
    next_direction: Direction,
    score: u32,
    high_score: u32,
    running: bool,
    ticker: Ticker,
    store: Box<dyn ScoreStore>,
    sound: Box<dyn SoundPlayer>,
    rng: Box<dyn CellRng>,
}

impl Engine {
    /// Builds an idle engine and loads the stored high score. Call
    /// [`Engine::start`] to begin the first session.
    pub fn new(
        board: Board,
        mut store: Box<dyn ScoreStore>,
        sound: Box<dyn SoundPlayer>,
        rng: Box<dyn CellRng>,
    ) -> Self {
        let high_score = store.load_score();
        Self {
            board,
            body: VecDeque::with_capacity(board.cell_count()),
            apple: Cell::new(0, 0),
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            high_score,
            running: false,
            ticker: Ticker::default(),
            store,
            sound,
            rng,
        }
    }

    /// Begins a fresh session, discarding any session in progress.
    pub fn start(&mut self) {
        let mid_row = self.board.rows() / 2;
        let head_x = self.board.columns() / 2;
        self.body.clear();
        self.body
            .extend((0..INITIAL_BODY_PARTS as i32).map(|i| Cell::new(head_x - i, mid_row)));
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.running = true;
        self.spawn_apple();
        self.ticker.start();
        tracing::debug!(head = ?self.head(), apple = ?self.apple, "session started");
    }

    /// Starts a new session once the current one has ended.
    pub fn restart(&mut self) {
        if self.running {
            return;
        }
        self.start();
    }

    /// Queues a turn for the next tick. Reversals and turns after the game
    /// has ended are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.running || direction.is_reverse_of(self.direction) {
            return;
        }
        self.next_direction = direction;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.set_direction(direction),
            Command::Restart => self.restart(),
        }
    }

    /// Feeds frame time to the scheduler and runs every tick that is due.
    pub fn update(&mut self, dt: Duration) -> Option<TickEvent> {
        let due = self.ticker.advance(dt);
        let mut last = None;
        for _ in 0..due {
            if !self.running {
                break;
            }
            last = Some(self.tick());
        }
        last
    }

    /// Advances the session by one cell.
    pub fn tick(&mut self) -> TickEvent {
        if !self.running {
            return TickEvent::Idle;
        }

        self.direction = self.next_direction;
        let head = self.head().step(self.direction);
        self.body.push_front(head);

        let mut event = TickEvent::Moved;
        if head == self.apple {
            self.score += 1;
            self.spawn_apple();
            self.sound.play(Clip::AppleEaten);
            event = TickEvent::AteApple;
        } else {
            self.body.pop_back();
        }

        let hit_wall = !self.board.contains(head);
        let hit_self = self.body.iter().skip(1).any(|c| *c == head);
        if hit_wall || hit_self {
            tracing::debug!(?head, hit_wall, hit_self, "collision");
            self.end_game();
            return TickEvent::GameOver;
        }
        event
    }

    fn end_game(&mut self) {
        self.running = false;
        self.ticker.stop();

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save_score(self.high_score);
        }
        tracing::info!(score = self.score, high_score = self.high_score, "game over");
        if tracing::enabled!(tracing::Level::DEBUG) {
            match serde_json::to_string(&self.snapshot()) {
                Ok(json) => tracing::debug!(snapshot = %json, "final state"),
                Err(err) => tracing::debug!("final state not serializable: {err}"),
            }
        }
    }

    // Rejection sampling with no retry bound: a board with every cell
    // occupied would never return.
    fn spawn_apple(&mut self) {
        loop {
            let cell = Cell::new(
                self.rng.range(0, self.board.columns()),
                self.rng.range(0, self.board.rows()),
            );
            if !self.body.contains(&cell) {
                self.apple = cell;
                return;
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or_default()
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    /// Heading of the last move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heading the next tick will use.
    pub fn pending_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            body: self.body().collect(),
            apple: self.apple,
            score: self.score,
            high_score: self.high_score,
            running: self.running,
        }
    }

    /// Replaces the body (head first) and heading of a running session.
    pub fn debug_set_snake(&mut self, head_to_tail: &[Cell], direction: Direction) {
        self.body = head_to_tail.iter().copied().collect();
        self.direction = direction;
        self.next_direction = direction;
    }

    pub fn debug_set_apple(&mut self, apple: Cell) {
        self.apple = apple;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rng::SeededRng, sound::Muted};

    struct Fixed(u32);

    impl ScoreStore for Fixed {
        fn load_score(&mut self) -> u32 {
            self.0
        }
        fn save_score(&mut self, score: u32) {
            self.0 = score;
        }
    }

    fn started(high: u32) -> Engine {
        let mut engine = Engine::new(
            Board::CLASSIC,
            Box::new(Fixed(high)),
            Box::new(Muted),
            Box::new(SeededRng::new(7)),
        );
        engine.start();
        engine
    }

    #[test]
    fn new_engine_is_idle_until_started() {
        let mut engine = Engine::new(
            Board::CLASSIC,
            Box::new(Fixed(9)),
            Box::new(Muted),
            Box::new(SeededRng::new(1)),
        );
        assert!(!engine.is_running());
        assert_eq!(engine.high_score(), 9);
        assert_eq!(engine.tick(), TickEvent::Idle);
        assert_eq!(engine.len(), 0);
    }

    #[test]
    fn start_lays_out_snake_centered_heading_right() {
        let engine = started(0);
        let body: Vec<Cell> = engine.body().collect();
        assert_eq!(body.len(), INITIAL_BODY_PARTS);
        assert_eq!(body[0], Cell::new(12, 12));
        assert_eq!(body[5], Cell::new(7, 12));
        assert_eq!(engine.direction(), Direction::Right);
        assert!(engine.ticker().is_active());
        assert!(!body.contains(&engine.apple()));
    }

    #[test]
    fn tail_follows_head() {
        let mut engine = started(0);
        engine.debug_set_snake(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        );
        engine.debug_set_apple(Cell::new(20, 20));
        engine.set_direction(Direction::Down);
        assert_eq!(engine.tick(), TickEvent::Moved);
        let body: Vec<Cell> = engine.body().collect();
        assert_eq!(body, vec![Cell::new(5, 6), Cell::new(5, 5), Cell::new(4, 5)]);
    }

    #[test]
    fn reversal_is_ignored_even_after_a_queued_turn() {
        let mut engine = started(0);
        engine.set_direction(Direction::Left);
        assert_eq!(engine.pending_direction(), Direction::Right);
        engine.set_direction(Direction::Up);
        engine.set_direction(Direction::Left);
        // Left is still a reversal of the last move (Right), not of Up.
        assert_eq!(engine.pending_direction(), Direction::Up);
    }

    #[test]
    fn moving_into_vacated_tail_cell_is_safe() {
        let mut engine = started(0);
        engine.debug_set_snake(
            &[Cell::new(5, 5), Cell::new(5, 6), Cell::new(4, 6), Cell::new(4, 5)],
            Direction::Up,
        );
        engine.debug_set_apple(Cell::new(20, 20));
        engine.set_direction(Direction::Left);
        assert_eq!(engine.tick(), TickEvent::Moved);
        assert!(engine.is_running());
        assert_eq!(engine.head(), Cell::new(4, 5));
    }

    #[test]
    fn game_over_keeps_higher_stored_score() {
        let mut engine = started(50);
        engine.debug_set_snake(&[Cell::new(23, 3), Cell::new(22, 3)], Direction::Right);
        engine.debug_set_apple(Cell::new(0, 0));
        assert_eq!(engine.tick(), TickEvent::GameOver);
        assert_eq!(engine.high_score(), 50);
        assert!(!engine.ticker().is_active());
    }

    #[test]
    fn update_runs_ticks_on_schedule() {
        let mut engine = started(0);
        engine.debug_set_snake(&[Cell::new(2, 2), Cell::new(1, 2)], Direction::Right);
        engine.debug_set_apple(Cell::new(20, 20));
        assert_eq!(engine.update(Duration::from_millis(60)), None);
        assert_eq!(engine.update(Duration::from_millis(60)), Some(TickEvent::Moved));
        assert_eq!(engine.head(), Cell::new(3, 2));
    }

    #[test]
    fn snapshot_serializes_head_first() {
        let engine = started(3);
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["body"][0]["x"], 12);
        assert_eq!(json["high_score"], 3);
        assert_eq!(json["running"], true);
    }
}
