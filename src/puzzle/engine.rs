//! Sliding-puzzle engine.
//!
//! ## Lifecycle
//!
//! - `NotStarted`: the solved board, clock stopped, moves rejected.
//! - `shuffle` walks the solved board through random legal moves, resets
//!   the counters and enters `Playing`. The result is reachable from the
//!   solved board by construction, so it is always solvable.
//! - `Playing`: tiles adjacent to the empty slot slide on tap or drag; the
//!   clock adds one second per tick.
//! - `Solved`: entered when every tile is home. The board is frozen and the
//!   clock stopped until the next shuffle.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ConfigError, GameRng, PuzzleConfig, Timeline};
use crate::rules::GameEngine;

use super::board::{Board, BoardSnapshot, TileId};
use super::gesture::GestureInterpreter;

/// Lifecycle of a puzzle game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Solved,
}

/// Inbound intents for the puzzle game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PuzzleIntent {
    /// Shuffle and start a game.
    Start,
    /// Tap or click on a tile.
    Tap(TileId),
    /// Pointer-down or touch-start over a tile.
    DragStart { tile: TileId, x: f32, y: f32 },
    /// Pointer or touch moved.
    DragMove { x: f32, y: f32 },
    /// Pointer-up, touch-end or pointer left the board.
    DragEnd,
}

/// Elapsed whole seconds, displayed as zero-padded `mm:ss`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElapsedTime(pub u64);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Read-only projection for rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleView {
    pub move_count: u32,
    pub elapsed_time_formatted: String,
    pub board: BoardSnapshot,
    pub is_playing: bool,
    pub is_solved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PuzzleTimer {
    ClockTick,
}

/// Sliding-puzzle game engine.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    config: PuzzleConfig,
    rng: GameRng,
    timeline: Timeline<PuzzleTimer>,
    board: Board,
    status: GameStatus,
    move_count: u32,
    elapsed: ElapsedTime,
    gesture: GestureInterpreter,
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::from_valid(PuzzleConfig::default())
    }
}

impl PuzzleEngine {
    /// Create an engine holding the solved board. No game runs until
    /// `shuffle`.
    pub fn new(config: PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PuzzleConfig) -> Self {
        let rng = GameRng::from_seed_or_entropy(config.seed);
        let gesture = GestureInterpreter::new(config.drag_threshold);
        Self {
            config,
            rng,
            timeline: Timeline::new(),
            board: Board::solved(),
            status: GameStatus::NotStarted,
            move_count: 0,
            elapsed: ElapsedTime::default(),
            gesture,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.0
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureInterpreter {
        &self.gesture
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == GameStatus::Solved
    }

    // === Operations ===

    /// Scramble the solved board with random legal moves and start a game.
    ///
    /// Allowed at any time; a shuffle mid-game restarts it.
    pub fn shuffle(&mut self) {
        let mut board = Board::solved();
        for _ in 0..self.config.shuffle_moves {
            let movable = board.movable_tiles();
            if let Some(&tile) = self.rng.choose(&movable) {
                board.slide(tile);
            }
        }
        debug!(seed = self.rng.seed(), moves = self.config.shuffle_moves, "puzzle shuffled");
        self.start_with(board);
    }

    /// Start a game on an explicit arrangement.
    ///
    /// A solved arrangement still starts `Playing`; the first move breaks it.
    pub fn start_with(&mut self, board: Board) {
        self.board = board;
        self.move_count = 0;
        self.elapsed = ElapsedTime::default();
        self.gesture.end();
        self.status = GameStatus::Playing;
        self.timeline.reset();
        self.timeline
            .schedule(self.config.clock_tick(), PuzzleTimer::ClockTick);
    }

    /// Slide `tile` into the empty slot.
    ///
    /// Returns whether the move was applied. Moves are rejected outside
    /// `Playing` and for tiles not adjacent to the empty slot.
    pub fn move_tile(&mut self, tile: TileId) -> bool {
        if self.status != GameStatus::Playing {
            trace!(%tile, status = ?self.status, "move ignored");
            return false;
        }
        if !self.board.slide(tile) {
            trace!(%tile, empty = %self.board.empty_slot(), "illegal move ignored");
            return false;
        }

        self.move_count += 1;
        if self.board.is_solved() {
            self.status = GameStatus::Solved;
            self.timeline.reset();
            self.gesture.end();
            debug!(moves = self.move_count, time = %self.elapsed, "puzzle solved");
        }
        true
    }

    /// Begin a drag over `tile`. Ignored unless a game is running.
    pub fn drag_start(&mut self, tile: TileId, x: f32, y: f32) -> bool {
        if self.status != GameStatus::Playing || self.board.tile(tile).is_none() {
            return false;
        }
        self.gesture.begin(tile, x, y);
        true
    }

    /// Feed the drag position. Returns whether a move was applied.
    pub fn drag_move(&mut self, x: f32, y: f32) -> bool {
        match self.gesture.update(&self.board, x, y) {
            Some(tile) => self.move_tile(tile),
            None => false,
        }
    }

    /// End the drag in progress without a move.
    pub fn drag_end(&mut self) {
        self.gesture.end();
    }

    /// Advance the engine clock, firing every due tick in order.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.timeline.now().saturating_add(elapsed);
        while let Some(event) = self.timeline.pop_due(target) {
            self.fire(event);
        }
        self.timeline.settle(target);
    }

    fn fire(&mut self, event: PuzzleTimer) {
        match event {
            PuzzleTimer::ClockTick => {
                if self.status == GameStatus::Playing {
                    self.elapsed.0 += 1;
                    self.timeline
                        .schedule(self.config.clock_tick(), PuzzleTimer::ClockTick);
                }
            }
        }
    }

    /// Current projection.
    #[must_use]
    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            move_count: self.move_count,
            elapsed_time_formatted: self.elapsed.to_string(),
            board: self.board.snapshot(),
            is_playing: self.is_playing(),
            is_solved: self.is_solved(),
        }
    }
}

impl GameEngine for PuzzleEngine {
    type Intent = PuzzleIntent;
    type View = PuzzleView;

    fn handle(&mut self, intent: PuzzleIntent) -> bool {
        match intent {
            PuzzleIntent::Start => {
                self.shuffle();
                true
            }
            PuzzleIntent::Tap(tile) => self.move_tile(tile),
            PuzzleIntent::DragStart { tile, x, y } => self.drag_start(tile, x, y),
            PuzzleIntent::DragMove { x, y } => self.drag_move(x, y),
            PuzzleIntent::DragEnd => {
                let was_dragging = self.gesture.is_dragging();
                self.drag_end();
                was_dragging
            }
        }
    }

    fn advance(&mut self, elapsed: Duration) {
        PuzzleEngine::advance(self, elapsed);
    }

    fn view(&self) -> PuzzleView {
        PuzzleEngine::view(self)
    }

    fn is_finished(&self) -> bool {
        self.is_solved()
    }
}
