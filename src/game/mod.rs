//! The game facade: grid, score, undo history and spawner behind one API.
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, Game};
//!
//! let mut game = Game::new(42);
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.changed {
//!     assert!(game.can_undo());
//!     game.undo();
//! }
//!
//! let bytes = game.save();
//! let mut other = Game::new(7);
//! other.load(&bytes).unwrap();
//! assert_eq!(other.grid(), game.grid());
//! ```

mod debug;

use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::core::{
    EngineConfig, EngineError, GameRng, Grid, Result, CELL_COUNT, HIGH_TILE_EXPONENT,
    MAX_EXPONENT,
};
use crate::engine::{can_shift, shift, Direction, Merge, Milestone, MoveOutcome, Spawner};
use crate::history::{History, Snapshot};
use crate::persist::{self, Checkpoint, SaveState, MAX_COUNTER};

/// A single 2048 game.
///
/// All operations are synchronous and bounded by the grid size. The engine
/// has no internal locking; drive it from one thread.
#[derive(Clone, Debug)]
pub struct Game {
    config: EngineConfig,
    grid: Grid,
    score: u32,
    undo_count: u32,
    undo_locked: bool,
    high_tile_reached: bool,
    history: History,
    spawner: Spawner,
}

impl Game {
    /// Start a game with default settings and a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(EngineConfig::default().with_seed(seed))
    }

    /// Start a game from a configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let mut game = Self::blank(config);
        game.start();
        game
    }

    /// Build a game from a `.2048game` buffer.
    pub fn from_save(bytes: &[u8], config: EngineConfig) -> Result<Self> {
        let state = decode_logged(bytes)?;
        let mut game = Self::blank(config);
        game.apply_save(state)?;
        Ok(game)
    }

    fn blank(config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            grid: Grid::new(),
            score: 0,
            undo_count: 0,
            undo_locked: false,
            high_tile_reached: false,
            history: History::new(config.history_capacity),
            spawner: Spawner::new(rng, config.two_probability),
            config,
        }
    }

    /// Reset everything and spawn the opening tiles.
    ///
    /// With `Some(seed)` the spawn RNG is reseeded first, so the same seed
    /// always yields the same opening.
    pub fn new_game(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.spawner.reseed(seed);
        }
        self.start();
    }

    fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.undo_count = 0;
        self.undo_locked = false;
        self.high_tile_reached = false;
        self.history.clear();
        for _ in 0..self.config.initial_tiles.min(CELL_COUNT) {
            self.spawner.spawn(&mut self.grid);
        }
        info!(
            "new game (seed {}, {} tiles)",
            self.spawner.seed(),
            self.grid.occupied_count()
        );
    }

    // === Play ===

    /// Slide every tile toward `direction`.
    ///
    /// A move that changes nothing is a complete no-op: no score, no
    /// history entry and no spawn. Otherwise the pre-move grid and score are
    /// pushed to the undo history and one tile is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = Snapshot::new(self.grid, self.score);
        let mut outcome = shift(&mut self.grid, direction);
        if !outcome.changed {
            debug!("move {direction}: no change");
            return outcome;
        }

        // Held to the range a save can store.
        self.score = self
            .score
            .saturating_add(outcome.score_delta)
            .min(MAX_COUNTER);
        let milestones: SmallVec<[Milestone; 2]> = outcome
            .merges
            .iter()
            .filter_map(|merge| self.milestone(merge))
            .collect();
        outcome.milestones = milestones;

        self.history.push(before);
        outcome.spawned = self.spawner.spawn(&mut self.grid);

        debug!(
            "move {direction}: {} slides, {} merges, +{} points",
            outcome.slides.len(),
            outcome.merges.len(),
            outcome.score_delta
        );
        outcome
    }

    fn milestone(&mut self, merge: &Merge) -> Option<Milestone> {
        if merge.value == HIGH_TILE_EXPONENT && !self.high_tile_reached {
            self.high_tile_reached = true;
            info!("first 2048 tile at {}", merge.to);
            Some(Milestone::FirstHighTile { position: merge.to })
        } else if merge.value == MAX_EXPONENT {
            info!("max tile at {}", merge.to);
            Some(Milestone::MaxTile { position: merge.to })
        } else {
            None
        }
    }

    /// Whether moving toward `direction` would change the grid.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        can_shift(&self.grid, direction)
    }

    /// Legal directions as `[Up, Down, Left, Right]`.
    #[must_use]
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::all().map(|d| self.can_move(d))
    }

    /// True when no direction changes the grid.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.legal_moves().contains(&true)
    }

    // === Undo ===

    /// Restore the grid and score from before the last changing move.
    ///
    /// Returns the restored snapshot, or `None` when undo is locked or the
    /// history is empty. Neither case is an error.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo_locked {
            debug!("undo refused: locked");
            return None;
        }
        let snapshot = self.history.pop()?;
        self.grid = snapshot.grid;
        self.score = snapshot.score;
        self.undo_count = self.undo_count.saturating_add(1).min(MAX_COUNTER);
        debug!("undo #{} ({} left)", self.undo_count, self.history.len());
        Some(snapshot)
    }

    /// Whether an undo would currently succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_locked && !self.history.is_empty()
    }

    /// Lock or unlock undo. The history is kept either way.
    pub fn set_undo_lock(&mut self, locked: bool) {
        self.undo_locked = locked;
    }

    // === Persistence ===

    /// The persisted part of the game.
    #[must_use]
    pub fn save_state(&self) -> SaveState {
        SaveState {
            score: self.score,
            undo_count: self.undo_count,
            grid: self.grid,
            undo_locked: self.undo_locked,
        }
    }

    /// Encode the game in the `.2048game` layout.
    #[must_use]
    pub fn save(&self) -> Vec<u8> {
        persist::encode(&self.save_state())
    }

    /// Replace the game with a `.2048game` buffer.
    ///
    /// On error the game is left untouched. On success the undo history is
    /// cleared while the undo counter and lock come from the buffer.
    pub fn load(&mut self, bytes: &[u8]) -> Result<()> {
        let state = decode_logged(bytes)?;
        self.apply_save(state)
    }

    /// Apply an already decoded save.
    ///
    /// Counters above [`MAX_COUNTER`] are rejected and leave the game as it was.
    pub fn apply_save(&mut self, state: SaveState) -> Result<()> {
        state.validate()?;
        self.grid = state.grid;
        self.score = state.score;
        self.undo_count = state.undo_count;
        self.undo_locked = state.undo_locked;
        self.high_tile_reached = state.high_tile_reached();
        self.history.clear();
        info!("loaded game (score {}, undo count {})", self.score, self.undo_count);
        Ok(())
    }

    /// Capture the whole game, including history and RNG position.
    pub fn checkpoint(&self) -> Result<Vec<u8>> {
        Checkpoint {
            config: self.config.clone(),
            grid: self.grid,
            score: self.score,
            undo_count: self.undo_count,
            undo_locked: self.undo_locked,
            high_tile_reached: self.high_tile_reached,
            history: self.history.iter().copied().collect(),
            rng: self.spawner.rng_state(),
        }
        .to_bytes()
    }

    /// Rebuild a game from [`checkpoint`](Self::checkpoint) bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let checkpoint = Checkpoint::from_bytes(bytes)?;
        let mut history = History::new(checkpoint.config.history_capacity);
        for snapshot in checkpoint.history {
            history.push(snapshot);
        }
        info!("restored checkpoint (score {})", checkpoint.score);
        Ok(Self {
            grid: checkpoint.grid,
            score: checkpoint.score,
            undo_count: checkpoint.undo_count,
            undo_locked: checkpoint.undo_locked,
            high_tile_reached: checkpoint.high_tile_reached,
            history,
            spawner: Spawner::new(
                GameRng::from_state(&checkpoint.rng),
                checkpoint.config.two_probability,
            ),
            config: checkpoint.config,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn undo_count(&self) -> u32 {
        self.undo_count
    }

    #[must_use]
    pub fn is_undo_locked(&self) -> bool {
        self.undo_locked
    }

    /// Whether a 2048 tile has been made (or loaded) this game.
    #[must_use]
    pub fn high_tile_reached(&self) -> bool {
        self.high_tile_reached
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the current spawn sequence.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    /// Displayed value of the largest tile (0 for an empty grid).
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        match self.grid.max_exponent() {
            0 => 0,
            v => 1 << v,
        }
    }
}

fn decode_logged(bytes: &[u8]) -> Result<SaveState> {
    persist::decode(bytes).map_err(|err: EngineError| {
        warn!("rejected save ({} bytes): {err}", bytes.len());
        err
    })
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "{}", self.grid)
    }
}
