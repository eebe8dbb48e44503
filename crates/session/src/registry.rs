//! In-memory game registry
//!
//! Stores each game the way a persistence layer would: the player, the board as a
//! JSON blob and the score. Moves against one game are serialized by a per-game
//! mutex, so "validate against current state, then swap that same state" holds
//! even with concurrent callers. Moves on different games proceed independently
//! apart from the short critical section around the shared engine RNG.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};

use crate::core::{Engine, GameSnapshot, Grid, MoveOutcome, SimpleRng, TileRng};
use crate::error::{SessionError, SessionResult};
use crate::types::{GameId, PlayerId, Swap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Stored form of one game
#[derive(Debug, Clone)]
struct GameRecord {
    id: GameId,
    player: Player,
    board: String,
    score: u32,
}

impl GameRecord {
    fn snapshot(&self) -> SessionResult<GameSnapshot> {
        Ok(GameSnapshot::decode(&self.board, self.score)?)
    }

    fn view(&self) -> SessionResult<GameView> {
        Ok(GameView {
            id: self.id,
            player: self.player.clone(),
            board: self.snapshot()?.grid,
            score: self.score,
        })
    }
}

/// Game state as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: GameId,
    pub player: Player,
    pub board: Grid,
    pub score: u32,
}

/// Result of [`GameRegistry::make_move`]: the game afterwards and what the move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReply {
    pub game: GameView,
    pub outcome: MoveOutcome,
}

impl MoveReply {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Resolved(_))
    }
}

pub struct GameRegistry<R = SimpleRng> {
    engine: Mutex<Engine<R>>,
    players: RwLock<HashMap<PlayerId, Player>>,
    games: RwLock<HashMap<GameId, Arc<Mutex<GameRecord>>>>,
    next_player: AtomicU64,
    next_game: AtomicU64,
}

impl<R: TileRng> GameRegistry<R> {
    pub fn new(engine: Engine<R>) -> Self {
        Self {
            engine: Mutex::new(engine),
            players: RwLock::new(HashMap::new()),
            games: RwLock::new(HashMap::new()),
            next_player: AtomicU64::new(1),
            next_game: AtomicU64::new(1),
        }
    }

    #[instrument(skip(self))]
    pub async fn register_player(&self, name: &str) -> Player {
        let id = PlayerId(self.next_player.fetch_add(1, Ordering::Relaxed));
        let player = Player {
            id,
            name: name.to_string(),
        };
        self.players.write().await.insert(id, player.clone());
        debug!(player = id.0, "player registered");
        player
    }

    pub async fn player(&self, id: PlayerId) -> SessionResult<Player> {
        self.players
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::PlayerNotFound { id })
    }

    /// Start a new game for an existing player
    #[instrument(skip(self))]
    pub async fn create_game(&self, player_id: PlayerId) -> SessionResult<GameView> {
        let player = self.player(player_id).await?;
        let snapshot = self.engine.lock().await.create_game(player_id)?;

        let id = GameId(self.next_game.fetch_add(1, Ordering::Relaxed));
        let record = GameRecord {
            id,
            player,
            board: snapshot.encode_board()?,
            score: snapshot.score,
        };
        let view = record.view()?;

        self.games
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(record)));
        info!(game = id.0, player = player_id.0, "game created");
        Ok(view)
    }

    pub async fn game(&self, id: GameId) -> SessionResult<GameView> {
        let record = self.record(id).await?;
        let guard = record.lock().await;
        guard.view()
    }

    /// Apply a swap to a stored game
    ///
    /// An illegal swap leaves the stored game untouched and returns it as-is, with a
    /// [`MoveOutcome::Rejected`] outcome.
    #[instrument(skip(self))]
    pub async fn make_move(&self, id: GameId, swap: Swap) -> SessionResult<MoveReply> {
        let record = self.record(id).await?;
        let mut guard = record.lock().await;

        let snapshot = guard.snapshot()?;
        let result = self.engine.lock().await.apply_move(&snapshot, swap)?;

        match &result.outcome {
            MoveOutcome::Rejected(reason) => {
                debug!(game = id.0, reason = reason.as_str(), "board unchanged");
            }
            MoveOutcome::Resolved(report) => {
                guard.board = result.snapshot.encode_board()?;
                guard.score = result.snapshot.score;
                info!(
                    game = id.0,
                    cleared = report.cleared(),
                    chains = report.chain_reactions(),
                    score = guard.score,
                    "move resolved"
                );
            }
        }

        Ok(MoveReply {
            game: GameView {
                id,
                player: guard.player.clone(),
                board: result.snapshot.grid,
                score: result.snapshot.score,
            },
            outcome: result.outcome,
        })
    }

    /// Number of stored games
    pub async fn game_count(&self) -> usize {
        self.games.read().await.len()
    }

    async fn record(&self, id: GameId) -> SessionResult<Arc<Mutex<GameRecord>>> {
        self.games
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::GameNotFound { id })
    }
}
