//! Player sources consumed by the streaming ranker.

use lb_core::{Player, RankError};

pub mod json_lines;
pub mod synthetic;

pub use json_lines::JsonLinesPlayerStream;
pub use synthetic::{SyntheticConfig, SyntheticPlayers};

/// A sequential, pull-based supply of players.
///
/// Callers are expected to check `remaining()` before asking for the next
/// player; requesting past the end fails with [`RankError::StreamExhausted`].
pub trait PlayerStream {
    /// Players not yet delivered; zero means the stream is exhausted.
    fn remaining(&self) -> usize;

    /// Returns the next player and advances by one.
    fn next_player(&mut self) -> Result<Player, RankError>;
}

impl<S: PlayerStream + ?Sized> PlayerStream for &mut S {
    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        (**self).next_player()
    }
}

/// Streams a pre-built population in order.
#[derive(Debug, Clone, Default)]
pub struct VectorPlayerStream {
    players: std::vec::IntoIter<Player>,
}

impl VectorPlayerStream {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players: players.into_iter() }
    }
}

impl From<Vec<Player>> for VectorPlayerStream {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}

impl PlayerStream for VectorPlayerStream {
    fn remaining(&self) -> usize {
        self.players.len()
    }

    fn next_player(&mut self) -> Result<Player, RankError> {
        self.players.next().ok_or(RankError::StreamExhausted)
    }
}
