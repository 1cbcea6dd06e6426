use std::fmt;

use crate::model::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    // ポンに必要な2枚が手牌にない
    InsufficientTiles { tile: Tile, count: usize },
    // 鳴きを含めて14枚でない
    MalformedMultiset { count: usize, melds: usize },
    // 手牌にない牌の打牌
    TileNotInHand(Tile),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandError::InsufficientTiles { tile, count } => {
                write!(f, "insufficient tiles to claim {}: {} in hand", tile, count)
            }
            HandError::MalformedMultiset { count, melds } => write!(
                f,
                "malformed hand: {} tiles with {} melds (expected {})",
                count,
                melds,
                WIN.saturating_sub(3 * melds),
            ),
            HandError::TileNotInHand(t) => write!(f, "tile not in hand: {}", t),
        }
    }
}

impl std::error::Error for HandError {}
