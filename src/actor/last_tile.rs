use super::*;
use crate::util::common::tiles_from_tile_table;

// 整列済み手牌の最後の牌を捨てる ポン可能なら常にポン
#[derive(Debug, Default)]
pub struct LastTileBot;

impl LastTileBot {
    pub fn new() -> Self {
        Self
    }
}

impl Actor for LastTileBot {
    fn select_discard(&mut self, player: &Player) -> Option<Tile> {
        tiles_from_tile_table(&player.hand).last().copied()
    }

    fn select_pon(&mut self, _player: &Player, _tile: Tile) -> bool {
        true
    }

    fn name(&self) -> &str {
        "LastTileBot"
    }
}

#[test]
fn test_last_tile_bot() {
    use crate::util::common::{tiles_from_string, tiles_to_tile_table};

    let mut pl = Player::new(0);
    pl.hand = tiles_to_tile_table(&tiles_from_string("b1w9t55").unwrap());
    let mut bot = LastTileBot::new();
    assert_eq!(bot.select_discard(&pl), Some(Tile(Suit::B, 1)));
    assert!(bot.select_pon(&pl, Tile(Suit::T, 5)));

    assert_eq!(bot.select_discard(&Player::new(1)), None);
}
