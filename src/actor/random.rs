use rand::Rng;

use super::*;
use crate::util::common::{count_tile, tiles_in_search_order};

// 手牌からランダムに1枚捨てる ポンはしない
#[derive(Debug)]
pub struct RandomBot {
    rng: rand::rngs::StdRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rand::SeedableRng::seed_from_u64(seed),
        }
    }
}

impl Actor for RandomBot {
    fn select_discard(&mut self, player: &Player) -> Option<Tile> {
        let len = player.count_hand();
        if len == 0 {
            return None;
        }

        let mut n: usize = self.rng.gen_range(0..len);
        for t in tiles_in_search_order() {
            let c = count_tile(&player.hand, t);
            if c > n {
                return Some(t);
            }
            n -= c;
        }
        None
    }

    fn select_pon(&mut self, _player: &Player, _tile: Tile) -> bool {
        false
    }

    fn name(&self) -> &str {
        "RandomBot"
    }
}

#[test]
fn test_random_bot() {
    use crate::util::common::{tiles_from_string, tiles_to_tile_table};

    let mut pl = Player::new(0);
    pl.hand = tiles_to_tile_table(&tiles_from_string("w1199t5b3").unwrap());
    let mut bot = RandomBot::new(7);
    for _ in 0..50 {
        let t = bot.select_discard(&pl).unwrap();
        assert!(pl.count_tile(t) > 0);
    }
    assert!(!bot.select_pon(&pl, Tile(Suit::W, 1)));
}
