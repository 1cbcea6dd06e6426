use rand::prelude::*;

use crate::model::*;
use crate::util::common::tiles_in_search_order;

// 萬子,条子,筒子 各1~9を4枚ずつ (108枚) シード値に従ってシャッフル
pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall = Vec::with_capacity(N_TILE);
    for t in tiles_in_search_order() {
        for _ in 0..TILE {
            wall.push(t);
        }
    }

    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

#[test]
fn test_create_wall() {
    use crate::util::common::{count_tile, tiles_to_tile_table};

    let wall = create_wall(0);
    assert_eq!(wall.len(), N_TILE);
    let tt = tiles_to_tile_table(&wall);
    for t in tiles_in_search_order() {
        assert_eq!(count_tile(&tt, t), TILE);
    }

    assert_eq!(wall, create_wall(0));
    assert_ne!(wall, create_wall(1));
}
