use super::error::HandError;
use super::meld::is_triplet;
use crate::model::*;
use crate::util::common::{count_tile, dec_tile};

// 捨て牌をポンできるかどうか (同じ牌が手牌に2枚以上)
pub fn can_claim_triplet(hand: &TileTable, tile: Tile) -> bool {
    count_tile(hand, tile) >= 2
}

// 手牌から2枚を取り除き,捨て牌と合わせたポンを返却
// 2枚に満たない場合は手牌を変更せずにエラー
pub fn claim_triplet(hand: &mut TileTable, tile: Tile, from: Seat) -> Result<Meld, HandError> {
    let count = count_tile(hand, tile);
    if count < 2 {
        return Err(HandError::InsufficientTiles { tile, count });
    }
    dec_tile(hand, tile);
    dec_tile(hand, tile);

    let meld = Meld::pon(tile, from);
    debug_assert!(is_triplet(meld.tiles[0], meld.tiles[1], meld.tiles[2]));
    Ok(meld)
}

#[cfg(test)]
use crate::util::common::{count_tiles, tiles_from_string, tiles_to_tile_table};

#[test]
fn test_claim_triplet() {
    let mut hand = tiles_to_tile_table(&tiles_from_string("w1155t234b678999").unwrap());
    let t = Tile(Suit::W, 5);
    assert!(can_claim_triplet(&hand, t));

    let m = claim_triplet(&mut hand, t, 2).unwrap();
    assert_eq!(count_tiles(&hand), 11);
    assert_eq!(count_tile(&hand, t), 0);
    assert_eq!(m.meld_type, MeldType::Pon);
    assert_eq!(m.tiles, [t; 3]);
    assert_eq!(m.from, 2);

    // 3枚持っていても消費するのは2枚
    let t9 = Tile(Suit::B, 9);
    claim_triplet(&mut hand, t9, 0).unwrap();
    assert_eq!(count_tile(&hand, t9), 1);
}

#[test]
fn test_claim_triplet_insufficient() {
    let tiles = tiles_from_string("w1155t234b678999").unwrap();
    let mut hand = tiles_to_tile_table(&tiles);
    for (t, count) in [(Tile(Suit::T, 2), 1), (Tile(Suit::T, 9), 0)] {
        assert!(!can_claim_triplet(&hand, t));
        assert_eq!(
            claim_triplet(&mut hand, t, 1),
            Err(HandError::InsufficientTiles { tile: t, count })
        );
        assert_eq!(hand, tiles_to_tile_table(&tiles));
    }
}
