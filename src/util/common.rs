use crate::model::*;
use crate::util::misc::Res;

// 探索順 (数字の昇順, 同じ数字の場合は萬子,条子,筒子の順) で全牌種を列挙
pub fn tiles_in_search_order() -> impl Iterator<Item = Tile> {
    (1..TNUM).flat_map(|ni| Suit::ALL.into_iter().map(move |s| Tile(s, ni)))
}

#[inline]
pub fn count_tile(tt: &TileTable, t: Tile) -> usize {
    tt[t.0.index()][t.1]
}

pub fn count_tiles(tt: &TileTable) -> usize {
    tt.iter().map(|r| r.iter().sum::<usize>()).sum()
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0.index()][t.1] += 1;
}

// 呼び出し側で牌が存在することを確認しておくこと
#[inline]
pub fn dec_tile(tt: &mut TileTable, t: Tile) {
    tt[t.0.index()][t.1] -= 1;
}

// 種別,数字の順に整列された牌のリストを返却
pub fn tiles_from_tile_table(tt: &TileTable) -> Vec<Tile> {
    let mut tiles = vec![];
    for s in Suit::ALL {
        for ni in 1..TNUM {
            for _ in 0..tt[s.index()][ni] {
                tiles.push(Tile(s, ni));
            }
        }
    }
    tiles
}

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for &t in tiles {
        inc_tile(&mut tt, t);
    }
    tt
}

// "w123t55b999" 形式の文字列を牌のリストに変換 (並び順は文字列の順)
pub fn tiles_from_string(exp: &str) -> Res<Vec<Tile>> {
    let mut tiles = vec![];
    let mut suit = None;
    for ch in exp.chars() {
        match ch {
            'w' | 't' | 'b' => suit = Some(Suit::from_char(ch)?),
            '1'..='9' => {
                let s = suit.ok_or("tile number before tile suit")?;
                tiles.push(Tile(s, tile_number_from_char(ch)?));
            }
            _ => Err(format!("invalid char: '{}'", ch))?,
        }
    }
    Ok(tiles)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last = None;
    for t in tiles {
        if last != Some(t.0) {
            last = Some(t.0);
            res.push(t.0.to_char());
        }
        res.push_str(&t.1.to_string());
    }
    res
}

// "b555" 形式の文字列をポンに変換 点数計算では鳴いた相手は関係ないのでNO_SEAT
pub fn meld_from_string(exp: &str) -> Res<Meld> {
    let tiles = tiles_from_string(exp)?;
    if tiles.len() != 3 || !crate::hand::is_triplet(tiles[0], tiles[1], tiles[2]) {
        Err(format!("invalid meld: '{}'", exp))?;
    }
    Ok(Meld::pon(tiles[0], NO_SEAT))
}

#[test]
fn test_tiles_string() {
    let exp = "w1199t345b78";
    let tiles = tiles_from_string(exp).unwrap();
    assert_eq!(tiles.len(), 9);
    assert_eq!(tiles[2], Tile(Suit::W, 9));
    assert_eq!(tiles_to_string(&tiles), exp);

    assert!(tiles_from_string("11w").is_err());
    assert!(tiles_from_string("w10").is_err());
    assert!(tiles_from_string("m123").is_err());
}

#[test]
fn test_tile_table() {
    let tiles = tiles_from_string("b9w12t5w1").unwrap();
    let tt = tiles_to_tile_table(&tiles);
    assert_eq!(count_tile(&tt, Tile(Suit::W, 1)), 2);
    assert_eq!(count_tiles(&tt), 5);
    assert_eq!(tiles_to_string(&tiles_from_tile_table(&tt)), "w112t5b9");
}

#[test]
fn test_meld_from_string() {
    let m = meld_from_string("t777").unwrap();
    assert_eq!(m.tiles, [Tile(Suit::T, 7); 3]);
    assert_eq!(m.to_string(), "t777");
    assert!(meld_from_string("t789").is_err());
    assert!(meld_from_string("t77").is_err());
}

#[test]
fn test_search_order() {
    let v: Vec<Tile> = tiles_in_search_order().take(4).collect();
    assert_eq!(
        v,
        vec![Tile(Suit::W, 1), Tile(Suit::T, 1), Tile(Suit::B, 1), Tile(Suit::W, 2)]
    );
    assert_eq!(tiles_in_search_order().count(), 27);
}
