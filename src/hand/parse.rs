use super::win::{check_tile_count, lowest_tile, take_run, take_triplet};
use crate::model::*;
use crate::util::common::*;

// 鳴きをSetPairに変換したリストを返却
pub fn parse_melds(melds: &[Meld]) -> Vec<SetPair> {
    melds
        .iter()
        .map(|m| match m.meld_type {
            MeldType::Pon => SetPair(SetPairType::Pon, m.tiles[0]),
        })
        .collect()
}

// 面子のみへの分解をすべて返却 (分解できない場合は空)
// 手牌が空の場合は分解可能とみなし[[]]を返却
fn parse_into_sets(tt: &TileTable) -> Vec<Vec<SetPair>> {
    let t = match lowest_tile(tt) {
        Some(t) => t,
        None => return vec![vec![]],
    };

    let mut res = vec![];
    if let Some(rest) = take_triplet(tt, t) {
        for mut sets in parse_into_sets(&rest) {
            sets.push(SetPair(SetPairType::Triplet, t));
            res.push(sets);
        }
    }
    if let Some(rest) = take_run(tt, t) {
        for mut sets in parse_into_sets(&rest) {
            sets.push(SetPair(SetPairType::Run, t));
            res.push(sets);
        }
    }
    res
}

// 和了形の解釈をすべて返却 (和了形でない場合は空)
// 先頭の要素はcan_winが返却する分解と一致する
pub fn parse_into_wins(hand: &TileTable, melds: &[Meld]) -> Vec<Decomposition> {
    if check_tile_count(hand, melds).is_err() {
        return vec![];
    }

    let pm = parse_melds(melds);
    let mut res: Vec<Decomposition> = vec![];
    for pair in tiles_in_search_order() {
        if count_tile(hand, pair) < 2 {
            continue;
        }
        let mut tt = *hand;
        tt[pair.0.index()][pair.1] -= 2;
        for mut groups in parse_into_sets(&tt) {
            groups.extend(pm.iter().copied());
            let d = Decomposition::new(pair, groups);
            // 刻子と順子の取り出し順が異なるだけの重複を除外
            if !res.contains(&d) {
                res.push(d);
            }
        }
    }
    res
}

#[cfg(test)]
use super::win::can_win;

#[cfg(test)]
fn hand_from(exp: &str) -> TileTable {
    tiles_to_tile_table(&tiles_from_string(exp).unwrap())
}

#[test]
fn test_parse_into_wins() {
    // 三連刻: 刻子3つ または 順子3つ
    let h = hand_from("t111222333w456b55");
    let wins = parse_into_wins(&h, &[]);
    assert_eq!(wins.len(), 2);
    assert_eq!(Some(wins[0].clone()), can_win(&h, &[]));
    assert_eq!(wins[1].to_string(), "b55 w456 t123 t123 t123");
}

#[test]
fn test_parse_into_wins_dedup() {
    // 1111 23 は 刻子→順子 と 順子→刻子 のどちらの順でも同じ分解になる
    let h = hand_from("w111123t456b789b99");
    let wins = parse_into_wins(&h, &[]);
    assert_eq!(wins.len(), 1);
    assert_eq!(wins[0].to_string(), "b99 w111 w123 t456 b789");
}

#[test]
fn test_parse_into_wins_multiple_pairs() {
    // 雀頭の候補が2つ (b1 または b4)
    let h = hand_from("b11123444w789t789");
    let wins = parse_into_wins(&h, &[]);
    let pairs: Vec<Tile> = wins.iter().map(|d| d.pair).collect();
    assert_eq!(pairs, vec![Tile(Suit::B, 1), Tile(Suit::B, 4)]);
}

#[test]
fn test_parse_into_wins_invalid() {
    assert!(parse_into_wins(&hand_from("b1112345678999"), &[]).is_empty());
    assert!(parse_into_wins(&hand_from("w13579t13579b1357"), &[]).is_empty());
}
