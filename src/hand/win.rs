use super::error::HandError;
use super::parse::parse_melds;
use crate::debug;
use crate::model::*;
use crate::util::common::*;

// [完成形判定 (面子, 雀頭)]
// 手牌(TileTable)はCopyなので,分岐ごとに牌を取り除いたコピーを渡して再帰する.
// 失敗した分岐の変更が呼び出し元に残ることはない.

// 探索順で最初に見つかる牌
pub(super) fn lowest_tile(tt: &TileTable) -> Option<Tile> {
    tiles_in_search_order().find(|&t| count_tile(tt, t) != 0)
}

// 刻子として3枚取り除いた手牌
pub(super) fn take_triplet(tt: &TileTable, t: Tile) -> Option<TileTable> {
    if count_tile(tt, t) < 3 {
        return None;
    }
    let mut tt = *tt;
    tt[t.0.index()][t.1] -= 3;
    Some(tt)
}

// tを先頭とする順子として3枚取り除いた手牌
pub(super) fn take_run(tt: &TileTable, t: Tile) -> Option<TileTable> {
    let t1 = t.next()?;
    let t2 = t1.next()?;
    if count_tile(tt, t) == 0 || count_tile(tt, t1) == 0 || count_tile(tt, t2) == 0 {
        return None;
    }
    let mut tt = *tt;
    dec_tile(&mut tt, t);
    dec_tile(&mut tt, t1);
    dec_tile(&mut tt, t2);
    Some(tt)
}

// 面子のみに分解 (刻子を優先)
// 最小の牌を含む面子が作れない時点でその分岐は失敗
fn find_sets(tt: &TileTable) -> Option<Vec<SetPair>> {
    let t = match lowest_tile(tt) {
        Some(t) => t,
        None => return Some(vec![]),
    };

    if let Some(rest) = take_triplet(tt, t) {
        if let Some(mut sets) = find_sets(&rest) {
            sets.push(SetPair(SetPairType::Triplet, t));
            return Some(sets);
        }
    }

    if let Some(rest) = take_run(tt, t) {
        if let Some(mut sets) = find_sets(&rest) {
            sets.push(SetPair(SetPairType::Run, t));
            return Some(sets);
        }
    }

    None
}

// 鳴きを含めて14枚であることを確認
pub(super) fn check_tile_count(hand: &TileTable, melds: &[Meld]) -> Result<(), HandError> {
    let count = count_tiles(hand);
    if melds.len() > SETS || count + 3 * melds.len() != WIN {
        return Err(HandError::MalformedMultiset {
            count,
            melds: melds.len(),
        });
    }
    Ok(())
}

// 和了形である場合,最初に見つかった分解をSomeで返却
// 雀頭は探索順に試し,面子は刻子を順子より先に試す
pub fn decompose(hand: &TileTable, melds: &[Meld]) -> Result<Option<Decomposition>, HandError> {
    check_tile_count(hand, melds)?;

    for pair in tiles_in_search_order() {
        if count_tile(hand, pair) < 2 {
            continue;
        }
        let mut tt = *hand;
        tt[pair.0.index()][pair.1] -= 2;
        if let Some(mut groups) = find_sets(&tt) {
            groups.extend(parse_melds(melds));
            return Ok(Some(Decomposition::new(pair, groups)));
        }
    }

    Ok(None)
}

// 枚数が不正な手牌は和了形ではないものとして扱う
pub fn can_win(hand: &TileTable, melds: &[Meld]) -> Option<Decomposition> {
    match decompose(hand, melds) {
        Ok(d) => d,
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

// [和了牌判定]
// 鳴きを含めて13枚の手牌に対して和了牌のリストを返却
// すでに4枚見えている牌(手牌と鳴き)は除外
pub fn calc_tiles_to_win(hand: &TileTable, melds: &[Meld]) -> Vec<Tile> {
    let mut visible = *hand;
    for m in melds {
        for &t in &m.tiles {
            inc_tile(&mut visible, t);
        }
    }

    let mut res = vec![];
    let mut hand = *hand;
    for s in Suit::ALL {
        for ni in 1..TNUM {
            let t = Tile(s, ni);
            if count_tile(&visible, t) >= TILE {
                continue;
            }
            inc_tile(&mut hand, t);
            if matches!(decompose(&hand, melds), Ok(Some(_))) {
                res.push(t);
            }
            dec_tile(&mut hand, t);
        }
    }
    res
}

#[cfg(test)]
fn hand_from(exp: &str) -> TileTable {
    tiles_to_tile_table(&tiles_from_string(exp).unwrap())
}

#[test]
fn test_win_with_runs() {
    // 1c×3, 2-3-4c, 5c×3, 6-7-8c, 9c×2
    let d = can_win(&hand_from("b11123455567899"), &[]).unwrap();
    assert_eq!(d.pair, Tile(Suit::B, 9));
    assert_eq!(d.to_string(), "b99 b111 b555 b234 b678");
}

#[test]
fn test_win_all_triplets() {
    let d = can_win(&hand_from("w111t222333b55577"), &[]).unwrap();
    assert_eq!(d.pair, Tile(Suit::B, 7));
    assert!(d.groups.iter().all(|g| g.0 == SetPairType::Triplet));
}

#[test]
fn test_win_prefers_triplets() {
    // 三連刻は刻子3つとして読む
    let d = can_win(&hand_from("t111222333w456b55"), &[]).unwrap();
    let n_triplet = d.groups.iter().filter(|g| g.0 == SetPairType::Triplet).count();
    assert_eq!(n_triplet, 3);
}

#[test]
fn test_win_pair_choice() {
    // 雀頭をw1で取ると失敗し,w2で取ると成功する
    let d = can_win(&hand_from("w11122t123456b789"), &[]).unwrap();
    assert_eq!(d.pair, Tile(Suit::W, 2));
}

#[test]
fn test_not_win() {
    assert!(can_win(&hand_from("w1112345678999t1"), &[]).is_none());
    assert!(can_win(&hand_from("w13579t13579b1357"), &[]).is_none());
    // 9から1へは繋がらない
    assert!(can_win(&hand_from("w891t111222333b55"), &[]).is_none());
    // 雀頭がない
    assert!(can_win(&hand_from("w111222t333444b56"), &[]).is_none());
}

#[test]
fn test_win_with_melds() {
    let melds = vec![Meld::pon(Tile(Suit::T, 5), 1), Meld::pon(Tile(Suit::W, 9), 3)];
    let d = can_win(&hand_from("b123999w11"), &melds).unwrap();
    assert_eq!(d.pair, Tile(Suit::W, 1));
    assert_eq!(d.groups.len(), SETS);
    assert_eq!(
        d.groups.iter().filter(|g| g.0 == SetPairType::Pon).count(),
        2
    );

    // 鳴きはすでに確定した面子として扱い,手牌側は分解し直さない
    let melds = vec![Meld::pon(Tile(Suit::B, 1), 0)];
    assert!(can_win(&hand_from("b23w111t999b555"), &melds).is_none());
}

#[test]
fn test_win_tile_count() {
    // 13枚
    let h = hand_from("b1112345678999");
    assert!(can_win(&h, &[]).is_none());
    assert_eq!(
        decompose(&h, &[]),
        Err(HandError::MalformedMultiset { count: 13, melds: 0 })
    );

    // 15枚
    assert!(can_win(&hand_from("b111234555678999"), &[]).is_none());

    // 鳴きと合わせて13枚
    let melds = vec![Meld::pon(Tile(Suit::T, 5), 1)];
    assert!(can_win(&hand_from("b1112345556"), &melds).is_none());
}

#[test]
fn test_win_order_independent() {
    let exp = "b11123455567899";
    let mut tiles = tiles_from_string(exp).unwrap();
    let expected = can_win(&tiles_to_tile_table(&tiles), &[]);
    for _ in 0..tiles.len() {
        tiles.rotate_left(3);
        tiles.swap(0, 5);
        assert_eq!(can_win(&tiles_to_tile_table(&tiles), &[]), expected);
    }
}

#[test]
fn test_tiles_to_win() {
    // 九蓮宝燈形 1~9すべてで和了
    let h = hand_from("b1112345678999");
    let expected: Vec<Tile> = (1..=9).map(|n| Tile(Suit::B, n)).collect();
    assert_eq!(calc_tiles_to_win(&h, &[]), expected);

    // 単騎待ち
    let h = hand_from("w123456789t111b5");
    assert_eq!(calc_tiles_to_win(&h, &[]), vec![Tile(Suit::B, 5)]);

    // 4枚目が見えている牌は待ちにならない
    let melds = vec![Meld::pon(Tile(Suit::B, 5), 2)];
    let h = hand_from("w123456t111b5");
    assert!(calc_tiles_to_win(&h, &melds).is_empty());

    // 枚数不正
    assert!(calc_tiles_to_win(&hand_from("b11"), &[]).is_empty());
}
