use super::parse::parse_into_wins;
use super::score::{calc_bonuses, score};
use crate::model::*;
use crate::util::common::tiles_from_tile_table;

// 和了形である場合,最も高得点となる解釈のSome(WinContext)を返却
// 同点の場合はcan_winが返却する分解を優先
// 和了形でない場合,Noneを返却
pub fn evaluate_hand(
    hand: &TileTable,    // 手牌(鳴き以外, ロンの場合でも和了牌を含む)
    melds: &[Meld],      // 鳴き
    winning_tile: Tile,  // 和了牌
    is_self_drawn: bool, // ツモ和了
) -> Option<WinContext> {
    let mut best: Option<(Score, Decomposition)> = None;
    for d in parse_into_wins(hand, melds) {
        let sc = score(&d, is_self_drawn);
        let is_better = match &best {
            Some((s, _)) => sc > *s,
            None => true,
        };
        if is_better {
            best = Some((sc, d));
        }
    }

    let (score, decomposition) = best?;
    let bonuses = calc_bonuses(&decomposition, is_self_drawn)
        .iter()
        .map(|b| b.name().to_string())
        .collect();
    Some(WinContext {
        hand: tiles_from_tile_table(hand),
        melds: melds.to_vec(),
        winning_tile,
        is_self_drawn,
        decomposition,
        bonuses,
        score,
    })
}

#[cfg(test)]
use crate::util::common::{tiles_from_string, tiles_to_tile_table};

#[test]
fn test_evaluate_hand() {
    let hand = tiles_to_tile_table(&tiles_from_string("b11123455567899").unwrap());
    let ctx = evaluate_hand(&hand, &[], Tile(Suit::B, 9), true).unwrap();
    assert_eq!(ctx.score, 3);
    assert_eq!(ctx.bonuses, vec!["self-drawn", "flush"]);
    assert_eq!(ctx.hand.len(), WIN);

    // 鳴きと合わせて17枚
    let melds = vec![Meld::pon(Tile(Suit::W, 1), 0)];
    assert!(evaluate_hand(&hand, &melds, Tile(Suit::B, 9), true).is_none());
}

#[test]
fn test_evaluate_hand_best_reading() {
    // 三連刻と順子3つの2通り 刻子として読むほうが高い
    let hand = tiles_to_tile_table(&tiles_from_string("t11122233355599").unwrap());
    let ctx = evaluate_hand(&hand, &[], Tile(Suit::T, 3), false).unwrap();
    assert_eq!(ctx.score, 3);
    assert_eq!(ctx.bonuses, vec!["flush", "all-triplets"]);
}

#[test]
fn test_win_context_json() {
    let hand = tiles_to_tile_table(&tiles_from_string("b11144499").unwrap());
    let melds = vec![Meld::pon(Tile(Suit::B, 2), 1), Meld::pon(Tile(Suit::B, 7), 3)];
    let ctx = evaluate_hand(&hand, &melds, Tile(Suit::B, 4), false).unwrap();
    let s = serde_json::to_string(&ctx).unwrap();
    assert!(s.contains(r#""winning_tile":"b4""#));
    let ctx2: WinContext = serde_json::from_str(&s).unwrap();
    assert_eq!(ctx, ctx2);
}
