use super::meld::is_run;
use crate::model::*;

// 加点役 (いずれも1点, 複合可)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bonus {
    SelfDrawn,   // 自摸
    Flush,       // 清一色
    AllTriplets, // 碰碰胡
}

impl Bonus {
    pub fn name(self) -> &'static str {
        match self {
            Bonus::SelfDrawn => "self-drawn",
            Bonus::Flush => "flush",
            Bonus::AllTriplets => "all-triplets",
        }
    }

    #[inline]
    pub fn point(self) -> Score {
        1
    }
}

// 鳴きを含むすべての牌が同じ種別
fn is_flush(d: &Decomposition) -> bool {
    let tiles = d.tiles();
    tiles.iter().all(|t| t.0 == tiles[0].0)
}

// 順子を含まない (雀頭は対象外, ポンは刻子として扱う)
fn is_all_triplets(d: &Decomposition) -> bool {
    !d.groups.iter().any(|g| {
        let ts = g.tiles();
        is_run(ts[0], ts[1], ts[2])
    })
}

pub fn calc_bonuses(d: &Decomposition, is_self_drawn: bool) -> Vec<Bonus> {
    let mut bonuses = vec![];
    if is_self_drawn {
        bonuses.push(Bonus::SelfDrawn);
    }
    if is_flush(d) {
        bonuses.push(Bonus::Flush);
    }
    if is_all_triplets(d) {
        bonuses.push(Bonus::AllTriplets);
    }
    bonuses
}

// 基本点1 + 加点 (上限なし)
pub fn score(d: &Decomposition, is_self_drawn: bool) -> Score {
    1 + calc_bonuses(d, is_self_drawn)
        .iter()
        .map(|b| b.point())
        .sum::<Score>()
}

#[cfg(test)]
use super::win::can_win;
#[cfg(test)]
use crate::util::common::{tiles_from_string, tiles_to_tile_table};

#[cfg(test)]
fn win_from(exp: &str, melds: &[Meld]) -> Decomposition {
    let hand = tiles_to_tile_table(&tiles_from_string(exp).unwrap());
    can_win(&hand, melds).unwrap()
}

#[test]
fn test_score_flush_with_runs() {
    let d = win_from("b11123455567899", &[]);
    assert_eq!(calc_bonuses(&d, false), vec![Bonus::Flush]);
    assert_eq!(score(&d, false), 2);
    assert_eq!(score(&d, true), 3);
}

#[test]
fn test_score_flush_all_triplets() {
    let d = win_from("t11122255566699", &[]);
    assert_eq!(score(&d, false), 3);
    assert_eq!(
        calc_bonuses(&d, true),
        vec![Bonus::SelfDrawn, Bonus::Flush, Bonus::AllTriplets]
    );
    assert_eq!(score(&d, true), 4);
}

#[test]
fn test_score_all_triplets() {
    let d = win_from("w111t222333b55577", &[]);
    assert_eq!(calc_bonuses(&d, false), vec![Bonus::AllTriplets]);
    assert_eq!(score(&d, false), 2);
}

#[test]
fn test_score_base() {
    let d = win_from("w123t456b789w99t555", &[]);
    assert!(calc_bonuses(&d, false).is_empty());
    assert_eq!(score(&d, false), 1);
    assert_eq!(score(&d, true), 2);
}

#[test]
fn test_score_with_melds() {
    // ポンは刻子として扱い,牌の種別も清一色の判定に含める
    let melds = vec![Meld::pon(Tile(Suit::B, 2), 1), Meld::pon(Tile(Suit::B, 7), 3)];
    let d = win_from("b11144499", &melds);
    assert_eq!(score(&d, false), 3);

    let d = win_from("b12344455599", &melds[..1]);
    assert_eq!(calc_bonuses(&d, false), vec![Bonus::Flush]);

    let melds = vec![Meld::pon(Tile(Suit::W, 2), 1)];
    let d = win_from("b11144477799", &melds);
    assert_eq!(calc_bonuses(&d, false), vec![Bonus::AllTriplets]);
    assert_eq!(score(&d, true), 3);
}

#[test]
fn test_score_run_in_every_reading() {
    // どの分解を選んでも順子を含む手は碰碰胡にならない
    use super::parse::parse_into_wins;
    let hand = tiles_to_tile_table(&tiles_from_string("b11123444w789t789").unwrap());
    let wins = parse_into_wins(&hand, &[]);
    assert!(!wins.is_empty());
    for d in &wins {
        assert!(!calc_bonuses(d, true).contains(&Bonus::AllTriplets));
    }
}
