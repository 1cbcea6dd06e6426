// 手牌の和了判定や点数計算を行うモジュール
mod claim;
mod error;
mod evaluate;
mod meld;
mod parse;
mod score;
mod win;

pub use self::{
    claim::{can_claim_triplet, claim_triplet},
    error::HandError,
    evaluate::evaluate_hand,
    meld::{is_run, is_triplet},
    parse::{parse_into_wins, parse_melds},
    score::{calc_bonuses, score, Bonus},
    win::{calc_tiles_to_win, can_win, decompose},
};
