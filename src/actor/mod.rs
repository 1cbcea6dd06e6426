mod last_tile;
mod random;

use crate::model::*;
use crate::util::misc::Res;

pub use last_tile::LastTileBot;
pub use random::RandomBot;

pub trait Actor {
    // 打牌する牌を選択 手牌にない牌を返却した場合はエンジン側でエラー
    fn select_discard(&mut self, player: &Player) -> Option<Tile>;

    // 捨て牌をポンするかどうか (ポン可能な場合のみ呼び出される)
    fn select_pon(&mut self, player: &Player, tile: Tile) -> bool;

    fn name(&self) -> &str;
}

// 名前からActorを生成 seedはランダム要素を持つActorのみ使用
pub fn create_actor(name: &str, seed: u64) -> Res<Box<dyn Actor>> {
    let actor: Box<dyn Actor> = match name {
        "last" => Box::new(LastTileBot::new()),
        "random" => Box::new(RandomBot::new(seed)),
        _ => Err(format!("unknown actor name: {}", name))?,
    };
    Ok(actor)
}

#[test]
fn test_create_actor() {
    assert_eq!(create_actor("last", 0).unwrap().name(), "LastTileBot");
    assert_eq!(create_actor("random", 0).unwrap().name(), "RandomBot");
    assert!(create_actor("human", 0).is_err());
}
