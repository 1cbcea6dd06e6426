use super::wall::create_wall;
use crate::actor::Actor;
use crate::hand::{can_claim_triplet, can_win, claim_triplet, evaluate_hand};
use crate::model::*;
use crate::util::common::tiles_from_tile_table;
use crate::util::misc::Res;
use crate::{debug, info};

// [Engine]
// 1局分の進行 (配牌, ツモ, 和了判定, 打牌, ポン判定) を行う
// 親は座席0で固定
pub struct Engine {
    seed: u64,
    wall: Vec<Tile>,
    players: [Player; SEAT],
    actors: Vec<Box<dyn Actor>>,
    turn: Seat,
    events: Vec<Event>,
}

impl Engine {
    pub fn new(seed: u64, actors: Vec<Box<dyn Actor>>) -> Res<Self> {
        if actors.len() != SEAT {
            Err(format!("{} actors are required: {}", SEAT, actors.len()))?;
        }
        Ok(Self {
            seed,
            wall: create_wall(seed),
            players: [Player::new(0), Player::new(1), Player::new(2), Player::new(3)],
            actors,
            turn: 0,
            events: vec![],
        })
    }

    pub fn players(&self) -> &[Player; SEAT] {
        &self.players
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn wall_count(&self) -> usize {
        self.wall.len()
    }

    // 牌山,手牌,鳴き,捨て牌の合計 (常に108枚)
    pub fn count_all_tiles(&self) -> usize {
        let mut n = self.wall.len();
        for pl in &self.players {
            n += pl.count_total() + pl.discards.len();
        }
        n
    }

    // 局を最後まで進行して和了者と和了情報を返却 牌山が尽きた場合はNone
    pub fn run(&mut self) -> Res<Option<(Seat, WinContext)>> {
        self.deal();

        let mut claimed = None;
        loop {
            let seat = self.turn;
            if let Some(t) = claimed.take() {
                // ポン直後 (鳴きを含めて14枚) の和了判定
                if let Some(ctx) = self.check_win(seat, t, false) {
                    return Ok(Some((seat, ctx)));
                }
            } else {
                let t = match self.wall.pop() {
                    Some(t) => t,
                    None => {
                        info!("seed {}: wall exhausted", self.seed);
                        let hands = self.hands();
                        self.events.push(Event::draw(hands));
                        return Ok(None);
                    }
                };
                self.players[seat].draw(t);
                self.events.push(Event::deal(seat, t));
                if let Some(ctx) = self.check_win(seat, t, true) {
                    return Ok(Some((seat, ctx)));
                }
            }

            let d = self.discard(seat)?;
            match self.resolve_claims(seat, d)? {
                Some(s) => {
                    claimed = Some(d);
                    self.turn = s;
                }
                None => self.turn = (seat + 1) % SEAT,
            }
        }
    }

    fn hands(&self) -> [Vec<Tile>; SEAT] {
        let mut hands: [Vec<Tile>; SEAT] = Default::default();
        for (s, pl) in self.players.iter().enumerate() {
            hands[s] = tiles_from_tile_table(&pl.hand);
        }
        hands
    }

    fn deal(&mut self) {
        for _ in 0..HAND {
            for s in 0..SEAT {
                if let Some(t) = self.wall.pop() {
                    self.players[s].draw(t);
                }
            }
        }
        for pl in &mut self.players {
            pl.drawn = None;
        }
        self.turn = 0;
        let hands = self.hands();
        self.events.push(Event::new(self.seed, hands, self.wall.len()));
    }

    fn check_win(&mut self, seat: Seat, t: Tile, is_self_drawn: bool) -> Option<WinContext> {
        let pl = &self.players[seat];
        can_win(&pl.hand, &pl.melds)?;
        let ctx = evaluate_hand(&pl.hand, &pl.melds, t, is_self_drawn)?;
        info!(
            "seed {}: seat {} wins on {} with {} ({} points)",
            self.seed, seat, t, ctx.decomposition, ctx.score
        );
        self.events.push(Event::win(seat, ctx.clone()));
        Some(ctx)
    }

    fn discard(&mut self, seat: Seat) -> Res<Tile> {
        let pl = &self.players[seat];
        let d = self.actors[seat]
            .select_discard(pl)
            .ok_or_else(|| format!("seat {}: no tile to discard", seat))?;
        let is_drawn = pl.drawn == Some(d);
        self.players[seat].discard(d)?;
        debug!("seat {} discards {}", seat, d);
        self.events.push(Event::discard(seat, d, is_drawn));
        Ok(d)
    }

    // 打牌者の下家から順にポンの可否を確認 最初にポンした座席を返却
    fn resolve_claims(&mut self, seat: Seat, d: Tile) -> Res<Option<Seat>> {
        for i in 1..SEAT {
            let s = (seat + i) % SEAT;
            if !can_claim_triplet(&self.players[s].hand, d) {
                continue;
            }
            if !self.actors[s].select_pon(&self.players[s], d) {
                continue;
            }

            let meld = claim_triplet(&mut self.players[s].hand, d, seat)?;
            self.players[seat].discards.pop();
            debug!("seat {} claims {} from seat {}", s, meld, seat);
            self.players[s].melds.push(meld.clone());
            self.events.push(Event::meld(s, meld));
            return Ok(Some(s));
        }
        Ok(None)
    }
}

#[cfg(test)]
fn create_engine(seed: u64, name: &str) -> Engine {
    let actors = (0..SEAT)
        .map(|s| crate::actor::create_actor(name, seed + s as u64).unwrap())
        .collect();
    Engine::new(seed, actors).unwrap()
}

#[test]
fn test_engine_deal() {
    use crate::util::common::count_tiles;

    let mut e = create_engine(0, "last");
    e.deal();
    for pl in e.players() {
        assert_eq!(count_tiles(&pl.hand), HAND);
    }
    assert_eq!(e.wall_count(), N_TILE - HAND * SEAT);
    assert_eq!(e.count_all_tiles(), N_TILE);
}

#[test]
fn test_engine_run() {
    for name in ["last", "random"] {
        for seed in 0..20 {
            let mut e = create_engine(seed, name);
            let res = e.run().unwrap();
            assert_eq!(e.count_all_tiles(), N_TILE);

            match res {
                Some((seat, ctx)) => {
                    let pl = &e.players()[seat];
                    assert_eq!(pl.count_total(), WIN);
                    assert!(ctx.score >= 1);
                    assert!(matches!(e.events().last(), Some(Event::Win(_))));
                }
                None => {
                    assert_eq!(e.wall_count(), 0);
                    assert!(matches!(e.events().last(), Some(Event::Draw(_))));
                }
            }

            // 打牌後の手牌は鳴きを含めて13枚
            for pl in e.players() {
                let n = pl.count_total();
                assert!(n == HAND || n == WIN);
            }
        }
    }
}

#[test]
fn test_engine_claims() {
    // LastTileBotは常にポンするので,いずれかのシードで鳴きが発生する
    let mut n_meld = 0;
    for seed in 0..20 {
        let mut e = create_engine(seed, "last");
        e.run().unwrap();
        for ev in e.events() {
            if let Event::Meld(m) = ev {
                assert_eq!(m.meld.tiles[0], m.meld.tiles[2]);
                assert_ne!(m.seat, m.meld.from);
                n_meld += 1;
            }
        }
    }
    assert!(n_meld > 0);
}

#[test]
fn test_engine_events_json() {
    let mut e = create_engine(3, "random");
    e.run().unwrap();
    let s = serde_json::to_string(e.events()).unwrap();
    let events: Vec<Event> = serde_json::from_str(&s).unwrap();
    assert_eq!(events.len(), e.events().len());
    assert!(matches!(events[0], Event::New(_)));
}

#[test]
fn test_engine_actor_count() {
    let actors = vec![crate::actor::create_actor("last", 0).unwrap()];
    assert!(Engine::new(0, actors).is_err());
}
