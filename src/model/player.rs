use super::*;
use crate::hand::HandError;
use crate::util::common::{count_tile, dec_tile, inc_tile, tiles_from_tile_table};
use crate::util::misc::vec_to_string;

#[derive(Debug, Default, Clone, Serialize)]
pub struct Player {
    pub seat: Seat,          // 座席番号
    pub hand: TileTable,     // 手牌(3x10の配列)
    pub drawn: Option<Tile>, // ツモ牌
    pub melds: Vec<Meld>,    // 鳴き一覧
    pub discards: Vec<Tile>, // 捨て牌一覧 (鳴かれた牌は含まない)
}

impl Player {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            ..Default::default()
        }
    }

    #[inline]
    pub fn count_tile(&self, t: Tile) -> usize {
        count_tile(&self.hand, t)
    }

    // 手牌の枚数 (鳴きは含まない)
    pub fn count_hand(&self) -> usize {
        self.hand.iter().map(|r| r.iter().sum::<usize>()).sum()
    }

    // 鳴きを含めた枚数 (打牌後13枚, ツモ・鳴き直後14枚)
    pub fn count_total(&self) -> usize {
        self.count_hand() + 3 * self.melds.len()
    }

    pub fn draw(&mut self, t: Tile) {
        inc_tile(&mut self.hand, t);
        self.drawn = Some(t);
    }

    pub fn discard(&mut self, t: Tile) -> Result<(), HandError> {
        if self.count_tile(t) == 0 {
            return Err(HandError::TileNotInHand(t));
        }
        dec_tile(&mut self.hand, t);
        self.discards.push(t);
        self.drawn = None;
        Ok(())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drawn = if let Some(d) = self.drawn {
            d.to_string()
        } else {
            "None".to_string()
        };
        writeln!(f, "seat: {}, drawn: {}", self.seat, drawn)?;
        writeln!(f, "hand: {}", vec_to_string(&tiles_from_tile_table(&self.hand)))?;
        writeln!(f, "melds: {}", vec_to_string(&self.melds))?;
        write!(f, "discards: {}", vec_to_string(&self.discards))
    }
}

#[test]
fn test_player_draw_discard() {
    let mut pl = Player::new(1);
    let t = Tile(Suit::T, 4);
    pl.draw(t);
    pl.draw(t);
    assert_eq!(pl.count_tile(t), 2);
    assert_eq!(pl.drawn, Some(t));

    pl.discard(t).unwrap();
    assert_eq!(pl.count_hand(), 1);
    assert_eq!(pl.discards, vec![t]);
    assert_eq!(pl.drawn, None);

    let missing = Tile(Suit::B, 4);
    assert_eq!(pl.discard(missing), Err(HandError::TileNotInHand(missing)));
    assert_eq!(pl.count_hand(), 1);
}
