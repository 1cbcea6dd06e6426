use super::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    New(EventNew),         // 局開始 (配牌)
    Deal(EventDeal),       // ツモ
    Discard(EventDiscard), // 打牌
    Meld(EventMeld),       // 鳴き
    Win(EventWin),         // 局終了 (和了)
    Draw(EventDraw),       // 局終了 (牌山切れ 得点の移動なし)
}

impl Event {
    pub fn new(seed: u64, hands: [Vec<Tile>; SEAT], wall_count: usize) -> Self {
        Self::New(EventNew {
            seed,
            hands,
            wall_count,
        })
    }

    pub fn deal(seat: Seat, tile: Tile) -> Self {
        Self::Deal(EventDeal { seat, tile })
    }

    pub fn discard(seat: Seat, tile: Tile, is_drawn: bool) -> Self {
        Self::Discard(EventDiscard {
            seat,
            tile,
            is_drawn,
        })
    }

    pub fn meld(seat: Seat, meld: Meld) -> Self {
        Self::Meld(EventMeld { seat, meld })
    }

    pub fn win(seat: Seat, context: WinContext) -> Self {
        Self::Win(EventWin { seat, context })
    }

    pub fn draw(hands: [Vec<Tile>; SEAT]) -> Self {
        Self::Draw(EventDraw { hands })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventNew {
    pub seed: u64,                // 牌山のシード値
    pub hands: [Vec<Tile>; SEAT], // 各プレイヤーの配牌(13枚)
    pub wall_count: usize,        // 牌山残り枚数
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile, // ツモ牌
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
    pub is_drawn: bool, // ツモ切り
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMeld {
    pub seat: Seat,
    pub meld: Meld,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWin {
    pub seat: Seat,
    pub context: WinContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraw {
    pub hands: [Vec<Tile>; SEAT],
}
