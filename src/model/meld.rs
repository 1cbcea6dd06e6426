use super::*;

// 鳴きはポンのみ (チー・カンは存在しない)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Pon,
}

// 晒した面子 生成後は不変
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: [Tile; 3],
    pub from: Seat, // 鳴いた牌を捨てた座席 (不明の場合はNO_SEAT)
}

impl Meld {
    pub fn pon(tile: Tile, from: Seat) -> Self {
        Self {
            meld_type: MeldType::Pon,
            tiles: [tile; 3],
            from,
        }
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.tiles[0];
        write!(f, "{}", t.0.to_char())?;
        for t in &self.tiles {
            write!(f, "{}", t.1)?;
        }
        if self.from != NO_SEAT {
            write!(f, "({})", self.from)?;
        }
        Ok(())
    }
}
