use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SetPairType {
    Pair,    // 雀頭
    Triplet, // 刻子 (手牌内)
    Run,     // 順子
    Pon,     // ポン (晒した刻子)
}

// Tileは順子の場合は先頭(最小)の牌
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SetPair(pub SetPairType, pub Tile);

impl SetPair {
    pub fn tiles(&self) -> Vec<Tile> {
        let SetPair(tp, t) = *self;
        match tp {
            SetPairType::Pair => vec![t, t],
            SetPairType::Triplet | SetPairType::Pon => vec![t, t, t],
            SetPairType::Run => vec![t, Tile(t.0, t.1 + 1), Tile(t.0, t.1 + 2)],
        }
    }
}

impl fmt::Display for SetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles = self.tiles();
        write!(f, "{}", tiles[0].0.to_char())?;
        for t in &tiles {
            write!(f, "{}", t.1)?;
        }
        if self.0 == SetPairType::Pon {
            write!(f, "+")?;
        }
        Ok(())
    }
}

// 和了形の分解 (雀頭1つ + 面子4つ)
// 面子は晒した面子(Pon)を含み,種別と牌の順に整列済み
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub pair: Tile,
    pub groups: Vec<SetPair>,
}

impl Decomposition {
    pub fn new(pair: Tile, mut groups: Vec<SetPair>) -> Self {
        groups.sort();
        Self { pair, groups }
    }

    // 雀頭と面子のすべての牌
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = SetPair(SetPairType::Pair, self.pair).tiles();
        for g in &self.groups {
            tiles.extend(g.tiles());
        }
        tiles
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SetPair(SetPairType::Pair, self.pair))?;
        for g in &self.groups {
            write!(f, " {}", g)?;
        }
        Ok(())
    }
}

#[test]
fn test_decomposition_tiles() {
    let d = Decomposition::new(
        Tile(Suit::B, 9),
        vec![
            SetPair(SetPairType::Run, Tile(Suit::B, 6)),
            SetPair(SetPairType::Triplet, Tile(Suit::B, 1)),
            SetPair(SetPairType::Pon, Tile(Suit::W, 5)),
            SetPair(SetPairType::Run, Tile(Suit::B, 2)),
        ],
    );
    assert_eq!(d.tiles().len(), WIN);
    assert_eq!(d.to_string(), "b99 b111 b234 b678 w555+");
}
