use serde::{de, ser};

use super::*;
use crate::util::misc::Res;

// [Suit]
// 萬子(w), 条子(t), 筒子(b) の3種のみ 字牌は存在しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    W, // 萬子 (characters)
    T, // 条子 (bamboos)
    B, // 筒子 (circles)
}

impl Suit {
    pub const ALL: [Suit; SUIT] = [Suit::W, Suit::T, Suit::B];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_char(ch: char) -> Res<Self> {
        match ch {
            'w' => Ok(Suit::W),
            't' => Ok(Suit::T),
            'b' => Ok(Suit::B),
            _ => Err(format!("invalid suit char: {}", ch))?,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::W => 'w',
            Suit::T => 't',
            Suit::B => 'b',
        }
    }
}

// [Tile]
// 比較は(種別, 数字)の順
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub Suit, pub Tnum);

impl Tile {
    pub fn from_symbol(s: &str) -> Res<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            Err(format!("invalid tile symbol: '{}'", s))?;
        }
        let t = Suit::from_char(chars[0])?;
        let n = tile_number_from_char(chars[1])?;
        Ok(Self(t, n))
    }

    // 同じ種別で数字が1つ大きい牌 (9の次は存在しない)
    #[inline]
    pub fn next(self) -> Option<Self> {
        if self.1 < 9 {
            Some(Self(self.0, self.1 + 1))
        } else {
            None
        }
    }
}

pub fn tile_number_from_char(ch: char) -> Res<Tnum> {
    match ch.to_digit(10) {
        Some(n) if (1..=9).contains(&n) => Ok(n as Tnum),
        _ => Err(format!("invalid tile number char: {}", ch))?,
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.to_char(), self.1)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// [TileTable]
// 手牌を牌種ごとの枚数で表現 (index 0は未使用)
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; SUIT];

#[test]
fn test_tile_symbol() {
    let t = Tile::from_symbol("t7").unwrap();
    assert_eq!(t, Tile(Suit::T, 7));
    assert_eq!(t.to_string(), "t7");
    assert!(Tile::from_symbol("t0").is_err());
    assert!(Tile::from_symbol("z1").is_err());
    assert!(Tile::from_symbol("b").is_err());
}

#[test]
fn test_tile_order() {
    let mut tiles = vec![Tile(Suit::B, 1), Tile(Suit::W, 9), Tile(Suit::T, 3), Tile(Suit::W, 2)];
    tiles.sort();
    assert_eq!(
        tiles,
        vec![Tile(Suit::W, 2), Tile(Suit::W, 9), Tile(Suit::T, 3), Tile(Suit::B, 1)]
    );
    assert_eq!(Tile(Suit::B, 8).next(), Some(Tile(Suit::B, 9)));
    assert_eq!(Tile(Suit::B, 9).next(), None);
}

#[test]
fn test_tile_serde() {
    let tiles = vec![Tile(Suit::W, 1), Tile(Suit::B, 9)];
    let s = serde_json::to_string(&tiles).unwrap();
    assert_eq!(s, r#"["w1","b9"]"#);
    let tiles2: Vec<Tile> = serde_json::from_str(&s).unwrap();
    assert_eq!(tiles, tiles2);
    assert!(serde_json::from_str::<Tile>(r#""w0""#).is_err());
}
