use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinContext {
    pub hand: Vec<Tile>,                  // 和了手牌(鳴きは含まない, 和了牌を含む)
    pub melds: Vec<Meld>,                 // 鳴き
    pub winning_tile: Tile,               // 和了牌
    pub is_self_drawn: bool,              // ツモ和了
    pub decomposition: Decomposition,     // 採用した和了形の分解
    pub bonuses: Vec<String>,             // 加点の一覧
    pub score: Score,                     // 和了得点 (基本点1 + 加点)
}

impl fmt::Display for WinContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "winning tile: {}{}",
            self.winning_tile,
            if self.is_self_drawn { " (self-drawn)" } else { "" }
        )?;
        writeln!(f, "decomposition: {}", self.decomposition)?;
        writeln!(f, "bonuses: [{}]", self.bonuses.join(", "))?;
        write!(f, "score: {}", self.score)
    }
}
