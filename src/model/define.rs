// 型エイリアス
pub type Seat = usize; // 座席
pub type Tnum = usize; // 牌の数字部分 (1~9)
pub type Index = usize; // その他Index
pub type Score = i32; // 和了得点

// Number
pub const SEAT: usize = 4; // 座席の数
pub const SUIT: usize = 3; // 牌の種別の数 (萬子,条子,筒子)
pub const TNUM: usize = 10; // 牌の数字部分の配列長 (0は未使用, 1~9)
pub const TILE: usize = 4; // 同種の牌の数
pub const N_TILE: usize = SUIT * 9 * TILE; // 牌の総数 (108枚)
pub const HAND: usize = 13; // 配牌の枚数
pub const WIN: usize = 14; // 和了形の枚数 (鳴きを含む)
pub const SETS: usize = 4; // 和了形の面子数

pub const NO_SEAT: Seat = SEAT; // 座席なし
