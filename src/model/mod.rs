// 麻雀のデータモデル
mod define;
mod event;
mod meld;
mod player;
mod set_pair;
mod tile;
mod win_context;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use event::*;
pub use meld::*;
pub use player::*;
pub use set_pair::*;
pub use tile::*;
pub use win_context::*;
