#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下のclippy警告は無効化
#![allow(clippy::needless_range_loop)]
#![allow(clippy::collapsible_else_if)]

pub mod actor;
pub mod app;
pub mod control;
pub mod hand;
pub mod model;
pub mod util;
