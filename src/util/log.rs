// ログは標準エラー出力に [LEVEL](ファイル名:行番号) を添えて出力
// debugレベルは環境変数 MAHJONG_DEBUG が設定されている場合のみ

use std::sync::OnceLock;

pub fn is_debug_enabled() -> bool {
    static DEBUG: OnceLock<bool> = OnceLock::new();
    *DEBUG.get_or_init(|| std::env::var_os("MAHJONG_DEBUG").is_some())
}

#[doc(hidden)]
#[macro_export]
macro_rules! log_with_level {
    ($level:expr, $($arg:tt)*) => {
        eprintln!(
            "[{}]({}:{}) {}",
            $level,
            file!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log_with_level!("ERROR", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log_with_level!("WARN", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log_with_level!("INFO", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::is_debug_enabled() {
            $crate::log_with_level!("DEBUG", $($arg)*)
        }
    };
}
