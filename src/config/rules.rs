// src/config/rules.rs
//! クロンダイクの盤面サイズやルール上の定数をまとめておくよ！🃏
//! 数字をコードのあちこちに直書きしないで、ここから使うこと！

/// デッキのカード枚数。id は 0..DECK_SIZE の範囲になる。
pub const DECK_SIZE: usize = 52;

/// 1スートあたりのランク数 (A..K)。
pub const RANKS_PER_SUIT: u8 = 13;

/// 場札 (Tableau) の列数。
pub const TABLEAU_COUNT: usize = 7;

/// 組札 (Foundation) の数。スートごとに1つ。
pub const FOUNDATION_COUNT: usize = 4;

/// 捨て札 (Waste) に表向きで見せておく最大枚数。
/// これを超えた古いカードは Overflow に押し出されるよ。
pub const WASTE_VISIBLE: usize = 3;

/// セーブデータのフォーマットバージョン。
pub const SAVE_FORMAT_VERSION: u32 = 1;
