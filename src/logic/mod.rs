// src/logic/mod.rs
//! 盤面を書き換えない判定ロジック (ルール) と、デッキ操作。

pub mod deck;
pub mod rules;
