// src/systems/mod.rs
//! 盤面 (World) を書き換える処理をまとめるモジュールだよ！⚙️

pub mod deal_system;
pub mod move_card_system;
pub mod stock_cycle_system;
pub mod win_condition_system;
