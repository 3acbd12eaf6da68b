// src/config/mod.rs
//! 設定値 (定数) のモジュール。

pub mod layout;
pub mod rules;
