// src/app/mod.rs
//! エンジンの外側、ホスト (ブラウザ) とつなぐ側のロジックを役割ごとに分けて置くモジュールだよ！

pub mod event_handler;
pub mod game_app;
pub mod layout_calculator;
pub mod state_getter;
pub mod state_handler;
