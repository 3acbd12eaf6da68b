// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod world;

// よく使う型はここから直接使えるようにしておく
pub use app::game_app::SolitaireApp;
pub use components::{Card, ElapsedTime, GameSignal, GameStatus, Pile, PileRole, Rank, StackType, Suit};
pub use error::{EngineError, SaveError};
pub use game::Game;
pub use protocol::{GameStateData, SavedGame};
pub use world::World;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log::info!("Panic hook set!");
}
