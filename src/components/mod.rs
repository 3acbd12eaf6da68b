// src/components/mod.rs

// ゲームの部品 (データ型) をまとめるモジュールだよ！
pub mod card;
pub mod stack;
pub mod selection;
pub mod game_state;
pub mod position;

pub use card::{Card, CardColor, Rank, Suit};
pub use stack::{Pile, PileRole, StackType, VisibilityPolicy};
pub use selection::{InteractionState, Selection};
pub use game_state::{ElapsedTime, GameSignal, GameStatus};
pub use position::Position;
