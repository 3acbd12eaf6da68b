// src/systems/win_condition_system.rs
use log::info;

use crate::components::game_state::{GameSignal, GameStatus};
use crate::logic::rules::check_win_condition;
use crate::world::World;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 勝利条件を満たした最初の1回だけ `status` を `Won` にして `GameWon` を返す。
/// 一度 Won になったら、何度呼んでももう合図は出さないよ。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn run(&self, world: &World, status: &mut GameStatus) -> Option<GameSignal> {
        if *status != GameStatus::Playing {
            return None;
        }
        if check_win_condition(world) {
            info!("WinConditionSystem: 勝利条件達成！🏆");
            *status = GameStatus::Won;
            return Some(GameSignal::GameWon);
        }
        None
    }
}
