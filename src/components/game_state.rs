// src/components/game_state.rs

// serde を使う宣言！ゲーム状態を保存したり描画側に渡したりするよ！
use serde::{Serialize, Deserialize};
use std::fmt;

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    #[default]
    Playing,
    /// 勝利！🏆 一度こうなったら Playing には戻らない。
    Won,
}

/// エンジンがホスト側 (描画・ウィンドウ) に向けて出す合図。
///
/// エンジンはホストを直接呼び出さない。`on_click` の戻り値としてこれを返すので、
/// ホストは見て好きに反応する (再描画、「勝ったよ！」ダイアログ、新しいゲーム…)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSignal {
    /// 山か選択状態が変わったので描き直してね。
    StateChanged,
    /// 勝利条件を満たした。1ゲームにつき1回だけ出る。
    GameWon,
}

/// 経過時間 (分:秒)。
///
/// 時間を数えるのはホストのタイマー。エンジンは保存して見せるだけだよ。⏱️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ElapsedTime {
    pub minutes: u32,
    pub seconds: u8,
}

impl ElapsedTime {
    /// 1秒進める。59秒の次は分が繰り上がる。
    pub fn tick(&mut self) {
        if self.seconds >= 59 {
            self.seconds = 0;
            self.minutes += 1;
        } else {
            self.seconds += 1;
        }
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

/// `3:07` みたいな表示。ラベル用。
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}
