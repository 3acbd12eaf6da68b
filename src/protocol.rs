// src/protocol.rs

// このファイルは、エンジンと外の世界 (描画側・セーブファイル) の間で
// やり取りするデータの形式を定義するよ！💌
// JSON にしたり JSON から戻したりするために `serde` を使う。
use serde::{Serialize, Deserialize};
use sha2::{Digest, Sha256};

use crate::components::card::{Rank, Suit};
use crate::components::game_state::{ElapsedTime, GameStatus};
use crate::components::selection::Selection;
use crate::components::stack::StackType;
use crate::config::rules::SAVE_FORMAT_VERSION;
use crate::error::SaveError;

// --- 描画側に渡すスナップショット ---

/// ゲームの現在の状態をまるごと表すデータ構造。描画側はこれだけ見れば描ける！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameStateData {
    /// 14個の山。`StackType::all()` の順番。
    pub piles: Vec<PileData>,
    /// 選択中のカード列 (ハイライト表示用)。
    pub selection: Option<Selection>,
    pub move_count: u32,
    pub elapsed: ElapsedTime,
    pub status: GameStatus,
}

impl GameStateData {
    pub fn pile(&self, stack_type: StackType) -> Option<&PileData> {
        self.piles.iter().find(|p| p.stack_type == stack_type)
    }
}

/// 山1つ分の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PileData {
    pub stack_type: StackType,
    /// 下から上の順。
    pub cards: Vec<CardData>,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardData {
    /// 0..52 の通し番号。描画側はこれでテクスチャを選ぶ。
    pub id: u8,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

// --- セーブデータ ---

/// セーブファイルの中身。`game` を JSON にした文字列の SHA-256 を `checksum` に入れておく。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveFile {
    pub checksum: String,
    pub game: SavedGame,
}

/// 保存するゲーム状態。選択状態は保存しない。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedGame {
    pub version: u32,
    pub tableau: Vec<Vec<SavedCard>>,
    pub foundations: Vec<Vec<SavedCard>>,
    pub stock: Vec<SavedCard>,
    pub waste: Vec<SavedCard>,
    pub overflow: Vec<SavedCard>,
    pub move_count: u32,
    pub elapsed: ElapsedTime,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCard {
    pub id: u8,
    pub face_up: bool,
}

/// `game` 部分の JSON から計算したチェックサム (小文字16進)。
fn checksum_of(body: &str) -> String {
    Sha256::digest(body.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// セーブデータを JSON 文字列にする。
pub fn encode_save(game: &SavedGame) -> Result<String, SaveError> {
    let body = serde_json::to_string(game)?;
    let file = SaveFile { checksum: checksum_of(&body), game: game.clone() };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// JSON 文字列からセーブデータを読む。
///
/// 読めるかどうか、チェックサム、バージョンまでをここで確認する。
/// 52枚そろっているか等の中身のチェックは `Game::from_saved` がやるよ。
pub fn decode_save(text: &str) -> Result<SavedGame, SaveError> {
    let file: SaveFile = serde_json::from_str(text)?;
    let actual = checksum_of(&serde_json::to_string(&file.game)?);
    if actual != file.checksum {
        return Err(SaveError::ChecksumMismatch { expected: file.checksum, actual });
    }
    if file.game.version != SAVE_FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion(file.game.version));
    }
    Ok(file.game)
}
