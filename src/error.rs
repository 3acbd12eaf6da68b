// src/error.rs
//! エンジンとセーブデータ周りのエラー型だよ。
//!
//! ルール違反の手 (置けない場所をクリックした等) はエラーじゃないので、ここには出てこない！
//! ここにあるのは「構造が壊れてる」系の失敗だけ。

use std::fmt;

use crate::components::stack::StackType;

/// エンジン内部の構造違反。発生した操作だけが中断され、ゲームは直前の状態のまま残る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 山にある枚数より多くのカードを取り出そうとした。
    Range { requested: usize, available: usize },
    /// 0..52 の範囲外のカード id。
    InvalidCardId(u8),
    /// 存在しない山 (Tableau(9) とか)。
    UnknownPile(StackType),
    /// クリックされたインデックスが山の枚数を超えている。
    IndexOutOfRange { pile: StackType, index: usize, len: usize },
    /// 52枚が1枚ずつ、という不変条件などが崩れた状態。
    InvalidState(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { requested, available } => {
                write!(f, "cannot take {} cards from a pile of {}", requested, available)
            }
            Self::InvalidCardId(id) => write!(f, "invalid card id: {}", id),
            Self::UnknownPile(stack_type) => write!(f, "unknown pile: {:?}", stack_type),
            Self::IndexOutOfRange { pile, index, len } => {
                write!(f, "index {} out of range for {:?} holding {} cards", index, pile, len)
            }
            Self::InvalidState(reason) => write!(f, "invalid game state: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}

/// セーブデータの読み書きで起きるエラー。
#[derive(Debug)]
pub enum SaveError {
    /// JSON として読めない / 書けない。
    Json(serde_json::Error),
    /// 保存されているチェックサムと中身が一致しない (壊れてる or 書き換えられた)。
    ChecksumMismatch { expected: String, actual: String },
    UnsupportedVersion(u32),
    /// 中身はパースできたけど、ゲームとして成立しない。
    Invalid(EngineError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed save data: {}", e),
            Self::ChecksumMismatch { expected, actual } => {
                write!(f, "save checksum mismatch: expected {}, got {}", expected, actual)
            }
            Self::UnsupportedVersion(v) => write!(f, "unsupported save format version: {}", v),
            Self::Invalid(e) => write!(f, "save data rejected: {}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<EngineError> for SaveError {
    fn from(e: EngineError) -> Self {
        Self::Invalid(e)
    }
}
