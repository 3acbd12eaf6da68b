// src/components/selection.rs

use serde::{Deserialize, Serialize};

use crate::components::stack::{Pile, StackType};

/// 選択中のカード列だよ！🖱️🃏
///
/// 選ばれるのはいつも「ある山の上から n 枚」(suffix)。
/// 選んだ後に元の山が変わったら、その選択はもう古いので使わない。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// どの山から選んだか。
    pub source: StackType,
    /// 選んだ列の一番下のカードの位置 (山の中の index)。
    pub start: usize,
    /// 何枚選んだか。
    pub count: usize,
    /// 選んだ列の一番下のカードの id。古くなってないかの確認用。
    pub bottom_card: u8,
}

impl Selection {
    /// `pile` の `start` 番目から一番上までを選ぶ。`start` が範囲外なら None。
    pub fn suffix_of(pile: &Pile, start: usize) -> Option<Self> {
        let bottom = pile.get(start)?;
        Some(Self {
            source: pile.stack_type(),
            start,
            count: pile.len() - start,
            bottom_card: bottom.id(),
        })
    }

    /// 選んだ時から `pile` が変わっていないか？
    pub fn is_current(&self, pile: &Pile) -> bool {
        pile.stack_type() == self.source
            && self.count > 0
            && pile.len() == self.start + self.count
            && pile.get(self.start).map(|c| c.id()) == Some(self.bottom_card)
    }
}

/// クリック操作の状態機械。
/// `Idle` (何も選んでない) → `Armed` (選択中) → クリックが解決したら必ず `Idle` に戻る。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Armed(Selection),
}

impl InteractionState {
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            InteractionState::Idle => None,
            InteractionState::Armed(selection) => Some(selection),
        }
    }
}
