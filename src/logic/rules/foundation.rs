//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::is_next_rank;

/// `moving` を組札 `target` に置けるかチェックする。
///
/// 組札には1枚ずつしか置けない。
/// 空ならエース (A) だけ、カードがあれば同じスートで1つ大きいランクだけ。👑
pub fn can_move_to_foundation(moving: &[Card], target: &Pile) -> bool {
    let [card] = moving else {
        return false;
    };
    match target.top() {
        None => card.rank() == Rank::Ace,
        Some(target_top) => card.suit() == target_top.suit() && is_next_rank(target_top, card),
    }
}
