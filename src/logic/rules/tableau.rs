//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;
use super::common::{bottom_card, is_next_rank};

/// `moving` (下から上の順のカード列) を場札 `target` の上に置けるかチェックする。
///
/// - 空の列: 一番下が表向きのキング (K) なら置ける。🤴
/// - カードがある列: 一番下が表向きで、移動先の一番上より1つ小さく、色が違えば置ける。❤️🖤
pub fn can_move_to_tableau(moving: &[Card], target: &Pile) -> bool {
    let Some(bottom) = bottom_card(moving) else {
        return false;
    };
    if !bottom.is_face_up() {
        return false;
    }
    match target.top() {
        None => bottom.rank() == Rank::King,
        Some(target_top) => is_next_rank(bottom, target_top) && !bottom.same_color(target_top),
    }
}
