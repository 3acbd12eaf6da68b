//! カード移動の全体的な妥当性チェックを行う。

use crate::components::card::Card;
use crate::components::stack::{Pile, PileRole};
use super::{foundation, tableau};

/// `moving` を `destination` に置けるか。
///
/// 何も書き換えない純粋な関数なので、同じ引数なら何度呼んでも同じ答えになる。
/// 山札・捨て札・Overflow は手動の移動先には絶対ならない (山札サイクルだけが動かす)。
pub fn can_place(moving: &[Card], destination: &Pile) -> bool {
    match destination.role() {
        PileRole::Tableau => tableau::can_move_to_tableau(moving, destination),
        PileRole::Foundation => foundation::can_move_to_foundation(moving, destination),
        PileRole::DrawPile | PileRole::WastePile | PileRole::OverflowWaste => false,
    }
}
