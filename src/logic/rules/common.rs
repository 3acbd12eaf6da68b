//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// 動かそうとしている列の一番下のカード (移動先のカードと接するカード)。
pub(crate) fn bottom_card(moving: &[Card]) -> Option<&Card> {
    moving.first()
}

/// `upper` のランクが `lower` のちょうど1つ上か？ (例: lower が J なら upper は Q)
pub(crate) fn is_next_rank(lower: &Card, upper: &Card) -> bool {
    lower.rank().value() + 1 == upper.rank().value()
}
