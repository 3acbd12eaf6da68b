//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::stack::Pile;
use crate::config::rules::WASTE_VISIBLE;

/// 山札から捨て札に1枚めくれるか。
pub fn can_deal_from_stock(stock: &Pile) -> bool {
    !stock.is_empty()
}

/// 山札が空の時に、Overflow と Waste を山札に戻せるか。
/// Overflow が空 (= 全部で3枚以下) の時は戻しても並びが変わらないので何もしない。
pub fn can_recycle_waste(stock: &Pile, overflow: &Pile) -> bool {
    stock.is_empty() && !overflow.is_empty()
}

/// 捨て札があふれているか (見せられる枚数を超えたか)。
pub fn waste_overflows(waste: &Pile) -> bool {
    waste.len() > WASTE_VISIBLE
}
