//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::card::Card;
use crate::world::World;

/// 山札・捨て札・Overflow が全部空で、場札のカードが全部表向きなら勝ち！🏆
///
/// 隠れているカードが1枚もなければ、残りは組札に順番に積んでいくだけなので、
/// この時点でクリア確定として扱うよ。
pub fn check_win_condition(world: &World) -> bool {
    world.stock().is_empty()
        && world.waste().is_empty()
        && world.overflow().is_empty()
        && world
            .tableau()
            .iter()
            .flat_map(|pile| pile.cards())
            .all(Card::is_face_up)
}
