// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::selection::Selection;
use crate::components::stack::StackType;
use crate::error::EngineError;
use crate::logic::rules::can_place;
use crate::world::World;

/// カード移動の結果。ルール違反は「エラー」じゃなくて `Rejected` だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied { from: StackType, to: StackType, count: usize },
    Rejected,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 選択中のカード列 (`selection`) を `destination` に動かせるかルールでチェックして、
/// OK なら World の中で1回で付け替える。
/// 元の山は表示ポリシーで新しい一番上が表になる。
///
/// `Err` になるのは存在しない山を指定された時だけ。その場合も World は変わらない。
pub fn try_move(
    world: &mut World,
    selection: &Selection,
    destination: StackType,
) -> Result<MoveOutcome, EngineError> {
    let source = world.pile(selection.source)?;
    let target = world.pile(destination)?;

    if !selection.is_current(source) {
        debug!("  Selection {:?} is stale, discarding it", selection);
        return Ok(MoveOutcome::Rejected);
    }
    if selection.source == destination {
        debug!("  Self-move onto {:?} rejected", destination);
        return Ok(MoveOutcome::Rejected);
    }

    let moving = &source.cards()[selection.start..];
    if !can_place(moving, target) {
        debug!(
            "  ルール違反！ {} ({} cards) cannot go onto {:?}",
            moving[0], selection.count, destination
        );
        return Ok(MoveOutcome::Rejected);
    }

    world.transfer(selection.source, destination, selection.count)?;
    info!("Moved {} card(s) {:?} -> {:?}", selection.count, selection.source, destination);
    Ok(MoveOutcome::Applied { from: selection.source, to: destination, count: selection.count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;

    /// 場札0列目に [A♠(裏), 2♥(表)]、場札1列目に 3♣、場札2列目は空、残りは山札。
    fn sample_world() -> World {
        let mut world = World::new();
        let pick = |ids: &[u8]| ids.iter().map(|&id| Card::new(id).unwrap()).collect::<Vec<_>>();
        for card in pick(&[0, 27]) {
            world.tableau_mut()[0].push(card);
        }
        world.tableau_mut()[1].push(Card::new(15).unwrap());
        let used = [0u8, 27, 15];
        let rest: Vec<u8> = (0..52u8).filter(|id| !used.contains(id)).collect();
        let (stock, _, _) = world.stock_piles_mut();
        stock.append_sequence(pick(&rest));
        world
    }

    #[test]
    fn legal_move_transfers_and_reveals_source() {
        let mut world = sample_world();
        let selection = Selection::suffix_of(world.pile(StackType::Tableau(0)).unwrap(), 1).unwrap();

        let outcome = try_move(&mut world, &selection, StackType::Tableau(1)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Applied { from: StackType::Tableau(0), to: StackType::Tableau(1), count: 1 }
        );
        assert_eq!(world.tableau()[1].top().map(Card::id), Some(27));
        assert_eq!(world.tableau()[0].len(), 1);
        assert!(world.tableau()[0].top().unwrap().is_face_up(), "A♠ がめくれるはず");
        assert!(world.check_card_invariant().is_ok());
    }

    #[test]
    fn illegal_move_leaves_world_untouched() {
        let mut world = sample_world();
        let before = world.clone();
        let selection = Selection::suffix_of(world.pile(StackType::Tableau(1)).unwrap(), 0).unwrap();

        // 3♣ は空の列にも (K じゃない) 組札にも (A じゃない) 置けない
        for dest in [StackType::Tableau(2), StackType::Foundation(0), StackType::Waste] {
            assert_eq!(try_move(&mut world, &selection, dest).unwrap(), MoveOutcome::Rejected);
        }
        assert_eq!(world, before);
    }

    #[test]
    fn self_move_and_stale_selection_are_rejected() {
        let mut world = sample_world();
        let selection = Selection::suffix_of(world.pile(StackType::Tableau(0)).unwrap(), 1).unwrap();
        assert_eq!(try_move(&mut world, &selection, StackType::Tableau(0)).unwrap(), MoveOutcome::Rejected);

        let mut stale = selection;
        stale.start = 0;
        assert_eq!(try_move(&mut world, &stale, StackType::Tableau(1)).unwrap(), MoveOutcome::Rejected);
    }

    #[test]
    fn unknown_destination_is_an_error() {
        let mut world = sample_world();
        let selection = Selection::suffix_of(world.pile(StackType::Tableau(0)).unwrap(), 1).unwrap();
        assert_eq!(
            try_move(&mut world, &selection, StackType::Foundation(4)),
            Err(EngineError::UnknownPile(StackType::Foundation(4)))
        );
    }
}
