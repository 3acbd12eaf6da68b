// src/app/event_handler.rs
//! クリック1回分を処理する状態機械だよ！🖱️
//!
//! `Idle` (何も選んでない) と `Armed` (カード列を選択中) の2状態。
//! どんなクリックも、解決したら `Idle` に戻るか、新しく `Armed` になるかのどっちか。

use log::{debug, info};

use crate::components::selection::{InteractionState, Selection};
use crate::components::stack::{PileRole, StackType};
use crate::error::EngineError;
use crate::systems::move_card_system::{try_move, MoveOutcome};
use crate::systems::stock_cycle_system::{advance, StockCycleOutcome};
use crate::world::World;

/// クリックがどう解決されたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 山札をクリックした。選択中だったなら選択は解除される。
    Stock { outcome: StockCycleOutcome, cleared_selection: bool },
    /// カード列を選択した (Idle → Armed)。
    Armed(Selection),
    /// 選択中に移動先をクリックした (Armed → Idle)。ルール違反なら `Rejected`。
    Resolved(MoveOutcome),
    /// 裏向きのカード、空の場所、Overflow など。何も起きない。
    Ignored,
}

impl ClickOutcome {
    /// 山の中身か選択状態が変わったか？ (描き直しが要るか)
    pub fn changed_state(&self) -> bool {
        match self {
            ClickOutcome::Stock { outcome, cleared_selection } => {
                outcome.changed_anything() || *cleared_selection
            }
            ClickOutcome::Armed(_) | ClickOutcome::Resolved(_) => true,
            ClickOutcome::Ignored => false,
        }
    }

    /// 手数に数えるか？ 実際にカードが動いた時だけ。
    pub fn counts_as_move(&self) -> bool {
        match self {
            ClickOutcome::Stock { outcome, .. } => outcome.changed_anything(),
            ClickOutcome::Resolved(MoveOutcome::Applied { .. }) => true,
            _ => false,
        }
    }
}

/// 山 `target` の `index` 番目 (None なら空の場所や山そのもの) がクリックされた時の処理。
///
/// 山と index を先にチェックするので、`Err` の時は World も `interaction` も変わらない。
pub fn handle_click(
    world: &mut World,
    interaction: &mut InteractionState,
    target: StackType,
    index: Option<usize>,
) -> Result<ClickOutcome, EngineError> {
    let pile = world.pile(target)?;
    if let Some(i) = index {
        if i >= pile.len() {
            return Err(EngineError::IndexOutOfRange { pile: target, index: i, len: pile.len() });
        }
    }

    // 山札は選択中かどうかに関係なく、めくる (or 戻す) だけ。
    if target == StackType::Stock {
        let cleared_selection = interaction.selection().is_some();
        let outcome = advance(world);
        *interaction = InteractionState::Idle;
        return Ok(ClickOutcome::Stock { outcome, cleared_selection });
    }

    match *interaction {
        InteractionState::Idle => {
            let Some(selection) = selection_at(world, target, index)? else {
                debug!("  Nothing selectable at {:?} {:?}", target, index);
                return Ok(ClickOutcome::Ignored);
            };
            debug!("  Armed: {} card(s) from {:?}", selection.count, selection.source);
            *interaction = InteractionState::Armed(selection);
            Ok(ClickOutcome::Armed(selection))
        }
        InteractionState::Armed(selection) => {
            let outcome = try_move(world, &selection, target)?;
            if outcome == MoveOutcome::Rejected {
                info!("Move onto {:?} rejected, selection cleared", target);
            }
            *interaction = InteractionState::Idle;
            Ok(ClickOutcome::Resolved(outcome))
        }
    }
}

/// Idle の時にクリックした場所から選べるカード列。選べないなら None。
///
/// - 場札: クリックしたカードが表向きなら、そこから一番上まで。
/// - 捨て札: 一番上のカードだけ。
/// - 組札: どこをクリックしても一番上のカード。
/// - 山札・Overflow: 選べない。
pub fn selection_at(
    world: &World,
    target: StackType,
    index: Option<usize>,
) -> Result<Option<Selection>, EngineError> {
    let pile = world.pile(target)?;
    let top_index = pile.len().checked_sub(1);

    let start = match pile.role() {
        PileRole::Tableau => index.filter(|&i| pile.get(i).is_some_and(|c| c.is_face_up())),
        PileRole::WastePile => index.filter(|&i| Some(i) == top_index),
        PileRole::Foundation => top_index,
        PileRole::DrawPile | PileRole::OverflowWaste => None,
    };
    Ok(start.and_then(|i| Selection::suffix_of(pile, i)))
}
