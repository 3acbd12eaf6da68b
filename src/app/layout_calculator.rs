// src/app/layout_calculator.rs
//! Calculates where each card is drawn, and which card sits under a pixel.
//!
//! Pure geometry on top of `config::layout`. The engine itself never sees
//! coordinates; the host turns a click into (pile, index) here and passes that on.

use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::config::layout::{
    FOUNDATION_POS_X, FOUNDATION_START_Y, FOUNDATION_Y_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, TABLEAU_Y_OFFSET, WASTE_POS_X,
    WASTE_POS_Y, WASTE_Y_OFFSET,
};
use crate::config::rules::WASTE_VISIBLE;
use crate::world::World;

/// 山の土台 (空の時の枠、または一番下のカード) の位置。Overflow は画面に出ないので None。
pub fn pile_origin(stack_type: StackType) -> Option<Position> {
    match stack_type {
        StackType::Stock => Some(Position { x: STOCK_POS_X, y: STOCK_POS_Y }),
        StackType::Waste => Some(Position { x: WASTE_POS_X, y: WASTE_POS_Y }),
        StackType::Tableau(i) => Some(Position {
            x: TABLEAU_START_X + TABLEAU_X_OFFSET * i as f32,
            y: TABLEAU_START_Y,
        }),
        StackType::Foundation(i) => Some(Position {
            x: FOUNDATION_POS_X,
            y: FOUNDATION_START_Y + FOUNDATION_Y_OFFSET * i as f32,
        }),
        StackType::Overflow => None,
    }
}

/// スタックタイプとスタック内での順序から、カードの描画位置を計算します。
///
/// 見えないカード (Waste の4枚目より下や Overflow) は None。
/// 山札と組札は全部同じ位置に重なっている。
pub fn calculate_card_position(
    world: &World,
    stack_type: StackType,
    position_in_stack: usize,
) -> Option<Position> {
    let pile = world.pile(stack_type).ok()?;
    if position_in_stack >= pile.len() {
        return None;
    }
    let origin = pile_origin(stack_type)?;
    match stack_type {
        StackType::Tableau(_) => Some(Position {
            x: origin.x,
            y: origin.y + TABLEAU_Y_OFFSET * position_in_stack as f32,
        }),
        StackType::Waste => {
            let first_visible = pile.len().saturating_sub(WASTE_VISIBLE);
            let slot = position_in_stack.checked_sub(first_visible)?;
            Some(Position { x: origin.x, y: origin.y + WASTE_Y_OFFSET * slot as f32 })
        }
        _ => Some(origin),
    }
}

/// (x, y) の下にある一番手前のカードを探す。
///
/// 見つかったら (山, カードの index)。空の山の枠の上なら (山, None)。
/// どこにも当たらなければ None。山札 → 場札 → 捨て札 → 組札の順に調べるよ。
pub fn hit_test(world: &World, x: f32, y: f32) -> Option<(StackType, Option<usize>)> {
    let order = std::iter::once(StackType::Stock)
        .chain(world.tableau().iter().map(|p| p.stack_type()))
        .chain(std::iter::once(StackType::Waste))
        .chain(world.foundations().iter().map(|p| p.stack_type()));

    for stack_type in order {
        let Ok(pile) = world.pile(stack_type) else {
            continue;
        };
        if pile.is_empty() {
            if pile_origin(stack_type).is_some_and(|o| o.card_contains(x, y)) {
                return Some((stack_type, None));
            }
            continue;
        }
        // 上 (手前) のカードから順に
        let hit = (0..pile.len()).rev().find(|&i| {
            calculate_card_position(world, stack_type, i).is_some_and(|p| p.card_contains(x, y))
        });
        if let Some(index) = hit {
            return Some((stack_type, Some(index)));
        }
    }
    None
}
