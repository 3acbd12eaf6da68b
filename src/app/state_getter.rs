//! Gets the current game state and converts it to JSON for the host.

use log::{debug, error};
use serde::Serialize;

use crate::app::layout_calculator::calculate_card_position;
use crate::components::position::Position;
use crate::components::stack::StackType;
use crate::game::Game;

/// 画面に置くカード1枚分。描画側はこのリストを順番に描けばいい (後ろほど手前)。
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlacedCard {
    pub id: u8,
    pub stack_type: StackType,
    pub position_in_stack: usize,
    pub is_face_up: bool,
    pub is_selected: bool,
    pub position: Position,
}

/// スナップショットを JSON 文字列にする。
pub fn get_game_state_json(game: &Game) -> Result<String, serde_json::Error> {
    serde_json::to_string(&game.state()).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}

/// 見えているカードを描画位置つきで並べる。
pub fn placed_cards(game: &Game) -> Vec<PlacedCard> {
    let world = game.world();
    let selection = game.interaction().selection();
    let mut placed = Vec::new();

    for pile in world.piles() {
        let stack_type = pile.stack_type();
        for (i, card) in pile.cards().iter().enumerate() {
            let Some(position) = calculate_card_position(world, stack_type, i) else {
                continue;
            };
            let is_selected =
                selection.is_some_and(|s| s.source == stack_type && i >= s.start);
            placed.push(PlacedCard {
                id: card.id(),
                stack_type,
                position_in_stack: i,
                is_face_up: card.is_face_up(),
                is_selected,
                position,
            });
        }
    }
    debug!("Placed {} visible cards", placed.len());
    placed
}

pub fn get_layout_json(game: &Game) -> Result<String, serde_json::Error> {
    serde_json::to_string(&placed_cards(game))
}
