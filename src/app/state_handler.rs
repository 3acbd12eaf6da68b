// src/app/state_handler.rs
//! ゲームの状態をセーブデータにしたり、セーブデータから戻したりするロジック。

use log::{info, warn};

use crate::components::card::Card;
use crate::components::stack::{Pile, PileRole, StackType};
use crate::config::rules::{SAVE_FORMAT_VERSION, WASTE_VISIBLE};
use crate::error::{EngineError, SaveError};
use crate::game::Game;
use crate::protocol::{SavedCard, SavedGame};
use crate::world::World;

fn save_pile(pile: &Pile) -> Vec<SavedCard> {
    pile.cards()
        .iter()
        .map(|card| SavedCard { id: card.id(), face_up: card.is_face_up() })
        .collect()
}

/// 今のゲームを保存用のデータにする。選択状態は保存しない。
pub fn capture(game: &Game) -> SavedGame {
    let world = game.world();
    SavedGame {
        version: SAVE_FORMAT_VERSION,
        tableau: world.tableau().iter().map(save_pile).collect(),
        foundations: world.foundations().iter().map(save_pile).collect(),
        stock: save_pile(world.stock()),
        waste: save_pile(world.waste()),
        overflow: save_pile(world.overflow()),
        move_count: game.move_count(),
        elapsed: game.elapsed(),
    }
}

/// 保存された1つの山を組み立て直す。id が範囲外ならエラー。
fn restore_pile(stack_type: StackType, saved: &[SavedCard]) -> Result<Pile, EngineError> {
    let cards = saved
        .iter()
        .map(|s| {
            let mut card = Card::new(s.id)?;
            card.set_face_up(s.face_up);
            Ok(card)
        })
        .collect::<Result<Vec<Card>, EngineError>>()?;

    // 場札の裏向きカードは下側にまとまっていないといけない
    if stack_type.role() == PileRole::Tableau
        && !cards.iter().skip_while(|c| !c.is_face_up()).all(Card::is_face_up)
    {
        return Err(EngineError::InvalidState(format!(
            "{:?} has a face-down card above a face-up one",
            stack_type
        )));
    }
    match stack_type.role() {
        PileRole::Foundation => check_foundation_run(stack_type, &cards)?,
        PileRole::WastePile if cards.len() > WASTE_VISIBLE => {
            return Err(EngineError::InvalidState(format!(
                "waste holds {} cards, at most {} allowed",
                cards.len(),
                WASTE_VISIBLE
            )));
        }
        _ => {}
    }
    Ok(Pile::restore(stack_type, cards))
}

/// 組札は A から1つずつ、同じスートで積まれていないといけない。
fn check_foundation_run(stack_type: StackType, cards: &[Card]) -> Result<(), EngineError> {
    let Some(first) = cards.first() else {
        return Ok(());
    };
    let broken = cards
        .iter()
        .enumerate()
        .find(|(i, c)| c.suit() != first.suit() || usize::from(c.rank().value()) != *i);
    match broken {
        Some((i, card)) => Err(EngineError::InvalidState(format!(
            "{:?} has {} at position {}",
            stack_type, card, i
        ))),
        None => Ok(()),
    }
}

/// セーブデータからゲームを組み立て直す。
///
/// 52枚が1枚ずつそろっていない、山の数が違う、などの時は `SaveError::Invalid` で、
/// ゲームは作られない。
pub fn restore(saved: &SavedGame) -> Result<Game, SaveError> {
    if saved.version != SAVE_FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion(saved.version));
    }
    if saved.elapsed.seconds >= 60 {
        return Err(SaveError::Invalid(EngineError::InvalidState(format!(
            "elapsed seconds out of range: {}",
            saved.elapsed.seconds
        ))));
    }

    let world = build_world(saved).map_err(|e| {
        warn!("Refusing to load save: {}", e);
        SaveError::Invalid(e)
    })?;
    info!(
        "Restored saved game ({} moves, {} elapsed)",
        saved.move_count, saved.elapsed
    );
    Ok(Game::from_parts(world, saved.move_count, saved.elapsed))
}

fn build_world(saved: &SavedGame) -> Result<World, EngineError> {
    let tableau = saved
        .tableau
        .iter()
        .zip(0u8..)
        .map(|(cards, i)| restore_pile(StackType::Tableau(i), cards))
        .collect::<Result<Vec<_>, _>>()?;
    let foundations = saved
        .foundations
        .iter()
        .zip(0u8..)
        .map(|(cards, i)| restore_pile(StackType::Foundation(i), cards))
        .collect::<Result<Vec<_>, _>>()?;

    World::from_piles(
        tableau,
        foundations,
        restore_pile(StackType::Stock, &saved.stock)?,
        restore_pile(StackType::Waste, &saved.waste)?,
        restore_pile(StackType::Overflow, &saved.overflow)?,
    )
}
