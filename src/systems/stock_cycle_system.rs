// src/systems/stock_cycle_system.rs
//! Handles clicking the Stock pile: dealing to Waste and recycling Waste back.

use log::{debug, info};

use crate::logic::rules::stock_waste;
use crate::world::World;

/// `advance` が実際に何をしたか。ログと手数カウントに使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCycleOutcome {
    /// 山札から1枚めくった (めくったカードの id)。
    Dealt(u8),
    /// Overflow と Waste を山札に戻した (戻した枚数)。
    Recycled(usize),
    /// 何も動かなかった。
    Idle,
}

impl StockCycleOutcome {
    pub fn changed_anything(self) -> bool {
        !matches!(self, StockCycleOutcome::Idle)
    }
}

/// Advances the stock by one step.
///
/// 1. Stock has cards: its oldest (bottom) card goes face up onto Waste. If Waste
///    now shows more than three cards, the oldest one is pushed into Overflow.
/// 2. Stock is empty but Overflow is not: Overflow then Waste, each in its own
///    order, are stacked back onto Stock face down. Both end up empty.
/// 3. Otherwise nothing happens.
///
/// The recycle order is fixed, so a frozen seed always replays the same way.
pub fn advance(world: &mut World) -> StockCycleOutcome {
    let (stock, waste, overflow) = world.stock_piles_mut();

    if stock_waste::can_deal_from_stock(stock) {
        let Some(card) = stock.take_bottom() else {
            return StockCycleOutcome::Idle;
        };
        let id = card.id();
        debug!("  Dealing {} from Stock to Waste", card);
        waste.push(card);

        if stock_waste::waste_overflows(waste) {
            if let Some(oldest) = waste.take_bottom() {
                debug!("  Waste is full, {} goes to Overflow", oldest);
                overflow.push(oldest);
            }
        }
        stock.apply_visibility();
        return StockCycleOutcome::Dealt(id);
    }

    if stock_waste::can_recycle_waste(stock, overflow) {
        let recycled = overflow.len() + waste.len();
        stock.append_sequence(overflow.take_all());
        stock.append_sequence(waste.take_all());
        info!("Recycled {} cards from Overflow and Waste back to Stock", recycled);
        return StockCycleOutcome::Recycled(recycled);
    }

    debug!("  Stock cycle: nothing to deal or recycle");
    StockCycleOutcome::Idle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;
    use crate::components::stack::StackType;

    fn ids(cards: &[Card]) -> Vec<u8> {
        cards.iter().map(Card::id).collect()
    }

    /// 山札に ids を積んだ World。残りのカードは場札0列目に置いて52枚にそろえる。
    fn world_with_stock(stock_ids: &[u8]) -> World {
        let mut world = World::new();
        let rest: Vec<Card> = (0..52u8)
            .filter(|id| !stock_ids.contains(id))
            .map(|id| Card::new(id).unwrap())
            .collect();
        world.tableau_mut()[0].append_sequence(rest);
        let (stock, _, _) = world.stock_piles_mut();
        stock.append_sequence(stock_ids.iter().map(|&id| Card::new(id).unwrap()).collect());
        world
    }

    #[test]
    fn deals_oldest_card_face_up() {
        let mut world = world_with_stock(&[10, 11, 12]);
        assert_eq!(advance(&mut world), StockCycleOutcome::Dealt(10));
        assert_eq!(ids(world.waste().cards()), vec![10]);
        assert!(world.waste().cards().iter().all(Card::is_face_up));
        assert!(world.stock().cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn fourth_waste_card_pushes_oldest_into_overflow() {
        let mut world = world_with_stock(&[1, 2, 3, 4, 5]);
        for _ in 0..4 {
            advance(&mut world);
        }
        assert_eq!(ids(world.waste().cards()), vec![2, 3, 4]);
        assert_eq!(ids(world.overflow().cards()), vec![1]);
        assert!(world.overflow().cards().iter().all(|c| !c.is_face_up()));
        assert_eq!(ids(world.stock().cards()), vec![5]);
    }

    #[test]
    fn recycle_moves_overflow_then_waste_back_face_down() {
        // Waste に表向き3枚、山札は空、Overflow に5枚
        let mut world = World::new();
        let rest: Vec<Card> = (8..52u8).map(|id| Card::new(id).unwrap()).collect();
        world.tableau_mut()[0].append_sequence(rest);
        {
            let (_, waste, overflow) = world.stock_piles_mut();
            overflow.append_sequence((0..5u8).map(|id| Card::new(id).unwrap()).collect());
            waste.append_sequence((5..8u8).map(|id| Card::new(id).unwrap()).collect());
        }
        assert!(world.waste().cards().iter().all(Card::is_face_up));

        assert_eq!(advance(&mut world), StockCycleOutcome::Recycled(8));
        assert_eq!(ids(world.stock().cards()), vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert!(world.stock().cards().iter().all(|c| !c.is_face_up()));
        assert!(world.waste().is_empty());
        assert!(world.overflow().is_empty());
        assert!(world.check_card_invariant().is_ok());
    }

    #[test]
    fn small_stock_without_overflow_is_idle_when_exhausted() {
        let mut world = world_with_stock(&[30, 31]);
        advance(&mut world);
        advance(&mut world);
        let before = world.clone();
        assert_eq!(advance(&mut world), StockCycleOutcome::Idle);
        assert_eq!(world, before);
        assert_eq!(world.pile(StackType::Waste).unwrap().len(), 2);
    }

    #[test]
    fn stock_cycle_has_period_of_stock_size_plus_one() {
        let stock_ids: Vec<u8> = (20..44).collect();
        let mut world = world_with_stock(&stock_ids);
        let start = world.clone();

        for step in 0..stock_ids.len() {
            assert!(matches!(advance(&mut world), StockCycleOutcome::Dealt(_)), "step {}", step);
            assert!(world.check_card_invariant().is_ok());
            assert!(world.waste().len() <= 3);
        }
        assert!(world.stock().is_empty());
        assert!(!world.waste().is_empty(), "山札が尽きた時点では Waste は空じゃない");

        assert_eq!(advance(&mut world), StockCycleOutcome::Recycled(stock_ids.len()));
        assert!(world.waste().is_empty() && world.overflow().is_empty());
        assert_eq!(world, start, "一周したら並びも表裏も最初と同じに戻る");
    }
}
