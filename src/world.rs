// src/world.rs

use itertools::Itertools;

use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::EngineError;

/// World（ワールド）は、盤面にある全部の山を持っている中心的な存在だよ！🌍
///
/// 場札7つ、組札4つ、山札 (Stock)、捨て札 (Waste)、あふれ置き場 (Overflow)。
/// 52枚のカードは必ずこのどれか1つの山に1回だけ入っている。
/// カードを動かす操作は全部 `&mut World` 1回の呼び出しで完結するので、
/// 半分だけ動いた状態が外から見えることはないよ。
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    tableau: Vec<Pile>,
    foundations: Vec<Pile>,
    stock: Pile,
    waste: Pile,
    overflow: Pile,
}

impl World {
    /// 全部の山が空の World を作成するよ。
    pub fn new() -> Self {
        Self {
            tableau: (0..TABLEAU_COUNT as u8).map(|i| Pile::new(StackType::Tableau(i))).collect(),
            foundations: (0..FOUNDATION_COUNT as u8)
                .map(|i| Pile::new(StackType::Foundation(i)))
                .collect(),
            stock: Pile::new(StackType::Stock),
            waste: Pile::new(StackType::Waste),
            overflow: Pile::new(StackType::Overflow),
        }
    }

    /// 山ごとに組み立て済みの World を作る (保存データの復元用)。
    /// 52枚そろっているかはここでチェックして、ダメなら作らない。
    pub(crate) fn from_piles(
        tableau: Vec<Pile>,
        foundations: Vec<Pile>,
        stock: Pile,
        waste: Pile,
        overflow: Pile,
    ) -> Result<Self, EngineError> {
        if tableau.len() != TABLEAU_COUNT || foundations.len() != FOUNDATION_COUNT {
            return Err(EngineError::InvalidState(format!(
                "expected {} tableau and {} foundation piles, got {} and {}",
                TABLEAU_COUNT,
                FOUNDATION_COUNT,
                tableau.len(),
                foundations.len()
            )));
        }
        let world = Self { tableau, foundations, stock, waste, overflow };
        world.check_card_invariant()?;
        Ok(world)
    }

    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn overflow(&self) -> &Pile {
        &self.overflow
    }

    /// 指定された山を取得する。存在しない番号なら `UnknownPile`。
    pub fn pile(&self, stack_type: StackType) -> Result<&Pile, EngineError> {
        let pile = match stack_type {
            StackType::Tableau(i) => self.tableau.get(i as usize),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Overflow => Some(&self.overflow),
        };
        pile.ok_or(EngineError::UnknownPile(stack_type))
    }

    pub(crate) fn pile_mut(&mut self, stack_type: StackType) -> Result<&mut Pile, EngineError> {
        let pile = match stack_type {
            StackType::Tableau(i) => self.tableau.get_mut(i as usize),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Overflow => Some(&mut self.overflow),
        };
        pile.ok_or(EngineError::UnknownPile(stack_type))
    }

    pub(crate) fn tableau_mut(&mut self) -> &mut [Pile] {
        &mut self.tableau
    }

    /// 山札まわりの3つの山を同時に借りる (山札サイクル用)。
    pub(crate) fn stock_piles_mut(&mut self) -> (&mut Pile, &mut Pile, &mut Pile) {
        (&mut self.stock, &mut self.waste, &mut self.overflow)
    }

    /// 14個の山を `StackType::all()` と同じ順番で。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.waste, &self.overflow])
    }

    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// `from` の上から `count` 枚を `to` の上にそのまま移す。
    ///
    /// 先に両方の山の存在と枚数を確認してから動かすので、
    /// エラーの時は World は1枚も変わっていない。
    pub(crate) fn transfer(
        &mut self,
        from: StackType,
        to: StackType,
        count: usize,
    ) -> Result<(), EngineError> {
        if from == to {
            return Err(EngineError::InvalidState(format!("cannot move {:?} onto itself", from)));
        }
        let available = self.pile(from)?.len();
        self.pile(to)?;
        if count > available {
            return Err(EngineError::Range { requested: count, available });
        }
        let moving = self.pile_mut(from)?.take_suffix(count)?;
        self.pile_mut(to)?.append_sequence(moving);
        Ok(())
    }

    /// 52枚が1枚ずつ、ちょうど全部そろっているかチェックする。
    pub fn check_card_invariant(&self) -> Result<(), EngineError> {
        let ids: Vec<u8> = self.piles().flat_map(Pile::cards).map(Card::id).collect();
        let duplicates: Vec<u8> = ids.iter().copied().duplicates().sorted().collect();
        if !duplicates.is_empty() {
            return Err(EngineError::InvalidState(format!("duplicated cards: {:?}", duplicates)));
        }
        if ids.len() != DECK_SIZE {
            return Err(EngineError::InvalidState(format!(
                "expected {} cards, found {}",
                DECK_SIZE,
                ids.len()
            )));
        }
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
