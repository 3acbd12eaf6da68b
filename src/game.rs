// src/game.rs
//! 1ゲーム分の状態をまとめて持つエンジン本体だよ！🎮
//!
//! 盤面 (`World`)、クリックの状態機械、手数、経過時間、勝敗。
//! 外から触れる入口は `new_game` / `on_click` / `state` の3つと、
//! セーブ・タイマー用の `from_saved` / `set_elapsed`。

use log::{info, warn};

use crate::app::{event_handler, state_handler};
use crate::components::game_state::{ElapsedTime, GameSignal, GameStatus};
use crate::components::selection::InteractionState;
use crate::components::stack::StackType;
use crate::error::{EngineError, SaveError};
use crate::protocol::{CardData, GameStateData, PileData, SavedGame};
use crate::systems::deal_system::DealInitialCardsSystem;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::world::World;

#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    interaction: InteractionState,
    status: GameStatus,
    move_count: u32,
    elapsed: ElapsedTime,
}

impl Game {
    /// `seed` で配り直した新しいゲーム。同じ seed なら同じ配り方になる。
    pub fn new_game(seed: u64) -> Self {
        info!("Game: starting new game with seed {}", seed);
        Self::from_parts(DealInitialCardsSystem.deal(seed), 0, ElapsedTime::default())
    }

    /// 復元済みの盤面からゲームを組み立てる。選択状態は持ち越さない。
    ///
    /// 盤面がもう勝利条件を満たしていたら、合図は出さずに `Won` から始まる。
    pub(crate) fn from_parts(world: World, move_count: u32, elapsed: ElapsedTime) -> Self {
        let mut status = GameStatus::Playing;
        if WinConditionSystem.run(&world, &mut status).is_some() {
            info!("Game: restored a board that is already won");
        }
        Self { world, interaction: InteractionState::Idle, status, move_count, elapsed }
    }

    /// セーブデータから再開する。中身がおかしければゲームは作られない。
    pub fn from_saved(saved: &SavedGame) -> Result<Self, SaveError> {
        state_handler::restore(saved)
    }

    pub fn to_saved(&self) -> SavedGame {
        state_handler::capture(self)
    }

    /// 山 `pile` の `index` 番目 (None は空の場所や山の土台) がクリックされた。
    ///
    /// 戻り値はホストへの合図。何も変わらなかったら空っぽ。
    /// `Err` の時、ゲームはクリック前の状態のまま。
    pub fn on_click(
        &mut self,
        pile: StackType,
        index: Option<usize>,
    ) -> Result<Vec<GameSignal>, EngineError> {
        let outcome = match event_handler::handle_click(
            &mut self.world,
            &mut self.interaction,
            pile,
            index,
        ) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Game: click on {:?} {:?} failed: {}", pile, index, e);
                return Err(e);
            }
        };

        let mut signals = Vec::new();
        if outcome.counts_as_move() {
            self.move_count += 1;
        }
        if outcome.changed_state() {
            signals.push(GameSignal::StateChanged);
        }
        signals.extend(WinConditionSystem.run(&self.world, &mut self.status));
        Ok(signals)
    }

    /// 描画用のスナップショット。
    pub fn state(&self) -> GameStateData {
        let piles = self
            .world
            .piles()
            .map(|pile| PileData {
                stack_type: pile.stack_type(),
                cards: pile
                    .cards()
                    .iter()
                    .map(|card| CardData {
                        id: card.id(),
                        suit: card.suit(),
                        rank: card.rank(),
                        is_face_up: card.is_face_up(),
                    })
                    .collect(),
            })
            .collect();

        GameStateData {
            piles,
            selection: self.interaction.selection().copied(),
            move_count: self.move_count,
            elapsed: self.elapsed,
            status: self.status,
        }
    }

    /// ホストのタイマーが測った経過時間をしまう。
    pub fn set_elapsed(&mut self, elapsed: ElapsedTime) {
        self.elapsed = elapsed;
    }

    /// 1秒進める。
    pub fn tick(&mut self) {
        self.elapsed.tick();
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;

    /// 場札0列目の一番上 (表) を選んで、合図と選択状態を見る。
    #[test]
    fn selecting_a_card_signals_a_redraw_only() {
        let mut game = Game::new_game(7);
        let signals = game.on_click(StackType::Tableau(0), Some(0)).unwrap();
        assert_eq!(signals, vec![GameSignal::StateChanged]);
        assert!(game.state().selection.is_some());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn stock_clicks_count_as_moves() {
        let mut game = Game::new_game(7);
        game.on_click(StackType::Stock, None).unwrap();
        game.on_click(StackType::Stock, None).unwrap();
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.world().waste().len(), 2);
    }

    #[test]
    fn clicking_a_face_down_card_emits_nothing() {
        let mut game = Game::new_game(7);
        let signals = game.on_click(StackType::Tableau(6), Some(0)).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn failed_click_keeps_game_unchanged() {
        let mut game = Game::new_game(3);
        let before = game.state();
        assert!(game.on_click(StackType::Tableau(2), Some(10)).is_err());
        assert_eq!(game.state(), before);
    }

    #[test]
    fn snapshot_lists_fourteen_piles_in_order() {
        let game = Game::new_game(11);
        let state = game.state();
        let order: Vec<StackType> = state.piles.iter().map(|p| p.stack_type).collect();
        assert_eq!(order, StackType::all().collect::<Vec<_>>());
        assert_eq!(state.pile(StackType::Stock).map(|p| p.cards.len()), Some(24));
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn last_card_to_foundation_wins_once() {
        // 場札4列に K..2 を表向きで並べ、エース4枚だけ山札に残した盤面
        let mut world = World::new();
        for (column, suit) in world.tableau_mut().iter_mut().zip(0..4u8) {
            let cards: Vec<Card> = (1..13u8)
                .rev()
                .map(|rank| {
                    let mut card = Card::new(suit * 13 + rank).unwrap();
                    card.set_face_up(true);
                    card
                })
                .collect();
            column.append_sequence(cards);
        }
        {
            let (stock, _, _) = world.stock_piles_mut();
            stock.append_sequence((0..4u8).map(|suit| Card::new(suit * 13).unwrap()).collect());
        }
        assert!(world.check_card_invariant().is_ok());
        let mut game = Game::from_parts(world, 0, ElapsedTime::default());
        assert_eq!(game.status(), GameStatus::Playing);

        // めくったエースをすぐ空いている組札へ
        let mut signals = Vec::new();
        for foundation in 0..4u8 {
            signals.extend(game.on_click(StackType::Stock, None).unwrap());
            signals.extend(game.on_click(StackType::Waste, Some(0)).unwrap());
            signals.extend(game.on_click(StackType::Foundation(foundation), None).unwrap());
        }
        assert_eq!(signals.iter().filter(|s| **s == GameSignal::GameWon).count(), 1);
        assert_eq!(signals.last(), Some(&GameSignal::GameWon));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.move_count(), 8);

        // 勝った後にクリックしても、もう GameWon は出ない
        let again = game.on_click(StackType::Tableau(0), Some(11)).unwrap();
        assert!(!again.contains(&GameSignal::GameWon));
    }
}
