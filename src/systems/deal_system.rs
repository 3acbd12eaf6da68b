// src/systems/deal_system.rs

use log::{debug, info};

use crate::logic::deck::{create_standard_deck, shuffle_deck}; // デッキ操作関数を logic::deck からインポート
use crate::world::World;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// シャッフルしたデッキから新しい盤面を作る関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 新しいカードデッキ (52枚、全部裏向き) を作って、`seed` でシャッフルする。
    /// 2. 場札 (Tableau) 7列に、1列目は1枚、2列目は2枚、... 7列目は7枚配る。
    ///    `push` するたびに TopOnly がかかるので、各列の一番上だけ表向きになる。👀
    /// 3. 残りの24枚は全部山札 (Stock) へ。裏向きのまま。
    ///
    /// 同じ `seed` なら必ず同じ盤面になるよ。
    pub fn deal(&self, seed: u64) -> World {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, seed);
        debug!("🃏 デッキ作成完了！ ({}枚, seed={})", deck.len(), seed);

        let mut world = World::new();
        let mut cards = deck.into_iter();

        for (tableau_index, column) in world.tableau_mut().iter_mut().enumerate() {
            for card in cards.by_ref().take(tableau_index + 1) {
                column.push(card);
            }
        }

        let (stock, _, _) = world.stock_piles_mut();
        stock.append_sequence(cards.collect());

        info!(
            "Dealt new game (seed={}): {} cards in tableau, {} in stock",
            seed,
            world.tableau().iter().map(|p| p.len()).sum::<usize>(),
            world.stock().len()
        );
        world
    }
}
