// src/logic/deck.rs

use crate::components::card::Card;
use crate::config::rules::DECK_SIZE;
use rand::{rngs::StdRng, seq::SliceRandom, thread_rng, Rng, SeedableRng};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// id 0..52 の順番で、すべて裏向き (`is_face_up: false`)。
pub fn create_standard_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8).filter_map(|id| Card::new(id).ok()).collect()
}

/// カードデッキをシャッフルする関数だよ。
///
/// 同じ `seed` なら必ず同じ並びになる。テストで配り方を固定したい時に便利！
pub fn shuffle_deck(deck: &mut [Card], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed); // シード付きの乱数生成器
    deck.shuffle(&mut rng); // デッキをシャッフル！
}

/// 「新しいゲーム」用のシードを OS の乱数から作る。
pub fn random_seed() -> u64 {
    thread_rng().gen()
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique: HashSet<u8> = deck.iter().map(Card::id).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| !card.is_face_up()), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = create_standard_deck();
        let mut b = create_standard_deck();
        shuffle_deck(&mut a, 42);
        shuffle_deck(&mut b, 42);
        let ids = |deck: &[Card]| deck.iter().map(Card::id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_shuffle_deck_changes_order() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        shuffle_deck(&mut shuffled_deck, 7);

        // 52枚が全部元の位置に残る確率は無視できるほど小さい
        let unchanged = initial_deck
            .iter()
            .zip(&shuffled_deck)
            .all(|(a, b)| a.id() == b.id());
        assert!(!unchanged, "シャッフルしても順番が変わってない");
        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");
    }
}
