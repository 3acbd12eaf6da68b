// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にして描画側に渡す時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::config::rules::{DECK_SIZE, RANKS_PER_SUIT};
use crate::error::EngineError;

/// カードのスート（マーク）を表す列挙型だよ！♠️♣️❤️♦️
///
/// 並び順は id の割り振りと同じ！ `suit = id / 13` で
/// 0: Spade, 1: Club, 2: Heart, 3: Diamond になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Club,    // ♣️
    Heart,   // ❤️
    Diamond, // ♦️
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    /// スートからカードの色を取得する関数。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red, // ハートとダイヤは赤！♦️❤️
            Suit::Club | Suit::Spade => CardColor::Black,  // クラブとスペードは黒！♣️♠️
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `rank = id % 13` なので Ace は 0、King は 12 として扱うよ。
/// PartialOrd, Ord も付けて大小比較できるようにしておく！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
    ];

    /// 0 (Ace) ～ 12 (King) の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
/// 場札 (Tableau) への移動ルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// カードそのものだよ！🃏
///
/// - `id`: 0..52 の通し番号。ランクとスートはここから計算する (保存しない)。
/// - `is_face_up`: 表向きかどうか。山 (Pile) の表示ポリシーが書き換える。
///
/// 同一性は id だけで決まる！ 表裏が違っても同じカードだよ。
/// 1枚のカードは常にどれか1つの山だけが持っている (コピーして増やさない)。
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    id: u8,
    is_face_up: bool,
}

impl Card {
    /// id からカードを作る。最初は裏向き。範囲外の id はエラー！
    pub fn new(id: u8) -> Result<Self, EngineError> {
        if (id as usize) < DECK_SIZE {
            Ok(Self { id, is_face_up: false })
        } else {
            Err(EngineError::InvalidCardId(id))
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.id % RANKS_PER_SUIT) as usize]
    }

    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.id / RANKS_PER_SUIT) as usize]
    }

    pub fn color(&self) -> CardColor {
        self.suit().color()
    }

    /// 2枚が同じ色 (黒同士 or 赤同士) か？
    pub fn same_color(&self, other: &Card) -> bool {
        self.color() == other.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.is_face_up = face_up;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// ログ用の短い表記 (例: `Q♥`)。
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().label(), self.suit().symbol())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*; // 上で定義した Suit, Rank, Card を使う

    #[test]
    fn rank_and_suit_are_derived_from_id() {
        let ace_of_spades = Card::new(0).unwrap();
        assert_eq!(ace_of_spades.rank(), Rank::Ace);
        assert_eq!(ace_of_spades.suit(), Suit::Spade);

        let king_of_clubs = Card::new(25).unwrap();
        assert_eq!(king_of_clubs.rank(), Rank::King);
        assert_eq!(king_of_clubs.suit(), Suit::Club);

        let queen_of_diamonds = Card::new(50).unwrap();
        assert_eq!(queen_of_diamonds.rank(), Rank::Queen);
        assert_eq!(queen_of_diamonds.suit(), Suit::Diamond);
        assert_eq!(queen_of_diamonds.to_string(), "Q♦");
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        assert_eq!(Card::new(52), Err(EngineError::InvalidCardId(52)));
        assert!(Card::new(51).is_ok());
    }

    #[test]
    fn new_card_starts_face_down() {
        let mut card = Card::new(7).unwrap();
        assert!(!card.is_face_up());
        card.set_face_up(true);
        assert!(card.is_face_up());
    }

    #[test]
    fn equality_is_by_id_only() {
        let mut a = Card::new(13).unwrap();
        let b = Card::new(13).unwrap();
        a.set_face_up(true);
        assert_eq!(a, b, "表裏が違っても同じカード");
        assert_ne!(a, Card::new(14).unwrap());
    }

    #[test]
    fn same_color_groups_black_and_red() {
        let spade = Card::new(0).unwrap(); // A♠
        let club = Card::new(13).unwrap(); // A♣
        let heart = Card::new(26).unwrap(); // A♥
        let diamond = Card::new(39).unwrap(); // A♦

        assert!(spade.same_color(&club));
        assert!(heart.same_color(&diamond));
        assert!(!spade.same_color(&heart));
        assert!(!diamond.same_color(&club));
    }

    #[test]
    fn rank_comparison() {
        // ランクの大小比較がちゃんとできるか確認
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::King.value(), 12);
        assert_eq!(Rank::Ace.value(), 0);
    }
}
