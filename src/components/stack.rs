// src/components/stack.rs

// serde を使うためにインポート！Serialize と Deserialize トレイトを使うよ。
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::error::EngineError;

/// どの山 (Pile) かを指す識別子だよ。
/// カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。4つある (0-3)。
    Foundation(u8),
    /// 山札 (DrawPile)。裏向きのまま、プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (WastePile)。最大3枚見える。
    Waste,
    /// Waste からあふれた古いカードの置き場。表示されないし、ここから直接は取れない。
    Overflow,
}

impl StackType {
    pub fn role(self) -> PileRole {
        match self {
            StackType::Tableau(_) => PileRole::Tableau,
            StackType::Foundation(_) => PileRole::Foundation,
            StackType::Stock => PileRole::DrawPile,
            StackType::Waste => PileRole::WastePile,
            StackType::Overflow => PileRole::OverflowWaste,
        }
    }

    /// 盤面にある 14 個の山を、描画や保存で使う決まった順番で列挙する。
    pub fn all() -> impl Iterator<Item = StackType> {
        (0..TABLEAU_COUNT as u8)
            .map(StackType::Tableau)
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain([StackType::Stock, StackType::Waste, StackType::Overflow])
    }
}

/// 山の役割。表示ポリシーとルール判定はこれで決まる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileRole {
    Tableau,
    Foundation,
    DrawPile,
    WastePile,
    OverflowWaste,
}

impl PileRole {
    pub fn visibility_policy(self) -> VisibilityPolicy {
        match self {
            PileRole::Tableau => VisibilityPolicy::TopOnly,
            PileRole::Foundation | PileRole::WastePile => VisibilityPolicy::AllFaceUp,
            PileRole::DrawPile | PileRole::OverflowWaste => VisibilityPolicy::AllFaceDown,
        }
    }
}

/// 山の中のカードをどっち向きにするかのルール。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// 一番上だけ表。配った直後の場札。
    TopOnly,
    AllFaceUp,
    AllFaceDown,
}

/// カードの山だよ！ index 0 が一番下 (古い)、最後が一番上 (手前)。
///
/// カードの表裏は外から直接いじれない。山の構成が変わるたびに
/// 役割ごとの [`VisibilityPolicy`] がかけ直される。
///
/// `TopOnly` のかけ方は2通りある:
/// - `push` (配る時) は厳密版: 一番上以外を全部裏にする。
/// - `append_sequence` / `take_suffix` の後は「一番上を表にする」だけ。
///   すでに表になっている列を裏に戻すことはしない。
///
/// なので場札の裏向きカードは常に下側にまとまっていて、一番上は必ず表。
#[derive(Debug, Clone)]
pub struct Pile {
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    /// 保存データから山を組み立て直す。場札だけは保存された表裏を尊重する
    /// (一番上は必ず表にする)。それ以外は役割のポリシーで揃える。
    pub(crate) fn restore(stack_type: StackType, cards: Vec<Card>) -> Self {
        let mut pile = Self { stack_type, cards };
        pile.reveal();
        pile
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn role(&self) -> PileRole {
        self.stack_type.role()
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.role().visibility_policy()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上に1枚積んで、ポリシーをかけ直す。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.apply_visibility();
    }

    /// 上から `n` 枚を元の並び順のまま取り出す。
    /// 枚数が足りなければ `EngineError::Range` で、山は変わらない。
    pub fn take_suffix(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        let available = self.cards.len();
        if n > available {
            return Err(EngineError::Range { requested: n, available });
        }
        let taken = self.cards.split_off(available - n);
        self.reveal();
        Ok(taken)
    }

    /// 一番下 (一番古い) の1枚を取り出す。山札をめくる時に使う。
    pub fn take_bottom(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let card = self.cards.remove(0);
        self.reveal();
        Some(card)
    }

    /// 全部取り出して空にする。
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// 並び順を保ったまま上に積む。
    pub fn append_sequence(&mut self, sequence: Vec<Card>) {
        self.cards.extend(sequence);
        self.reveal();
    }

    /// ポリシーの厳密版をかける。空の山では何もしない。
    pub fn apply_visibility(&mut self) {
        let Some(last) = self.cards.len().checked_sub(1) else {
            return;
        };
        match self.policy() {
            VisibilityPolicy::TopOnly => {
                for (i, card) in self.cards.iter_mut().enumerate() {
                    card.set_face_up(i == last);
                }
            }
            VisibilityPolicy::AllFaceUp => self.cards.iter_mut().for_each(|c| c.set_face_up(true)),
            VisibilityPolicy::AllFaceDown => self.cards.iter_mut().for_each(|c| c.set_face_up(false)),
        }
    }

    /// 構成が変わった後のかけ直し。TopOnly は一番上をめくるだけ。
    fn reveal(&mut self) {
        match self.policy() {
            VisibilityPolicy::TopOnly => {
                if let Some(top) = self.cards.last_mut() {
                    top.set_face_up(true);
                }
            }
            VisibilityPolicy::AllFaceUp | VisibilityPolicy::AllFaceDown => self.apply_visibility(),
        }
    }
}

/// 山どうしの比較は表裏まで見る。`Card` の `==` は id だけなので、
/// ここで (id, 表裏) を並びごと比べる。
impl PartialEq for Pile {
    fn eq(&self, other: &Self) -> bool {
        self.stack_type == other.stack_type
            && self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(&other.cards)
                .all(|(a, b)| a.id() == b.id() && a.is_face_up() == b.is_face_up())
    }
}
