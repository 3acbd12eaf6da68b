// src/components/position.rs

// serde を使う宣言！描画側に座標を渡す時に使うよ！
use serde::{Serialize, Deserialize};

use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};

/// 2D空間での位置を表す構造体だよ！ (x, y) はカード画像の左上。📍
///
/// エンジン本体は座標を持たない。ヒット判定 (app::layout_calculator) と
/// 描画側だけが使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// この位置に置いたカード1枚分の矩形に (px, py) が入ってるか？
    /// 右端・下端は含まない。
    pub fn card_contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + CARD_WIDTH && py >= self.y && py < self.y + CARD_HEIGHT
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_rect_contains_inner_points_only() {
        let pos = Position { x: 100.0, y: 50.0 };
        assert!(pos.card_contains(100.0, 50.0));
        assert!(pos.card_contains(199.0, 194.0));
        assert!(!pos.card_contains(200.0, 60.0), "右端は含まない");
        assert!(!pos.card_contains(150.0, 49.0));
    }
}
