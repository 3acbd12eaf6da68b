// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードやスタックの座標、オフセットなど。
//! エンジン本体は座標を一切知らなくて、ヒット判定 (app::layout_calculator) だけが使う。

pub const CARD_WIDTH: f32 = 100.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 145.0; // カード画像の高さ

pub const BOARD_WIDTH: f32 = 1200.0;
pub const BOARD_HEIGHT: f32 = 800.0;

// --- 各エリアの開始位置 (左上原点、y は下向き) ---
pub const STOCK_POS_X: f32 = 20.0; // 山札のX座標
pub const STOCK_POS_Y: f32 = 10.0; // 山札のY座標

pub const WASTE_POS_X: f32 = 20.0; // 捨て札置き場のX座標
pub const WASTE_POS_Y: f32 = 185.0; // 捨て札置き場のY座標
pub const WASTE_Y_OFFSET: f32 = 40.0; // 捨て札は縦にずらして3枚見せる

pub const TABLEAU_START_X: f32 = 190.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 10.0; // 場札の開始Y座標
pub const TABLEAU_X_OFFSET: f32 = 120.0; // 場札の列間のX方向の間隔
pub const TABLEAU_Y_OFFSET: f32 = 40.0; // 場札のカードの重なり具合

pub const FOUNDATION_POS_X: f32 = 1080.0; // 組札 (Foundation) のX座標
pub const FOUNDATION_START_Y: f32 = 40.0; // 組札の開始Y座標
pub const FOUNDATION_Y_OFFSET: f32 = 165.0; // 組札どうしのY方向の間隔
