// src/app/game_app.rs

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::app::{layout_calculator, state_getter};
use crate::components::game_state::GameSignal;
use crate::components::stack::StackType;
use crate::game::Game;
use crate::logic::deck::random_seed;
use crate::protocol::{decode_save, encode_save};

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
//
// JavaScript 側はこれ1つを持って、クリック・タイマー・セーブ/ロードを全部ここに投げる。
// 描画は JS 側の仕事。`get_state_json` / `get_layout_json` を読んで描いてね。
#[wasm_bindgen]
pub struct SolitaireApp {
    game: Arc<Mutex<Game>>,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// ランダムなシードで新しいゲームを始める。
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_seed(random_seed())
    }

    /// シードを指定して始める (同じシードなら同じ配り方)。
    pub fn with_seed(seed: u64) -> Self {
        info!("SolitaireApp: Initializing with seed {}", seed);
        Self { game: Arc::new(Mutex::new(Game::new_game(seed))) }
    }

    /// 今のゲームを捨てて配り直す。
    pub fn new_game(&self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(random_seed);
        *self.lock_game() = Game::new_game(seed);
        info!("SolitaireApp: New game dealt (seed={})", seed);
    }

    /// 画面上の (x, y) をクリックした。出た合図を JSON 配列で返す。
    /// カードにも枠にも当たらなければ `[]`。
    pub fn click_at(&self, x: f32, y: f32) -> Result<String, JsValue> {
        let mut game = self.lock_game();
        let Some((stack_type, index)) = layout_calculator::hit_test(game.world(), x, y) else {
            return Ok("[]".to_string());
        };
        let signals = game.on_click(stack_type, index).map_err(to_js_error)?;
        signals_json(&signals)
    }

    /// 山と index を直接指定してクリックする。`stack_type_json` は `"Stock"` や `{"Tableau":3}`。
    pub fn click_pile(&self, stack_type_json: &str, index: Option<u32>) -> Result<String, JsValue> {
        let stack_type: StackType = serde_json::from_str(stack_type_json).map_err(to_js_error)?;
        let signals = self
            .lock_game()
            .on_click(stack_type, index.map(|i| i as usize))
            .map_err(to_js_error)?;
        signals_json(&signals)
    }

    /// ホストのタイマーから1秒ごとに呼ばれる。
    pub fn tick_timer(&self) {
        self.lock_game().tick();
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_game_state_json(&self.lock_game()).map_err(to_js_error)
    }

    pub fn get_layout_json(&self) -> Result<String, JsValue> {
        state_getter::get_layout_json(&self.lock_game()).map_err(to_js_error)
    }

    /// チェックサム付きのセーブデータ (JSON)。
    pub fn save_json(&self) -> Result<String, JsValue> {
        let saved = self.lock_game().to_saved();
        encode_save(&saved).map_err(to_js_error)
    }

    /// セーブデータから再開する。読めなかったら今のゲームはそのまま。
    pub fn load_json(&self, text: &str) -> Result<(), JsValue> {
        let restored = decode_save(text)
            .and_then(|saved| Game::from_saved(&saved))
            .map_err(|e| {
                warn!("SolitaireApp: load refused: {}", e);
                to_js_error(e)
            })?;
        *self.lock_game() = restored;
        info!("SolitaireApp: Game loaded");
        Ok(())
    }
}

impl SolitaireApp {
    fn lock_game(&self) -> MutexGuard<'_, Game> {
        match self.game.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("Game mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }
}

impl Default for SolitaireApp {
    fn default() -> Self {
        Self::new()
    }
}

fn signals_json(signals: &[GameSignal]) -> Result<String, JsValue> {
    serde_json::to_string(signals).map_err(to_js_error)
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
