//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use wasm_bindgen_test::*;

use klondike_engine::SolitaireApp;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn stock_click_through_the_facade() {
    let app = SolitaireApp::with_seed(12);
    let signals = app.click_pile("\"Stock\"", None).unwrap();
    assert_eq!(signals, "[\"StateChanged\"]");

    let state: serde_json::Value = serde_json::from_str(&app.get_state_json().unwrap()).unwrap();
    assert_eq!(state["move_count"], 1);
}

#[wasm_bindgen_test]
fn save_then_load_through_the_facade() {
    let app = SolitaireApp::with_seed(12);
    app.tick_timer();
    let saved = app.save_json().unwrap();

    let other = SolitaireApp::with_seed(13);
    other.load_json(&saved).unwrap();
    assert_eq!(other.get_state_json().unwrap(), app.get_state_json().unwrap());
    assert!(other.load_json("{}").is_err());
}
