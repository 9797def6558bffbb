//! DOM renderer: one absolutely-positioned `div` per sprite
//!
//! Expects the page to provide `#game`, `#player`, `#score`, `#gameOver`,
//! `#finalScore`, `#pauseMenu`, `#pauseBtn` and `#startScreen`.

use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::snapshot::{FrameSnapshot, Sprite};
use crate::sim::GamePhase;

pub struct DomRenderer {
    document: Document,
    game: Element,
    player: HtmlElement,
    stars: Vec<HtmlElement>,
    obstacles: HashMap<u32, HtmlElement>,
    last_phase: Option<GamePhase>,
    last_score: Option<u32>,
}

fn required(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

fn px(value: f32) -> String {
    format!("{value}px")
}

impl DomRenderer {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let game = required(&document, "game")?;
        let player = required(&document, "player")?.dyn_into::<HtmlElement>()?;
        Ok(Self {
            document,
            game,
            player,
            stars: Vec::new(),
            obstacles: HashMap::new(),
            last_phase: None,
            last_score: None,
        })
    }

    /// Apply a snapshot to the page
    pub fn render(&mut self, snap: &FrameSnapshot) -> Result<(), JsValue> {
        self.sync_stars(&snap.stars)?;
        self.sync_obstacles(&snap.obstacles)?;

        let style = self.player.style();
        style.set_property("left", &px(snap.player.pos.x))?;
        style.set_property("top", &px(snap.player.pos.y))?;

        if self.last_score != Some(snap.score) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", snap.score)));
            }
            self.last_score = Some(snap.score);
        }

        if self.last_phase != Some(snap.phase) {
            self.update_overlays(snap)?;
            self.last_phase = Some(snap.phase);
        }
        Ok(())
    }

    /// Highlight the chosen difficulty button
    pub fn mark_selected_difficulty(&self, name: &str) -> Result<(), JsValue> {
        let buttons = self.document.query_selector_all(".difficulty-btn")?;
        for i in 0..buttons.length() {
            let Some(button) = buttons.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let is_selected = button.get_attribute("data-difficulty").as_deref() == Some(name);
            if is_selected {
                button.class_list().add_1("selected")?;
            } else {
                button.class_list().remove_1("selected")?;
            }
        }
        Ok(())
    }

    fn create_sprite(&self, class: &str, size: f32) -> Result<HtmlElement, JsValue> {
        let el = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        el.set_class_name(class);
        let style = el.style();
        style.set_property("width", &px(size))?;
        style.set_property("height", &px(size))?;
        self.game.append_child(&el)?;
        Ok(el)
    }

    fn sync_stars(&mut self, stars: &[Sprite]) -> Result<(), JsValue> {
        // Star count is fixed, so elements are created once and reused
        while self.stars.len() < stars.len() {
            let sprite = &stars[self.stars.len()];
            let el = self.create_sprite("star", sprite.size)?;
            el.style()
                .set_property("opacity", &sprite.opacity.to_string())?;
            self.stars.push(el);
        }
        for (el, sprite) in self.stars.iter().zip(stars) {
            let style = el.style();
            style.set_property("left", &px(sprite.pos.x))?;
            style.set_property("top", &px(sprite.pos.y))?;
        }
        Ok(())
    }

    fn sync_obstacles(&mut self, obstacles: &[Sprite]) -> Result<(), JsValue> {
        self.obstacles.retain(|id, el| {
            let alive = obstacles.iter().any(|o| o.id == *id);
            if !alive {
                el.remove();
            }
            alive
        });

        for sprite in obstacles {
            if !self.obstacles.contains_key(&sprite.id) {
                let el = self.create_sprite("obstacle", sprite.size)?;
                el.style()
                    .set_property("transform", &format!("rotate({}deg)", sprite.rotation))?;
                self.obstacles.insert(sprite.id, el);
            }
            if let Some(el) = self.obstacles.get(&sprite.id) {
                let style = el.style();
                style.set_property("left", &px(sprite.pos.x))?;
                style.set_property("top", &px(sprite.pos.y))?;
            }
        }
        Ok(())
    }

    fn set_visible(&self, id: &str, display: &str) -> Result<(), JsValue> {
        if let Some(el) = self.document.get_element_by_id(id) {
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                el.style().set_property("display", display)?;
            }
        }
        Ok(())
    }

    fn update_overlays(&self, snap: &FrameSnapshot) -> Result<(), JsValue> {
        let (start, pause, game_over) = match snap.phase {
            GamePhase::NotStarted => ("flex", "none", "none"),
            GamePhase::Running => ("none", "none", "none"),
            GamePhase::Paused => ("none", "block", "none"),
            GamePhase::GameOver => ("none", "none", "block"),
        };
        self.set_visible("startScreen", start)?;
        self.set_visible("pauseMenu", pause)?;
        self.set_visible("gameOver", game_over)?;

        if let Some(btn) = self.document.get_element_by_id("pauseBtn") {
            let label = if snap.phase == GamePhase::Paused {
                "▶ RESUME"
            } else {
                "⏸ PAUSE"
            };
            btn.set_text_content(Some(label));
        }

        if let Some(final_score) = snap.final_score {
            if let Some(el) = self.document.get_element_by_id("finalScore") {
                el.set_text_content(Some(&final_score.to_string()));
            }
        }
        Ok(())
    }
}
