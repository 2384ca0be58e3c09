use linkpage_model::{Block, BlockId, Profile};
use linkpage_page::{Page, PageSession};
use linkpage_renderer::HtmlOptions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(prefix: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", prefix, err))
}

/// A live page for a browser host
#[wasm_bindgen]
pub struct LinkPage {
    session: PageSession,
}

impl Default for LinkPage {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl LinkPage {
    /// Page seeded with the sample blocks
    #[wasm_bindgen(constructor)]
    pub fn new() -> LinkPage {
        LinkPage {
            session: PageSession::new(Page::sample()),
        }
    }

    /// Page from a `{ profile, blocks }` snapshot
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<LinkPage, JsValue> {
        let page = parse_page(json).map_err(|e| js_error("Invalid page", e))?;
        Ok(LinkPage {
            session: PageSession::new(page),
        })
    }

    /// Full HTML document for the page
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, pretty: Option<bool>) -> String {
        let options = if pretty.unwrap_or(true) {
            HtmlOptions::default()
        } else {
            HtmlOptions::compact()
        };
        self.session.render_html(&options)
    }

    /// Flip edit mode; returns the new mode
    #[wasm_bindgen(js_name = toggleEditing)]
    pub fn toggle_editing(&mut self) -> bool {
        self.session.toggle_editing();
        self.session.is_editing()
    }

    #[wasm_bindgen(js_name = isEditing)]
    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    /// Displayed blocks, sorted by order
    #[wasm_bindgen(js_name = blocksJson)]
    pub fn blocks_json(&self, edit_mode: bool) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.page().visible_blocks(edit_mode))
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = addBlock)]
    pub fn add_block(&mut self, json: &str) -> Result<bool, JsValue> {
        let block = parse_block(json).map_err(|e| js_error("Invalid block", e))?;
        Ok(self.session.add_block(block).changed)
    }

    #[wasm_bindgen(js_name = updateBlock)]
    pub fn update_block(&mut self, json: &str) -> Result<bool, JsValue> {
        let block = parse_block(json).map_err(|e| js_error("Invalid block", e))?;
        Ok(self.session.update_block(block).changed)
    }

    #[wasm_bindgen(js_name = deleteBlock)]
    pub fn delete_block(&mut self, id: &str) -> bool {
        self.session.delete_block(&BlockId::from(id)).changed
    }

    #[wasm_bindgen(js_name = toggleVisibility)]
    pub fn toggle_visibility(&mut self, id: &str) -> bool {
        self.session.toggle_visibility(&BlockId::from(id)).changed
    }

    #[wasm_bindgen(js_name = setOrder)]
    pub fn set_order(&mut self, id: &str, order: i32) -> bool {
        self.session
            .set_order(&BlockId::from(id), i64::from(order))
            .changed
    }

    /// Click a block's main area; returns whether anything happened
    #[wasm_bindgen(js_name = clickBlock)]
    pub fn click_block(&mut self, id: &str) -> bool {
        self.session.click(&BlockId::from(id))
    }

    /// Most recent URL opened by a click, if any
    #[wasm_bindgen(js_name = lastNavigation)]
    pub fn last_navigation(&self) -> Option<String> {
        self.session.navigation().last().cloned()
    }

    #[wasm_bindgen(js_name = profileJson)]
    pub fn profile_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.page().profile())
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = setProfile)]
    pub fn set_profile(&mut self, json: &str) -> Result<bool, JsValue> {
        let profile: Profile =
            serde_json::from_str(json).map_err(|e| js_error("Invalid profile", e))?;
        Ok(self.session.update_profile(profile).changed)
    }

    /// `{ profile, blocks }` snapshot
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.page()).map_err(|e| js_error("Serialization error", e))
    }
}

fn parse_page(json: &str) -> Result<Page, serde_json::Error> {
    serde_json::from_str(json)
}

fn parse_block(json: &str) -> Result<Block, serde_json::Error> {
    serde_json::from_str(json)
}
