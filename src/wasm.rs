//! JavaScript bindings
//!
//! `TextCortex` wraps an [`Extractor`] and the validators. Entity lists cross
//! the boundary as plain objects through `serde-wasm-bindgen`:
//!
//! ```javascript,ignore
//! import init, { TextCortex } from 'bytetext';
//!
//! await init();
//! const cortex = new TextCortex();
//! cortex.entities("hi @alice, see http://t.co/abc #news");
//! // [{ range: { start: 3, stop: 9 }, text: "@alice", kind: "Mention", screen_name: "alice", ... }, ...]
//! cortex.validateText("", { max_length: 140, can_be_empty: false }); // throws "Text may not be empty"
//! ```

use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::extract::{Extractor, TldSet};
use crate::validate::{self, ValidationArgs};

/// Entities carry flattened attributes, which serde emits as a map. The
/// JSON-compatible serializer turns those into plain objects.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn args_from_js(args: JsValue) -> Result<ValidationArgs, JsValue> {
    serde_wasm_bindgen::from_value(args)
        .map_err(|e| JsValue::from_str(&format!("Invalid validation args: {}", e)))
}

/// TextCortex - entity extraction and post validation
#[wasm_bindgen]
pub struct TextCortex {
    extractor: Extractor,
}

#[wasm_bindgen]
impl TextCortex {
    /// Cortex with the built-in TLD table
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: Extractor::new(),
        }
    }

    /// Cortex with a TLD table given as `{"country": [...], "generic": [...]}`
    #[wasm_bindgen(js_name = withTlds)]
    pub fn with_tlds(json: &str) -> Result<TextCortex, JsValue> {
        let tlds = TldSet::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            extractor: Extractor::with_tlds(Arc::new(tlds)),
        })
    }

    #[wasm_bindgen(js_name = entities)]
    pub fn entities(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.entities(text))
    }

    #[wasm_bindgen(js_name = mentions)]
    pub fn mentions(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.mentioned_screen_names(text))
    }

    #[wasm_bindgen(js_name = hashtags)]
    pub fn hashtags(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.hashtags(text))
    }

    #[wasm_bindgen(js_name = urls)]
    pub fn urls(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.extractor.urls(text))
    }

    #[wasm_bindgen(js_name = textLength)]
    pub fn text_length(&self, text: &str) -> usize {
        validate::text_length(text)
    }

    /// Throws an `Error` carrying the failure message.
    #[wasm_bindgen(js_name = validateText)]
    pub fn validate_text(&self, text: &str, args: JsValue) -> Result<(), JsValue> {
        let args = args_from_js(args)?;
        validate::text_validate(text, args)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    #[wasm_bindgen(js_name = isValidText)]
    pub fn is_valid_text(&self, text: &str, args: JsValue) -> Result<bool, JsValue> {
        Ok(validate::text_is_valid(text, args_from_js(args)?))
    }

    #[wasm_bindgen(js_name = isValidUsername)]
    pub fn is_valid_username(&self, username: &str) -> bool {
        validate::username_is_valid(username)
    }

    #[wasm_bindgen(js_name = isValidList)]
    pub fn is_valid_list(&self, list: &str) -> bool {
        validate::list_is_valid(list)
    }

    #[wasm_bindgen(js_name = isValidHashtag)]
    pub fn is_valid_hashtag(&self, hashtag: &str) -> bool {
        validate::hashtag_is_valid(hashtag)
    }

    #[wasm_bindgen(js_name = isValidUrl)]
    pub fn is_valid_url(&self, url: &str, require_protocol: bool, allow_unicode: bool) -> bool {
        validate::url_is_valid(url, require_protocol, allow_unicode)
    }
}

impl Default for TextCortex {
    fn default() -> Self {
        Self::new()
    }
}
