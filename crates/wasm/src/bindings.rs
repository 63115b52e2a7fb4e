//! wasm-bindgen exports
//!
//! The names below are the global functions the JavaScript host calls.

use envregex_domain::{MatcherSettings, PlaceholderMatch, Segment};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{BindingError, BindingResult};
use crate::helpers::{self, HostSettings};

fn to_js<T: Serialize + ?Sized>(value: &T) -> BindingResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| BindingError::Conversion(e.to_string()))
}

fn host_settings(settings: JsValue) -> BindingResult<HostSettings> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(HostSettings::default());
    }
    serde_wasm_bindgen::from_value(settings).map_err(|e| BindingError::InvalidSettings(e.to_string()))
}

/// Returns true if `path` contains a `{{variable}}` placeholder.
#[wasm_bindgen(js_name = containsEnvVariable)]
#[must_use]
pub fn contains_env_variable(path: &str) -> bool {
    helpers::contains_env_variable(path)
}

/// Plural alias of [`contains_env_variable`] kept for existing call sites.
#[wasm_bindgen(js_name = containsEnvVariables)]
#[must_use]
pub fn contains_env_variables(path: &str) -> bool {
    helpers::contains_env_variable(path)
}

/// Returns `[{ leadOffset, endOffset, matchingString }]` for every placeholder.
///
/// # Errors
///
/// Fails only if the records cannot be converted into JavaScript values.
#[wasm_bindgen(js_name = matchAllEnvVariables)]
pub fn match_all_env_variables(path: &str) -> Result<JsValue, JsError> {
    let found: Vec<PlaceholderMatch> = helpers::match_all_env_variables(path);
    Ok(to_js(&found)?)
}

/// Like `matchAllEnvVariables`, with a `{ offsetMode, offsetUnit }` settings object.
///
/// # Errors
///
/// Fails if the settings object has unknown mode or unit names.
#[wasm_bindgen(js_name = matchAllEnvVariablesWith)]
pub fn match_all_env_variables_with(path: &str, settings: JsValue) -> Result<JsValue, JsError> {
    let settings = host_settings(settings)?;
    Ok(to_js(&helpers::match_all_env_variables_with(path, settings))?)
}

/// Returns the path cut into `{ kind: "literal" | "placeholder", ... }` segments.
///
/// # Errors
///
/// Fails only if the segments cannot be converted into JavaScript values.
#[wasm_bindgen(js_name = splitEnvVariables)]
pub fn split_env_variables(path: &str) -> Result<JsValue, JsError> {
    let segments: Vec<Segment> = helpers::split_env_variables(path);
    Ok(to_js(&segments)?)
}

/// Returns the settings used when none are passed.
///
/// # Errors
///
/// Fails only if the settings cannot be converted into a JavaScript value.
#[wasm_bindgen(js_name = defaultMatcherSettings)]
pub fn default_matcher_settings() -> Result<JsValue, JsError> {
    Ok(to_js(&MatcherSettings::for_javascript())?)
}
