use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum Error {
	#[error("the `{0}` API is not available in this context")]
	ApiUnavailable(String),

	#[error("no active tab in the current window")]
	NoActiveTab,

	#[error("no `chrome` or `browser` API on the global object")]
	UnsupportedBrowser,

	#[error("failed to serialize or deserialize a value: {0}")]
	Serde(#[from] serde_wasm_bindgen::Error),

	#[error("the browser API reported: {0}")]
	Api(String),

	#[error("unexpected JavaScript value: {0:?}")]
	Js(JsValue),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		// Both DOMException and chrome.runtime.lastError surface a `message`.
		if let Some(obj) = value.dyn_ref::<js_sys::Object>()
			&& let Ok(message) = js_sys::Reflect::get(obj, &"message".into())
			&& let Some(message) = message.as_string()
		{
			return Self::Api(message);
		}
		Self::Js(value)
	}
}
