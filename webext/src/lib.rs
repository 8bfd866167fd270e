mod action;
mod commands;
mod error;
mod listener;
mod runtime;
mod storage;
mod support;
mod tabs;

pub use action::Action;
pub use commands::{Commands, OnCommand};
pub use error::Error;
pub use listener::ListenerHandle;
pub use runtime::{MessageSender, OnMessage, Runtime};
pub use storage::{Storage, StorageArea};
pub use tabs::{TabInfo, Tabs};

use js_sys::Object;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BrowserKind {
	Chrome,
	Firefox,
}

#[derive(Clone)]
pub struct Browser {
	root: Object,
	kind: BrowserKind,
}

impl Browser {
	pub fn runtime(&self) -> Result<Runtime, Error> {
		Runtime::new(&self.root)
	}

	pub fn tabs(&self) -> Result<Tabs, Error> {
		Tabs::new(&self.root)
	}

	pub fn storage(&self) -> Result<Storage, Error> {
		Storage::new(&self.root)
	}

	pub fn commands(&self) -> Result<Commands, Error> {
		Commands::new(&self.root)
	}

	pub fn action(&self) -> Result<Action, Error> {
		Action::new(&self.root, self.kind)
	}
}

/// Prefers the `chrome` global and falls back to Firefox's `browser`. Reads
/// off `js_sys::global()`: the background runs in a worker global where no
/// `Window` exists.
pub fn browser() -> Result<Browser, Error> {
	let global = js_sys::global();

	if let Ok(root) = js_sys::Reflect::get(&global, &"chrome".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { root, kind: BrowserKind::Chrome })
	} else if let Ok(root) = js_sys::Reflect::get(&global, &"browser".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { root, kind: BrowserKind::Firefox })
	} else {
		Err(Error::UnsupportedBrowser)
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use wasm_bindgen_test::wasm_bindgen_test;

	// Test runners expose a plain global with no extension APIs; the lookup
	// must miss cleanly instead of demanding a `Window`.
	#[wasm_bindgen_test]
	fn root_lookup_works_without_a_window() {
		assert!(matches!(super::browser(), Err(super::Error::UnsupportedBrowser)));
	}
}
