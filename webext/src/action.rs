use crate::{
	BrowserKind,
	error::Error,
	support::{call, namespace},
};
use js_sys::Object;

#[derive(Clone)]
pub struct Action {
	api: Object,
}

impl Action {
	pub(crate) fn new(root: &Object, kind: BrowserKind) -> Result<Self, Error> {
		let api = match kind {
			// MV2 Firefox still exposes this under `browserAction`.
			BrowserKind::Firefox => namespace(root, "action").or_else(|_| namespace(root, "browserAction")),
			BrowserKind::Chrome => namespace(root, "action"),
		}?;
		Ok(Self { api })
	}

	/// Fails when not running inside a user gesture; callers treat that as
	/// best-effort.
	pub async fn open_popup(&self) -> Result<(), Error> {
		call(&self.api, "openPopup", &[]).await?;
		Ok(())
	}

	pub async fn set_badge_text(&self, text: &str) -> Result<(), Error> {
		let details = Object::new();
		js_sys::Reflect::set(&details, &"text".into(), &text.into())?;
		call(&self.api, "setBadgeText", &[details.into()][..]).await?;
		Ok(())
	}

	pub async fn clear_badge(&self) -> Result<(), Error> {
		self.set_badge_text("").await
	}
}
