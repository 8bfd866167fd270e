use crate::{
	error::Error,
	support::{call, call_typed, namespace},
};
use js_sys::Object;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
	pub id: Option<u32>,
	pub title: Option<String>,
	pub url: Option<String>,
	pub active: bool,
	pub window_id: u32,
}

#[derive(Clone)]
pub struct Tabs {
	api: Object,
}

impl Tabs {
	pub(crate) fn new(root: &Object) -> Result<Self, Error> {
		Ok(Self { api: namespace(root, "tabs")? })
	}

	pub async fn active_tab(&self) -> Result<TabInfo, Error> {
		let query = Object::new();
		js_sys::Reflect::set(&query, &"active".into(), &true.into())?;
		js_sys::Reflect::set(&query, &"currentWindow".into(), &true.into())?;
		let tabs: js_sys::Array = call(&self.api, "query", &[query.into()][..]).await?.dyn_into()?;
		match tabs.iter().next() {
			Some(tab) => serde_wasm_bindgen::from_value(tab).map_err(Into::into),
			None => Err(Error::NoActiveTab),
		}
	}

	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, tab_id: u32, message: &M) -> Result<R, Error> {
		call_typed(&self.api, "sendMessage", &[tab_id.into(), to_value(message)?][..]).await
	}
}
