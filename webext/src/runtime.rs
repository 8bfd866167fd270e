use crate::{
	error::Error,
	listener::{ListenerHandle, attach},
	support::{call_typed, namespace},
	tabs::TabInfo,
};
use js_sys::{Function, Object};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use std::{future::Future, marker::PhantomData};
use wasm_bindgen::{JsValue, closure::Closure};
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
	pub id: Option<String>,
	pub url: Option<String>,
	pub tab: Option<TabInfo>,
}

#[derive(Clone)]
pub struct Runtime {
	api: Object,
}

impl Runtime {
	pub(crate) fn new(root: &Object) -> Result<Self, Error> {
		Ok(Self { api: namespace(root, "runtime")? })
	}

	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, message: &M) -> Result<R, Error> {
		call_typed(&self.api, "sendMessage", &[to_value(message)?][..]).await
	}

	pub fn on_message<T: DeserializeOwned + 'static>(&self) -> Result<OnMessage<T>, Error> {
		Ok(OnMessage { api: namespace(&self.api, "onMessage")?, _message: PhantomData })
	}
}

pub struct OnMessage<T: DeserializeOwned + 'static> {
	api: Object,
	_message: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> OnMessage<T> {
	/// Messages that fail to deserialize into `T` are left for other listeners.
	pub fn add_listener(&self, mut callback: impl FnMut(T, MessageSender) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue, JsValue)>, Error> {
		attach(
			&self.api,
			Closure::wrap(Box::new(move |message, sender, _reply| {
				if let (Ok(message), Ok(sender)) = (serde_wasm_bindgen::from_value(message), serde_wasm_bindgen::from_value(sender)) {
					callback(message, sender);
				}
			}) as Box<dyn FnMut(JsValue, JsValue, JsValue)>),
		)
	}

	pub fn add_listener_with_reply<F, Fut, R>(&self, mut callback: F) -> Result<ListenerHandle<dyn FnMut(JsValue, JsValue, Function) -> bool>, Error>
	where
		F: FnMut(T, MessageSender) -> Fut + 'static,
		Fut: Future<Output = R> + 'static,
		R: Serialize + 'static,
	{
		attach(
			&self.api,
			Closure::wrap(Box::new(move |message, sender, send_response: Function| {
				if let (Ok(message), Ok(sender)) = (serde_wasm_bindgen::from_value(message), serde_wasm_bindgen::from_value(sender)) {
					let pending = callback(message, sender);
					spawn_local(async move {
						let reply = pending.await;
						if let Ok(value) = to_value(&reply) {
							let _ = send_response.call1(&JsValue::UNDEFINED, &value);
						}
					});
					// Keep the channel open for sendResponse.
					return true;
				}
				false
			}) as Box<dyn FnMut(JsValue, JsValue, Function) -> bool>),
		)
	}
}
