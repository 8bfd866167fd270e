use crate::{
	error::Error,
	listener::{ListenerHandle, attach},
	support::namespace,
};
use js_sys::Object;
use wasm_bindgen::{JsValue, closure::Closure};

#[derive(Clone)]
pub struct Commands {
	api: Object,
}

impl Commands {
	pub(crate) fn new(root: &Object) -> Result<Self, Error> {
		Ok(Self { api: namespace(root, "commands")? })
	}

	pub fn on_command(&self) -> Result<OnCommand, Error> {
		Ok(OnCommand(namespace(&self.api, "onCommand")?))
	}
}

pub struct OnCommand(Object);

impl OnCommand {
	pub fn add_listener(&self, mut callback: impl FnMut(String) + 'static) -> Result<ListenerHandle<dyn FnMut(JsValue)>, Error> {
		attach(
			&self.0,
			Closure::wrap(Box::new(move |value: JsValue| {
				if let Some(command) = value.as_string() {
					callback(command);
				}
			}) as Box<dyn FnMut(JsValue)>),
		)
	}
}
