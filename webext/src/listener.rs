use crate::error::Error;
use js_sys::{Function, Object};
use wasm_bindgen::{JsCast, closure::Closure};

/// Dropping the handle removes the listener; `forget` leaks it for listeners
/// that must outlive the caller.
pub struct ListenerHandle<T: ?Sized> {
	target: Object,
	closure: Closure<T>,
}

impl<T: ?Sized> ListenerHandle<T> {
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

impl<T: ?Sized> Drop for ListenerHandle<T> {
	fn drop(&mut self) {
		if let Ok(remove) = js_sys::Reflect::get(&self.target, &"removeListener".into()).and_then(|v| v.dyn_into::<Function>()) {
			let _ = remove.call1(&self.target, self.closure.as_ref());
		}
	}
}

pub(crate) fn attach<T: ?Sized + 'static>(target: &Object, closure: Closure<T>) -> Result<ListenerHandle<T>, Error> {
	let add: Function = js_sys::Reflect::get(target, &"addListener".into())?.dyn_into().map_err(|_| Error::ApiUnavailable("addListener".to_owned()))?;
	add.call1(target, closure.as_ref())?;
	Ok(ListenerHandle { target: target.clone(), closure })
}
