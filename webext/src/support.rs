use crate::error::Error;
use js_sys::{Function, Object, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub(crate) fn namespace(root: &JsValue, name: &str) -> Result<Object, Error> {
	Reflect::get(root, &name.into())
		.map_err(|_| Error::ApiUnavailable(name.to_owned()))?
		.dyn_into()
		.map_err(|_| Error::ApiUnavailable(name.to_owned()))
}

pub(crate) async fn call(api: &Object, method: &str, args: &[JsValue]) -> Result<JsValue, Error> {
	let func: Function = Reflect::get(api, &method.into())?.dyn_into().map_err(|_| Error::ApiUnavailable(method.to_owned()))?;
	let js_args = args.iter().cloned().collect::<js_sys::Array>();
	let promise: Promise = func.apply(&api.into(), &js_args)?.dyn_into()?;
	JsFuture::from(promise).await.map_err(Into::into)
}

pub(crate) async fn call_typed<T: DeserializeOwned>(api: &Object, method: &str, args: &[JsValue]) -> Result<T, Error> {
	let result = call(api, method, args).await?;
	serde_wasm_bindgen::from_value(result).map_err(Into::into)
}
