use crate::{
	error::Error,
	support::{call, namespace},
};
use js_sys::{Object, Reflect};
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;

#[derive(Clone)]
pub struct Storage {
	api: Object,
}

impl Storage {
	pub(crate) fn new(root: &Object) -> Result<Self, Error> {
		Ok(Self { api: namespace(root, "storage")? })
	}

	pub fn local(&self) -> Result<StorageArea, Error> {
		Ok(StorageArea { api: namespace(&self.api, "local")? })
	}
}

#[derive(Clone)]
pub struct StorageArea {
	api: Object,
}

impl StorageArea {
	pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, Error> {
		let result = call(&self.api, "get", &[key.into()][..]).await?;
		let value = Reflect::get(&result, &key.into())?;
		if value.is_undefined() || value.is_null() { Ok(None) } else { serde_wasm_bindgen::from_value(value).map(Some).map_err(Into::into) }
	}

	pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), Error> {
		let items = Object::new();
		Reflect::set(&items, &key.into(), &to_value(value)?)?;
		call(&self.api, "set", &[items.into()][..]).await?;
		Ok(())
	}

	pub async fn remove(&self, key: &str) -> Result<(), Error> {
		call(&self.api, "remove", &[key.into()][..]).await?;
		Ok(())
	}
}
