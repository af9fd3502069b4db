use wasm_bindgen::{intern, prelude::*};

use crate::{
    error::MountError,
    node::Node,
    props::{Callback, PropValue},
};

type EventClosure = Closure<dyn Fn(web_sys::Event)>;

pub fn window() -> Result<web_sys::Window, MountError> {
    web_sys::window().ok_or(MountError::DomUnavailable)
}

pub fn document() -> Result<web_sys::Document, MountError> {
    window()?.document().ok_or(MountError::DomUnavailable)
}

/// Handle to a live browser DOM node.
#[derive(Clone, PartialEq, Debug)]
pub struct WebNode(web_sys::Node);

impl WebNode {
    /// Finds the element with the given id to mount into.
    pub fn by_id(id: &str) -> Result<Self, MountError> {
        document()?
            .get_element_by_id(id)
            .map(Self::from)
            .ok_or_else(|| MountError::ContainerNotFound(id.to_string()))
    }

    pub fn native(&self) -> &web_sys::Node {
        &self.0
    }

    pub fn into_native(self) -> web_sys::Node {
        self.0
    }
}

impl From<web_sys::Node> for WebNode {
    fn from(value: web_sys::Node) -> Self {
        Self(value)
    }
}

impl From<web_sys::Element> for WebNode {
    fn from(value: web_sys::Element) -> Self {
        Self(value.unchecked_into())
    }
}

impl Node for WebNode {
    fn element(name: &str) -> Result<Self, MountError> {
        let element = document()?
            .create_element(intern(name))
            .map_err(|_| MountError::InvalidTagName(name.to_string()))?;
        Ok(element.into())
    }

    fn text() -> Result<Self, MountError> {
        let text = web_sys::Text::new()?;
        Ok(Self(text.unchecked_into()))
    }

    fn set_property(&self, name: &str, value: &PropValue) -> Result<(), MountError> {
        let key = JsValue::from_str(intern(name));
        if js_sys::Reflect::set(&self.0, &key, &to_js(value)?)? {
            Ok(())
        } else {
            Err(MountError::ReadOnlyProperty(name.to_string()))
        }
    }

    fn append_child(&self, child: &Self) -> Result<(), MountError> {
        self.0.append_child(&child.0)?;
        Ok(())
    }
}

fn to_js(value: &PropValue) -> Result<JsValue, MountError> {
    let value = match value {
        PropValue::Bool(value) => JsValue::from_bool(*value),
        PropValue::Number(value) => JsValue::from_f64(*value),
        PropValue::Str(value) => JsValue::from_str(value),
        PropValue::Callback(callback) => callback_to_js(callback),
        PropValue::Map(map) => {
            let object = js_sys::Object::new();
            for (key, value) in map {
                js_sys::Reflect::set(&object, &JsValue::from_str(key), &to_js(value)?)?;
            }
            object.into()
        }
        PropValue::List(items) => {
            let array = js_sys::Array::new();
            for item in items {
                array.push(&to_js(item)?);
            }
            array.into()
        }
    };
    Ok(value)
}

// Mounted nodes are never torn down, so the closure is handed to the JS
// garbage collector instead of being owned on the Rust side.
fn callback_to_js(callback: &Callback) -> JsValue {
    let callback = callback.clone();
    EventClosure::new(move |ev: web_sys::Event| callback.call(ev)).into_js_value()
}
