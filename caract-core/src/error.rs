use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure raised while mounting an element tree.
///
/// Mounting never recovers: the first error aborts the remaining descent.
#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum MountError {
    #[error("DOM is not available")]
    DomUnavailable,
    #[error("no element with id `{0}`")]
    ContainerNotFound(String),
    #[error("`{0}` is not a valid element name")]
    InvalidTagName(String),
    #[error("property `{0}` is read-only")]
    ReadOnlyProperty(String),
    #[error("node cannot accept children")]
    HierarchyRequest,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}
