#![warn(clippy::use_self)]

//! Element trees and a one-shot mount into concrete UI nodes.
//!
//! [`create_element`] and [`create_text_element`] build an immutable
//! [`Element`] tree; [`render`] walks it once and appends the resulting
//! nodes under a container. There is no diffing: every call creates fresh
//! nodes. Any [`Node`] implementation can be the target, the browser DOM
//! ([`WebNode`]) and an in-memory tree ([`MemoryNode`]) ship with the crate.

pub mod element;
pub mod error;
pub mod props;

mod node;
mod render;

pub use element::{create_element, create_text_element, Child, Element, ElementType, Props};
pub use error::MountError;
pub use node::{
    browser::{document, window, WebNode},
    memory::{MemoryNode, NodeKind},
    Node,
};
pub use props::{Callback, Primitive, PropMap, PropValue};
pub use render::render;
