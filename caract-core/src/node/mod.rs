pub mod browser;
pub mod memory;

use crate::{error::MountError, props::PropValue};

/// A concrete UI node that element trees can be mounted into.
pub trait Node: Clone + Sized + 'static {
    /// Creates a detached element node of the given kind.
    fn element(name: &str) -> Result<Self, MountError>;

    /// Creates a detached, empty text node.
    fn text() -> Result<Self, MountError>;

    /// Assigns `value` as a live property of the node (not an attribute).
    fn set_property(&self, name: &str, value: &PropValue) -> Result<(), MountError>;

    fn append_child(&self, child: &Self) -> Result<(), MountError>;
}
