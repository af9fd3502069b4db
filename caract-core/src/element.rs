use std::{fmt, rc::Rc};

use crate::props::{Primitive, PropMap, PropValue};

/// Reserved key under which an element's children live.
pub const CHILDREN: &str = "children";

/// Property holding a text element's content.
pub const NODE_VALUE: &str = "nodeValue";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ElementType {
    Tag(String),
    /// Reserved sentinel marking a text leaf.
    Text,
}

impl ElementType {
    pub fn tag_name(&self) -> Option<&str> {
        if let Self::Tag(name) = self {
            Some(name)
        } else {
            None
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => f.write_str(name),
            Self::Text => f.write_str("TEXT_ELEMENT"),
        }
    }
}

/// Properties of an element: the ordered property map plus the reserved
/// `children` sequence, which is always present.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Props {
    values: PropMap,
    children: Vec<Element>,
}

impl Props {
    /// Looks up a non-reserved property. `children` is never stored here.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    /// Iterates over every property except `children`, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// Immutable tree node describing a tagged element or a text leaf.
///
/// Cloning is cheap and shares the underlying node; use [`Element::ptr_eq`]
/// to test identity and `==` to compare structure.
#[derive(Clone)]
pub struct Element(Rc<Inner>);

#[derive(PartialEq, Debug)]
struct Inner {
    ty: ElementType,
    props: Props,
}

impl Element {
    fn new(ty: ElementType, props: Props) -> Self {
        Self(Rc::new(Inner { ty, props }))
    }

    pub fn ty(&self) -> &ElementType {
        &self.0.ty
    }

    pub fn props(&self) -> &Props {
        &self.0.props
    }

    pub fn children(&self) -> &[Element] {
        self.0.props.children()
    }

    pub fn is_text(&self) -> bool {
        self.0.ty.is_text()
    }

    /// Content of a text element, `None` for tagged elements.
    pub fn node_value(&self) -> Option<&PropValue> {
        if self.is_text() {
            self.0.props.get(NODE_VALUE)
        } else {
            None
        }
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("type", &self.0.ty)
            .field("props", &self.0.props)
            .finish()
    }
}

/// A positional child handed to [`create_element`].
#[derive(Clone, PartialEq, Debug)]
pub enum Child {
    Element(Element),
    /// Primitive content, normalized into a text element.
    Text(Primitive),
}

impl From<Element> for Child {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&Element> for Child {
    fn from(value: &Element) -> Self {
        Self::Element(value.clone())
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self::Text(value.into())
    }
}

impl From<bool> for Child {
    fn from(value: bool) -> Self {
        Self::Text(value.into())
    }
}

impl From<Primitive> for Child {
    fn from(value: Primitive) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_child_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Child {
                fn from(value: $ty) -> Self {
                    Self::Text(value.into())
                }
            }
        )*
    };
}

impl_child_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Builds an element from a tag name, optional properties and positional
/// children.
///
/// A `children` entry in `props` is discarded: positional children always
/// define the final sequence. Element children are stored as-is (the same
/// shared node), primitives go through [`create_text_element`].
pub fn create_element<T, I>(ty: T, props: Option<PropMap>, children: I) -> Element
where
    T: Into<String>,
    I: IntoIterator,
    I::Item: Into<Child>,
{
    let mut values = props.unwrap_or_default();
    if values.shift_remove(CHILDREN).is_some() {
        tracing::trace!("positional children override `children` prop");
    }

    let children = children
        .into_iter()
        .map(|child| match child.into() {
            Child::Element(element) => element,
            Child::Text(text) => create_text_element(text),
        })
        .collect();

    Element::new(ElementType::Tag(ty.into()), Props { values, children })
}

/// Wraps primitive content into a text element carrying it as `nodeValue`.
///
/// Only strings, numbers and booleans are text; callbacks and nested
/// structures are rejected at compile time:
///
/// ```compile_fail
/// use caract_core::{create_text_element, PropMap};
///
/// create_text_element(PropMap::new());
/// ```
pub fn create_text_element<V>(text: V) -> Element
where
    V: Into<Primitive>,
{
    let mut values = PropMap::with_capacity(1);
    values.insert(NODE_VALUE.to_string(), PropValue::from(text.into()));

    Element::new(
        ElementType::Text,
        Props {
            values,
            children: vec![],
        },
    )
}
