use std::{fmt, rc::Rc};

use indexmap::IndexMap;

/// Insertion-ordered mapping from property name to value.
pub type PropMap = IndexMap<String, PropValue>;

/// A value assigned to a live node property.
#[derive(Clone, Debug)]
pub enum PropValue {
    Bool(bool),
    Number(f64),
    Str(String),
    Callback(Callback),
    Map(PropMap),
    List(Vec<PropValue>),
}

impl PropValue {
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(web_sys::Event) + 'static,
    {
        Self::Callback(Callback::new(f))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Number(_) | Self::Str(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    /// String form of a primitive, formatted the way the DOM would coerce it.
    ///
    /// Returns `None` for callbacks and nested structures.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(format_number(*value)),
            Self::Str(value) => Some(value.clone()),
            Self::Callback(_) | Self::Map(_) | Self::List(_) => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Callback(a), Self::Callback(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("[function]"),
            Self::Map(_) => f.write_str("[object Object]"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            primitive => f.write_str(&primitive.to_text().unwrap_or_default()),
        }
    }
}

// Mirrors `String(number)` for the values that differ from Rust's `Display`.
fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else if !(1e-6..1e21).contains(&value.abs()) {
        // JS switches to exponent form here and always signs the exponent
        let exp = format!("{value:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        value.to_string()
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Callback> for PropValue {
    fn from(value: Callback) -> Self {
        Self::Callback(value)
    }
}

impl From<PropMap> for PropValue {
    fn from(value: PropMap) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }

            impl From<$ty> for Primitive {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Content of a text element: the values that stringify into a text node.
#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    Bool(bool),
    Number(f64),
    Str(String),
}

impl From<Primitive> for PropValue {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Bool(value) => Self::Bool(value),
            Primitive::Number(value) => Self::Number(value),
            Primitive::Str(value) => Self::Str(value),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Primitive {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An event handler stored as a property value, e.g. under `onclick`.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(web_sys::Event)>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(web_sys::Event) + 'static,
    {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: web_sys::Event) {
        (self.0)(event);
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl Eq for Callback {}
impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_format_like_dom_coercion() {
        assert_eq!(PropValue::from(5).to_text().as_deref(), Some("5"));
        assert_eq!(PropValue::from(1.5).to_text().as_deref(), Some("1.5"));
        assert_eq!(PropValue::from(-0.0).to_text().as_deref(), Some("0"));
        assert_eq!(PropValue::from(f64::NAN).to_text().as_deref(), Some("NaN"));
        assert_eq!(
            PropValue::from(f64::NEG_INFINITY).to_text().as_deref(),
            Some("-Infinity")
        );
    }

    #[test]
    fn extreme_numbers_use_exponent_form() {
        let text = |n: f64| PropValue::from(n).to_text().unwrap();
        assert_eq!(text(1e21), "1e+21");
        assert_eq!(text(1.5e300), "1.5e+300");
        assert_eq!(text(-2e22), "-2e+22");
        assert_eq!(text(1e-7), "1e-7");
        assert_eq!(text(-1.25e-9), "-1.25e-9");
        assert_eq!(text(1e20), "100000000000000000000");
        assert_eq!(text(0.000001), "0.000001");
    }

    #[test]
    fn primitives_convert_into_prop_values() {
        assert_eq!(PropValue::from(Primitive::from("a")), PropValue::from("a"));
        assert_eq!(PropValue::from(Primitive::from(2u8)), PropValue::Number(2.0));
        assert_eq!(PropValue::from(Primitive::from(true)), PropValue::Bool(true));
    }

    #[test]
    fn non_primitives_have_no_text() {
        let callback = PropValue::callback(|_| {});
        assert!(!callback.is_primitive());
        assert_eq!(callback.to_text(), None);
        assert_eq!(PropValue::Map(PropMap::new()).to_text(), None);
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let a = Callback::new(|_| {});
        let b = Callback::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(PropValue::from(a.clone()), PropValue::from(a));
    }

    #[test]
    fn lists_join_with_commas() {
        let list = PropValue::from(vec![PropValue::from("a"), PropValue::from(2)]);
        assert_eq!(list.to_string(), "a,2");
    }
}
