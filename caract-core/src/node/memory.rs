use std::{
    cell::RefCell,
    fmt::{self, Write},
    rc::{Rc, Weak},
};

use crate::{
    error::MountError,
    node::Node,
    props::{PropMap, PropValue},
};

// Reference: https://developer.mozilla.org/en-US/docs/Glossary/Void_element
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// Accessor-only properties on `Node` and `Element`; assigning them throws in strict code.
const READ_ONLY: &[&str] = &[
    "attributes",
    "baseURI",
    "childElementCount",
    "childNodes",
    "children",
    "classList",
    "clientHeight",
    "clientWidth",
    "firstChild",
    "firstElementChild",
    "isConnected",
    "lastChild",
    "lastElementChild",
    "localName",
    "namespaceURI",
    "nextSibling",
    "nodeName",
    "nodeType",
    "offsetHeight",
    "offsetWidth",
    "ownerDocument",
    "parentElement",
    "parentNode",
    "prefix",
    "previousSibling",
    "tagName",
];

// Properties whose assignment replaces a text node's content.
const TEXT_CONTENT: &[&str] = &["nodeValue", "data", "textContent"];

/// Node tree held entirely in memory, mirroring the DOM operations used by
/// [`render`](crate::render) closely enough to mount without a browser.
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<Inner>>);

type WeakNode = Weak<RefCell<Inner>>;

struct Inner {
    parent: Option<WeakNode>,
    kind: NodeKind,
    props: PropMap,
    children: Vec<MemoryNode>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Element(String),
    Text(String),
}

impl MemoryNode {
    fn new(kind: NodeKind) -> Self {
        let inner = Inner {
            parent: None,
            kind,
            props: PropMap::new(),
            children: vec![],
        };
        Self(Rc::new(RefCell::new(inner)))
    }

    pub fn kind(&self) -> NodeKind {
        self.0.borrow().kind.clone()
    }

    pub fn tag_name(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element(name) => Some(name.clone()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(content) => Some(content.clone()),
            NodeKind::Element(_) => None,
        }
    }

    pub fn property(&self, name: &str) -> Option<PropValue> {
        self.0.borrow().props.get(name).cloned()
    }

    pub fn children(&self) -> Vec<Self> {
        self.0.borrow().children.clone()
    }

    pub fn parent(&self) -> Option<Self> {
        self.0
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Self)
    }

    // `textContent` on an element drops every child and leaves at most one text node
    fn replace_children_with_text(&self, text: String) -> Result<(), MountError> {
        let removed = std::mem::take(&mut self.0.borrow_mut().children);
        for child in removed {
            child.0.borrow_mut().parent = None;
        }

        if !text.is_empty() {
            self.append_child(&Self::new(NodeKind::Text(text)))?;
        }
        Ok(())
    }
}

impl Node for MemoryNode {
    fn element(name: &str) -> Result<Self, MountError> {
        if !is_valid_name(name) {
            return Err(MountError::InvalidTagName(name.to_string()));
        }
        Ok(Self::new(NodeKind::Element(name.to_string())))
    }

    fn text() -> Result<Self, MountError> {
        Ok(Self::new(NodeKind::Text(String::new())))
    }

    fn set_property(&self, name: &str, value: &PropValue) -> Result<(), MountError> {
        if READ_ONLY.contains(&name) {
            return Err(MountError::ReadOnlyProperty(name.to_string()));
        }

        if name == "textContent" && self.tag_name().is_some() {
            return self.replace_children_with_text(value.to_string());
        }

        let mut guard = self.0.borrow_mut();
        let inner = &mut *guard;
        match &mut inner.kind {
            NodeKind::Text(content) if TEXT_CONTENT.contains(&name) => {
                *content = value.to_string();
            }
            // `nodeValue` is always null on elements; assignments are dropped
            NodeKind::Element(_) if name == "nodeValue" => {}
            _ => {
                inner.props.insert(name.to_string(), value.clone());
            }
        }
        Ok(())
    }

    fn append_child(&self, child: &Self) -> Result<(), MountError> {
        if matches!(self.0.borrow().kind, NodeKind::Text(_)) {
            return Err(MountError::HierarchyRequest);
        }

        // a node can't become its own descendant
        let mut ancestor = Some(self.clone());
        while let Some(node) = ancestor {
            if &node == child {
                return Err(MountError::HierarchyRequest);
            }
            ancestor = node.parent();
        }

        if let Some(parent) = child.parent() {
            parent.0.borrow_mut().children.retain(|node| node != child);
        }

        self.0.borrow_mut().children.push(child.clone());
        child.0.borrow_mut().parent.replace(Rc::downgrade(&self.0));
        Ok(())
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("MemoryNode")
            .field("kind", &inner.kind)
            .field("props", &inner.props)
            .field("children", &inner.children)
            .finish()
    }
}

impl fmt::Display for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        match &inner.kind {
            NodeKind::Element(tag) => {
                let mut buf = String::new();
                for child in &inner.children {
                    writeln!(&mut buf, "{child}")?;
                }
                let indented = buf
                    .lines()
                    .map(|line| format!("  {line}"))
                    .collect::<Vec<_>>()
                    .join("\n");

                let attrs = inner
                    .props
                    .iter()
                    .filter_map(|(name, value)| {
                        let value = value.to_text()?;
                        Some(format!(" {}=\"{}\"", attr_name(name), escape(&value)))
                    })
                    .collect::<String>();

                if !indented.is_empty() {
                    write!(f, "<{tag}{attrs}>\n{indented}\n</{tag}>")
                } else if VOID_ELEMENTS.contains(&tag.to_lowercase().as_str()) {
                    write!(f, "<{tag}{attrs}>")
                } else {
                    write!(f, "<{tag}{attrs}></{tag}>")
                }
            }
            NodeKind::Text(text) => f.write_str(&escape(text)),
        }
    }
}

fn attr_name(property: &str) -> &str {
    match property {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || matches!(first, '_' | ':'))
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

// Reference: https://cheatsheetseries.owasp.org/cheatsheets/Cross_Site_Scripting_Prevention_Cheat_Sheet.html#output-encoding-for-html-contexts
fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}
