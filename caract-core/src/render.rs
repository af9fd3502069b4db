use tracing::{debug_span, trace, warn};

use crate::{
    element::{Element, ElementType, CHILDREN},
    error::MountError,
    node::Node,
};

/// Mounts `element` as a new last child of `container`.
///
/// Nodes are created depth-first, left to right: each node receives its
/// properties, then its children, and is appended to its parent last. Every
/// call adds a fresh subtree; nothing already under `container` is reused or
/// replaced.
///
/// The first failure aborts the descent. The failing subtree is never
/// attached, so `container` is left as it was.
pub fn render<N: Node>(element: &Element, container: &N) -> Result<(), MountError> {
    let span = debug_span!("render", root = %element.ty());
    let _enter = span.enter();

    mount(element, container).inspect_err(|err| warn!("mount aborted: {err}"))
}

fn mount<N: Node>(element: &Element, container: &N) -> Result<(), MountError> {
    let node = match element.ty() {
        ElementType::Text => N::text()?,
        ElementType::Tag(name) => N::element(name)?,
    };
    trace!(ty = %element.ty(), "created node");

    for (name, value) in element.props().iter() {
        debug_assert_ne!(name, CHILDREN);
        node.set_property(name, value)?;
    }

    for child in element.children() {
        mount(child, &node)?;
    }

    container.append_child(&node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        create_element, create_text_element,
        node::memory::{MemoryNode, NodeKind},
        Child, PropMap, PropValue,
    };

    fn root() -> MemoryNode {
        MemoryNode::element("main").unwrap()
    }

    fn props<const N: usize>(entries: [(&str, PropValue); N]) -> Option<PropMap> {
        Some(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }

    #[test]
    fn text_element_becomes_text_node() {
        let container = root();
        render(&create_text_element("hello"), &container).unwrap();

        let children = container.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].kind(), NodeKind::Text("hello".into()));
    }

    #[test]
    fn element_props_are_assigned() {
        let container = root();
        let div = create_element(
            "div",
            props([("style", "color:red".into())]),
            Vec::<Child>::new(),
        );
        render(&div, &container).unwrap();

        let children = container.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag_name().as_deref(), Some("div"));
        assert_eq!(
            children[0].property("style"),
            Some(PropValue::from("color:red"))
        );
        assert!(children[0].children().is_empty());
    }

    #[test]
    fn nested_tree_is_mirrored() {
        let element = create_element(
            "div",
            props([("style", "background: salmon".into())]),
            [
                create_element("h1", None, ["Hello"]),
                create_element(
                    "h2",
                    props([("style", "text-align:right".into())]),
                    ["from X"],
                ),
            ],
        );

        let container = root();
        render(&element, &container).unwrap();

        let children = container.children();
        assert_eq!(children.len(), 1);
        let div = &children[0];
        let [h1, h2] = <[MemoryNode; 2]>::try_from(div.children()).unwrap();

        assert_eq!(h1.tag_name().as_deref(), Some("h1"));
        assert_eq!(h1.children().len(), 1);
        assert_eq!(h1.children()[0].text_content().as_deref(), Some("Hello"));

        assert_eq!(h2.tag_name().as_deref(), Some("h2"));
        assert_eq!(
            h2.property("style"),
            Some(PropValue::from("text-align:right"))
        );
        assert_eq!(h2.children()[0].text_content().as_deref(), Some("from X"));

        assert_eq!(
            container.to_string(),
            "<main>\n  <div style=\"background: salmon\">\n    <h1>\n      Hello\n    </h1>\n    <h2 style=\"text-align:right\">\n      from X\n    </h2>\n  </div>\n</main>"
        );
    }

    #[test]
    fn rendering_twice_appends_siblings() {
        let container = root();
        render(&create_element("p", None, ["one"]), &container).unwrap();
        render(&create_element("p", None, ["two"]), &container).unwrap();

        let children = container.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].children()[0].text_content().as_deref(), Some("one"));
        assert_eq!(children[1].children()[0].text_content().as_deref(), Some("two"));
    }

    #[test]
    fn same_element_can_render_twice() {
        let element = create_element("li", None, [1]);
        let container = root();
        render(&element, &container).unwrap();
        render(&element, &container).unwrap();

        let children = container.children();
        assert_eq!(children.len(), 2);
        assert_ne!(children[0], children[1]);
    }

    #[test]
    fn failure_leaves_container_untouched() {
        let element = create_element(
            "section",
            None,
            [
                create_element("p", None, ["fine"]),
                create_element("bad tag", None, ["never"]),
            ],
        );

        let container = root();
        assert_eq!(
            render(&element, &container),
            Err(MountError::InvalidTagName("bad tag".into()))
        );
        assert!(container.children().is_empty());
    }

    #[test]
    fn rejected_property_aborts() {
        let element = create_element(
            "div",
            props([("parentNode", "nope".into())]),
            ["text"],
        );

        let container = root();
        assert_eq!(
            render(&element, &container),
            Err(MountError::ReadOnlyProperty("parentNode".into()))
        );
        assert!(container.children().is_empty());
    }

    #[test]
    fn text_container_rejects_mount() {
        let container = MemoryNode::text().unwrap();
        assert_eq!(
            render(&create_element("b", None, ["x"]), &container),
            Err(MountError::HierarchyRequest)
        );
    }
}
