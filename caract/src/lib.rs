#![warn(clippy::use_self)]

extern crate self as caract;

pub use caract_core::*;
pub use caract_macros::jsx;
pub use web_sys;

pub mod prelude {
    pub use crate::{
        create_element, create_text_element, jsx, mount, render, Callback, Child, Element,
        MountError, Node as _, Primitive, PropMap, PropValue,
    };
}

/// Renders `element` into the document element with the given `id`.
///
/// The page owns the container; it must exist before this is called.
pub fn mount(element: &Element, id: &str) -> Result<(), MountError> {
    let container = WebNode::by_id(id)?;
    tracing::debug!(id, "mounting into container");
    render(element, &container)
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use wasm_bindgen_test::*;

    use crate::{
        prelude::*,
        web_sys::{wasm_bindgen::JsCast, HtmlElement},
    };

    wasm_bindgen_test_configure!(run_in_browser);

    fn host(id: &str) -> web_sys::Element {
        let document = crate::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_id(id);
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    #[wasm_bindgen_test]
    fn mounts_by_id() {
        let host = host("caract-mount");
        let element = jsx! {
            <div style="background: salmon">
                <h1>"Hello World"</h1>
                <h2 style="text-align:right">"from Caract"</h2>
            </div>
        };

        mount(&element, "caract-mount").unwrap();

        assert_eq!(host.child_element_count(), 1);
        let div = host.first_element_child().unwrap();
        assert_eq!(div.tag_name(), "DIV");
        assert_eq!(div.child_element_count(), 2);
        assert_eq!(div.first_element_child().unwrap().tag_name(), "H1");
        assert_eq!(div.last_element_child().unwrap().tag_name(), "H2");
        assert_eq!(div.text_content().as_deref(), Some("Hello Worldfrom Caract"));

        let style = |element: web_sys::Element, name: &str| {
            let element: HtmlElement = element.unchecked_into();
            element.style().get_property_value(name).unwrap()
        };
        assert_eq!(style(div.clone(), "background-color"), "salmon");
        assert_eq!(style(div.last_element_child().unwrap(), "text-align"), "right");
        host.remove();
    }

    #[wasm_bindgen_test]
    fn missing_container_is_reported() {
        let element = jsx!(<p>"x"</p>);
        assert_eq!(
            mount(&element, "caract-nowhere"),
            Err(MountError::ContainerNotFound("caract-nowhere".into()))
        );
    }
}
