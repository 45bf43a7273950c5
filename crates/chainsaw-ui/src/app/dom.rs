//! Browser DOM helpers shared by the routed app and the static page.

use crate::core::error::{DomError, DomResult};
use crate::core::surface::ClassTarget;
use gloo::console;
use web_sys::{Document, Element, HtmlElement};

impl ClassTarget for Element {
    fn add_class(&self, class: &'static str) -> DomResult<()> {
        self.class_list()
            .add_1(class)
            .map_err(|err| DomError::ClassList {
                class,
                detail: format!("{err:?}"),
            })
    }

    fn remove_class(&self, class: &'static str) -> DomResult<()> {
        self.class_list()
            .remove_1(class)
            .map_err(|err| DomError::ClassList {
                class,
                detail: format!("{err:?}"),
            })
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

pub(crate) fn document() -> DomResult<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)
}

pub(crate) fn element_by_id(id: &'static str) -> DomResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement { id })
}

pub(crate) fn body() -> DomResult<HtmlElement> {
    document()?
        .body()
        .ok_or(DomError::MissingElement { id: "body" })
}

pub(crate) fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        console::error!("attribute update failed", name.to_string(), err);
    }
}

pub(crate) fn log_dom_error(context: &'static str, err: &DomError) {
    match err {
        DomError::MissingElement { id } => console::warn!(context, err.to_string(), *id),
        _ => console::error!(context, err.to_string(), format!("{err:?}")),
    }
}
