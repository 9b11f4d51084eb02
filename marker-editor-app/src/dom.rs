//! Helpers for working with DOM elements that live outside of the Yew tree.

use gloo::events::EventListener;
use thiserror::Error;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Element, Event, Node, NodeList};

/// Errors from DOM manipulation.
#[derive(Debug, Error)]
pub enum DomError {
    /// An underlying error from JS.
    #[error("Error from JS: {0:?}")]
    JsError(JsValue),
    /// The document had no head.
    #[error("document.head was null")]
    MissingHead,
    /// The document had no body.
    #[error("document.body was null")]
    MissingBody,
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::JsError(value)
    }
}

/// What to put inside a built element.
pub enum NodeContent<'a> {
    /// Set as the element's inner HTML.
    Html(&'a str),
    /// Appended as the element's only child.
    Element(Element),
}

/// Builder for DOM elements.
pub struct NodeBuilder<'a> {
    /// Tag of the element to create.
    tag: &'a str,
    /// Namespace to create the element in, or `None` for an HTML element.
    namespace: Option<&'a str>,
    /// Content of the element.
    content: Option<NodeContent<'a>>,
    /// Attributes to set on the element.
    attrs: Vec<(&'a str, &'a str)>,
    /// Listeners to attach to the element.
    events: Vec<(&'static str, Box<dyn FnMut(&Event)>)>,
}

impl<'a> NodeBuilder<'a> {
    /// Starts building an element with the given tag.
    pub fn new(tag: &'a str) -> Self {
        Self {
            tag,
            namespace: None,
            content: None,
            attrs: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Starts building an element in the given namespace, e.g. SVG.
    pub fn new_ns(namespace: &'a str, tag: &'a str) -> Self {
        Self {
            namespace: Some(namespace),
            ..Self::new(tag)
        }
    }

    /// Sets the content of the element.
    pub fn content(mut self, content: NodeContent<'a>) -> Self {
        self.content = Some(content);
        self
    }

    /// Sets an attribute on the element.
    pub fn attr(mut self, name: &'a str, value: &'a str) -> Self {
        self.attrs.push((name, value));
        self
    }

    /// Attaches an event listener to the element. The listener lives as long as the page.
    pub fn on<F>(mut self, event: &'static str, listener: F) -> Self
    where
        F: FnMut(&Event) + 'static,
    {
        self.events.push((event, Box::new(listener)));
        self
    }

    /// Creates the element.
    pub fn build(self) -> Result<Element, DomError> {
        let document = gloo::utils::document();
        let ele = match self.namespace {
            Some(namespace) => document.create_element_ns(Some(namespace), self.tag)?,
            None => document.create_element(self.tag)?,
        };
        for (name, value) in self.attrs {
            ele.set_attribute(name, value)?;
        }
        match self.content {
            Some(NodeContent::Html(html)) => ele.set_inner_html(html),
            Some(NodeContent::Element(child)) => {
                ele.append_child(&child)?;
            }
            None => {}
        }
        for (event, listener) in self.events {
            EventListener::new(&ele, event, listener).forget();
        }
        Ok(ele)
    }
}

/// Creates an element with the given attributes.
pub fn build_node(tag: &str, attrs: &[(&str, &str)]) -> Result<Element, DomError> {
    attrs
        .iter()
        .fold(NodeBuilder::new(tag), |builder, &(name, value)| {
            builder.attr(name, value)
        })
        .build()
}

/// Appends each present child to `parent`, in order. Returns `parent`.
pub fn append_children<'p, I>(parent: &'p Element, children: I) -> Result<&'p Element, DomError>
where
    I: IntoIterator<Item = Option<Element>>,
{
    for child in children.into_iter().flatten() {
        parent.append_child(&child)?;
    }
    Ok(parent)
}

/// Removes all children from the given node.
pub fn clear_ele(ele: &Node) -> Result<(), DomError> {
    while let Some(child) = ele.first_child() {
        ele.remove_child(&child)?;
    }
    Ok(())
}

/// Result of [`select`].
pub enum Selection {
    /// The selector was a plain id selector.
    Single(Option<Element>),
    /// Everything matching the selector.
    All(NodeList),
}

impl Selection {
    /// All selected elements, in document order.
    pub fn into_elements(self) -> Vec<Element> {
        match self {
            Selection::Single(ele) => ele.into_iter().collect(),
            Selection::All(list) => (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect(),
        }
    }
}

/// Runs a selector against `scope`, or the whole document if `scope` is `None`. A selector that
/// starts with `#` and contains no spaces selects a single element, anything else selects every
/// match.
pub fn select(selector: &str, scope: Option<&Element>) -> Result<Selection, DomError> {
    if selector.starts_with('#') && !selector.contains(' ') {
        return select_one(selector, scope).map(Selection::Single);
    }
    let list = match scope {
        Some(scope) => scope.query_selector_all(selector)?,
        None => gloo::utils::document().query_selector_all(selector)?,
    };
    Ok(Selection::All(list))
}

/// Like [`select`], but always selects at most one element.
pub fn select_one(selector: &str, scope: Option<&Element>) -> Result<Option<Element>, DomError> {
    let ele = match scope {
        Some(scope) => scope.query_selector(selector)?,
        None => gloo::utils::document().query_selector(selector)?,
    };
    Ok(ele)
}

/// Gets the document's `<head>`.
pub fn head() -> Result<Element, DomError> {
    gloo::utils::document()
        .head()
        .map(Into::into)
        .ok_or(DomError::MissingHead)
}

/// Gets the document's `<body>`.
pub fn body() -> Result<Element, DomError> {
    gloo::utils::document()
        .body()
        .map(Into::into)
        .ok_or(DomError::MissingBody)
}
