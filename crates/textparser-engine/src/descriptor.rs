use std::collections::BTreeMap;

use serde::Serialize;

/// Key/value configuration passed verbatim to the host.
pub type Props = BTreeMap<String, String>;

/// Opaque handle to a host component. The engine never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A plain tag name such as `p` or `a`.
    Tag(String),
    /// A host-defined component.
    Component(ComponentRef),
}

/// What a renderer returns for one composite node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub element_type: ElementType,
    pub props: Props,
    /// When set, used as the element's children instead of building the
    /// node's own content.
    pub children: Option<Vec<Element>>,
}

impl ElementDescriptor {
    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(ElementType::Tag(name.into()))
    }

    pub fn component(component: ComponentRef) -> Self {
        Self::new(ElementType::Component(component))
    }

    fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            props: Props::new(),
            children: None,
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = Some(children);
        self
    }
}

/// A built node, ready for a host renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Text(String),
    Node {
        #[serde(rename = "type")]
        element_type: ElementType,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        props: Props,
        /// Position among siblings.
        key: usize,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Element>,
    },
}

impl Element {
    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Element::Text(text) => text.clone(),
            Element::Node { children, .. } => {
                children.iter().map(Element::text_content).collect()
            }
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Text(_) => &[],
            Element::Node { children, .. } => children,
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            Element::Text(_) => None,
            Element::Node { props, .. } => Some(props),
        }
    }
}
