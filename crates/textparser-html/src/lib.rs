//! # HTML host
//!
//! Materializes built [`Element`]s as static HTML markup.
//!
//! - Text is escaped, attribute values are escaped for double quotes
//! - `className` is written as `class`
//! - Void tags (`br`, `hr`, `img`, `input`, `meta`, `link`) are self-closed
//! - Components resolve to a tag through [`HtmlHost::with_component`]

use std::collections::HashMap;

use textparser_engine::{Element, ElementType, Props};

const VOID_TAGS: [&str; 6] = ["br", "hr", "img", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("No tag registered for component '{id}'")]
    UnknownComponent { id: String },
}

#[derive(Debug, Clone, Default)]
pub struct HtmlHost {
    components: HashMap<String, String>,
}

impl HtmlHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders elements of component `id` as `tag`.
    pub fn with_component(mut self, id: impl Into<String>, tag: impl Into<String>) -> Self {
        self.components.insert(id.into(), tag.into());
        self
    }

    pub fn render(&self, elements: &[Element]) -> Result<String, HtmlError> {
        let mut out = String::new();
        for element in elements {
            self.write_element(element, &mut out)?;
        }
        Ok(out)
    }

    fn write_element(&self, element: &Element, out: &mut String) -> Result<(), HtmlError> {
        let (element_type, props, children) = match element {
            Element::Text(text) => {
                out.push_str(&html_escape::encode_text(text));
                return Ok(());
            }
            Element::Node {
                element_type,
                props,
                children,
                ..
            } => (element_type, props, children),
        };

        let tag = self.tag_for(element_type)?;
        out.push('<');
        out.push_str(tag);
        write_attributes(props, out);

        if children.is_empty() && VOID_TAGS.iter().any(|void| *void == tag) {
            out.push_str("/>");
            return Ok(());
        }

        out.push('>');
        for child in children {
            self.write_element(child, out)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    fn tag_for<'a>(&'a self, element_type: &'a ElementType) -> Result<&'a str, HtmlError> {
        match element_type {
            ElementType::Tag(tag) => Ok(tag.as_str()),
            ElementType::Component(component) => self
                .components
                .get(component.id())
                .map(String::as_str)
                .ok_or_else(|| {
                    log::warn!("unresolved component '{}'", component.id());
                    HtmlError::UnknownComponent {
                        id: component.id().to_string(),
                    }
                }),
        }
    }
}

fn write_attributes(props: &Props, out: &mut String) {
    for (name, value) in props {
        let name = if name == "className" { "class" } else { name };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}
