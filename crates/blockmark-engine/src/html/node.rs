use crate::error::RenderError;

/// Insertion-ordered attribute map with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the stringified `value`.
    ///
    /// Re-inserting an existing key replaces its value but keeps the
    /// position of the first insertion.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as ` key="value"` pairs in insertion order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&value.replace('"', "&quot;"));
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// An HTML element tree node.
///
/// Three shapes exist, each with its own constructor:
/// - raw text: no tag, a value, no children
/// - leaf: a tag and a value
/// - parent: a tag and children
///
/// A node never holds both a value and children. Nodes are built bottom-up
/// and not mutated once their parent holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Option<String>,
    value: Option<String>,
    children: Vec<Node>,
    attributes: Attributes,
}

impl Node {
    /// Raw text rendered exactly as given.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: None,
            children,
            attributes: Attributes::new(),
        }
    }

    /// Replaces the attribute set. Raw text nodes ignore attributes when rendered.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Serializes the tree to HTML.
    ///
    /// Fails with [`RenderError::Structural`] on a tagged container that has
    /// neither a value nor children.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        let Some(tag) = &self.tag else {
            // Raw text: value is always present by construction.
            out.push_str(self.value.as_deref().unwrap_or_default());
            return Ok(());
        };

        out.push('<');
        out.push_str(tag);
        out.push_str(&self.attributes.to_html());
        out.push('>');

        match &self.value {
            Some(value) => out.push_str(value),
            None if self.children.is_empty() => {
                return Err(RenderError::Structural {
                    tag: tag.clone(),
                    reason: "container has neither a value nor children",
                });
            }
            None => {
                for child in &self.children {
                    child.render_into(out)?;
                }
            }
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }
}
