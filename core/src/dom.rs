//! Output seam for rendered HTML: something that can look up an element by id
//! and replace its contents.

use std::collections::HashMap;

pub trait Element {
    fn inner_html(&self) -> &str;
    fn set_inner_html(&mut self, html: String);
}

pub trait Document {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn Element>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    html: String,
}

impl Element for MemoryElement {
    fn inner_html(&self) -> &str {
        &self.html
    }

    fn set_inner_html(&mut self, html: String) {
        self.html = html;
    }
}

/// In-memory document: a flat map of element ids to their contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding one empty element per id.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut doc = Self::new();
        for id in ids {
            doc.insert(id);
        }
        doc
    }

    pub fn insert(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    pub fn html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.inner_html())
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn Element> {
        self.elements.get_mut(id).map(|e| e as &mut dyn Element)
    }
}
