use crate::actions::Event;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        classes: Vec<String>,
        children: Vec<VNode>,
        /// Stable identity for list items (block ids, feed entries)
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        on_click: Option<Event>,
        /// Fired when the element's media fails to load
        #[serde(skip_serializing_if = "Option::is_none")]
        on_error: Option<Event>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
            key: None,
            on_click: None,
            on_error: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut classes, ..
        } = self
        {
            classes.push(class.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append a child only when present
    pub fn with_optional_child(self, child: Option<VNode>) -> Self {
        match child {
            Some(child) => self.with_child(child),
            None => self,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn on_click(mut self, event: Option<Event>) -> Self {
        if let VNode::Element {
            ref mut on_click, ..
        } = self
        {
            *on_click = event;
        }
        self
    }

    pub fn on_error(mut self, event: Option<Event>) -> Self {
        if let VNode::Element {
            ref mut on_error, ..
        } = self
        {
            *on_error = event;
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        match self {
            VNode::Element { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn click_event(&self) -> Option<&Event> {
        match self {
            VNode::Element { on_click, .. } => on_click.as_ref(),
            _ => None,
        }
    }

    pub fn error_event(&self) -> Option<&Event> {
        match self {
            VNode::Element { on_error, .. } => on_error.as_ref(),
            _ => None,
        }
    }

    /// Depth-first search for all nodes matching a predicate
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool) -> Vec<&'a VNode> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    /// First node (depth-first) matching a predicate
    pub fn find<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&'a VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&VNode) -> bool, found: &mut Vec<&'a VNode>) {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.collect(predicate, found);
        }
    }

    /// Every event exposed anywhere in this subtree
    pub fn events(&self) -> Vec<&Event> {
        let mut events = Vec::new();
        for node in self.find_all(&|n| n.click_event().is_some() || n.error_event().is_some()) {
            events.extend(node.click_event());
            events.extend(node.error_event());
        }
        events
    }

    /// Concatenated text content of the subtree
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect::<String>()
            }
        }
    }
}
