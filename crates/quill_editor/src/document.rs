//! Retained view tree the editors render into.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Removing a node frees its whole
//! subtree. Freed slots are reused under a new generation, so a stale id stops resolving.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub value: String,
    pub checked: bool,
    pub selected: bool,
    pub disabled: bool,
    pub hidden: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == "input" && self.attr("type") == Some("checkbox")
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Default)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element. `classes` is a space separated class list.
    pub fn create(&mut self, tag: &str, classes: &str) -> NodeId {
        let node = Node {
            tag: tag.to_string(),
            classes: classes.split_whitespace().map(str::to_string).collect(),
            ..Node::default()
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Number of slots in the arena, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Creates an element and appends it to `parent`.
    pub fn append_new(&mut self, parent: NodeId, tag: &str, classes: &str) -> NodeId {
        let id = self.create(tag, classes);
        self.append_child(parent, id);
        id
    }

    pub fn create_checkbox(&mut self, classes: &str) -> NodeId {
        let id = self.create("input", classes);
        self.set_attr(id, "type", "checkbox");
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            p.children.insert(0, child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
    }

    /// Removes `id` and its subtree. Returns every freed id, `id` first.
    pub fn remove(&mut self, id: NodeId) -> Vec<NodeId> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        self.detach(id);
        let mut freed = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.take(next) {
                freed.push(next);
                stack.extend(node.children.into_iter().rev());
            }
        }
        freed
    }

    fn take(&mut self, id: NodeId) -> Option<Node> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Some(node)
    }

    /// Removes all children of `id`, returning every freed id.
    pub fn empty(&mut self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .into_iter()
            .flat_map(|child| self.remove(child))
            .collect()
    }

    /// Puts `new` where `old` was and frees `old`'s subtree.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Vec<NodeId> {
        self.detach(new);
        if let Some(parent) = self.parent(old) {
            if let Some(p) = self.node_mut(parent) {
                if let Some(pos) = p.children.iter().position(|c| *c == old) {
                    p.children[pos] = new;
                }
            }
            if let Some(n) = self.node_mut(old) {
                n.parent = None;
            }
            if let Some(n) = self.node_mut(new) {
                n.parent = Some(parent);
            }
        }
        self.remove(old)
    }

    /// Pre-order descendants of `root`, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).into_iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        out
    }

    pub fn find_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.node(*id).is_some_and(|n| n.has_class(class)))
    }

    pub fn find_all_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.node(*id).is_some_and(|n| n.has_class(class)))
            .collect()
    }

    pub fn find_by_tag(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.node(*id).is_some_and(|n| n.tag == tag))
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).is_some_and(|n| n.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.node_mut(id) {
            if !n.has_class(class) {
                n.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(n) = self.node_mut(id) {
            n.classes.retain(|c| c != class);
        }
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<String> {
        self.node(id).and_then(|n| n.attr(name)).map(str::to_string)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.attrs.insert(name.to_string(), value.into());
        }
    }

    pub fn text(&self, id: NodeId) -> String {
        self.node(id).map(|n| n.text.clone()).unwrap_or_default()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.text = text.into();
        }
    }

    pub fn value(&self, id: NodeId) -> String {
        self.node(id).map(|n| n.value.clone()).unwrap_or_default()
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.value = value.into();
        }
    }

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.checked)
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if let Some(n) = self.node_mut(id) {
            n.checked = checked;
        }
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.disabled)
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(n) = self.node_mut(id) {
            n.disabled = disabled;
        }
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.hidden)
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(n) = self.node_mut(id) {
            n.hidden = hidden;
        }
    }

    /// Appends an `option` child to a select.
    pub fn add_select_option(&mut self, select: NodeId, value: &str) -> NodeId {
        let option = self.append_new(select, "option", "");
        self.set_value(option, value);
        self.set_text(option, value);
        option
    }

    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        self.children(select)
            .into_iter()
            .find(|id| self.node(*id).is_some_and(|n| n.tag == "option" && n.selected))
    }

    pub fn select_value(&self, select: NodeId) -> Option<String> {
        self.selected_option(select).map(|id| self.value(id))
    }

    /// Marks `option` as the only selected child of `select`; `None` clears the selection.
    pub fn set_selected_option(&mut self, select: NodeId, option: Option<NodeId>) {
        for child in self.children(select) {
            if let Some(n) = self.node_mut(child) {
                n.selected = Some(child) == option;
            }
        }
    }

    /// Selects the first option whose value equals `value`. Returns false when none matches,
    /// leaving the selection cleared.
    pub fn set_select_value(&mut self, select: NodeId, value: &str) -> bool {
        let target = self
            .children(select)
            .into_iter()
            .find(|id| self.node(*id).is_some_and(|n| n.tag == "option" && n.value == value));
        self.set_selected_option(select, target);
        target.is_some()
    }

    /// Concatenated text of `id` and its descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = self.text(id);
        for child in self.descendants(id) {
            out.push_str(&self.text(child));
        }
        out
    }
}
