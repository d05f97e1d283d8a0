//! Node abstraction the transition mutates.
//!
//! [`TransitionNode`] is the subset of an element the applicator needs: class
//! list access, a style commit and a connectivity check. [`ElementNode`] is an
//! in-memory element handle; clones share the same underlying element the way
//! DOM references do.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An element whose class list a transition drives.
pub trait TransitionNode {
    /// Space-separated class string as currently stored on the node.
    fn class_name(&self) -> String;

    fn contains_class(&self, token: &str) -> bool;

    fn add_class(&mut self, token: &str);

    fn remove_class(&mut self, token: &str);

    /// Forces any pending style recalculation to complete.
    ///
    /// Called between the start and active mutations of a sequence so the
    /// active class is observed as a separate change. The read has no result.
    fn commit_pending_styles(&mut self);

    /// Whether the node is still attached. Detached nodes are left untouched.
    fn is_connected(&self) -> bool {
        true
    }
}

/// Ordered set of class tokens.
///
/// Insertion order is preserved and duplicates are never stored, so the
/// rendered string is stable across identical sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class string, dropping duplicates.
    pub fn parse(class_name: &str) -> Self {
        let mut list = Self::new();
        list.add(class_name);
        list
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add every whitespace-separated token in `tokens`.
    ///
    /// Returns true if at least one token was inserted.
    pub fn add(&mut self, tokens: &str) -> bool {
        let mut inserted = false;
        for token in tokens.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
                inserted = true;
            }
        }
        inserted
    }

    /// Remove every whitespace-separated token in `tokens`.
    pub fn remove(&mut self, tokens: &str) -> bool {
        let before = self.tokens.len();
        for token in tokens.split_whitespace() {
            self.tokens.retain(|t| t != token);
        }
        self.tokens.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

#[derive(Debug)]
struct ElementState {
    tag_name: String,
    classes: ClassList,
    connected: bool,
    style_commits: u64,
}

/// In-memory element handle.
#[derive(Debug, Clone)]
pub struct ElementNode {
    inner: Rc<RefCell<ElementState>>,
}

impl ElementNode {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementState {
                tag_name: tag_name.into(),
                classes: ClassList::new(),
                connected: true,
                style_commits: 0,
            })),
        }
    }

    /// Create an element with an initial class string.
    pub fn with_class_name(tag_name: impl Into<String>, class_name: &str) -> Self {
        let node = Self::new(tag_name);
        node.inner.borrow_mut().classes = ClassList::parse(class_name);
        node
    }

    pub fn tag_name(&self) -> String {
        self.inner.borrow().tag_name.clone()
    }

    pub fn class_list(&self) -> ClassList {
        self.inner.borrow().classes.clone()
    }

    /// Number of style commits forced against this element.
    pub fn style_commits(&self) -> u64 {
        self.inner.borrow().style_commits
    }

    /// Remove the element from its document. Every handle observes the change.
    pub fn detach(&self) {
        self.inner.borrow_mut().connected = false;
    }

    pub fn attach(&self) {
        self.inner.borrow_mut().connected = true;
    }

    /// Whether two handles refer to the same element.
    pub fn same_node(&self, other: &ElementNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl TransitionNode for ElementNode {
    fn class_name(&self) -> String {
        self.inner.borrow().classes.as_string()
    }

    fn contains_class(&self, token: &str) -> bool {
        self.inner.borrow().classes.contains(token)
    }

    fn add_class(&mut self, token: &str) {
        self.inner.borrow_mut().classes.add(token);
    }

    fn remove_class(&mut self, token: &str) {
        self.inner.borrow_mut().classes.remove(token);
    }

    fn commit_pending_styles(&mut self) {
        self.inner.borrow_mut().style_commits += 1;
    }

    fn is_connected(&self) -> bool {
        self.inner.borrow().connected
    }
}
