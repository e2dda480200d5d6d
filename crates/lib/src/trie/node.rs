//! The multiway trie node.
//!
//! A `TrieNode` is a cheap handle (`Rc`) over shared node state; cloning a
//! handle never copies the subtree. Children live in a [`DynArray`] grown
//! through the golden-ratio resize policy exactly when full, and each level's
//! lookup is a linear scan of that buffer. The parent edge is a `Weak`
//! handle, keeping ownership strictly downward.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::Result;
use crate::array::DynArray;
use crate::contract::{Capacity, Postpend, Resize, Slice};
use crate::glyph::Glyph;
use crate::trie::filter::Filter;

/// Shared state behind a [`TrieNode`] handle.
struct NodeState<T> {
    /// Immutable after construction; `None` only for the root anchor.
    key: Option<Glyph>,
    element: Option<T>,
    /// Non-owning back edge; empty for the root.
    parent: Weak<RefCell<NodeState<T>>>,
    children: DynArray<TrieNode<T>>,
    /// The trie-wide miss policy, identical in every node of one trie.
    filter: Rc<dyn Filter<T>>,
}

/// A node of a multiway trie keyed by one glyph per level.
///
/// A node is *root* (no parent), *interior* (parent and children) or *leaf*
/// (parent, no children); it may hold an element regardless of child count,
/// so pure path segments are allowed.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use trellis::Glyph;
/// use trellis::trie::{StrictFilter, TrieNode};
///
/// let node = TrieNode::root(Rc::new(StrictFilter));
/// node.insert(Glyph::new("a")?, Some(1))?;
/// node.insert(Glyph::new("a")?, Some(2))?; // overwrites, never duplicates
/// assert_eq!(node.child_count(), 1);
/// assert_eq!(node.get(&Glyph::new("a")?)?, Some(2));
/// # Ok::<(), trellis::Error>(())
/// ```
pub struct TrieNode<T> {
    state: Rc<RefCell<NodeState<T>>>,
}

impl<T> TrieNode<T> {
    /// Create a root node sharing `filter` with every descendant it grows.
    pub fn root(filter: Rc<dyn Filter<T>>) -> Self {
        Self::construct(None, None, filter, Weak::new())
    }

    fn construct(
        key: Option<Glyph>,
        element: Option<T>,
        filter: Rc<dyn Filter<T>>,
        parent: Weak<RefCell<NodeState<T>>>,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(NodeState {
                key,
                element,
                parent,
                children: DynArray::new(),
                filter,
            })),
        }
    }

    /// The node's key; `None` only for the root anchor.
    pub fn key(&self) -> Option<Glyph> {
        self.state.borrow().key.clone()
    }

    /// The parent node, if this node has one.
    ///
    /// Upgrades the weak back edge; a detached subtree whose former parent
    /// was dropped reports no parent.
    pub fn parent(&self) -> Option<TrieNode<T>> {
        self.state
            .borrow()
            .parent
            .upgrade()
            .map(|state| TrieNode { state })
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.state.borrow().children.count()
    }

    /// Allocated capacity of the child buffer.
    pub fn child_capacity(&self) -> usize {
        self.state.borrow().children.capacity()
    }

    /// Whether this node currently holds an element.
    pub fn has_element(&self) -> bool {
        self.state.borrow().element.is_some()
    }

    /// Clone out the node's element, if any.
    pub fn element(&self) -> Option<T>
    where
        T: Clone,
    {
        self.state.borrow().element.clone()
    }

    /// Overwrite the node's element in place.
    pub fn set_element(&self, element: Option<T>) {
        self.state.borrow_mut().element = element;
    }

    /// The miss policy shared by every node of this trie.
    pub fn filter(&self) -> Rc<dyn Filter<T>> {
        Rc::clone(&self.state.borrow().filter)
    }

    /// Linear scan of the direct children for one whose key equals `key`.
    pub fn find_child(&self, key: &Glyph) -> Option<TrieNode<T>> {
        let state = self.state.borrow();
        state
            .children
            .iter()
            .find(|child| child.state.borrow().key.as_ref() == Some(key))
            .cloned()
    }

    /// The direct child at `at`, in insertion order.
    pub fn child_at(&self, at: usize) -> Option<TrieNode<T>> {
        self.state.borrow().children.get(at).cloned()
    }

    /// Find the child keyed `key`, creating an element-less one if absent.
    ///
    /// Creation grows the child buffer one golden-ratio step when it is
    /// exactly full, then appends a node wired to this node's filter and a
    /// weak parent edge.
    pub fn ensure_child(&self, key: Glyph) -> Result<TrieNode<T>> {
        if let Some(existing) = self.find_child(&key) {
            return Ok(existing);
        }
        let mut state = self.state.borrow_mut();
        if state.children.is_full() {
            state.children.grow()?;
        }
        trace!(key = %key, "Creating trie child");
        let child = TrieNode::construct(
            Some(key),
            None,
            Rc::clone(&state.filter),
            Rc::downgrade(&self.state),
        );
        state.children.postpend(child.clone())?;
        Ok(child)
    }

    /// Insert `element` under `key`, returning this node.
    ///
    /// Idempotent on the structure: an existing child's element is
    /// overwritten in place, never duplicated; a missing child is created.
    pub fn insert(&self, key: Glyph, element: Option<T>) -> Result<TrieNode<T>> {
        let child = self.ensure_child(key)?;
        child.set_element(element);
        Ok(self.clone())
    }

    /// Keyed lookup: the child's element if `key` is present, otherwise
    /// whatever the trie's filter decides a miss means.
    pub fn get(&self, key: &Glyph) -> Result<Option<T>>
    where
        T: Clone,
    {
        if let Some(child) = self.find_child(key) {
            return Ok(child.element());
        }
        trace!(key = %key, "Trie lookup missed, delegating to filter");
        let filter = self.filter();
        filter.on_missing_read(self, key)
    }

    /// Keyed write: overwrite the child's element if `key` is present,
    /// otherwise delegate to the trie's filter.
    pub fn set(&self, key: &Glyph, value: T) -> Result<()> {
        if let Some(child) = self.find_child(key) {
            child.set_element(Some(value));
            return Ok(());
        }
        trace!(key = %key, "Trie write missed, delegating to filter");
        let filter = self.filter();
        filter.on_missing_write(self, key, value)
    }

    /// Replace every element in this subtree equal to `search` with
    /// `replacement`, returning how many nodes changed.
    ///
    /// Matching uses `Option` equality, so `search = None` targets nodes with
    /// no element. Recursion continues into every child whether or not the
    /// node itself matched.
    pub fn replace(&self, search: Option<&T>, replacement: Option<T>) -> usize
    where
        T: PartialEq + Clone,
    {
        let matched = {
            let state = self.state.borrow();
            match (state.element.as_ref(), search) {
                (None, None) => true,
                (Some(element), Some(search)) => element == search,
                _ => false,
            }
        };
        let mut replaced = 0;
        if matched {
            self.state.borrow_mut().element = replacement.clone();
            replaced += 1;
        }
        // Clone the handles out so no borrow is held across the recursion.
        let children: Vec<TrieNode<T>> = self.state.borrow().children.iter().cloned().collect();
        for child in children {
            replaced += child.replace(search, replacement.clone());
        }
        replaced
    }

    /// Number of elements held in this subtree, this node included.
    pub fn element_count(&self) -> usize {
        let state = self.state.borrow();
        let own = usize::from(state.element.is_some());
        own + state
            .children
            .iter()
            .map(TrieNode::element_count)
            .sum::<usize>()
    }
}

impl<T> Clone for TrieNode<T> {
    /// Clone the handle; the node state is shared, not copied.
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> PartialEq for TrieNode<T> {
    /// Nodes are equal only by identity, never by structural content.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T> Eq for TrieNode<T> {}

impl<T: fmt::Debug> fmt::Debug for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("TrieNode")
            .field("key", &state.key)
            .field("element", &state.element)
            .field("children", &state.children.count())
            .finish()
    }
}
