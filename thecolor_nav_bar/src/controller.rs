// Copyright 2025 the TheColor authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation bar appearance controller tree.
//!
//! # Resolution
//!
//! Every push is stamped from a counter shared by the whole tree. A node's
//! *layers* are the surviving entries of its own stack and of every
//! descendant's stack, ordered by stamp. The effective appearance is those
//! layers merged newest-over-oldest with [`NavBarAppearance::over`], or
//! `None` when there are no layers.
//!
//! Because layers are ordered by stamp rather than by position in the tree,
//! whichever node was written last wins, and removing that write reveals the
//! next most recent surviving one, wherever in the subtree it lives.
//!
//! # Propagation
//!
//! After a node's stack changes, the node recomputes its layers, then its
//! parent does, up to the root. Each node re-emits only if its effective
//! appearance changed. Nodes hold a weak reference to their parent, so a
//! detached or orphaned node never keeps its ancestors alive.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use smallvec::SmallVec;

use crate::appearance::{NavBarAppearance, TaggedAppearance};
use crate::defaults::{NavBarDefaults, ResolvedNavBar};
use crate::logging::{debug, trace};
use crate::signal::{Signal, Subscription};
use crate::stack::AppearanceStack;

/// Label of a controller created with [`NavBarAppearanceController::root`].
pub const ROOT_LABEL: &str = "root";

/// Most stacks hold one or two entries: a screen's own appearance and maybe
/// an override while something is animating.
const INLINE_ENTRIES: usize = 2;

type Layers = Vec<(u64, NavBarAppearance)>;

struct Entry<T> {
    stamp: u64,
    tagged: TaggedAppearance<T>,
}

struct Node<T> {
    label: String,
    depth: usize,
    parent: RefCell<Weak<Node<T>>>,
    clock: Rc<Cell<u64>>,
    stack: RefCell<SmallVec<[Entry<T>; INLINE_ENTRIES]>>,
    children: RefCell<Vec<Rc<Node<T>>>>,
    layers: RefCell<Layers>,
    effective: Signal<Option<NavBarAppearance>>,
}

/// One node of the navigation bar appearance tree.
///
/// Each UI region that wants to style the navigation bar gets its own node by
/// calling [`branch`](Self::branch) on its parent's controller, pushes
/// appearances while it is visible, and [`clear`](Self::clear)s the node when
/// it goes away. The root's [`effective`](Self::effective) appearance is what
/// gets painted.
///
/// Handles are cheap to clone and compare by identity. The tree is
/// single-threaded.
///
/// # Example
///
/// ```rust
/// use thecolor_color::Color;
/// use thecolor_nav_bar::{NavBarAppearance, NavBarAppearanceController};
///
/// let red = NavBarAppearance::new().with_color(Color::from_rgb(0xFF, 0, 0));
/// let blue = NavBarAppearance::new().with_color(Color::from_rgb(0, 0, 0xFF));
///
/// let root = NavBarAppearanceController::new();
/// let dialog = root.branch("dialog");
///
/// root.push(red);
/// dialog.push(blue);
/// assert_eq!(root.effective(), Some(blue));
///
/// // The dialog goes away; the screen's own appearance comes back.
/// dialog.clear();
/// assert_eq!(root.effective(), Some(red));
/// ```
pub struct NavBarAppearanceController<T = &'static str> {
    node: Rc<Node<T>>,
}

impl<T> Clone for NavBarAppearanceController<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> PartialEq for NavBarAppearanceController<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<T> Eq for NavBarAppearanceController<T> {}

impl<T> fmt::Debug for NavBarAppearanceController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavBarAppearanceController")
            .field("label", &self.node.label)
            .field("depth", &self.node.depth)
            .field("entries", &self.node.stack.borrow().len())
            .field("children", &self.node.children.borrow().len())
            .field("effective", &self.node.effective.get())
            .finish()
    }
}

impl NavBarAppearanceController {
    /// Creates a root controller whose tags are `&'static str`.
    ///
    /// Use [`root`](Self::root) for other tag types.
    #[must_use]
    pub fn new() -> Self {
        Self::root()
    }
}

impl Default for NavBarAppearanceController {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + 'static> NavBarAppearanceController<T> {
    /// Creates the root of a new tree, with no appearance.
    #[must_use]
    pub fn root() -> Self {
        Self {
            node: Rc::new(Node::new(
                String::from(ROOT_LABEL),
                0,
                Weak::new(),
                Rc::new(Cell::new(0)),
            )),
        }
    }

    /// Pushes an appearance on top of this node's stack.
    ///
    /// Accepts a bare [`NavBarAppearance`] (untagged) or a
    /// [`TaggedAppearance`]. Entries with equal tags may coexist.
    pub fn push(&self, appearance: impl Into<TaggedAppearance<T>>) {
        let tagged = appearance.into();
        let stamp = self.node.clock.get() + 1;
        self.node.clock.set(stamp);
        trace!(node = %self.path(), stamp, tagged = tagged.tag.is_some(), "push");
        self.node.stack.borrow_mut().push(Entry { stamp, tagged });
        self.node.refresh_and_propagate();
    }

    /// Removes the most recently pushed entry of this node, if any.
    pub fn peel(&self) {
        let peeled = self.node.stack.borrow_mut().pop().is_some();
        if peeled {
            trace!(node = %self.path(), "peel");
            self.node.refresh_and_propagate();
        }
    }

    /// Removes the most recently pushed entry whose tag equals `tag`.
    ///
    /// Entries with a different tag, or none, are left alone. Does nothing
    /// if no entry matches.
    pub fn remove(&self, tag: &T) {
        let removed = {
            let mut stack = self.node.stack.borrow_mut();
            let index = stack
                .iter()
                .rposition(|entry| entry.tagged.tag.as_ref() == Some(tag));
            index.map(|index| stack.remove(index))
        };
        if removed.is_some() {
            trace!(node = %self.path(), "remove");
            self.node.refresh_and_propagate();
        }
    }

    /// Empties this node's stack and the stack of every descendant.
    ///
    /// Descendants re-emit before this node, and this node before its
    /// ancestors. Clearing an already empty subtree emits nothing.
    ///
    /// While a descendant's subscribers run, this node and its ancestors
    /// still report their effective appearance from before the call, which
    /// may come from entries that are already gone. Read the ancestors from
    /// their own subscriptions instead.
    pub fn clear(&self) {
        trace!(node = %self.path(), "clear");
        self.node.clear_subtree();
        self.node.propagate();
    }

    /// Creates a child node for a UI region.
    ///
    /// Every call creates a fresh node, even for a label that was used
    /// before; callers keep the returned handle for the lifetime of their
    /// region. The label only shows up in diagnostics.
    #[must_use]
    pub fn branch(&self, label: impl Into<String>) -> Self {
        let child = Rc::new(Node::new(
            label.into(),
            self.node.depth + 1,
            Rc::downgrade(&self.node),
            Rc::clone(&self.node.clock),
        ));
        self.node.children.borrow_mut().push(Rc::clone(&child));
        let child = Self { node: child };
        trace!(node = %child.path(), "branch");
        child
    }

    /// Clears this subtree and unhooks it from its parent.
    ///
    /// Afterwards the node behaves like a root of its own: mutations through
    /// stale handles still work, but no longer reach the former ancestors.
    /// Detaching a root only clears it.
    pub fn detach(&self) {
        self.clear();
        let parent = self.node.parent.replace(Weak::new()).upgrade();
        if let Some(parent) = parent {
            trace!(node = %self.path(), from = %parent.label, "detach");
            parent
                .children
                .borrow_mut()
                .retain(|child| !Rc::ptr_eq(child, &self.node));
        }
    }

    /// The appearance this node currently reports, merged over its subtree.
    #[must_use]
    pub fn effective(&self) -> Option<NavBarAppearance> {
        self.node.effective.get()
    }

    /// A read-only handle to this node's effective appearance signal.
    ///
    /// The value only changes through this node's mutations and those of its
    /// descendants.
    #[must_use]
    pub fn effective_signal(&self) -> Signal<Option<NavBarAppearance>> {
        self.node.effective.clone()
    }

    /// Calls `callback` with the current effective appearance, then again
    /// whenever it changes, until the returned subscription is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(
        &self,
        callback: impl Fn(Option<&NavBarAppearance>) + 'static,
    ) -> Subscription {
        self.node
            .effective
            .subscribe(move |appearance| callback(appearance.as_ref()))
    }

    /// Like [`subscribe`](Self::subscribe), with unset fields and absence
    /// filled in from `defaults`.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe_resolved(
        &self,
        defaults: NavBarDefaults,
        callback: impl Fn(ResolvedNavBar) + 'static,
    ) -> Subscription {
        self.subscribe(move |appearance| callback(defaults.resolve(appearance)))
    }

    /// Number of times the effective appearance has changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.node.effective.revision()
    }

    /// Label given at [`branch`](Self::branch) time, or [`ROOT_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        &self.node.label
    }

    /// Labels from the root down to this node, joined with `/`.
    ///
    /// A detached node starts a new path.
    #[must_use]
    pub fn path(&self) -> String {
        let mut labels: SmallVec<[Rc<Node<T>>; 8]> = SmallVec::new();
        let mut current = Some(Rc::clone(&self.node));
        while let Some(node) = current {
            current = node.parent.borrow().upgrade();
            labels.push(node);
        }
        let mut path = String::new();
        for (i, node) in labels.iter().rev().enumerate() {
            if i > 0 {
                path.push('/');
            }
            path.push_str(&node.label);
        }
        path
    }

    /// Distance from the root this node was branched from.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node.depth
    }

    /// Returns `true` if this node is still attached to a live parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.node.parent.borrow().strong_count() > 0
    }

    /// Number of entries in this node's own stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node.stack.borrow().len()
    }

    /// Returns `true` if this node's own stack is empty.
    ///
    /// Descendants may still contribute an effective appearance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node.stack.borrow().is_empty()
    }

    /// Number of attached children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.children.borrow().len()
    }
}

impl<T: PartialEq + 'static> Node<T> {
    fn new(label: String, depth: usize, parent: Weak<Self>, clock: Rc<Cell<u64>>) -> Self {
        Self {
            label,
            depth,
            parent: RefCell::new(parent),
            clock,
            stack: RefCell::new(SmallVec::new()),
            children: RefCell::new(Vec::new()),
            layers: RefCell::new(Vec::new()),
            effective: Signal::new(None),
        }
    }

    fn parent(&self) -> Option<Rc<Self>> {
        self.parent.borrow().upgrade()
    }

    fn children(&self) -> SmallVec<[Rc<Self>; 4]> {
        self.children.borrow().iter().cloned().collect()
    }

    /// Recomputes layers; emits if the effective appearance changed.
    ///
    /// Returns whether the layers changed, which is what ancestors depend on.
    fn refresh(&self) -> bool {
        let layers = {
            let mut layers: Layers = self
                .stack
                .borrow()
                .iter()
                .map(|entry| (entry.stamp, entry.tagged.appearance))
                .collect();
            for child in self.children.borrow().iter() {
                layers.extend_from_slice(&child.layers.borrow());
            }
            layers.sort_unstable_by_key(|(stamp, _)| *stamp);
            layers
        };
        if *self.layers.borrow() == layers {
            return false;
        }
        let effective = layers
            .iter()
            .rev()
            .map(|(_, appearance)| *appearance)
            .reduce(NavBarAppearance::over);
        *self.layers.borrow_mut() = layers;
        if !self.effective.set(effective) {
            return true;
        }
        debug!(node = %self.label, depth = self.depth, ?effective, "effective appearance changed");
        true
    }

    fn propagate(&self) {
        let mut current = self.parent();
        while let Some(node) = current {
            if !node.refresh() {
                break;
            }
            current = node.parent();
        }
    }

    fn refresh_and_propagate(&self) {
        if self.refresh() {
            self.propagate();
        }
    }

    fn clear_subtree(&self) {
        for child in self.children() {
            child.clear_subtree();
        }
        self.stack.borrow_mut().clear();
        self.refresh();
    }
}

impl<T: PartialEq + 'static> AppearanceStack for NavBarAppearanceController<T> {
    type Tag = T;
    type Branch = Self;

    fn push(&self, appearance: TaggedAppearance<T>) {
        Self::push(self, appearance);
    }

    fn peel(&self) {
        Self::peel(self);
    }

    fn remove(&self, tag: &T) {
        Self::remove(self, tag);
    }

    fn clear(&self) {
        Self::clear(self);
    }

    fn branch(&self, label: &str) -> Self {
        Self::branch(self, label)
    }
}
