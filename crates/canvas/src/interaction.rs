//! Hover and selection state.
//!
//! Both are plain values cloned into the render snapshot each redraw; the
//! paint pass never reads interaction state through shared mutable storage.

use floorplan::{LinkId, RoomId};

/// Something on the plan the pointer can address.
///
/// A closed set of kinds: each variant carries exactly the fields its kind
/// needs, so a vertex entry always has both its owning link and a corner
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Room(RoomId),
    Link(LinkId),
    /// One corner of a vertical link's rectangle. `vertex` is the corner
    /// index in 0..4 (top-left, top-right, bottom-right, bottom-left).
    LinkVertex { link: LinkId, vertex: usize },
}

impl Target {
    /// Whether this target is the given vertex of the given link.
    pub fn is_vertex_of(&self, link: LinkId, vertex: usize) -> bool {
        matches!(self, Target::LinkVertex { link: l, vertex: v } if *l == link && *v == vertex)
    }

    /// The link this target belongs to, if any.
    pub fn link_id(&self) -> Option<LinkId> {
        match self {
            Target::Link(id) | Target::LinkVertex { link: id, .. } => Some(*id),
            Target::Room(_) => None,
        }
    }
}

/// An ordered set of selected targets.
///
/// Insertion order is preserved (the first entry is the selection anchor);
/// duplicates are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    items: Vec<Target>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.items.iter()
    }

    pub fn contains(&self, target: &Target) -> bool {
        self.items.contains(target)
    }

    /// Whether the given vertex of the given link is selected.
    pub fn contains_vertex(&self, link: LinkId, vertex: usize) -> bool {
        self.items.iter().any(|t| t.is_vertex_of(link, vertex))
    }

    /// Adds a target to the back of the selection. No-op if already present.
    pub fn insert(&mut self, target: Target) {
        if !self.items.contains(&target) {
            self.items.push(target);
        }
    }

    /// Adds the target if absent, removes it if present.
    pub fn toggle(&mut self, target: Target) {
        match self.items.iter().position(|t| *t == target) {
            Some(index) => {
                self.items.remove(index);
            }
            None => self.items.push(target),
        }
    }

    pub fn remove(&mut self, target: &Target) {
        self.items.retain(|t| t != target);
    }

    /// Drops every entry for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&Target) -> bool) {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
