use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// Handle to a node allocated in an [`Arena`]. Never zero, so the zero raw
/// value is free to mean "no node" on the other side of the boundary.
pub struct Id<Tag> {
    raw: NonZeroU32,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag> Id<Tag> {
    #[track_caller]
    pub(crate) fn new(index: usize) -> Self {
        let index: u32 = index.try_into().expect("Id overflow");
        let raw = index.checked_add(1).and_then(NonZeroU32::new).expect("Id overflow");
        Self { raw, _tag: PhantomData }
    }

    pub(crate) fn index(self) -> usize {
        (self.raw.get() - 1) as usize
    }

    pub fn from_raw(raw: NonZeroU32) -> Self {
        Self { raw, _tag: PhantomData }
    }

    pub fn raw(self) -> NonZeroU32 {
        self.raw
    }
}

impl<Tag> Clone for Id<Tag> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Tag> Copy for Id<Tag> {}

impl<Tag> PartialEq for Id<Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Tag> Eq for Id<Tag> {}

impl<Tag> Hash for Id<Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<Tag> fmt::Debug for Id<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<Tag>().rsplit("::").next().unwrap_or("Id");
        write!(f, "{name}#{}", self.raw)
    }
}

pub(crate) struct Arena<Tag, T> {
    items: Vec<T>,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, T> Default for Arena<Tag, T> {
    fn default() -> Self {
        Self { items: Vec::new(), _tag: PhantomData }
    }
}

impl<Tag, T> Arena<Tag, T> {
    pub(crate) fn alloc(&mut self, value: T) -> Id<Tag> {
        let id = Id::new(self.items.len());
        self.items.push(value);
        id
    }
}

impl<Tag, T> Index<Id<Tag>> for Arena<Tag, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, id: Id<Tag>) -> &T {
        &self.items[id.index()]
    }
}

impl<Tag, T> IndexMut<Id<Tag>> for Arena<Tag, T> {
    #[track_caller]
    fn index_mut(&mut self, id: Id<Tag>) -> &mut T {
        &mut self.items[id.index()]
    }
}
