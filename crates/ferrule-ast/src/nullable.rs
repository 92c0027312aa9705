//! Optional values across the AST boundary.
//!
//! The AST side has no native optionals: "no value" is a sentinel raw value.
//! [`Nullable`] keeps that layout (`0` is the sentinel) while [`AsNullable`]
//! converts from `Option` in one place for every handle type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;

use crate::Id;

/// A value that is either present or the sentinel.
///
/// `Default` produces the sentinel.
pub trait BridgedNullable: Copy + Default {
    type Raw: Copy;

    fn from_raw(raw: Option<Self::Raw>) -> Self;

    fn raw(self) -> Option<Self::Raw>;

    fn is_present(self) -> bool {
        self.raw().is_some()
    }
}

/// A non-null handle that has a nullable counterpart.
pub trait HasNullable: Copy {
    type Nullable: BridgedNullable;

    fn raw(self) -> <Self::Nullable as BridgedNullable>::Raw;
}

pub trait AsNullable {
    type Nullable;

    fn as_nullable(self) -> Self::Nullable;
}

impl<T: HasNullable> AsNullable for Option<T> {
    type Nullable = T::Nullable;

    fn as_nullable(self) -> T::Nullable {
        T::Nullable::from_raw(self.map(T::raw))
    }
}

/// Nullable variant of an arena handle.
#[repr(transparent)]
pub struct Nullable<T> {
    raw: Option<NonZeroU32>,
    _marker: PhantomData<fn() -> T>,
}

impl<Tag> Nullable<Id<Tag>> {
    pub const NULL: Self = Self { raw: None, _marker: PhantomData };

    pub fn get(self) -> Option<Id<Tag>> {
        self.raw.map(Id::from_raw)
    }

    pub fn is_null(self) -> bool {
        self.raw.is_none()
    }
}

impl<Tag> BridgedNullable for Nullable<Id<Tag>> {
    type Raw = NonZeroU32;

    fn from_raw(raw: Option<NonZeroU32>) -> Self {
        Self { raw, _marker: PhantomData }
    }

    fn raw(self) -> Option<NonZeroU32> {
        self.raw
    }
}

impl<Tag> HasNullable for Id<Tag> {
    type Nullable = Nullable<Self>;

    fn raw(self) -> NonZeroU32 {
        Id::raw(self)
    }
}

impl<Tag> From<Id<Tag>> for Nullable<Id<Tag>> {
    fn from(id: Id<Tag>) -> Self {
        Some(id).as_nullable()
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self { raw: None, _marker: PhantomData }
    }
}

impl<T> Clone for Nullable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nullable<T> {}

impl<T> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Nullable<T> {}

impl<T> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<Tag> fmt::Debug for Nullable<Id<Tag>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(id) => write!(f, "{id:?}"),
            None => f.write_str("null"),
        }
    }
}
