// used to print out readable forms of an optional
use std::fmt;

/// An optional value: every [`Maybe`] either holds exactly one value of
/// type `T` (`Present`) or holds nothing at all (`Absent`).
///
/// The two states are the only states. Since the payload lives inside the
/// `Present` variant, an absent value cannot expose one and a present value
/// cannot lose one except through [`Maybe::take`], which needs exclusive
/// access to the receiver.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Maybe<T> {
    /// No value. This is also the default for any `T`.
    #[default]
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    /// Returns true if a value is held.
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns true if no value is held.
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns true if a value is held and it satisfies the predicate.
    /// The predicate is not called on an absent value.
    pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => false,
        }
    }

    /// Returns the held value, or panics with the given message.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("{}", msg),
        }
    }

    /// Returns the held value, or panics.
    pub fn unwrap(self) -> T {
        self.expect("called `Maybe::unwrap()` on an absent value")
    }

    /// Returns the held value, or the provided default. The default is
    /// evaluated eagerly; use [`Maybe::unwrap_or_else`] for a lazy one.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Returns the held value, or computes one. The supplier only runs
    /// on an absent value.
    pub fn unwrap_or_else(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => supplier(),
        }
    }

    /// Returns the held value, or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Takes the value out, leaving `Absent` in its place. Ownership of
    /// the payload moves out of the receiver exactly once; taking from an
    /// already absent value returns `Absent` and changes nothing.
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::replace(self, Maybe::Absent)
    }

    /// Maps a `Maybe<T>` to a `Maybe<U>` by applying a function to a held
    /// value. The function runs at most once, and never on an absent value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Structural match: runs exactly one of the two branches depending on
    /// state and returns its result. Argument order follows
    /// `Option::map_or_else`.
    pub fn map_or_else<U>(
        self,
        on_absent: impl FnOnce() -> U,
        on_present: impl FnOnce(T) -> U,
    ) -> U {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>` without copying the payload.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

// Interop with the standard optional, lossless in both directions.
impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}
impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Maybe::Present(value) => write!(f, "Present({})", value),
            Maybe::Absent => write!(f, "Absent"),
        }
    }
}
