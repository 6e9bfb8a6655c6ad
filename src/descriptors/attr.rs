//! Attribute resolution - fixed values and per-subject computations.
//!
//! Descriptor fields are either a literal value or a pure function of
//! the subject. `Attr<T>` makes that choice an explicit sum type, so
//! the ambiguity is normalized here once and nothing downstream has to
//! care which shape a field arrived in.
//!
//! Resolution is pure: the same descriptor resolved against the same
//! subject state always yields the same value, and the subject is
//! never mutated (computations only get `&CardSubject`).

use std::rc::Rc;

use crate::subject::CardSubject;

/// A descriptor field: a fixed value or a per-subject computation.
///
/// Cloning is cheap; computed variants share the closure via `Rc`.
/// The model is single-threaded and synchronous, so `Rc` rather than
/// `Arc`.
///
/// ## Example
///
/// ```
/// use card_overlays::descriptors::Attr;
/// use card_overlays::subject::CardSubject;
///
/// let fixed: Attr<String> = Attr::fixed("Discard".to_string());
/// let computed = Attr::computed(|card: &CardSubject| card.display_name().to_string());
///
/// let card = CardSubject::new("c1", "Ace", "ace.webp");
/// assert_eq!(fixed.resolve(&card), "Discard");
/// assert_eq!(computed.resolve(&card), "Ace");
/// ```
#[derive(Clone)]
pub enum Attr<T> {
    /// A literal value, the same for every subject.
    Fixed(T),
    /// A pure computation invoked once per subject at resolution time.
    Computed(Rc<dyn Fn(&CardSubject) -> T>),
}

impl<T: Clone> Attr<T> {
    /// Wrap a literal value.
    pub fn fixed(value: impl Into<T>) -> Self {
        Attr::Fixed(value.into())
    }

    /// Wrap a per-subject computation.
    pub fn computed(f: impl Fn(&CardSubject) -> T + 'static) -> Self {
        Attr::Computed(Rc::new(f))
    }

    /// Resolve against a subject: literals yield themselves, computed
    /// fields invoke their closure.
    #[must_use]
    pub fn resolve(&self, subject: &CardSubject) -> T {
        match self {
            Attr::Fixed(value) => value.clone(),
            Attr::Computed(f) => f(subject),
        }
    }

    /// Is this a fixed value?
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Attr::Fixed(_))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Attr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attr::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Attr::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Attr<String> {
    fn from(s: &str) -> Self {
        Attr::Fixed(s.to_string())
    }
}

impl From<String> for Attr<String> {
    fn from(s: String) -> Self {
        Attr::Fixed(s)
    }
}

impl From<bool> for Attr<bool> {
    fn from(b: bool) -> Self {
        Attr::Fixed(b)
    }
}

/// Resolve an optional field: absent fields yield the default.
///
/// This is the third leg of the resolution contract - present fields
/// resolve via [`Attr::resolve`], missing ones fall back.
#[must_use]
pub fn resolve_or<T: Clone>(attr: Option<&Attr<T>>, default: T, subject: &CardSubject) -> T {
    match attr {
        Some(attr) => attr.resolve(subject),
        None => default,
    }
}
