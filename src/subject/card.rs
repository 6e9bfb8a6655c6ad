//! Card subjects - the data records descriptors resolve against.
//!
//! A `CardSubject` is a snapshot of one card as the host hands it over
//! for rendering: identity, display name, image, face state, and an
//! open-ended attribute bag. Resolution never mutates a subject; every
//! computed attribute takes `&CardSubject`.

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeValue, Attributes};

/// Unique identifier for a card subject.
///
/// Host document ids are opaque strings; this newtype keeps them from
/// mixing with other string fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One face of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    /// Face-specific display name.
    pub name: String,
    /// Face-specific image reference.
    pub img: String,
}

impl CardFace {
    /// Create a new face.
    pub fn new(name: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            img: img.into(),
        }
    }
}

/// A card subject for one render pass.
///
/// `face` is the index of the currently shown face; `None` means the
/// card shows its back. Everything game-specific lives in `attrs`.
///
/// ## Example
///
/// ```
/// use card_overlays::subject::{CardFace, CardSubject};
///
/// let card = CardSubject::new("c1", "Ace of Spades", "cards/as.webp")
///     .with_face(CardFace::new("Ace of Spades", "cards/as.webp"))
///     .with_attr("suit", "spades")
///     .with_attr("value", 1i32)
///     .showing_face(0);
///
/// assert_eq!(card.display_name(), "Ace of Spades");
/// assert!(!card.has_next_face());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSubject {
    /// Unique identifier.
    pub id: CardId,

    /// Card-level display name (fallback when no face is shown).
    pub name: String,

    /// Card-level image reference (usually the back image).
    pub img: String,

    /// All faces of this card, in face order.
    #[serde(default)]
    pub faces: Vec<CardFace>,

    /// Index of the currently shown face. `None` = showing the back.
    #[serde(default)]
    pub face: Option<usize>,

    /// Has this card been drawn from its source pile?
    #[serde(default)]
    pub drawn: bool,

    /// Open-ended host-defined fields (suit/value/type/flags/markers).
    #[serde(default)]
    pub attrs: Attributes,
}

impl CardSubject {
    /// Create a new subject with no faces and an empty attribute bag.
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        img: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: img.into(),
            faces: Vec::new(),
            face: None,
            drawn: false,
            attrs: Attributes::default(),
        }
    }

    /// Add a face (builder pattern).
    #[must_use]
    pub fn with_face(mut self, face: CardFace) -> Self {
        self.faces.push(face);
        self
    }

    /// Set the shown face index (builder pattern).
    #[must_use]
    pub fn showing_face(mut self, index: usize) -> Self {
        self.face = Some(index);
        self
    }

    /// Mark the card as drawn (builder pattern).
    #[must_use]
    pub fn with_drawn(mut self, drawn: bool) -> Self {
        self.drawn = drawn;
        self
    }

    /// Set an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<super::attributes::AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// The currently shown face, if any.
    #[must_use]
    pub fn current_face(&self) -> Option<&CardFace> {
        self.face.and_then(|i| self.faces.get(i))
    }

    /// True when a face is showing and a later face exists.
    #[must_use]
    pub fn has_next_face(&self) -> bool {
        matches!(self.face, Some(i) if i + 1 < self.faces.len())
    }

    /// True when a face is showing and an earlier face exists.
    #[must_use]
    pub fn has_previous_face(&self) -> bool {
        matches!(self.face, Some(i) if i > 0)
    }

    /// Display name of the shown face, falling back to the card name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.current_face().map_or(&self.name, |f| &f.name)
    }

    /// Image of the shown face, falling back to the card image.
    #[must_use]
    pub fn image(&self) -> &str {
        self.current_face().map_or(&self.img, |f| &f.img)
    }

    /// Look up an attribute by dotted path, walking nested `Map` values.
    ///
    /// `attr("marker.color")` reads `attrs["marker"]` and, when that is
    /// a `Map`, its `"color"` entry. Returns `None` on any miss.
    #[must_use]
    pub fn attr(&self, path: &str) -> Option<&AttributeValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.attrs.get(&first.into())?;
        for segment in segments {
            current = current.as_map()?.get(&segment.into())?;
        }
        Some(current)
    }

    /// Text attribute by dotted path, `None` when absent or not text.
    #[must_use]
    pub fn attr_text(&self, path: &str) -> Option<&str> {
        self.attr(path).and_then(|v| v.as_text())
    }

    /// Integer attribute by dotted path, `None` when absent or not an int.
    #[must_use]
    pub fn attr_int(&self, path: &str) -> Option<i64> {
        self.attr(path).and_then(|v| v.as_int())
    }

    /// Bool attribute by dotted path, `false` when absent or not a bool.
    #[must_use]
    pub fn attr_flag(&self, path: &str) -> bool {
        self.attr(path).and_then(|v| v.as_bool()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_faced() -> CardSubject {
        CardSubject::new("c1", "Sigil", "back.webp")
            .with_face(CardFace::new("Sigil Front", "front.webp"))
            .with_face(CardFace::new("Sigil Reverse", "reverse.webp"))
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new("abc123");
        assert_eq!(id.raw(), "abc123");
        assert_eq!(format!("{}", id), "Card(abc123)");
    }

    #[test]
    fn test_face_navigation_predicates() {
        let back = two_faced();
        assert!(!back.has_next_face());
        assert!(!back.has_previous_face());

        let first = two_faced().showing_face(0);
        assert!(first.has_next_face());
        assert!(!first.has_previous_face());

        let last = two_faced().showing_face(1);
        assert!(!last.has_next_face());
        assert!(last.has_previous_face());
    }

    #[test]
    fn test_face_aware_accessors() {
        let back = two_faced();
        assert_eq!(back.display_name(), "Sigil");
        assert_eq!(back.image(), "back.webp");

        let front = two_faced().showing_face(0);
        assert_eq!(front.display_name(), "Sigil Front");
        assert_eq!(front.image(), "front.webp");
    }

    #[test]
    fn test_attr_dotted_path() {
        let mut marker = Attributes::default();
        marker.insert("color".into(), "#00ff00".into());
        marker.insert("tooltip".into(), "Cursed".into());

        let card = CardSubject::new("c2", "Hexed", "hexed.webp")
            .with_attr("suit", "wands")
            .with_attr("marker", marker);

        assert_eq!(card.attr_text("suit"), Some("wands"));
        assert_eq!(card.attr_text("marker.color"), Some("#00ff00"));
        assert_eq!(card.attr_text("marker.tooltip"), Some("Cursed"));
        assert!(card.attr("marker.missing").is_none());
        assert!(card.attr("no.such.path").is_none());
    }

    #[test]
    fn test_attr_flag_default() {
        let card = CardSubject::new("c3", "Plain", "plain.webp")
            .with_attr("revealed", true);

        assert!(card.attr_flag("revealed"));
        assert!(!card.attr_flag("missing"));
        assert!(!card.attr_flag("suit"));
    }

    #[test]
    fn test_subject_serde_round_trip() {
        let card = two_faced().showing_face(1).with_attr("value", 5i32);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardSubject = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
