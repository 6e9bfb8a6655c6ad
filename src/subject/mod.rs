//! Card subjects: the records descriptors resolve against.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque host document identifier
//! - `CardSubject`: One card's render-time snapshot (faces, attrs)
//! - `CardFace`: Name/image pair for one face
//! - `AttributeValue` / `Attributes`: Open-ended nested field bag
//!
//! The engine never interprets the attribute bag itself; computed
//! descriptor fields read whatever paths the host populates.

pub mod attributes;
pub mod card;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use card::{CardFace, CardId, CardSubject};
