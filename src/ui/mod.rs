//! Rendering layer: card markup, list rendering, theme, and the document contract.
//!
//! # Architecture
//!
//! The UI layer renders markup strings and hands them to a [`Document`]:
//!
//! ```text
//! Entries → ListView (sort) → CardRenderer → markup → Document → scan → CardItems
//! ```
//!
//! # Modules
//!
//! - [`card`]: Single-entry card markup and attribute escaping
//! - [`list`]: Sorted full-list rendering and handle-set rebuild
//! - [`fallback`]: One-shot logo fallback
//! - [`theme`]: Persisted light/dark preference
//! - [`document`]: Document touchpoint trait
//! - [`headless`]: In-memory document for non-browser hosts

pub mod card;
pub mod document;
pub mod fallback;
pub mod headless;
pub mod list;
pub mod theme;

pub use card::{escape_attr, CardRenderer};
pub use document::{CardItem, Document};
pub use fallback::LogoImage;
pub use headless::{HeadlessCard, HeadlessDocument};
pub use list::ListView;
pub use theme::ThemePreference;
