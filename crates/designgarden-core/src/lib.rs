//! Design Garden Core Library
//!
//! Theme selection, layout suggestions and the apply/persist pipeline behind
//! the Design Garden customizer.
//!
//! ## Overview
//!
//! A user picks a color palette and a font pairing from a fixed catalog (or
//! overrides the primary color), previews which layout templates suit the
//! combination, and applies the result. Applying writes CSS custom
//! properties and a font rule block to a [`StyleSink`] and persists the
//! selection to a [`KvStore`], from which it is restored at the next start.
//!
//! ## Quick Start
//!
//! ```ignore
//! use designgarden_core::{catalog, HeadlessDocument, RedbStore, ThemeStore};
//!
//! let mut doc = HeadlessDocument::new();
//! let mut store = ThemeStore::restore(RedbStore::open("prefs.redb")?, &mut doc);
//!
//! store.set_palette(catalog::find_palette("Ocean Blue")?.clone());
//! for layout in store.suggestions() {
//!     println!("{} {}", if layout.suitable { "★" } else { " " }, layout.name);
//! }
//!
//! store.apply_theme(&mut doc);
//! std::fs::write("theme.css", doc.to_stylesheet())?;
//! ```

pub mod catalog;
pub mod error;
pub mod events;
pub mod layout;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod style;
pub mod types;

// Re-exports
pub use error::{GardenError, GardenResult};
pub use events::{Notice, ThemeEvent};
pub use layout::{recommended, suggest_layouts};
pub use storage::{KvStore, MemoryStore, RedbStore};
pub use store::{apply_theme_to_dom, Listener, ThemeStore};
pub use style::{apply_to_sink, HeadlessDocument, StyleSink};
pub use types::*;
