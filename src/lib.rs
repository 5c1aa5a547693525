//! # layermake
//!
//! Standardized fixed-width AutoCAD layer naming and batch layer creation.
//!
//! A drafter picks one segment per slot from a loaded catalog, previews the
//! assembled 17-character layer name, and collects a batch of
//! {name, color, linetype} records that are handed to the host application's
//! command line at the end of the session.
//!
//! ## Quick Start
//!
//! ```rust
//! use layermake::{NoExistingNames, ScriptEmitter, SegmentCatalog, Session};
//!
//! let xml = "<layermake>\
//!     <dsseg>E\tExisting</dsseg>\
//!     <cseg>RDW\tRoadway</cseg>\
//!     <etseg>LN\tLine work</etseg>\
//!     <edseg>CURB\tCurb and gutter</edseg>\
//!     </layermake>";
//! let catalog = SegmentCatalog::from_xml_str(xml, &Default::default())?;
//!
//! let mut session = Session::new(catalog);
//! let name = session.make(&NoExistingNames)?;
//! session.set_color(&name, 255, 0, 0)?;
//!
//! let mut emitter = ScriptEmitter::new();
//! session.finish(&mut emitter)?;
//! print!("{}", emitter.script());
//! # Ok::<(), layermake::LayerMakeError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`SegmentCatalog`] — the four picklists, loaded from the layermake XML
//! - [`compose`] — pure assembly of a [`LayerName`] from a [`Selections`]
//!   value (pad with `Z` to field width, uppercase, cut at 17)
//! - [`LayerTable`] — insertion-ordered records with uniqueness on create
//! - [`ExistingNameChecker`] / [`CommandEmitter`] — narrow seams standing in
//!   for the live host document
//! - [`Session`] — the interactive workflow tying the above together
//!
//! Everything is single-threaded and synchronous; each operation is one
//! discrete user action, and errors never propagate past it.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod compose;
pub mod emit;
pub mod error;
pub mod notification;
pub mod session;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogOptions, Segment, SegmentCatalog, Slot};
pub use compose::{compose, decompose, Composition, DescPosition, Selections};
pub use emit::{CommandEmitter, ExistingNameChecker, NoExistingNames, ScriptEmitter};
pub use error::{LayerMakeError, Result};
pub use notification::{Notification, NotificationType};
pub use session::Session;
pub use store::{LayerRecord, LayerTable};
pub use types::{Color, Field, LayerName, FILLER, NAME_WIDTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
