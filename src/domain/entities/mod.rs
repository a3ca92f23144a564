//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered user (soft-deletable)
//! - [`Label`] - A category, type or tag, selected by [`LabelKind`]
//! - [`Link`] - A bookmark aggregate with resolved labels and creator
//!
//! # Design Pattern
//!
//! Stored entities have separate input structs:
//! - `NewUser`, `NewLink` - For creating new records
//! - `LinkChanges` - For replacing the mutable fields of a link
//! - `LinkSubmission` - Raw user input before labels are resolved

pub mod label;
pub mod link;
pub mod user;

pub use label::{Label, LabelKind};
pub use link::{Link, LinkChanges, LinkOwner, LinkSubmission, NewLink};
pub use user::{NewUser, User};
