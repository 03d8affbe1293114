//! Tokenizer for the inline tag language of decorated outliner rows.
//!
//! A row name such as `//bg:black b:white t:yellow ts:13 Lighting` carries
//! styling tags in front of (or among) its display text. This crate splits
//! such a name into the plain text and an ordered list of [`Directive`]s.
//! Converting arguments into colors and sizes is left to the caller.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tag`] | `TagRole`, `TagSpec`, the `TAGS` vocabulary |
//! | [`directive`] | `Directive`, `ParsedLabel` |
//! | [`parser`] | `parse_label` entry point |

pub mod directive;
pub mod parser;
pub mod tag;

pub use directive::{Directive, ParsedLabel};
pub use parser::parse_label;
pub use tag::{TagRole, TagSpec, TAGS};
