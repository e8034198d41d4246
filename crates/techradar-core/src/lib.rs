//! Tech Radar Core Types and Definitions
//!
//! This crate provides the foundational types shared by the tech radar
//! parser and renderer. It includes:
//!
//! - **Radar**: The parsed radar block and the payload handed to the
//!   visualization routine ([`radar`] module)
//! - **Quadrants**: Quadrant definitions as written and as resolved for
//!   querying ([`quadrant`] module)
//! - **Entries**: Radar entries and their default-resolution rules
//!   ([`entry`] module)
//! - **Documents**: Indexed notes and their frontmatter ([`document`] and
//!   [`frontmatter`] modules)

pub mod document;
pub mod entry;
pub mod frontmatter;
pub mod quadrant;
pub mod radar;

mod tags;
