//! Value-level normalizers for free-text manifest fields.
//!
//! Each submodule cleans up one kind of field independently of structural
//! validation: dates and year expressions, compound locations, marque
//! names, format labels, and boilerplate-laden display names.

pub mod dates;
pub mod format;
pub mod location;
pub mod marque;
pub mod names;
