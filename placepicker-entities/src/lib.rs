#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # placepicker-entities
//!
//! Reusable, agnostic domain entities for the place picker.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific reconciliation logic.

pub mod geo;
pub mod geolocation;
pub mod id;
pub mod place;
