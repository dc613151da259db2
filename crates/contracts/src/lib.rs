//! Shared contracts between the attribute entry form and the validation service.
//!
//! Everything here is DOM-free: the field registry, the category
//! visibility table and the wire types of the `/validate` endpoint.

pub mod attributes;
