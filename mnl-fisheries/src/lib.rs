//! Core types and parsing for Minnesota DNR lake and fish survey data.
//!
//! This crate has no UI or storage dependencies: it defines the domain
//! model (lakes, fish species, catch and length survey records), parses
//! the static DNR export files (CSV lake list, JSON reference and bulk
//! tables), and implements the canonical name-search ranking policy.

pub mod error;
pub mod lake;
pub mod search;
pub mod species;
pub mod survey;
