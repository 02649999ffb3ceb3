//! Relational schema and serialization layer for users and their favorite characters,
//! planets and starships.
//!
//! Entity definitions live in the `entity` crate and table DDL in the `migration` crate.
//! This crate adds repository-style data access ([`data`]), flat transport projections
//! ([`model`]) and small services that combine the two ([`service`]).

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
