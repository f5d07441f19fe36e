//! JSON request and response shapes of the HTTP API.
//!
//! Field names match the wire format the mobile client sends and expects, so these types
//! are the JSON side of the JSON-to-row contract. Server-side domain models live in
//! `server::model` and convert to and from these DTOs at the controller boundary.

pub mod api;
pub mod auth;
pub mod city;
pub mod clothing;
pub mod location;
