//! HTTP request handlers.
//!
//! Each handler parses its path and body through the extractors in `extract`, acquires a
//! live connection from the application state, calls a service, and converts the domain
//! result to a DTO. Every handler is annotated with `#[utoipa::path]` so the router can
//! assemble the OpenAPI document.

pub mod auth;
pub mod city;
pub mod clothing;
pub mod extract;
pub mod location;

#[cfg(test)]
mod test;
