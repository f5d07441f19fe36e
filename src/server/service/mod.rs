//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Credential checks and registration rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Opening, committing and rolling back transactions for
//!   multi-step writes

pub mod auth;
pub mod city;
pub mod clothing;
pub mod location;
pub mod suggestion;
