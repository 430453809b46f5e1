//! Swagger API description integration
//!
//! This module provides the transport used to retrieve API descriptions from
//! running services and the serde models of the Swagger 2.0 format.

pub mod client;
pub mod models;

pub use client::{ApiDescriptionSource, HttpDescriptionSource};
pub use models::{HttpMethod, Operation, Parameter, PathItem, Schema, SwaggerDocument};
