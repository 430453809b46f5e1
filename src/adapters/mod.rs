//! External system integrations for docsmith.
//!
//! - [`swagger`] - Retrieval and models of Swagger 2.0 API descriptions
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so that the export
//! pipeline can be tested with in-memory implementations.
//!
//! ```rust,no_run
//! use docsmith::adapters::swagger::{ApiDescriptionSource, HttpDescriptionSource, SwaggerDocument};
//! use std::time::Duration;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = HttpDescriptionSource::new(Duration::from_secs(30), Duration::from_secs(10))?;
//! let body = source.fetch(&Url::parse("http://localhost:8080/v2/api-docs")?).await?;
//! let description = SwaggerDocument::from_json(&body)?;
//! println!("{} paths", description.paths.len());
//! # Ok(())
//! # }
//! ```

pub mod swagger;
