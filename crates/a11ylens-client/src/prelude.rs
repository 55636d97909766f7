//! Prelude module - commonly used types for convenient import.
//!
//! Use `use a11ylens_client::prelude::*;` to import all essential types.
//!
//! # Example
//!
//! ```rust,no_run
//! use a11ylens_client::prelude::*;
//!
//! # async fn example() -> ServiceResult<()> {
//! let config = ServiceConfig::new("https://audit.example.test").api_key("your-api-key");
//! let service = HttpAuditService::new(config)?;
//!
//! let report = service.analyze_web_page("https://example.test").await?;
//! println!("score: {}", report.score);
//! # Ok(())
//! # }
//! ```

// Errors
pub use crate::{ServiceError, ServiceResult};

// Service trait and config
pub use crate::{AuditService, ServiceConfig};

// Backends
pub use crate::HttpAuditService;
