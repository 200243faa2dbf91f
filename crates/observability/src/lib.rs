//! themeshift observability - logging setup shared by the CLI and tests
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer on stderr. Stdout is left alone so the CLI's completion notice (or
//! JSON envelope) is the only thing printed there.
//!
//! # Quick Start
//!
//! ```no_run
//! use themeshift_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("themeshift").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("logging ready");
//! # Ok::<(), themeshift_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `THEMESHIFT_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::init;
pub use self::tracing::{record_duration, record_error};
