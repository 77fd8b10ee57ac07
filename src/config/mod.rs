//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - Environment variables (prefixed with APP__)
//! - Plain variables: `SERVER_HOST`, `PORT`, `DATABASE_URL`, `DB_HOST`,
//!   `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASSWORD`
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_api::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Server will listen on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
