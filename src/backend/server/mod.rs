//! Server Module
//!
//! Server initialization and the state shared by all handlers.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading for the binary
//! └── init.rs         - Store seeding and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `.env`, optional TOML file, environment overrides
//! 2. **State Creation**: Post store with the root and seed replies
//! 3. **Router Creation**: Routes, static files and request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_state};
