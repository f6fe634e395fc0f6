//! Route Configuration Module
//!
//! Assembles every HTTP route of the board into one Axum router.
//!
//! # Route Organization
//!
//! 1. **Board Routes** - Index page and reply submission
//! 2. **API Routes** - JSON snapshots of posts
//! 3. **Static Files** - Assets under `/static`
//! 4. **Fallback Handler** - 404 for everything else

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
