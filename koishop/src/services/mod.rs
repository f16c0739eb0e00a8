//! # Services Module
//!
//! External capabilities consumed by the app layer.
//!
//! ```text
//! services/
//! ├── api/        - Remote shop API client (HTTP/JSON, bearer auth)
//! └── session.rs  - Persisted session store and the session state machine
//! ```

pub mod api;
pub mod session;
