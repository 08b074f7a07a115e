//! # MOAT Core
//!
//! Domain logic of the mock ORCID service, independent of any transport.
//!
//! ## Responsibilities
//! - Startup configuration (`config`) and the canned constants the mock serves (`constants`)
//! - The seeded, lock-protected record store (`store`) and its demo population (`seed`)
//! - Token issuance and authorization redirects (`token`)
//! - Work/employment payload synthesis and put-code allocation (`activity`)
//! - Registry search (`search`)
//!
//! Serialization to JSON and XML lives in the `orcid` crate; HTTP concerns live in `api-rest`.

pub mod activity;
pub mod config;
pub mod constants;
pub mod error;
pub mod search;
pub mod seed;
pub mod store;
pub mod token;

pub use activity::{ActivityKind, FixedPutCode, PutCodeSource, RandomPutCodes};
pub use config::CoreConfig;
pub use error::{MoatError, MoatResult};
pub use store::RecordStore;
pub use token::{TokenRequest, TokenResponse};
