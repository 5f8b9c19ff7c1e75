//! Physio-Intake Core Library
//!
//! Patient-intake persistence for a clinic front desk, remote-first with a
//! durable local fallback.
//!
//! # Architecture
//!
//! ```text
//! View layer (form / CLI)
//!         │
//!         ▼
//! PersistenceFacade ───────────► RemoteGateway ───► spreadsheet web app
//!         │                      (?action=getAll | add | update)
//!         │ unconfigured or
//!         │ remote failure
//!         ▼
//!     LocalStore
//! (single JSON document)
//! ```
//!
//! # Core Principle
//!
//! **Availability over consistency.** Every operation produces a usable
//! result: when the backend is down or not yet deployed, the façade
//! answers from the local store instead of failing. The two stores keep
//! independent serial counters and are never merged or reconciled.
//!
//! # Modules
//!
//! - [`models`]: domain types (PatientRecord, PatientInput) and validation
//! - [`store`]: local record store, one JSON document rewritten per mutation
//! - [`gateway`]: HTTP client for the action-multiplexed backend endpoint
//! - [`facade`]: remote-first persistence with guaranteed local fallback
//! - [`config`]: endpoint configuration resolved once at startup
//! - [`notify`]: user-facing notification content

pub mod config;
pub mod facade;
pub mod gateway;
pub mod models;
pub mod notify;
pub mod store;

// Re-export commonly used types
pub use config::Endpoint;
pub use facade::{AddOutcome, FetchOutcome, PersistenceFacade, Source, UpdateOutcome};
pub use gateway::{GatewayError, RemoteGateway, WriteAck};
pub use models::{PatientInput, PatientRecord, ValidationError};
pub use notify::{Notice, Severity};
pub use store::{LocalStore, StoreError};
