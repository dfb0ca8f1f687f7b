//! LeadSync Core Crate
//!
//! This crate is the logic core of the LeadSync dashboard: it owns the lead
//! collection in memory and derives everything the presentation layer shows
//! from the current snapshot.
//!
//! # Architecture
//!
//! - **Types**: Lead records, enums and DTOs live in the `shared-types` crate
//! - **State**: `AppState` owns the store, the navigator and the catalog, and
//!   is the single mutation path
//! - **Derivations**: filtering, metrics, insights and the activity timeline
//!   are pure functions over a snapshot, recomputed on demand
//!
//! # Example
//!
//! ```rust,ignore
//! use leadsync_core::AppState;
//! use shared_types::Catalog;
//!
//! let mut state = AppState::with_sample_leads(Catalog::default());
//! state.view_lead("1")?;
//! let metrics = state.dashboard_metrics();
//! ```

pub mod activity;
pub mod app;
pub mod config;
pub mod filter;
pub mod insights;
pub mod logging;
pub mod metrics;
pub mod navigator;
pub mod samples;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use app::AppState;
pub use config::CoreConfig;
pub use navigator::Navigator;
pub use store::LeadStore;
