//! Ad collection against an actor-based scraping service.
//!
//! The service runs scrapes as asynchronous jobs: a run is submitted, polled
//! until it reaches a terminal status (or a local wall-clock budget runs out),
//! and the resulting dataset is fetched as a JSON array of ad records.
//! [`collect_brand`] drives that protocol for one brand and reports a
//! [`CollectionOutcome`] instead of raising, so callers can always tell
//! "no ads exist" apart from "collection failed".

mod client;
mod collect;
mod error;
mod types;

pub use client::ActorClient;
pub use collect::{collect_brand, CollectionOutcome, PollPolicy};
pub use error::CollectorError;
pub use types::{AdCard, AdRecord, AdSnapshot, BodyField, JobHandle, JobRequest, JobStatus};
