//! The vitality anchor: block-level proof-of-human-presence enforcement.
//!
//! Ties the kernel together: the [`VitalityAnchor`] gate admits or rejects
//! blocks on liveness-proof evidence, the [`BlockExecutor`] runs the full
//! stage/mint/admit/fee/commit pipeline as an all-or-nothing state
//! transition, and [`KernelQueries`] exposes the read-only surface. Also
//! home to the TOML configuration and logging setup the host embeds.

pub mod anchor;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod queries;
pub mod sweep;

pub use anchor::{AdmittedProof, VitalityAnchor};
pub use config::{ConfigError, KernelConfig};
pub use error::{AnchorError, ProofRejection};
pub use executor::{BlockExecutor, BlockReceipt};
pub use logging::{init_logging, LogFormat};
pub use queries::KernelQueries;
pub use sweep::{sweep_stale_proofs, SweepReport};
