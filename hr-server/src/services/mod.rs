//! Domain services
//!
//! - [`AttendanceTracker`] - sign-in/sign-out state machine
//! - [`ProvisioningService`] - employee credential provisioning

pub mod attendance;
pub mod provisioning;

pub use attendance::AttendanceTracker;
pub use provisioning::{CredentialRequest, ProvisioningService};
