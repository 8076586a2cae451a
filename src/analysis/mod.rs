/// Flood-fill connectivity verification
pub mod connectivity;

pub use connectivity::{VerificationReport, check, check_verbose};
