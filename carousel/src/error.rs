use thiserror::Error;

/// Rejected slider configuration.
///
/// Options are validated once, when the controller is built. Runtime operations never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    #[error("step size must be a positive number of pixels")]
    ZeroStepSize,

    #[error("auto-advance interval must be at least 1 ms")]
    ZeroInterval,
}
