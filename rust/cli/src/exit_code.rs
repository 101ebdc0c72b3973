//! Exit codes returned by the CLI.

/// Command completed successfully.
pub const SUCCESS: i32 = 0;

/// Command failed with an error.
pub const ERROR: i32 = 2;
