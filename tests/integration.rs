// Driver for binary-level tests under tests/integration/
// Keeps tests organized in a subdirectory while remaining visible to Cargo.
//
#[path = "integration/cli_gen_man.rs"]
mod cli_gen_man;
#[path = "integration/cli_validation.rs"]
mod cli_validation;
