pub mod audit;
mod context;
pub mod init;

pub use audit::{run_audit, run_audit_impl};
pub use context::color_choice_to_mode;
pub use init::{generate_config_template, run_init, run_init_impl};
