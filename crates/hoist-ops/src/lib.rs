pub mod ops_check;
pub mod ops_env;
pub mod ops_pom;
pub mod ops_preflight;
pub mod ops_setup;
pub mod ops_targets;
