pub mod defaults;
pub mod envvars;
pub mod keys;
pub mod remote_defaults;
