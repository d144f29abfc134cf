mod errors;
mod model;
mod storage;

pub(crate) use model::{Profile, ShellConfig};
pub(crate) use storage::load_initial_config;
