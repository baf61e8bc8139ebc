pub(crate) mod context;
pub(crate) mod runner;
mod run_result;

pub use run_result::RunResult;
