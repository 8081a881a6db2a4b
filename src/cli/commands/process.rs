use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::{ProcessLogic, ProcessOptions};
use crate::errors::AppResult;

/// Reconcile the given documents.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        files,
        save,
        details,
        json,
    } = cmd
    {
        let opts = ProcessOptions {
            save: *save,
            details: *details,
            json: *json,
        };
        ProcessLogic::run(cfg, files, &opts)?;
    }
    Ok(())
}
