//! The `process` command: reconcile a batch of documents, then report or save it.

use crate::config::Config;
use crate::core::batch::{ProcessedFile, process_files};
use crate::core::extract::AutoExtractor;
use crate::core::report::{days_table, print_stats, results_table};
use crate::core::stats::BatchStats;
use crate::db::log::{log_failed, log_saved, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries::upsert_timesheet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, route_to_stderr, success, warning};
use rusqlite::Connection;
use std::path::PathBuf;

pub struct ProcessOptions {
    pub save: bool,
    pub details: bool,
    pub json: bool,
}

pub struct ProcessLogic;

impl ProcessLogic {
    pub fn run(cfg: &Config, files: &[PathBuf], opts: &ProcessOptions) -> AppResult<()> {
        let extractor = AutoExtractor::from_config(cfg);
        let processed = process_files(files, &extractor);

        if opts.json {
            // stdout is reserved for the JSON document
            route_to_stderr(true);
            let json = serde_json::to_string_pretty(&processed)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{json}");
        } else {
            Self::print_human(cfg, &processed, opts.details);
        }

        if opts.save {
            Self::save(cfg, &processed)?;
        }

        let failed = processed.iter().filter(|p| !p.is_ok()).count();
        if !processed.is_empty() && failed == processed.len() {
            return Err(AppError::Other(format!(
                "none of the {} document(s) could be processed",
                failed
            )));
        }

        Ok(())
    }

    fn print_human(cfg: &Config, processed: &[ProcessedFile], details: bool) {
        for p in processed.iter().filter(|p| !p.is_ok()) {
            if let Some(e) = &p.error {
                error(e);
            }
        }

        let ok: Vec<(String, &_)> = processed
            .iter()
            .filter_map(|p| p.result.as_ref().map(|r| (p.file_name.clone(), r)))
            .collect();

        if ok.is_empty() {
            warning("No document could be reconciled.");
            return;
        }

        if details {
            for p in processed.iter().filter(|p| p.is_ok()) {
                header(&p.file_name);
                if p.days.is_empty() {
                    warning("No day lines found.");
                } else {
                    print!("{}", days_table(&p.days, &cfg.separator_char));
                }
                println!();
            }
        }

        print!("{}", results_table(&ok, &cfg.separator_char));
        println!();

        let results: Vec<_> = ok.iter().map(|(_, r)| (*r).clone()).collect();
        print_stats(&BatchStats::from_results(&results));
    }

    fn save(cfg: &Config, processed: &[ProcessedFile]) -> AppResult<()> {
        let pool = DbPool::open_migrated(&cfg.database)?;

        let saved = match Self::save_all(&pool.conn, processed) {
            Ok(n) => n,
            Err(e) => {
                if let Err(log_err) = ttlog(&pool.conn, "save_failed", &cfg.database, &e.to_string())
                {
                    warning(format!("Failed to write internal log: {}", log_err));
                }
                return Err(e);
            }
        };

        if saved > 0 {
            success(format!("{} result(s) saved to {}", saved, cfg.database));
        } else {
            info("Nothing to save.");
        }
        Ok(())
    }

    /// Saves the whole batch in one transaction: every row or none.
    fn save_all(conn: &Connection, processed: &[ProcessedFile]) -> AppResult<usize> {
        let tx = conn.unchecked_transaction()?;
        let mut saved = 0;

        for p in processed {
            match (&p.result, &p.error) {
                (Some(r), _) => {
                    upsert_timesheet(&tx, r, &p.file_name)?;
                    if let Err(e) = log_saved(&tx, &p.file_name, r) {
                        warning(format!("Failed to write internal log: {}", e));
                    }
                    saved += 1;
                }
                (None, Some(e)) => {
                    if let Err(log_err) = log_failed(&tx, &p.file_name, e) {
                        warning(format!("Failed to write internal log: {}", log_err));
                    }
                }
                (None, None) => {}
            }
        }

        tx.commit()?;
        Ok(saved)
    }
}
