use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::print_stats;
use crate::core::stats::BatchStats;
use crate::db::pool::DbPool;
use crate::db::queries::load_timesheets;
use crate::errors::AppResult;
use crate::models::filter::{PeriodFilter, ResultFilter};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period } = cmd {
        let filter = ResultFilter {
            period: period.as_deref().map(PeriodFilter::parse).transpose()?,
            ..Default::default()
        };

        let mut pool = DbPool::open_migrated(&cfg.database)?;
        let results: Vec<_> = load_timesheets(&mut pool, &filter)?
            .into_iter()
            .map(|r| r.result)
            .collect();

        print_stats(&BatchStats::from_results(&results));
    }
    Ok(())
}
