use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::results_table;
use crate::db::pool::DbPool;
use crate::db::queries::load_timesheets;
use crate::errors::AppResult;
use crate::models::filter::{PeriodFilter, ResultFilter};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        search,
        sort,
        desc,
    } = cmd
    {
        let filter = ResultFilter {
            period: period.as_deref().map(PeriodFilter::parse).transpose()?,
            search: search.clone(),
            sort: *sort,
            descending: *desc,
        };

        let mut pool = DbPool::open_migrated(&cfg.database)?;
        let rows = load_timesheets(&mut pool, &filter)?;

        if rows.is_empty() {
            info("No saved results match the selection.");
            return Ok(());
        }

        let table_rows: Vec<(String, &_)> = rows
            .iter()
            .map(|r| (r.source_file.clone(), &r.result))
            .collect();

        print!("{}", results_table(&table_rows, &cfg.separator_char));
        println!("\n{} result(s)", rows.len());
    }
    Ok(())
}
