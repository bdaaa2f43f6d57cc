use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::read_tail;
use crate::ui::messages::info;
use crate::utils::table::Table;

/// Handle the `show` command: print the tail of a log as a table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { seats, last } = cmd {
        let path = if *seats {
            cfg.seats_log_path()
        } else {
            cfg.summary_log_path()
        };

        let Some(tail) = read_tail(&path, *last)? else {
            info(format!("No log yet at {}", path.display()));
            return Ok(());
        };

        let mut table = Table::new(tail.headers);
        for row in tail.rows {
            table.add_row(row);
        }

        print!("{}", table.render());
        info(format!(
            "{} of {} row(s) from {}",
            table.rows.len(),
            tail.total_rows,
            path.display()
        ));
    }

    Ok(())
}
