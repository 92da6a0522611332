//! `parley levels`: the user → internal log level table.

use anyhow::Result;
use parley_observability::{level_from_env, UserLogLevel};
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct LevelRow {
    user: &'static str,
    internal: String,
    quiet: bool,
}

pub fn handle() -> Result<()> {
    let rows: Vec<LevelRow> = UserLogLevel::ALL
        .iter()
        .map(|level| {
            let internal = level.internal();
            LevelRow {
                user: level.as_str(),
                quiet: internal.is_quiet(),
                internal: internal.to_string(),
            }
        })
        .collect();

    let mut table = output::table(&["User level", "Internal level", "Suppresses warnings"]);
    for row in &rows {
        let quiet = if row.quiet { "yes" } else { "no" };
        output::table_row(&mut table, &[row.user, &row.internal, quiet]);
    }

    if !output::is_json() {
        output::header("Log levels");
    }
    output::table_print(&table, &rows);
    if !output::is_json() {
        if let Some(active) = level_from_env() {
            output::dim(&format!("Active: {active}"));
        }
        output::dim("Any other label maps to error.");
    }
    Ok(())
}
