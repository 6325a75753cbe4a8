use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::errors::{AppError, AppResult};
use crate::repository::SqliteRepository;
use crate::session::Session;
use crate::ui::messages::info;
use crate::utils::colors::{GREEN, MAGENTA, RED, YELLOW, paint};
use crate::utils::table::Table;

/// Color for the operation column.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "goal add" => GREEN,
        "del" | "goal del" => RED,
        "edit" | "goal progress" => YELLOW,
        _ => MAGENTA,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
    t.push_str("...");
    t
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd {
        if !*print {
            return Ok(());
        }
        if cfg.backend != Backend::Local {
            return Err(AppError::Config(
                "the audit log is only kept by the local backend".into(),
            ));
        }

        let repo = SqliteRepository::open(&cfg.database, session)?;
        let entries = repo.audit_log(*limit)?;
        if entries.is_empty() {
            info("The log is empty.");
            return Ok(());
        }

        let colors = cfg.use_colors();
        let mut t = Table::new(["Id", "Date", "Operation", "Target", "Message"]);
        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(e.date);
            t.add_row(vec![
                e.id.to_string(),
                date,
                paint(&e.operation, color_for_operation(&e.operation), colors),
                e.target,
                truncate(&e.message, 60),
            ]);
        }
        println!("📜 Internal log:\n");
        print!("{}", t.render());
    }

    Ok(())
}
