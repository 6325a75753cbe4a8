use super::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Delete workout {}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let repo = repository::connect(cfg, session)?;
        repo.delete_workout(id)?;
        success(format!("Workout {} has been deleted.", id));
    }

    Ok(())
}
