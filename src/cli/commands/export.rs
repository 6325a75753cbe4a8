use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_workouts;
use crate::repository;
use crate::session::Session;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let repo = repository::connect(cfg, session)?;
        let workouts = repo.list_workouts()?;
        export_workouts(&workouts, *format, &expand_tilde(file), *force)?;
    }

    Ok(())
}
