use super::print_json;
use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::loader::load_history;
use crate::core::view_state::ViewState;
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::{info, sample_notice};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::History {
        search,
        sections,
        json,
    } = cmd
    {
        let ctx = AppContext::from_config(cfg);
        let query = search.as_deref().unwrap_or("");
        let repo = repository::connect(cfg, session)?;

        let mut state = ViewState::new();
        state.load_with(false, || {
            load_history(repo.as_ref(), &ctx, session.user_id(), query, *sections)
        });
        if let Some(e) = state.take_error() {
            return Err(e);
        }
        let Some(loaded) = state.take_data() else {
            return Ok(());
        };

        if *json {
            return print_json(&loaded.data);
        }
        if loaded.from_sample {
            sample_notice();
        }
        if loaded.data.is_empty() {
            if query.trim().is_empty() {
                info("No workouts yet. Log one with `fitlog add`.");
            } else {
                info(format!("No workouts match '{}'.", query.trim()));
            }
            return Ok(());
        }
        print!("{}", render::history(&loaded.data, ctx.use_colors));
    }

    Ok(())
}
