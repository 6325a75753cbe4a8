use super::print_json;
use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::loader::load_dashboard;
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::sample_notice;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Dashboard { json } = cmd {
        let ctx = AppContext::from_config(cfg);
        let repo = repository::connect(cfg, session)?;
        let view = load_dashboard(repo.as_ref(), &ctx, session.user_id())?;

        if *json {
            return print_json(&view);
        }
        if view.from_sample {
            sample_notice();
        }
        print!("{}", render::dashboard(&view, ctx.use_colors));
    }

    Ok(())
}
