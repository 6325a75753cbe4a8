use super::print_json;
use crate::cli::parser::Commands;
use crate::cli::render;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::loader::load_profile;
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::{header, sample_notice};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Profile { json } = cmd {
        let ctx = AppContext::from_config(cfg);
        let repo = repository::connect(cfg, session)?;
        let loaded = load_profile(repo.as_ref(), &ctx)?;

        if *json {
            return print_json(&loaded.data);
        }
        if loaded.from_sample {
            sample_notice();
        }
        header(format!("Profile: {}", session.user_id()));
        print!("{}", render::profile(&loaded.data));
    }

    Ok(())
}
