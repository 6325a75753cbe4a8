use super::{ask_confirmation, print_json};
use crate::cli::parser::{Commands, GoalAction};
use crate::cli::render;
use crate::config::Config;
use crate::core::goals::goal_progress;
use crate::core::submit::{record_goal_progress, submit_goal};
use crate::core::validation::GoalDraft;
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Goal { action } = cmd else {
        return Ok(());
    };
    let repo = repository::connect(cfg, session)?;
    let colors = cfg.use_colors();

    match action {
        GoalAction::Add {
            title,
            target,
            current,
            unit,
            kind,
            deadline,
        } => {
            let draft = GoalDraft {
                title: title.clone(),
                kind: kind.clone(),
                target: target.clone(),
                current: current.clone(),
                unit: unit.clone(),
                deadline: deadline.clone(),
            };
            let g = submit_goal(repo.as_ref(), session, &draft)?;
            success(format!("Goal '{}' created.", g.title));
            println!("{}", render::goal_line(&g.progress(), colors));
        }
        GoalAction::List { json } => {
            let goals = goal_progress(&repo.list_goals()?);
            if *json {
                return print_json(&goals);
            }
            if goals.is_empty() {
                info("No goals yet. Create one with `fitlog goal add`.");
            } else {
                print!("{}", render::goals(&goals, colors));
            }
        }
        GoalAction::Progress { id, value } => {
            let g = record_goal_progress(repo.as_ref(), id, value)?;
            let p = g.progress();
            if p.achieved {
                success(format!("Goal '{}' achieved!", g.title));
            } else {
                success(format!("Goal '{}' updated.", g.title));
            }
            println!("{}", render::goal_line(&p, colors));
        }
        GoalAction::Del { id, yes } => {
            if !*yes && !ask_confirmation(&format!("Delete goal {}?", id)) {
                info("Operation cancelled.");
                return Ok(());
            }
            repo.delete_goal(id)?;
            success(format!("Goal {} has been deleted.", id));
        }
    }

    Ok(())
}
