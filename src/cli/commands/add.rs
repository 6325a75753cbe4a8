use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::submit_workout;
use crate::core::validation::WorkoutDraft;
use crate::errors::AppResult;
use crate::location::{ConfiguredLocation, LocationProvider};
use crate::repository;
use crate::session::Session;
use crate::ui::messages::{info, success};
use crate::utils::date::now;
use crate::utils::{format_distance, format_duration};

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        title,
        kind,
        duration,
        distance,
        calories,
        notes,
        date,
        location,
        lat,
        lon,
    } = cmd
    {
        let draft = WorkoutDraft {
            title: title.clone(),
            kind: kind.clone(),
            duration: duration.clone(),
            distance: distance.clone(),
            calories: calories.clone(),
            notes: notes.clone(),
            date: date.clone(),
        };

        let mut gps = ConfiguredLocation::new(*lat, *lon, cfg.home_location);
        let locator: Option<&mut dyn LocationProvider> = if *location { Some(&mut gps) } else { None };

        let repo = repository::connect(cfg, session)?;
        let w = submit_workout(repo.as_ref(), session, &draft, locator, now())?;

        success(format!(
            "Workout '{}' saved: {} {}, {}, {} kcal",
            w.title,
            w.kind.label(),
            format_duration(u64::from(w.duration)),
            format_distance(w.distance),
            w.calories
        ));
        if let Some(p) = w.location {
            info(format!("Location: {:.5}, {:.5}", p.latitude, p.longitude));
        } else if *location {
            info("Location not available; saved without it.");
        }
        info(format!("Id: {}", w.id));
    }

    Ok(())
}
