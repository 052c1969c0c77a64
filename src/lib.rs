//! # Namecast
//!
//! Console tool for predicting the gender behind a first name.
//!
//! A name is validated, sent to the [genderize.io](https://genderize.io) API,
//! and the prediction is shown alongside whatever gender was previously saved
//! for that name. A save action persists either an explicitly selected gender
//! or, when none is selected, the last predicted one.
//!
//!
//!
//! # Output Regions
//!
//! Every action writes into one of three text regions (error, prediction
//! result, saved record) through [`render::render`]. The console prints the
//! non-empty regions after each action, so a later message simply replaces
//! the earlier one in its region.
//!
//!
//!
//! # Records
//!
//! Saved records live in a JSON file of plain `name -> gender` strings, one
//! record per trimmed name, overwritten on save and deleted on clear. The
//! path is configurable through `NAMECAST_STORE_PATH`.
use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod actions;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod predict;
pub mod render;
pub mod state;
pub mod store;
pub mod validate;

use config::Config;
use models::Selection;
use predict::PredictionClient;
use state::Session;

/// Run the interactive console session.
pub async fn interactive() -> Result<()> {
    let mut session = bootstrap()?;

    console::run(&mut session).await?;

    Ok(())
}

/// Fetch and print one prediction, then exit.
pub async fn predict_once(name: String) -> Result<()> {
    let mut session = bootstrap()?;

    session.submit(&name).await;
    console::print_regions(&session.regions);

    Ok(())
}

/// Persist a gender for a name, then exit.
pub fn save_once(name: String, male: bool, female: bool) -> Result<()> {
    let mut session = bootstrap()?;

    session.save(&name, Selection { male, female });
    console::print_regions(&session.regions);

    Ok(())
}

/// Delete the saved record for a name, then exit.
pub fn clear_once(name: String) -> Result<()> {
    let mut session = bootstrap()?;

    session.clear(&name);
    console::print_regions(&session.regions);

    Ok(())
}

fn bootstrap() -> Result<Session<PredictionClient>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load();

    info!("Opening record store at {}", config.store_path.display());
    let session = Session::new(&config)?;

    Ok(session)
}
