// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::{Context, Error};
use config::Config;
use ratings_db::seed::{load_movies, load_ratings, load_users};
use ratings_db::{create_schema, establish_connection};
use simplelog::{Config as LogConfig, TermLogger, TerminalMode};
use std::fs::File;
use std::path::{Path, PathBuf};

fn open(dir: &Path, name: &str) -> Result<File, Error> {
    let path = dir.join(name);
    File::open(&path).with_context(|| format!("Couldn't open {}", path.display()))
}

// Usage: load_data [DATA_DIR], defaults to data/ml-100k
fn main() -> Result<(), Error> {
    let config = Config::load_or_default("ratings.toml")?.with_env_overrides();
    TermLogger::init(
        config.logging.level_filter()?,
        LogConfig::default(),
        TerminalMode::Mixed,
    )?;

    let dir: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/ml-100k".into())
        .into();

    let conn = establish_connection(&config.database.url)?;
    create_schema(&conn)?;

    load_users(&conn, open(&dir, "u.user")?)?;
    load_movies(&conn, open(&dir, "u.item")?)?;
    load_ratings(&conn, open(&dir, "u.data")?)?;

    Ok(())
}
