// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

mod cli;

use anyhow::Error;
use clap::ArgMatches;
use cli::{required, search_by, DEFAULT_CONFIG};
use config::Config;
use controller::{error::ErrorKind, Controller, Entity, SearchBy, ToTable};
use engine::Engine;
use ratings_db::{create_schema, RatingsDbController};
use simplelog::{Config as LogConfig, TermLogger, TerminalMode};

fn load_config(matches: &ArgMatches, args: Option<&ArgMatches>) -> Result<Config, Error> {
    let global = |name: &str| {
        args.and_then(|args| args.value_of(name))
            .or_else(|| matches.value_of(name))
            .map(str::to_owned)
    };

    let path = global("config").unwrap_or_else(|| DEFAULT_CONFIG.into());
    let mut config = Config::load_or_default(path)?.with_env_overrides();

    if let Some(url) = global("database") {
        config.database.url = url;
    }

    Ok(config)
}

fn run(controller: &RatingsDbController, name: &str, args: &ArgMatches) -> Result<(), Error> {
    match name {
        "init" => {
            create_schema(controller.connection())?;
            println!("Database is ready");
        }

        "user" => {
            for user in controller.users_by(&search_by(args)?)? {
                println!("{}", user.to_table());
            }
        }

        "movie" => {
            for movie in controller.movies_by(&search_by(args)?)? {
                println!("{}", movie.to_table());
            }
        }

        "ratings" => {
            let user = controller.user_by(&SearchBy::id(required(args, "user")?))?;
            let ratings = controller.ratings_by(&user)?;

            if ratings.is_empty() {
                println!("No ratings found for id({})", user.get_id());
            } else {
                println!("{}", ratings[..].to_table());
            }
        }

        "similarity" => {
            let engine = Engine::with_controller(controller);
            let reference = SearchBy::id(required(args, "reference")?);
            let other = SearchBy::id(required(args, "other")?);

            let similarity = engine.user_similarity_by(&reference, &other)?;
            println!("Similarity is {}", similarity);
        }

        "rate" => {
            let user: i32 = required(args, "user")?.parse()?;
            let movie: i32 = required(args, "movie")?.parse()?;
            let score: i32 = required(args, "score")?.parse()?;

            let rating = match controller.update_rating(user, movie, score) {
                Err(e)
                    if matches!(
                        e.downcast_ref::<ErrorKind>(),
                        Some(ErrorKind::UpdateRatingFailed(..))
                    ) =>
                {
                    controller.insert_rating(user, movie, score)?
                }
                rating => rating?,
            };

            println!("{}", rating.to_table());
        }

        other => log::error!("Unknown command '{}'", other),
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = cli::app().get_matches();
    let (name, args) = matches.subcommand();

    let config = load_config(&matches, args)?;
    TermLogger::init(
        config.logging.level_filter()?,
        LogConfig::default(),
        TerminalMode::Mixed,
    )?;

    log::debug!("Using database {}", config.database.url);
    let controller = RatingsDbController::with_url(&config.database.url)?;

    match args {
        Some(args) => run(&controller, name, args),
        None => Ok(()),
    }
}
