// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::{anyhow, Error};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use controller::SearchBy;

pub const DEFAULT_CONFIG: &str = "ratings.toml";

fn search_args<'a, 'b>(name: &'a str, about: &'a str) -> App<'a, 'b> {
    SubCommand::with_name(name)
        .about(about)
        .arg(
            Arg::with_name("value")
                .help("Value to search for")
                .required(true),
        )
        .arg(
            Arg::with_name("by")
                .long("by")
                .short("b")
                .takes_value(true)
                .default_value("id")
                .help("Field to search by: id, name or any custom field"),
        )
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("ratings")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Query movie ratings and compare users")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .takes_value(true)
                .global(true)
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::with_name("database")
                .long("database")
                .short("d")
                .takes_value(true)
                .global(true)
                .help("Database url, overrides the configuration"),
        )
        .subcommand(SubCommand::with_name("init").about("Create the database tables"))
        .subcommand(search_args("user", "Show users"))
        .subcommand(search_args("movie", "Show movies"))
        .subcommand(
            SubCommand::with_name("ratings")
                .about("Show the ratings of a user")
                .arg(Arg::with_name("user").help("User id").required(true)),
        )
        .subcommand(
            SubCommand::with_name("similarity")
                .about("Pearson similarity between two users")
                .arg(
                    Arg::with_name("reference")
                        .help("Reference user id")
                        .required(true),
                )
                .arg(
                    Arg::with_name("other")
                        .help("Compared user id")
                        .required(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("rate")
                .about("Rate a movie, updating the rating if it exists")
                .arg(Arg::with_name("user").help("User id").required(true))
                .arg(Arg::with_name("movie").help("Movie id").required(true))
                .arg(Arg::with_name("score").help("Score").required(true)),
        )
}

pub fn required<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    args.value_of(name)
        .ok_or_else(|| anyhow!("Missing argument <{}>", name))
}

pub fn search_by(args: &ArgMatches) -> Result<SearchBy, Error> {
    let value = required(args, "value")?;
    let field = args.value_of("by").unwrap_or("id");

    Ok(SearchBy::by_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;

    #[test]
    fn search_defaults_to_id() -> Result<(), Error> {
        let matches = app().get_matches_from_safe(vec!["ratings", "user", "42"])?;
        let (name, args) = matches.subcommand();

        assert_eq!(name, "user");
        let args = args.ok_or_else(|| anyhow!("no arguments"))?;
        assert_eq!(search_by(args)?, SearchBy::id("42"));

        Ok(())
    }

    #[test]
    fn search_by_custom_field() -> Result<(), Error> {
        let matches =
            app().get_matches_from_safe(vec!["ratings", "user", "--by", "zipcode", "94110"])?;
        let args = matches
            .subcommand_matches("user")
            .ok_or_else(|| anyhow!("no arguments"))?;

        assert_eq!(search_by(args)?, SearchBy::custom("zipcode", "94110"));

        Ok(())
    }

    #[test]
    fn similarity_needs_two_users() {
        assert!(app()
            .get_matches_from_safe(vec!["ratings", "similarity", "1"])
            .is_err());

        assert!(app()
            .get_matches_from_safe(vec!["ratings", "similarity", "1", "2"])
            .is_ok());
    }

    #[test]
    fn global_database_flag() -> Result<(), Error> {
        let matches =
            app().get_matches_from_safe(vec!["ratings", "init", "--database", ":memory:"])?;
        let args = matches
            .subcommand_matches("init")
            .ok_or_else(|| anyhow!("no arguments"))?;

        assert_eq!(args.value_of("database"), Some(":memory:"));

        Ok(())
    }
}
