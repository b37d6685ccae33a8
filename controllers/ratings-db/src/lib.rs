// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

#[macro_use]
extern crate diesel;

pub mod models;
pub mod schema;
pub mod seed;

use crate::models::{
    movies::{Movie, NewMovie},
    ratings::{NewRating, Rating},
    users::{NewUser, User},
};
use crate::schema::{movies, ratings, users};
use anyhow::Error;
use controller::{error::ErrorKind, ratings, Controller, SearchBy};
use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use diesel::{insert_into, prelude::*};

pub const SCHEMA: &str = include_str!("../migrations/2020-06-01-000000_create_ratings/up.sql");

pub fn establish_connection(url: &str) -> Result<SqliteConnection, Error> {
    let conn = SqliteConnection::establish(url)?;
    conn.batch_execute("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Create the users, movies and ratings tables if they don't exist yet
pub fn create_schema(conn: &SqliteConnection) -> Result<(), Error> {
    conn.batch_execute(SCHEMA)?;
    Ok(())
}

pub struct RatingsDbController {
    conn: SqliteConnection,
}

impl RatingsDbController {
    pub fn with_url(url: &str) -> Result<Self, Error> {
        let conn = establish_connection(url)?;
        Ok(Self::with_connection(conn))
    }

    pub fn with_connection(conn: SqliteConnection) -> Self {
        Self { conn }
    }

    /// Empty database living only as long as the controller
    pub fn in_memory() -> Result<Self, Error> {
        let controller = Self::with_url(":memory:")?;
        create_schema(&controller.conn)?;
        Ok(controller)
    }

    pub fn connection(&self) -> &SqliteConnection {
        &self.conn
    }

    pub fn insert_user(&self, user: &NewUser) -> Result<User, Error> {
        self.conn.transaction::<_, Error, _>(|| {
            insert_into(users::table).values(user).execute(&self.conn)?;

            let user = users::table
                .order(users::id.desc())
                .first::<User>(&self.conn)?;

            Ok(user)
        })
    }

    pub fn insert_movie(&self, movie: &NewMovie) -> Result<Movie, Error> {
        self.conn.transaction::<_, Error, _>(|| {
            insert_into(movies::table).values(movie).execute(&self.conn)?;

            let movie = movies::table
                .order(movies::id.desc())
                .first::<Movie>(&self.conn)?;

            Ok(movie)
        })
    }

    pub fn insert_rating(&self, user_id: i32, movie_id: i32, score: i32) -> Result<Rating, Error> {
        self.check_score(score)?;

        let user = self.user_by(&SearchBy::id(&user_id.to_string()))?;
        let movie = self.movie_by(&SearchBy::id(&movie_id.to_string()))?;

        let new_rating = NewRating {
            movie_id: movie.id,
            user_id: user.id,
            score,
        };

        self.conn.transaction::<_, Error, _>(|| {
            insert_into(ratings::table)
                .values(&new_rating)
                .execute(&self.conn)?;

            let rating = ratings::table
                .order(ratings::id.desc())
                .first::<Rating>(&self.conn)?;

            log::debug!("Inserted {}", rating);
            Ok(rating)
        })
    }

    /// Set the score of every rating `user_id` gave to `movie_id`, returns the
    /// most recent of them
    pub fn update_rating(&self, user_id: i32, movie_id: i32, score: i32) -> Result<Rating, Error> {
        self.check_score(score)?;

        let target = ratings::table
            .filter(ratings::user_id.eq(user_id))
            .filter(ratings::movie_id.eq(movie_id));

        self.conn.transaction::<_, Error, _>(|| {
            let updated = diesel::update(target.clone())
                .set(ratings::score.eq(score))
                .execute(&self.conn)?;

            if updated == 0 {
                return Err(
                    ErrorKind::UpdateRatingFailed(user_id.to_string(), movie_id.to_string())
                        .into(),
                );
            }

            let rating = target.order(ratings::id.desc()).first::<Rating>(&self.conn)?;
            log::debug!("Updated {}", rating);
            Ok(rating)
        })
    }

    /// Remove the ratings `user_id` gave to `movie_id`, returns what was removed
    pub fn remove_rating(&self, user_id: i32, movie_id: i32) -> Result<Vec<Rating>, Error> {
        let target = ratings::table
            .filter(ratings::user_id.eq(user_id))
            .filter(ratings::movie_id.eq(movie_id));

        self.conn.transaction::<_, Error, _>(|| {
            let removed = target.clone().order(ratings::id).load::<Rating>(&self.conn)?;
            if removed.is_empty() {
                return Err(
                    ErrorKind::RemoveRatingFailed(user_id.to_string(), movie_id.to_string())
                        .into(),
                );
            }

            diesel::delete(target).execute(&self.conn)?;
            Ok(removed)
        })
    }

    fn check_score(&self, score: i32) -> Result<(), Error> {
        let (min, max) = self.score_range();
        if score < min || score > max {
            Err(ErrorKind::ScoreOutOfRange(score, min, max).into())
        } else {
            Ok(())
        }
    }
}

impl Controller for RatingsDbController {
    type User = User;
    type Movie = Movie;
    type Rating = Rating;

    fn users(&self) -> Result<Vec<Self::User>, Error> {
        let users = users::table.order(users::id).load::<User>(&self.conn)?;
        Ok(users)
    }

    fn users_by(&self, by: &SearchBy) -> Result<Vec<Self::User>, Error> {
        let users = match by {
            SearchBy::Id(id) => {
                let id: i32 = id.parse()?;
                users::table
                    .filter(users::id.eq(id))
                    .load::<User>(&self.conn)?
            }

            SearchBy::Name(email) => users::table
                .filter(users::email.eq(email.as_str()))
                .order(users::id)
                .load::<User>(&self.conn)?,

            SearchBy::Custom(key, val) => match key.as_str() {
                "age" => {
                    let age: i32 = val.parse()?;
                    users::table
                        .filter(users::age.eq(age))
                        .order(users::id)
                        .load::<User>(&self.conn)?
                }

                "zipcode" => users::table
                    .filter(users::zipcode.eq(val.as_str()))
                    .order(users::id)
                    .load::<User>(&self.conn)?,

                _ => return Err(ErrorKind::UnknownField(key.clone()).into()),
            },
        };

        if users.is_empty() {
            Err(ErrorKind::not_found(by).into())
        } else {
            Ok(users)
        }
    }

    fn movies(&self) -> Result<Vec<Self::Movie>, Error> {
        let movies = movies::table.order(movies::id).load::<Movie>(&self.conn)?;
        Ok(movies)
    }

    fn movies_by(&self, by: &SearchBy) -> Result<Vec<Self::Movie>, Error> {
        let movies = match by {
            SearchBy::Id(id) => {
                let id: i32 = id.parse()?;
                movies::table
                    .filter(movies::id.eq(id))
                    .load::<Movie>(&self.conn)?
            }

            SearchBy::Name(title) => movies::table
                .filter(movies::title.eq(title.as_str()))
                .order(movies::id)
                .load::<Movie>(&self.conn)?,

            SearchBy::Custom(key, val) => match key.as_str() {
                "imdb_url" => movies::table
                    .filter(movies::imdb_url.eq(val.as_str()))
                    .order(movies::id)
                    .load::<Movie>(&self.conn)?,

                _ => return Err(ErrorKind::UnknownField(key.clone()).into()),
            },
        };

        if movies.is_empty() {
            Err(ErrorKind::not_found(by).into())
        } else {
            Ok(movies)
        }
    }

    fn ratings_by(&self, user: &Self::User) -> Result<ratings!(Self::Movie), Error> {
        let ratings = Rating::belonging_to(user)
            .order(ratings::id)
            .select((ratings::movie_id, ratings::score))
            .load::<(i32, i32)>(&self.conn)?;

        Ok(ratings)
    }

    fn user_ratings(&self, user: &Self::User) -> Result<Vec<Self::Rating>, Error> {
        let ratings = Rating::belonging_to(user)
            .order(ratings::id)
            .load::<Rating>(&self.conn)?;

        Ok(ratings)
    }

    fn movie_ratings(&self, movie: &Self::Movie) -> Result<Vec<Self::Rating>, Error> {
        let ratings = Rating::belonging_to(movie)
            .order(ratings::id)
            .load::<Rating>(&self.conn)?;

        Ok(ratings)
    }

    fn score_range(&self) -> (i32, i32) {
        (1, 5)
    }
}
