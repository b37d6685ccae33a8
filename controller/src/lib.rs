// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod searchby;

#[macro_export]
macro_rules! eid {
    ($e:ty) => {
        <$e as $crate::entity::Entity>::Id
    };
}

#[macro_export]
macro_rules! ratings {
    ($e:ty) => {
        $crate::Ratings<$crate::eid!($e)>
    }
}

use anyhow::Error;

pub use entity::{Entity, ToTable};
pub use searchby::SearchBy;

pub type Result<T> = std::result::Result<T, Error>;

/// Snapshot of one user's ratings as `(item id, score)` pairs, in the
/// order the storage keeps them. Repeated item ids are kept as stored.
pub type Ratings<I, Score = i32> = Vec<(I, Score)>;

pub trait Controller {
    type User: Entity;
    type Movie: Entity;
    type Rating: Entity;

    /// Get all users
    fn users(&self) -> Result<Vec<Self::User>>;

    /// Get users that matched the search criteria by id, email or custom field
    fn users_by(&self, by: &SearchBy) -> Result<Vec<Self::User>>;

    /// Get all movies
    fn movies(&self) -> Result<Vec<Self::Movie>>;

    /// Get movies that matched the search criteria by id, title or custom field
    fn movies_by(&self, by: &SearchBy) -> Result<Vec<Self::Movie>>;

    /// Get the `(movie id, score)` snapshot for the specified user
    fn ratings_by(&self, user: &Self::User) -> Result<ratings!(Self::Movie)>;

    /// Get the full rating records of a user, ordered by rating id
    fn user_ratings(&self, user: &Self::User) -> Result<Vec<Self::Rating>>;

    /// Get the full rating records of a movie, ordered by rating id
    fn movie_ratings(&self, movie: &Self::Movie) -> Result<Vec<Self::Rating>>;

    /// The controller score range, ex. (1, 5) is (min_score, max_score)
    fn score_range(&self) -> (i32, i32);

    /// Get the first user matching the criteria
    fn user_by(&self, by: &SearchBy) -> Result<Self::User> {
        self.users_by(by)?
            .into_iter()
            .next()
            .ok_or_else(|| error::ErrorKind::not_found(by).into())
    }

    /// Get the first movie matching the criteria
    fn movie_by(&self, by: &SearchBy) -> Result<Self::Movie> {
        self.movies_by(by)?
            .into_iter()
            .next()
            .ok_or_else(|| error::ErrorKind::not_found(by).into())
    }
}
