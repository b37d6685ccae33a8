use super::movies::Movie;
use super::users::User;
use crate::schema::ratings;
use common_macros::b_tree_map;
use controller::Entity;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

// To query data from the database
#[derive(Debug, Clone, Identifiable, Queryable, Associations, PartialEq)]
#[belongs_to(User)]
#[belongs_to(Movie)]
pub struct Rating {
    pub id: i32,
    pub movie_id: i32,
    pub user_id: i32,
    pub score: i32,
}

impl Entity for Rating {
    type Id = i32;

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn get_data(&self) -> BTreeMap<String, String> {
        b_tree_map! {
            "movie_id".into() => self.movie_id.to_string(),
            "user_id".into() => self.user_id.to_string(),
            "score".into() => self.score.to_string(),
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Rating rating_id={} movie_id={} user_id={} score={}>",
            self.id, self.movie_id, self.user_id, self.score
        )
    }
}

// To insert a new rating into the database
#[derive(Debug, Clone, Insertable)]
#[table_name = "ratings"]
pub struct NewRating {
    pub movie_id: i32,
    pub user_id: i32,
    pub score: i32,
}
