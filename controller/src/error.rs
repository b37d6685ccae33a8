// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::searchby::SearchBy;
use thiserror::Error as DError;

#[derive(Debug, Clone, Eq, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Couldn't found entity with id({0})")]
    NotFoundById(String),

    #[error("Couldn't found entity with name({0})")]
    NotFoundByName(String),

    #[error("Couldn't found entity with {0}({1})")]
    NotFoundByCustom(String, String),

    #[error("Unknown search field '{0}'")]
    UnknownField(String),

    #[error("Score {0} is out of range [{1}, {2}]")]
    ScoreOutOfRange(i32, i32, i32),

    #[error("Couldn't update rating for user({0}) on movie({1})")]
    UpdateRatingFailed(String, String),

    #[error("Couldn't remove rating for user({0}) on movie({1})")]
    RemoveRatingFailed(String, String),
}

impl ErrorKind {
    pub fn not_found(by: &SearchBy) -> Self {
        match by {
            SearchBy::Id(id) => Self::NotFoundById(id.clone()),
            SearchBy::Name(name) => Self::NotFoundByName(name.clone()),
            SearchBy::Custom(key, val) => Self::NotFoundByCustom(key.clone(), val.clone()),
        }
    }
}
