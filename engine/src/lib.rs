// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod correlation;
pub mod error;
pub mod similarity;

use anyhow::Error;
use controller::{eid, Controller, Entity, SearchBy};
use std::{fmt::Display, hash::Hash};

pub use similarity::{paired_ratings, similarity, similarity_with};

pub struct Engine<'a, C>
where
    C: Controller,
{
    controller: &'a C,
}

impl<'a, C> Engine<'a, C>
where
    C: Controller,
    eid!(C::User): Display,
    eid!(C::Movie): Hash + Eq,
{
    pub fn with_controller(controller: &'a C) -> Self {
        Self { controller }
    }

    /// Pearson similarity of `other` as seen from `reference`, `0.0` when
    /// they have no movie in common
    pub fn user_similarity(&self, reference: &C::User, other: &C::User) -> Result<f64, Error> {
        let reference_ratings = self.controller.ratings_by(reference)?;
        let other_ratings = self.controller.ratings_by(other)?;

        log::debug!(
            "similarity(user({}), user({})): {} vs {} ratings",
            reference.get_id(),
            other.get_id(),
            reference_ratings.len(),
            other_ratings.len()
        );

        similarity(&reference_ratings, &other_ratings).map_err(Into::into)
    }

    pub fn user_similarity_by(&self, reference: &SearchBy, other: &SearchBy) -> Result<f64, Error> {
        let reference = self.controller.user_by(reference)?;
        let other = self.controller.user_by(other)?;

        self.user_similarity(&reference, &other)
    }
}
