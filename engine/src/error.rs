// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, Eq, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Tried to divide by zero")]
    DivisionByZero,

    #[error("Indeterminate form 0/0")]
    IndeterminateForm,

    #[error("Empty ratings")]
    EmptyRatings,

    #[error("Couldn't convert types")]
    ConvertType,
}
