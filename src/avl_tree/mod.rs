//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::AvlSet;
pub use crate::compare::{Compare, Natural};

use std::error;
use std::fmt;
use std::result;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The set has no elements to return.
    Empty,
    /// The subtrees of `node` have heights that differ by more than one.
    Unbalanced {
        left_height: usize,
        right_height: usize,
        node: String,
    },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "set is empty"),
            Error::Unbalanced { left_height, right_height, node } => write!(
                f,
                "subtree heights of node {} differ by more than one (left: {}, right: {})",
                node,
                left_height,
                right_height,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
