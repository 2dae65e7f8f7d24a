//! An ordered set backed by an avl tree, a binary search tree that rebalances itself with
//! single and double rotations after every insertion and removal.

mod compare;
pub mod avl_tree;
