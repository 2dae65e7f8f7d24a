use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result};
use crate::compare::Compare;
use log::{debug, trace};
use std::cmp::{self, Ordering};
use std::fmt::Debug;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: the children of the root of `tree` are balanced and have correct heights
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("left-right rotation at height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                trace!("right rotation at height {}", node.height);
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("right-left rotation at height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                trace!("left rotation at height {}", node.height);
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Detaches the minimum node of `tree`, rebalancing every node on the path back up.
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(node) = tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            balance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            Some(node)
        },
        None => None,
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = match remove_min(&mut right_tree) {
        Some(node) => node,
        None => return left_tree,
    };
    new_root.left = left_tree;
    new_root.right = right_tree;
    let mut combined = Some(new_root);
    balance(&mut combined);
    combined
}

/// Inserts `value` into `tree`. Returns `false` and leaves the tree untouched if an equal value
/// is already present.
pub fn insert<T, C>(tree: &mut Tree<T>, value: T, comparator: &C) -> bool
where
    C: Compare<T>,
{
    let inserted = match tree {
        Some(node) => match comparator.compare(&value, &node.value) {
            Ordering::Less => insert(&mut node.left, value, comparator),
            Ordering::Greater => insert(&mut node.right, value, comparator),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

/// Removes the value equal to `value` from `tree` and returns it.
pub fn remove<T, C>(tree: &mut Tree<T>, value: &T, comparator: &C) -> Option<T>
where
    C: Compare<T>,
{
    let ret = match tree.take() {
        Some(mut node) => match comparator.compare(value, &node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value, comparator);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value, comparator);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node { value, left, right, .. } = unboxed_node;
                match (left, right) {
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                return Some(value);
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn contains<T, C>(tree: &Tree<T>, value: &T, comparator: &C) -> bool
where
    C: Compare<T>,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match comparator.compare(value, &node.value) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Recomputes the height of every subtree from scratch and returns the height of `tree`. Fails
/// on the first node whose subtrees differ in height by more than one.
pub fn check_balance<T>(tree: &Tree<T>) -> Result<usize>
where
    T: Debug,
{
    let node = match tree {
        Some(node) => node,
        None => return Ok(0),
    };

    let left_height = check_balance(&node.left)?;
    let right_height = check_balance(&node.right)?;
    if cmp::max(left_height, right_height) - cmp::min(left_height, right_height) > 1 {
        debug!(
            "unbalanced node {:?}: left height {}, right height {}",
            node.value,
            left_height,
            right_height
        );
        return Err(Error::Unbalanced {
            left_height,
            right_height,
            node: format!("{:?}", node.value),
        });
    }
    Ok(cmp::max(left_height, right_height) + 1)
}

#[cfg(test)]
pub fn in_order<T>(tree: &Tree<T>) -> Vec<&T> {
    let mut ret = Vec::new();
    let mut stack = Vec::new();
    let mut curr = tree;
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = &node.left;
        }
        match stack.pop() {
            Some(node) => {
                ret.push(&node.value);
                curr = &node.right;
            },
            None => return ret,
        }
    }
}
