use crate::avl_tree::tree;
use crate::avl_tree::{Error, Result};
use crate::compare::{Compare, Natural};
use std::fmt::Debug;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Elements are ordered by a
/// comparator, which defaults to the natural ordering of `T`.
///
/// # Examples
/// ```
/// use balanced_set::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Ok(&0));
/// assert_eq!(set.last(), Ok(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct AvlSet<T, C = Natural> {
    tree: tree::Tree<T>,
    comparator: C,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by the natural ordering of `T`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by `comparator`.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Ok(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        AvlSet {
            tree: None,
            comparator,
            len: 0,
        }
    }

    /// Inserts a value into the set. Returns `true` if the value was not already present. An
    /// existing equal value is left in place.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = tree::insert(&mut self.tree, value, &self.comparator);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a value from the set. Returns `true` if the value was present.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = tree::remove(&mut self.tree, value, &self.comparator).is_some();
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.tree, value, &self.comparator)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the first (lowest) value of the set.
    ///
    /// # Errors
    /// Returns `Error::Empty` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.first(), Err(Error::Empty));
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.first(), Ok(&1));
    /// ```
    pub fn first(&self) -> Result<&T> {
        self.min().ok_or(Error::Empty)
    }

    /// Returns the last (highest) value of the set.
    ///
    /// # Errors
    /// Returns `Error::Empty` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::{AvlSet, Error};
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.last(), Err(Error::Empty));
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.last(), Ok(&3));
    /// ```
    pub fn last(&self) -> Result<&T> {
        self.max().ok_or(Error::Empty)
    }

    /// Walks the whole tree and verifies that the heights of the two child subtrees of every
    /// node differ by at most one. Returns the height of the tree.
    ///
    /// # Errors
    /// Returns `Error::Unbalanced` with the offending node and its subtree heights on the first
    /// violation found.
    ///
    /// # Examples
    /// ```
    /// use balanced_set::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// for i in 0..7 {
    ///     set.insert(i);
    /// }
    /// assert_eq!(set.check_balance(), Ok(3));
    /// ```
    pub fn check_balance(&self) -> Result<usize>
    where
        T: Debug,
    {
        tree::check_balance(&self.tree)
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
