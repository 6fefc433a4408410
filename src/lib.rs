//! This crate collects small, self-contained demonstrations of generic
//! programming in Rust, mostly for educational purposes. Each module stands
//! alone and can be read in isolation:
//!
//! - [`tree`]: a binary search tree storing unique values of any type,
//!   ordered by a comparison function the caller supplies.
//! - [`seq`]: the classic sequence transformations (`map`, `filter`,
//!   `reduce`) written as free generic functions.
//! - [`mapkeys`]: extracting the key set from a map, for any key and value
//!   types.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! The twist in this crate's tree is what "less" and "greater" mean. Most
//! tree types pin the ordering to the element type through an `Ord` bound;
//! here the ordering is a plain function value handed over at construction,
//! so one element type can be stored under as many different orderings as
//! there are comparison functions. The same idea carries the [`seq`] and
//! [`mapkeys`] modules: the interesting behavior arrives as a type or
//! function parameter instead of being written out once per concrete type.

#![deny(missing_docs)]

pub mod mapkeys;
pub mod seq;
pub mod tree;
