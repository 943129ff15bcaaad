//! # Object-Oriented Constructs in Rust
//!
//! Three classic object-oriented constructs and the trait each becomes:
//!
//! ## Capability-based dispatch
//! - `Newsletter` trait with one required method
//! - Controller that accepts any `&dyn Newsletter`
//!
//! ## Template methods
//! - `Achievement` trait whose `name()` and `icon()` are default methods
//! - Per-type `qualifier` extension point
//!
//! ## Aggregate root with a late-bound factory
//! - `Team` owning an ordered list of `Member`s
//! - `Start` trait so `T::start(..)` always yields a `T`
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin newsletter
//! cargo run --bin achievements
//! cargo run --bin team
//! ```

pub mod achievement;
pub mod config;
pub mod error;
pub mod logging;
pub mod newsletter;
pub mod team;

pub use error::{ConstructError, Result};
