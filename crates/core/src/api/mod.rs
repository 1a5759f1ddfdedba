//! Upstream drink API abstraction.
//!
//! This module provides a `DrinkApi` trait over the three read-only
//! endpoints the client needs, plus the TheCocktailDB implementation.

mod cocktaildb;
mod types;

pub use cocktaildb::CocktailDbClient;
pub use types::*;
