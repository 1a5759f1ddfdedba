//! Display cards and the renderer trait.

mod card;
mod traits;

pub use card::{DisplayCard, IngredientMeasure, UNNAMED_DRINK};
pub use traits::Renderer;
