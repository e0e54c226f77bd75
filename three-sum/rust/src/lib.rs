mod finder;
pub mod input;
mod triplet;

pub use finder::find_zero_triplets;
pub use triplet::{Triplet, TripletError, Triplets};
