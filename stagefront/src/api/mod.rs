pub mod assets;
pub mod dates;
pub mod index;
pub mod locations;
pub mod relation;
pub mod utils;
