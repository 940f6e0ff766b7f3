mod body;
pub use body::*;
mod world;
pub use world::*;
mod interaction;
pub use interaction::*;
mod physics_utils;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}
