mod envelope;
pub use self::envelope::Envelope;

mod breed;
pub use self::breed::{BreedList, ImageUrl};
