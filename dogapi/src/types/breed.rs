use std::collections::BTreeMap;

/// A single image URL, e.g. `https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg`.
pub type ImageUrl = String;

/// Every breed mapped to its sub-breeds. Breeds without sub-breeds map to an empty list.
pub type BreedList = BTreeMap<String, Vec<String>>;
