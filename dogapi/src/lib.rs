//! Blocking client for the [dog.ceo](https://dog.ceo/dog-api/) image API.
//!
//! Use [`Client`] to reuse one connection pool across calls, or the free
//! functions below for one-off requests against the production API.

mod client;
mod endpoint;
mod errors;
pub mod types;
pub use self::client::{decode_response, Client, DEFAULT_BASE_URL};
pub use self::endpoint::Endpoint;
pub use self::errors::{ApiError, Error};

use self::types::{BreedList, ImageUrl};

/// Single random image from all dogs collection.
pub fn random_image() -> Result<ImageUrl, Error> {
    Client::new()?.random_image()
}

/// Multiple random images from all dogs collection. At most 50 are returned.
pub fn multiple_random_images(count: u32) -> Result<Vec<ImageUrl>, Error> {
    Client::new()?.multiple_random_images(count)
}

/// Random image from a breed collection.
pub fn random_image_by_breed(breed: &str) -> Result<ImageUrl, Error> {
    Client::new()?.random_image_by_breed(breed)
}

/// Multiple random images from a breed collection.
pub fn multiple_random_images_by_breed(breed: &str, count: u32) -> Result<Vec<ImageUrl>, Error> {
    Client::new()?.multiple_random_images_by_breed(breed, count)
}

/// All images from a breed collection.
pub fn images_by_breed(breed: &str) -> Result<Vec<ImageUrl>, Error> {
    Client::new()?.images_by_breed(breed)
}

/// Random image from a sub-breed collection.
pub fn random_image_by_sub_breed(breed: &str, sub_breed: &str) -> Result<ImageUrl, Error> {
    Client::new()?.random_image_by_sub_breed(breed, sub_breed)
}

/// Multiple random images from a sub-breed collection.
pub fn multiple_random_images_by_sub_breed(
    breed: &str,
    sub_breed: &str,
    count: u32,
) -> Result<Vec<ImageUrl>, Error> {
    Client::new()?.multiple_random_images_by_sub_breed(breed, sub_breed, count)
}

/// All images from a sub-breed collection.
pub fn images_by_sub_breed(breed: &str, sub_breed: &str) -> Result<Vec<ImageUrl>, Error> {
    Client::new()?.images_by_sub_breed(breed, sub_breed)
}

/// Every breed with its sub-breeds.
pub fn breeds_list() -> Result<BreedList, Error> {
    Client::new()?.breeds_list()
}

/// Sub-breeds of a breed.
pub fn sub_breeds(breed: &str) -> Result<Vec<String>, Error> {
    Client::new()?.sub_breeds(breed)
}
