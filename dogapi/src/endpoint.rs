//! Endpoint descriptors: one variant per API operation and the URL path it maps to.

use std::fmt;

use url::Url;

use crate::Error;

/// A relative API endpoint with its interpolated breed, sub-breed, and count segments.
///
/// Breed and sub-breed names are trimmed of surrounding whitespace when the
/// path is rendered. Apart from rejecting `.` and `..` in [`Endpoint::to_url`],
/// nothing else is validated: a misspelled breed or a zero count is sent
/// as-is and reported back by the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `breeds/image/random`
    RandomImage,
    /// `breeds/image/random/{count}`
    MultipleRandomImages { count: u32 },
    /// `breed/{breed}/images/random`
    RandomImageByBreed { breed: String },
    /// `breed/{breed}/images/random/{count}`
    MultipleRandomImagesByBreed { breed: String, count: u32 },
    /// `breed/{breed}/images`
    ImagesByBreed { breed: String },
    /// `breed/{breed}/{sub_breed}/images/random`
    RandomImageBySubBreed { breed: String, sub_breed: String },
    /// `breed/{breed}/{sub_breed}/images/random/{count}`
    MultipleRandomImagesBySubBreed {
        breed: String,
        sub_breed: String,
        count: u32,
    },
    /// `breed/{breed}/{sub_breed}/images`
    ImagesBySubBreed { breed: String, sub_breed: String },
    /// `breeds/list/all`
    BreedsList,
    /// `breed/{breed}/list`
    SubBreeds { breed: String },
}

impl Endpoint {
    pub fn multiple_random_images(count: u32) -> Self {
        Endpoint::MultipleRandomImages { count }
    }

    pub fn random_image_by_breed(breed: &str) -> Self {
        Endpoint::RandomImageByBreed {
            breed: breed.to_string(),
        }
    }

    pub fn multiple_random_images_by_breed(breed: &str, count: u32) -> Self {
        Endpoint::MultipleRandomImagesByBreed {
            breed: breed.to_string(),
            count,
        }
    }

    pub fn images_by_breed(breed: &str) -> Self {
        Endpoint::ImagesByBreed {
            breed: breed.to_string(),
        }
    }

    pub fn random_image_by_sub_breed(breed: &str, sub_breed: &str) -> Self {
        Endpoint::RandomImageBySubBreed {
            breed: breed.to_string(),
            sub_breed: sub_breed.to_string(),
        }
    }

    pub fn multiple_random_images_by_sub_breed(breed: &str, sub_breed: &str, count: u32) -> Self {
        Endpoint::MultipleRandomImagesBySubBreed {
            breed: breed.to_string(),
            sub_breed: sub_breed.to_string(),
            count,
        }
    }

    pub fn images_by_sub_breed(breed: &str, sub_breed: &str) -> Self {
        Endpoint::ImagesBySubBreed {
            breed: breed.to_string(),
            sub_breed: sub_breed.to_string(),
        }
    }

    pub fn sub_breeds(breed: &str) -> Self {
        Endpoint::SubBreeds {
            breed: breed.to_string(),
        }
    }

    /// Returns the unencoded path segments, with breed names trimmed.
    pub fn segments(&self) -> Vec<String> {
        let num = |n: &u32| n.to_string();
        let trimmed = |s: &String| s.trim().to_string();
        match self {
            Endpoint::RandomImage => vec!["breeds".into(), "image".into(), "random".into()],
            Endpoint::MultipleRandomImages { count } => vec![
                "breeds".into(),
                "image".into(),
                "random".into(),
                num(count),
            ],
            Endpoint::RandomImageByBreed { breed } => vec![
                "breed".into(),
                trimmed(breed),
                "images".into(),
                "random".into(),
            ],
            Endpoint::MultipleRandomImagesByBreed { breed, count } => vec![
                "breed".into(),
                trimmed(breed),
                "images".into(),
                "random".into(),
                num(count),
            ],
            Endpoint::ImagesByBreed { breed } => {
                vec!["breed".into(), trimmed(breed), "images".into()]
            }
            Endpoint::RandomImageBySubBreed { breed, sub_breed } => vec![
                "breed".into(),
                trimmed(breed),
                trimmed(sub_breed),
                "images".into(),
                "random".into(),
            ],
            Endpoint::MultipleRandomImagesBySubBreed {
                breed,
                sub_breed,
                count,
            } => vec![
                "breed".into(),
                trimmed(breed),
                trimmed(sub_breed),
                "images".into(),
                "random".into(),
                num(count),
            ],
            Endpoint::ImagesBySubBreed { breed, sub_breed } => vec![
                "breed".into(),
                trimmed(breed),
                trimmed(sub_breed),
                "images".into(),
            ],
            Endpoint::BreedsList => vec!["breeds".into(), "list".into(), "all".into()],
            Endpoint::SubBreeds { breed } => vec!["breed".into(), trimmed(breed), "list".into()],
        }
    }

    /// Appends this endpoint to `base`, percent-encoding each segment.
    ///
    /// A trailing slash on the base path is ignored, so both
    /// `https://dog.ceo/api` and `https://dog.ceo/api/` give the same result.
    ///
    /// A breed or sub-breed of `.` or `..` is rejected: URL parsing collapses
    /// dot segments (encoded or not), which would turn the request into a
    /// different endpoint.
    pub fn to_url(&self, base: &Url) -> Result<Url, Error> {
        let segments = self.segments();
        if let Some(dot) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            tracing::error!("Dot segment {:?} in endpoint {}", dot, self);
            return Err(Error::InvalidPath(format!(
                "{:?} is not a valid path segment in {}",
                dot, self
            )));
        }

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", base);
                Error::InvalidBaseUrl(base.to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_relative_path() {
        assert_eq!(
            Endpoint::multiple_random_images_by_sub_breed("hound", "afghan", 3).to_string(),
            "breed/hound/afghan/images/random/3"
        );
        assert_eq!(Endpoint::BreedsList.to_string(), "breeds/list/all");
    }

    #[test]
    fn to_url_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:dogs@example.com").unwrap();
        let result = Endpoint::RandomImage.to_url(&base);
        assert!(matches!(result, Err(Error::InvalidBaseUrl(_))));
    }
}
