use dogapi::Endpoint;
use url::Url;

fn base_url() -> Url {
    Url::parse("https://dog.ceo/api/").unwrap()
}

#[test]
fn all_breeds_paths() {
    let cases = [
        (Endpoint::RandomImage, "/api/breeds/image/random"),
        (
            Endpoint::multiple_random_images(5),
            "/api/breeds/image/random/5",
        ),
        (Endpoint::BreedsList, "/api/breeds/list/all"),
    ];
    for (endpoint, expected) in cases {
        assert_eq!(endpoint.to_url(&base_url()).unwrap().path(), expected);
    }
}

#[test]
fn breed_paths() {
    let cases = [
        (
            Endpoint::random_image_by_breed("hound"),
            "/api/breed/hound/images/random",
        ),
        (
            Endpoint::multiple_random_images_by_breed("hound", 4),
            "/api/breed/hound/images/random/4",
        ),
        (Endpoint::images_by_breed("hound"), "/api/breed/hound/images"),
        (Endpoint::sub_breeds("hound"), "/api/breed/hound/list"),
    ];
    for (endpoint, expected) in cases {
        assert_eq!(endpoint.to_url(&base_url()).unwrap().path(), expected);
    }
}

#[test]
fn sub_breed_paths() {
    let cases = [
        (
            Endpoint::random_image_by_sub_breed("hound", "afghan"),
            "/api/breed/hound/afghan/images/random",
        ),
        (
            Endpoint::multiple_random_images_by_sub_breed("hound", "afghan", 60),
            "/api/breed/hound/afghan/images/random/60",
        ),
        (
            Endpoint::images_by_sub_breed("hound", "afghan"),
            "/api/breed/hound/afghan/images",
        ),
    ];
    for (endpoint, expected) in cases {
        assert_eq!(endpoint.to_url(&base_url()).unwrap().path(), expected);
    }
}

#[test]
fn whitespace_around_names_gives_same_path() {
    let padded = Endpoint::multiple_random_images_by_sub_breed(" hound\t", "\nafghan  ", 2);
    let trimmed = Endpoint::multiple_random_images_by_sub_breed("hound", "afghan", 2);
    assert_eq!(
        padded.to_url(&base_url()).unwrap(),
        trimmed.to_url(&base_url()).unwrap()
    );
    assert_eq!(padded.to_string(), trimmed.to_string());
}

#[test]
fn base_url_without_trailing_slash() {
    let base = Url::parse("https://dog.ceo/api").unwrap();
    let url = Endpoint::RandomImage.to_url(&base).unwrap();
    assert_eq!(url.as_str(), "https://dog.ceo/api/breeds/image/random");
}

#[test]
fn host_only_base_url() {
    let base = Url::parse("http://127.0.0.1:8080").unwrap();
    let url = Endpoint::sub_breeds("pug").to_url(&base).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/breed/pug/list");
}

#[test]
fn reserved_characters_stay_inside_one_segment() {
    let url = Endpoint::images_by_breed("bull/dog?x=1")
        .to_url(&base_url())
        .unwrap();
    assert_eq!(url.path(), "/api/breed/bull%2Fdog%3Fx=1/images");
    assert!(url.query().is_none());
}

#[test]
fn inner_spaces_are_encoded() {
    let url = Endpoint::random_image_by_breed(" german shepherd ")
        .to_url(&base_url())
        .unwrap();
    assert_eq!(url.path(), "/api/breed/german%20shepherd/images/random");
}

#[test]
fn dot_segments_are_rejected() {
    let cases = [
        Endpoint::images_by_breed(".."),
        Endpoint::images_by_breed(" . "),
        Endpoint::random_image_by_sub_breed("hound", ".."),
        Endpoint::multiple_random_images_by_sub_breed("..", "afghan", 2),
        Endpoint::sub_breeds("."),
    ];
    for endpoint in cases {
        let result = endpoint.to_url(&base_url());
        assert!(
            matches!(result, Err(dogapi::Error::InvalidPath(_))),
            "{endpoint}: {result:?}"
        );
    }
}

#[test]
fn segment_count_is_kept() {
    let cases = [
        (Endpoint::images_by_breed("..."), 4),
        (Endpoint::random_image_by_sub_breed("hound", ".x"), 6),
        (Endpoint::images_by_sub_breed("a/b", "c"), 5),
    ];
    for (endpoint, expected) in cases {
        let url = endpoint.to_url(&base_url()).unwrap();
        assert_eq!(
            url.path_segments().unwrap().count(),
            expected,
            "{}",
            url.path()
        );
    }
}
