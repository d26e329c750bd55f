use dogapi::types::{BreedList, Envelope};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_breeds_list() {
    let json = load_fixture("breeds_list.json");
    let env: Envelope = serde_json::from_str(&json).unwrap();
    assert!(env.is_success());
    assert_eq!(env.code, None);

    let breeds: BreedList = serde_json::from_value(env.message.unwrap()).unwrap();
    assert_eq!(breeds["hound"].len(), 7);
    assert!(breeds["affenpinscher"].is_empty());
    assert_eq!(
        breeds.keys().next().map(String::as_str),
        Some("affenpinscher")
    );
}

#[test]
fn deserialize_image_list() {
    let json = load_fixture("hound_images.json");
    let env: Envelope = serde_json::from_str(&json).unwrap();
    let images: Vec<String> = serde_json::from_value(env.message.unwrap()).unwrap();
    assert_eq!(images.len(), 3);
    assert!(images.iter().all(|url| url.starts_with("https://images.dog.ceo/")));
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("breed_not_found.json");
    let env: Envelope = serde_json::from_str(&json).unwrap();
    assert!(!env.is_success());
    assert_eq!(env.code, Some(404));
    assert_eq!(
        env.error_message(),
        "Breed not found (master breed does not exist)"
    );
}
