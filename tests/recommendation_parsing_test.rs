use wayfare_api::services::gemini_service::parse_place_candidates;

#[test]
fn prose_without_an_array_yields_empty() {
    let text = "There are many great places near those coordinates! \
                You could try the botanical gardens, or the food trucks downtown.";
    assert!(parse_place_candidates(text).is_empty());
}

#[test]
fn empty_text_yields_empty() {
    assert!(parse_place_candidates("").is_empty());
}

#[test]
fn embedded_array_parses_all_candidates() {
    let text = r#"Here are 5 places you might enjoy:

```json
[
  {"name": "Barton Springs Pool", "description": "Spring-fed pool", "category": "outdoor", "estimated_distance": 2.1},
  {"name": "Zilker Park", "description": "Large urban park", "category": "outdoor", "estimated_distance": 1.8},
  {"name": "Franklin Barbecue", "description": "Famous brisket", "category": "food", "estimated_distance": 3.4},
  {"name": "Blanton Museum", "description": "Art museum", "category": "culture", "estimated_distance": 4.0},
  {"name": "Mount Bonnell", "description": "Scenic overlook", "category": "outdoor", "estimated_distance": 6.2}
]
```

Enjoy your visit!"#;

    let places = parse_place_candidates(text);
    assert_eq!(places.len(), 5);
    assert_eq!(places[0].name, "Barton Springs Pool");
    assert_eq!(places[0].description.as_deref(), Some("Spring-fed pool"));
    assert_eq!(places[0].category.as_deref(), Some("outdoor"));
    assert_eq!(places[0].estimated_distance, Some(2.1));
    assert_eq!(places[4].name, "Mount Bonnell");
}

#[test]
fn optional_fields_may_be_absent() {
    let text = r#"[{"name": "Town Lake"}]"#;
    let places = parse_place_candidates(text);
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Town Lake");
    assert!(places[0].description.is_none());
    assert!(places[0].category.is_none());
    assert!(places[0].estimated_distance.is_none());
}

#[test]
fn camel_case_distance_is_accepted() {
    let text = r#"[{"name": "Town Lake", "estimatedDistance": 0.5}]"#;
    let places = parse_place_candidates(text);
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].estimated_distance, Some(0.5));
}

#[test]
fn malformed_json_inside_brackets_yields_empty() {
    let text = "[ { name: Barton Springs, distance: close } ]";
    assert!(parse_place_candidates(text).is_empty());
}

#[test]
fn missing_required_name_yields_empty() {
    let text = r#"[{"description": "a place with no name"}]"#;
    assert!(parse_place_candidates(text).is_empty());
}

#[test]
fn array_of_scalars_is_not_treated_as_places() {
    let text = "Coordinates: [1, 2, 3]";
    assert!(parse_place_candidates(text).is_empty());
}
