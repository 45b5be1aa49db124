use rehome_lib::catalog::{Catalog, CatalogError};
use rehome_lib::fixtures::{sample_catalog, sample_dogs};
use rehome_lib::model::Gender;

#[test]
fn test_sample_catalog_loads_every_fixture() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), sample_dogs().len());
    assert!(!catalog.is_empty());
}

#[test]
fn test_all_preserves_seed_order() {
    let dogs = sample_dogs();
    let catalog = Catalog::new(dogs.clone()).unwrap();
    let names: Vec<&str> = catalog.all().iter().map(|d| d.name.as_str()).collect();
    let expected: Vec<&str> = dogs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_get_by_id() {
    let catalog = sample_catalog();
    let spike = catalog.get(0).unwrap();
    assert_eq!(spike.name, "Spike");
    assert_eq!(spike.gender, Gender::Male);
}

#[test]
fn test_get_unknown_id() {
    let catalog = sample_catalog();
    assert!(catalog.get(9999).is_none());
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let mut dogs = sample_dogs();
    if let Some(last) = dogs.last_mut() {
        last.id = 0;
    }
    let err = Catalog::new(dogs).unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId(0));
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.get(0).is_none());
    assert!(catalog.all().is_empty());
}

#[test]
fn test_every_fixture_has_a_story_and_an_owner() {
    for dog in sample_catalog().all() {
        assert!(!dog.about.is_empty(), "{} has no story", dog.name);
        assert!(!dog.owner.name.is_empty(), "{} has no owner", dog.name);
    }
}
