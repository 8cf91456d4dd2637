use super::*;
use crate::test_utils::*;

#[test]
fn test_create_tag() {
    let pool = setup_test_db();

    let tag = create_tag(&pool, "wisdom").unwrap();

    assert_eq!(tag.get_name(), "wisdom");
    assert!(tag.get_id() > 0);
}

#[test]
fn test_get_tag() {
    let pool = setup_test_db();

    let created_tag = create_tag(&pool, "wisdom").unwrap();
    let retrieved_tag = get_tag(&pool, created_tag.get_id()).unwrap();

    assert_eq!(retrieved_tag, created_tag);
}

#[test]
fn test_tag_error_handling() {
    let pool = setup_test_db();

    // Try to get a non-existent tag
    let result = get_tag(&pool, 999);

    assert!(result.is_err());
    let error = result.unwrap_err().to_string();
    assert!(error.contains("Failed to get tag"));
}

#[test]
fn test_list_tags() {
    let pool = setup_test_db();

    let tag1 = create_tag(&pool, "wisdom").unwrap();
    let tag2 = create_tag(&pool, "humor").unwrap();

    let tags = list_tags(&pool).unwrap();

    // Insertion order, not name order
    assert_eq!(tags, vec![tag1, tag2]);
}

#[test]
fn test_get_tag_by_name_prefers_earliest() {
    let pool = setup_test_db();

    let first = create_tag(&pool, "love").unwrap();
    create_tag(&pool, "love").unwrap();

    assert_eq!(get_tag_by_name(&pool, "love").unwrap(), Some(first));
    assert_eq!(get_tag_by_name(&pool, "Love").unwrap(), None);
}

#[test]
fn test_get_or_create_tag() {
    let pool = setup_test_db();

    let (created, was_created) = get_or_create_tag(&pool, "truth").unwrap();
    assert!(was_created);

    let (existing, was_created) = get_or_create_tag(&pool, "truth").unwrap();
    assert!(!was_created);
    assert_eq!(existing, created);

    assert_eq!(list_tags(&pool).unwrap().len(), 1);
}

#[test]
fn test_has_prefix_ignoring_case() {
    assert!(has_prefix_ignoring_case("Wisdom", "wis"));
    assert!(has_prefix_ignoring_case("wisdom", "WIS"));
    assert!(has_prefix_ignoring_case("Життя", "жит"));
    assert!(has_prefix_ignoring_case("ÉTÉ", "été"));
    assert!(has_prefix_ignoring_case("any", ""));
    assert!(!has_prefix_ignoring_case("wit", "w_"));
    assert!(!has_prefix_ignoring_case("wit", "%"));
}

#[test]
fn test_list_tags_with_prefix() {
    let pool = setup_test_db();

    let wit = create_tag(&pool, "wit").unwrap();
    let wisdom = create_tag(&pool, "Wisdom").unwrap();
    create_tag(&pool, "life").unwrap();
    create_tag(&pool, "w_t").unwrap();

    let tags = list_tags_with_prefix(&pool, "wi").unwrap();
    assert_eq!(tags, vec![wit, wisdom]);

    // Underscore is literal, so "wit" does not match "w_"
    let literal = list_tags_with_prefix(&pool, "w_").unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].get_name(), "w_t");

    assert!(list_tags_with_prefix(&pool, "%").unwrap().is_empty());
}

#[test]
fn test_list_tags_with_prefix_folds_non_ascii_case() {
    let pool = setup_test_db();

    let life = create_tag(&pool, "Життя").unwrap();
    let love = create_tag(&pool, "життєлюбство").unwrap();
    create_tag(&pool, "wit").unwrap();

    assert_eq!(list_tags_with_prefix(&pool, "життя").unwrap(), vec![life.clone()]);
    assert_eq!(list_tags_with_prefix(&pool, "ЖИТТ").unwrap(), vec![life, love]);
}

#[test]
fn test_list_tags_for_quote() {
    let pool = setup_test_db();
    let sample = seed_sample_store(&pool);

    let names: Vec<String> = list_tags_for_quote(&pool, sample.quote_a.get_id())
        .unwrap()
        .into_iter()
        .map(|t| t.get_name())
        .collect();
    assert_eq!(names, vec!["life", "wit"]);

    assert!(list_tags_for_quote(&pool, 999).unwrap().is_empty());
}

#[test]
fn test_list_top_tags_counts() {
    let pool = setup_test_db();
    seed_sample_store(&pool);

    let top = list_top_tags(&pool, 10).unwrap();

    assert_eq!(top.len(), 2);
    assert_eq!((top[0].name.as_str(), top[0].quote_count), ("wit", 2));
    assert_eq!((top[1].name.as_str(), top[1].quote_count), ("life", 1));
}

#[test]
fn test_list_top_tags_includes_unused_tags() {
    let pool = setup_test_db();
    seed_sample_store(&pool);
    create_tag(&pool, "unused").unwrap();

    let top = list_top_tags(&pool, 10).unwrap();

    assert_eq!(top.len(), 3);
    assert_eq!(top[2].name, "unused");
    assert_eq!(top[2].quote_count, 0);
}

#[test]
fn test_list_top_tags_breaks_ties_by_name() {
    let pool = setup_test_db();
    let author = create_test_author(&pool, "Tie Breaker");
    create_test_quote(&pool, &author, "one", &["zeta", "alpha", "mid"]);

    let names: Vec<String> = list_top_tags(&pool, 10)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_list_top_tags_respects_limit() {
    let pool = setup_test_db();
    for i in 0..15 {
        create_tag(&pool, &format!("tag{:02}", i)).unwrap();
    }

    let top = list_top_tags(&pool, 10).unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].name, "tag00");
    assert_eq!(top[9].name, "tag09");
}

#[test]
fn test_tags_survive_quote_author_deletion() {
    let pool = setup_test_db();
    let sample = seed_sample_store(&pool);

    crate::repo::delete_author(&pool, sample.twain.get_id()).unwrap();

    let top = list_top_tags(&pool, 10).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!((top[0].name.as_str(), top[0].quote_count), ("wit", 1));
    assert_eq!((top[1].name.as_str(), top[1].quote_count), ("life", 0));
}
