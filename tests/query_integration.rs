//! Integration tests for the filter builder.
//!
//! These tests verify expression assembly end to end:
//! - Operator tokens for every fluent method
//! - Grouping and connectives
//! - Value literal formatting
//! - Raw and encoded terminal output

use pretty_assertions::assert_eq;
use sieve::prelude::*;
use sieve::query::{Connective, Group};

fn builder() -> FilterBuilder {
    FilterBuilder::new()
}

// ============== Count operators ==============

#[test]
fn test_count_greater_than() {
    assert_eq!(builder().count_greater_than("Property", 5).build(), "Property #> 5");
    assert_eq!(builder().count_greater_than("ItemCount", 10).build(), "ItemCount #> 10");
}

#[test]
fn test_count_less_than() {
    assert_eq!(builder().count_less_than("Property", 3).build(), "Property #< 3");
}

#[test]
fn test_count_greater_than_or_equal() {
    assert_eq!(builder().count_greater_than_or_equal("comments", 5).build(), "comments #>= 5");
}

#[test]
fn test_count_less_than_or_equal() {
    assert_eq!(builder().count_less_than_or_equal("ItemCount", 5).build(), "ItemCount #<= 5");
}

#[test]
fn test_count_equality() {
    assert_eq!(builder().count_equals("ItemCount", 8).build(), "ItemCount #== 8");
    assert_eq!(builder().count_not_equals("ItemCount", 3).build(), "ItemCount #!= 3");
}

#[test]
fn test_case_count_aliases() {
    assert_eq!(builder().equals_case_count("ItemCount", 8).build(), "ItemCount #== 8");
    assert_eq!(builder().not_equals_case_count("ItemCount", 3).build(), "ItemCount #!= 3");
    assert_eq!(builder().greater_than_case_count("likes", 10).build(), "likes #> 10");
    assert_eq!(builder().less_than_case_count("views", 100).build(), "views #< 100");
    assert_eq!(
        builder().greater_than_or_equal_case_count("followers", 1000).build(),
        "followers #>= 1000"
    );
    assert_eq!(builder().less_than_or_equal_case_count("age", 30).build(), "age #<= 30");
}

#[test]
fn test_count_connectives() {
    let and = builder()
        .count_greater_than("ItemCount", 5)
        .and()
        .count_less_than_or_equal("ItemCount", 10)
        .build();
    assert_eq!(and, "ItemCount #> 5 && ItemCount #<= 10");

    let or = builder()
        .count_greater_than("ItemCount", 5)
        .or()
        .count_less_than_or_equal("ItemCount", 10)
        .build();
    assert_eq!(or, "ItemCount #> 5 || ItemCount #<= 10");
}

// ============== Grouped expressions ==============

#[test]
fn test_starts_with_and_group() {
    let query = builder()
        .starts_with("City", "New")
        .and()
        .open_paren()
        .greater_than("Population", 1_000_000)
        .or()
        .equals("Country", "USA")
        .close_paren()
        .build();

    assert_eq!(query, r#"City _= "New" && (Population > 1000000 || Country == "USA" )"#);
}

#[test]
fn test_in_and_group() {
    let query = builder()
        .in_("Price", [20, 30, 40])
        .and()
        .open_paren()
        .equals("Category", "Electronics")
        .or()
        .equals("Category", "Appliances")
        .close_paren()
        .build();

    assert_eq!(
        query,
        r#"Price ^^ [20, 30, 40] && (Category == "Electronics" || Category == "Appliances" )"#
    );
}

#[test]
fn test_contains_and_group() {
    let query = builder()
        .contains("Name", "book")
        .and()
        .open_paren()
        .starts_with("Author", "A")
        .or()
        .greater_than_or_equal("PublishedYear", 2020)
        .close_paren()
        .build();

    assert_eq!(query, r#"Name @= "book" && (Author _= "A" || PublishedYear >= 2020 )"#);
}

#[test]
fn test_has_and_group() {
    let query = builder()
        .has("Status", "completed")
        .and()
        .open_paren()
        .not_equals("Priority", 1)
        .or()
        .less_than_or_equal("DueDate", "2023-12-31")
        .close_paren()
        .build();

    assert_eq!(
        query,
        r#"Status ^$ "completed" && (Priority != 1 || DueDate <= "2023-12-31" )"#
    );
}

#[test]
fn test_ends_with_and_group() {
    let query = builder()
        .ends_with("City", "burg")
        .and()
        .open_paren()
        .less_than("Population", 500_000)
        .or()
        .equals("Country", "Germany")
        .close_paren()
        .build();

    assert_eq!(query, r#"City _-= "burg" && (Population < 500000 || Country == "Germany" )"#);
}

#[test]
fn test_does_not_contain_with_boolean() {
    let query = builder()
        .does_not_contain("Category", "Toys")
        .and()
        .open_paren()
        .greater_than("Stock", 0)
        .or()
        .equals("Clearance", true)
        .close_paren()
        .build();

    assert_eq!(query, r#"Category !@= "Toys" && (Stock > 0 || Clearance == true )"#);
}

#[test]
fn test_sounds_like_and_group() {
    let query = builder()
        .sounds_like("Title", "javascript")
        .and()
        .open_paren()
        .does_not_start_with("Author", "B")
        .or()
        .greater_than("PublishedYear", 2015)
        .close_paren()
        .build();

    assert_eq!(
        query,
        r#"Title ~~ "javascript" && (Author !_= "B" || PublishedYear > 2015 )"#
    );
}

#[test]
fn test_has_case_insensitive_and_group() {
    let query = builder()
        .has_case_insensitive("Name", "john")
        .and()
        .open_paren()
        .equals("Category", "Books")
        .or()
        .less_than("PublishedYear", 2000)
        .close_paren()
        .build();

    assert_eq!(query, r#"Name ^$* "john" && (Category == "Books" || PublishedYear < 2000 )"#);
}

#[test]
fn test_leading_group() {
    let query = builder()
        .open_paren()
        .equals("FirstName", "John")
        .or()
        .equals("FirstName", "Jane")
        .close_paren()
        .and()
        .greater_than_or_equal("Age", 25)
        .build();

    assert_eq!(query, r#"(FirstName == "John" || FirstName == "Jane" ) && Age >= 25"#);
}

#[test]
fn test_simple_chain() {
    let query = builder().equals("FirstName", "Jane").and().less_than("Age", 10).build();
    assert_eq!(query, r#"FirstName == "Jane" && Age < 10"#);
}

#[test]
fn test_nested_groups_snapshot() {
    let filter = builder()
        .open_paren()
        .open_paren()
        .equals("a", 1)
        .or()
        .equals("b", 2)
        .close_paren()
        .and()
        .contains_case_insensitive("c", "x")
        .close_paren()
        .or()
        .count_equals("d", 0);

    insta::assert_snapshot!(filter.build(), @r#"((a == 1 || b == 2 ) && c @=* "x" ) || d #== 0"#);
}

#[test]
fn test_balanced_parens_preserved() {
    let query = builder()
        .open_paren()
        .open_paren()
        .equals("a", 1)
        .close_paren()
        .or()
        .open_paren()
        .equals("b", 2)
        .close_paren()
        .close_paren()
        .build();

    let parens: String = query.chars().filter(|c| *c == '(' || *c == ')').collect();
    assert_eq!(parens, "(()())");
}

#[test]
fn test_unbalanced_parens_are_emitted_as_is() {
    let query = builder().open_paren().equals("a", 1).build();
    assert_eq!(query, "(a == 1");
}

#[test]
fn test_connective_and_group_entry_points() {
    let query = builder()
        .group(Group::Open)
        .equals("a", 1)
        .connect(Connective::Or)
        .equals("b", 2)
        .group(Group::Close)
        .build();
    assert_eq!(query, "(a == 1 || b == 2 )");
}

// ============== Single operators ==============

#[test]
fn test_does_not_end_with() {
    assert_eq!(
        builder().does_not_end_with("propertyName", "value").build(),
        r#"propertyName !_-= "value""#
    );
}

#[test]
fn test_does_not_end_with_number_is_quoted() {
    assert_eq!(
        builder().does_not_end_with("propertyName", 42).build(),
        r#"propertyName !_-= "42""#
    );
}

#[test]
fn test_special_characters_in_value() {
    assert_eq!(
        builder().does_not_end_with("propertyName", "$pecial*Value").build(),
        r#"propertyName !_-= "$pecial*Value""#
    );
}

#[test]
fn test_does_not_sound_like() {
    assert_eq!(builder().does_not_sound_like("name", "example").build(), r#"name !~ "example""#);
    assert_eq!(builder().does_not_sound_like("age", 42).build(), r#"age !~ "42""#);

    let chained = builder()
        .starts_with("name", "A")
        .and()
        .does_not_sound_like("description", "bad")
        .build();
    assert_eq!(chained, r#"name _= "A" && description !~ "bad""#);
}

#[test]
fn test_does_not_have() {
    assert_eq!(builder().does_not_have("name", "John").build(), r#"name !^$ "John""#);
    assert_eq!(
        builder().does_not_have_case_insensitive("name", "John").build(),
        r#"name !^$* "John""#
    );
}

#[test]
fn test_case_insensitive_operators() {
    assert_eq!(
        builder().equals_case_insensitive("ItemName", "widget").build(),
        r#"ItemName ==* "widget""#
    );
    assert_eq!(builder().equals_case_insensitive("a", 5).build(), "a ==* 5");
    assert_eq!(builder().has_case_insensitive("n", 3).build(), "n ^$* 3");
    assert_eq!(
        builder().not_equals_case_insensitive("name", "John").build(),
        r#"name !=* "John""#
    );
    assert_eq!(
        builder().starts_with_case_insensitive("name", "John").build(),
        r#"name _=* "John""#
    );
    assert_eq!(
        builder().does_not_start_with_case_insensitive("name", "John").build(),
        r#"name !_=* "John""#
    );
    assert_eq!(builder().ends_with_case_insensitive("name", "Doe").build(), r#"name _-=* "Doe""#);
    assert_eq!(
        builder().does_not_end_with_case_insensitive("email", "example.com").build(),
        r#"email !_-=* "example.com""#
    );
    assert_eq!(
        builder().contains_case_insensitive("description", "awesome").build(),
        r#"description @=* "awesome""#
    );
    assert_eq!(
        builder().does_not_contain_case_insensitive("ItemName", "gadget").build(),
        r#"ItemName !@=* "gadget""#
    );
    assert_eq!(
        builder().sounds_like_case_insensitive("Title", "rust").build(),
        r#"Title ~~* "rust""#
    );
    assert_eq!(
        builder().does_not_sound_like_case_insensitive("Title", "rust").build(),
        r#"Title !~* "rust""#
    );
    assert_eq!(
        builder().greater_than_case_insensitive("Code", "B").build(),
        r#"Code >* "B""#
    );
    assert_eq!(builder().less_than_case_insensitive("Code", "y").build(), r#"Code <* "y""#);
    assert_eq!(
        builder().greater_than_or_equal_case_insensitive("Code", "c").build(),
        r#"Code >=* "c""#
    );
    assert_eq!(
        builder().less_than_or_equal_case_insensitive("Code", "x").build(),
        r#"Code <=* "x""#
    );
}

#[test]
fn test_in_case_insensitive() {
    assert_eq!(
        builder().in_case_insensitive("status", ["active", "inactive"]).build(),
        r#"status ^^* ["active", "inactive"]"#
    );
}

#[test]
fn test_in_mixed_list() {
    let values = vec![Scalar::from("a"), Scalar::from(2), Scalar::from(2.5)];
    assert_eq!(builder().in_("Code", values).build(), r#"Code ^^ ["a", 2, 2.5]"#);
}

#[test]
fn test_condition_entry_point() {
    let condition = Condition::new("Price", Comparison::Plain(Operator::LessThan), 9.99);
    assert_eq!(builder().condition(condition).build(), "Price < 9.99");
}

// ============== Terminal output ==============

#[test]
fn test_encoded_query() {
    assert_eq!(builder().equals("a", 1).build_query(), "Filters%3D%20a%20%3D%3D%201");
}

#[test]
fn test_raw_config() {
    let filter = FilterBuilder::with_config(BuilderConfig::raw()).equals("firstname", "John");
    assert_eq!(filter.build_query(), filter.build());
    assert_eq!(filter.build(), r#"firstname == "John""#);
}

#[test]
fn test_build_idempotent() {
    let filter = builder().equals("a", 1).or().equals("b", 2);
    let first = filter.build();
    let second = filter.build();
    assert_eq!(first, second);
    assert_eq!(filter.build_query(), filter.build_query());
}

#[test]
fn test_captured_intermediates_do_not_change_result() {
    let straight = builder().equals("a", 1).and().equals("b", 2).build();

    let step = builder().equals("a", 1);
    let snapshot = step.clone();
    let step = step.and();
    let step = step.equals("b", 2);

    assert_eq!(step.build(), straight);
    assert_eq!(snapshot.build(), "a == 1");
}

#[test]
fn test_try_condition_from_json() {
    let filter = builder()
        .try_condition("Tags", CountOperator::GreaterThan, serde_json::json!(2))
        .unwrap();
    assert_eq!(filter.build(), "Tags #> 2");

    let err = builder()
        .try_condition("Tags", Operator::In, serde_json::json!({"a": 1}))
        .unwrap_err();
    assert!(err.is_type_mismatch());
}
