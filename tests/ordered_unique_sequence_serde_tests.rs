#![cfg(feature = "serde")]
//! Serialization tests for OrderedUniqueSequence.

use ordseq::comparator::ReverseOrder;
use ordseq::sequence::OrderedUniqueSequence;
use rstest::rstest;

#[rstest]
fn test_serialize_empty() {
    let sequence: OrderedUniqueSequence<i32> = OrderedUniqueSequence::new();
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "[]");
}

#[rstest]
fn test_serialize_is_ascending() {
    let sequence = OrderedUniqueSequence::from_vec(vec![3, 1, 2]);
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_serialize_follows_comparator() {
    let sequence = OrderedUniqueSequence::from_vec_with(vec![1, 3, 2], ReverseOrder);
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, "[3,2,1]");
}

#[rstest]
fn test_deserialize_normalizes_input() {
    let sequence: OrderedUniqueSequence<i32> = serde_json::from_str("[5,1,5,3,1]").unwrap();
    assert_eq!(sequence.to_vec(), vec![1, 3, 5]);
}

#[rstest]
fn test_deserialize_with_reverse_order() {
    let sequence: OrderedUniqueSequence<i32, ReverseOrder> =
        serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(sequence.to_vec(), vec![3, 2, 1]);
}

#[rstest]
fn test_roundtrip_strings() {
    let original = OrderedUniqueSequence::from_vec(vec![
        "cherry".to_string(),
        "apple".to_string(),
        "banana".to_string(),
    ]);
    let json = serde_json::to_string(&original).unwrap();
    let restored: OrderedUniqueSequence<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<OrderedUniqueSequence<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}
