use serde_json::json;

use super::*;

#[test]
fn test_request_ids_unique() {
    let a = Request::new(Operation::List);
    let b = Request::new(Operation::List);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_request_with_timeout() {
    let request = Request::new(Operation::Get { id: 1 }).with_timeout(5000);
    assert_eq!(request.timeout_ms, Some(5000));
}

#[test]
fn test_operation_wire_tags() {
    let get = serde_json::to_value(Operation::Get { id: 123 }).unwrap();
    assert_eq!(get, json!({"op": "get", "id": 123}));

    let list = serde_json::to_value(Operation::List).unwrap();
    assert_eq!(list, json!({"op": "list"}));

    let insert = serde_json::to_value(Operation::Insert(Book::new(7, "Dune", "Herbert"))).unwrap();
    assert_eq!(
        insert,
        json!({"op": "insert", "id": 7, "title": "Dune", "author": "Herbert"})
    );

    let delete = serde_json::to_value(Operation::Delete { id: 123 }).unwrap();
    assert_eq!(delete, json!({"op": "delete", "id": 123}));

    let watch = serde_json::to_value(Operation::Watch).unwrap();
    assert_eq!(watch, json!({"op": "watch"}));
}

#[test]
fn test_operation_names() {
    assert_eq!(Operation::Get { id: 1 }.name(), "get");
    assert_eq!(Operation::List.name(), "list");
    assert_eq!(Operation::Insert(Book::new(1, "t", "a")).name(), "insert");
    assert_eq!(Operation::Delete { id: 1 }.name(), "delete");
    assert_eq!(Operation::Watch.name(), "watch");
}

#[test]
fn test_only_watch_is_streaming() {
    assert!(Operation::Watch.is_streaming());
    assert!(!Operation::List.is_streaming());
    assert!(!Operation::Get { id: 1 }.is_streaming());
}

#[test]
fn test_response_success_into_result() {
    let response = Response::success(42, json!({"id": 123}));
    assert!(response.success);
    assert_eq!(response.into_result().unwrap(), json!({"id": 123}));
}

#[test]
fn test_response_error_into_result() {
    let response = Response::error(42, "Not found");
    assert!(!response.success);
    let err = response.into_result().unwrap_err();
    assert!(matches!(err, BookshelfError::Remote(ref msg) if msg == "Not found"));
}

#[test]
fn test_response_success_without_result_is_invalid() {
    let response = Response {
        id: 42,
        result: None,
        error: None,
        success: true,
    };
    let err = response.into_result().unwrap_err();
    assert!(matches!(err, BookshelfError::InvalidResponse(_)));
}

#[test]
fn test_stream_event_wire_tags() {
    let record = serde_json::to_value(StreamEvent::Record {
        book: Book::new(123, "A Tale of Two Cities", "Charles Dickens"),
    })
    .unwrap();
    assert_eq!(record["event"], "record");
    assert_eq!(record["book"]["id"], 123);

    let end = serde_json::to_value(StreamEvent::End).unwrap();
    assert_eq!(end, json!({"event": "end"}));

    let error = serde_json::to_value(StreamEvent::Error {
        message: "boom".to_string(),
    })
    .unwrap();
    assert_eq!(error, json!({"event": "error", "message": "boom"}));
}

#[test]
fn test_book_list_len() {
    let list = BookList {
        books: vec![Book::new(1, "t", "a"), Book::new(2, "t2", "a2")],
    };
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
    assert!(BookList::default().is_empty());
}

#[test]
fn test_empty_serializes_to_empty_object() {
    assert_eq!(serde_json::to_value(Empty {}).unwrap(), json!({}));
}
