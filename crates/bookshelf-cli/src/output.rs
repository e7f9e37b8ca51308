//! Response rendering.
//!
//! Every successful response is rendered as indented JSON on stdout,
//! human-readable and field-labeled. No machine-consumption contract
//! beyond readability; key ordering is whatever serialization produces.

use anyhow::Result;
use serde::Serialize;

/// Renders a response value as indented JSON (2-space indent).
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Renders a response value and writes it to stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_common::protocol::{Book, BookList, Empty};

    #[test]
    fn test_render_labels_every_field() {
        let book = Book::new(7, "Dune", "Herbert");
        let rendered = render(&book).unwrap();

        assert!(rendered.contains("\"id\": 7"));
        assert!(rendered.contains("\"title\": \"Dune\""));
        assert!(rendered.contains("\"author\": \"Herbert\""));
    }

    #[test]
    fn test_render_is_indented() {
        let list = BookList {
            books: vec![Book::new(1, "t", "a")],
        };
        let rendered = render(&list).unwrap();
        assert!(rendered.contains("\n  \"books\""));
    }

    #[test]
    fn test_render_empty_ack() {
        assert_eq!(render(&Empty {}).unwrap(), "{}");
    }
}
