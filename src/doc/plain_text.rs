use super::PoemDocument;

/// Renders the document as plain text, the form used by text export and
/// clipboard copy. Title and signature lines appear only when their fields
/// are non-empty; the body is carried verbatim.
pub fn plain_text(doc: &PoemDocument) -> String {
    let mut out = String::new();
    if !doc.title.is_empty() {
        out.push_str(&doc.title);
        out.push_str("\n\n");
    }
    out.push_str(&doc.text);
    if !doc.author.is_empty() {
        out.push_str("\n\n~ ");
        out.push_str(&doc.author);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str, title: &str, author: &str) -> PoemDocument {
        PoemDocument {
            text: text.into(),
            title: title.into(),
            author: author.into(),
            ..PoemDocument::default()
        }
    }

    #[test]
    fn body_and_author_only() {
        assert_eq!(
            plain_text(&doc("Roses are red", "", "Ada")),
            "Roses are red\n\n~ Ada"
        );
    }

    #[test]
    fn full_document() {
        assert_eq!(
            plain_text(&doc("Roses are red\nViolets are blue", "Colors", "Ada")),
            "Colors\n\nRoses are red\nViolets are blue\n\n~ Ada"
        );
    }

    #[test]
    fn bare_body() {
        assert_eq!(plain_text(&doc("Roses are red", "", "")), "Roses are red");
    }

    #[test]
    fn title_without_author() {
        assert_eq!(
            plain_text(&doc("Roses are red", "Colors", "")),
            "Colors\n\nRoses are red"
        );
    }
}
