use lopdf::Document;

/// Plain text of an uploaded resume, or a placeholder naming the file when
/// nothing usable can be read.
pub fn resume_text(filename: &str, bytes: &[u8]) -> String {
    if !filename.to_lowercase().ends_with(".pdf") {
        tracing::debug!("Skipping text extraction for non-PDF upload {filename}");
        return unreadable(filename);
    }

    match pdf_text(bytes) {
        Ok(text) if text.trim().is_empty() => {
            format!("Resume filename: {filename} (Empty or scanned PDF)")
        }
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Extraction error for {filename}: {e}");
            unreadable(filename)
        }
    }
}

pub fn unreadable(filename: &str) -> String {
    format!("Could not extract text. Filename: {filename}")
}

fn pdf_text(bytes: &[u8]) -> Result<String, lopdf::Error> {
    let doc = Document::load_mem(bytes)?;

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => tracing::debug!("Failed to extract text from page {page_num}: {e}"),
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Builds a PDF with one page per entry; `None` is a page with no text.
    fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for line in pages {
            let operations = match line {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn pages_are_read_in_order() {
        let bytes = pdf_with_pages(&[Some("Jane Doe"), Some("Rust Engineer")]);
        let text = resume_text("jane.pdf", &bytes);
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Jane Doe", "Rust Engineer"]);
    }

    #[test]
    fn pdf_without_text_is_flagged_as_scanned() {
        let bytes = pdf_with_pages(&[None]);
        assert_eq!(
            resume_text("blank.pdf", &bytes),
            "Resume filename: blank.pdf (Empty or scanned PDF)"
        );
    }

    #[test]
    fn non_pdf_extension_gets_placeholder() {
        assert_eq!(
            resume_text("resume.docx", b"%PDF-1.5"),
            "Could not extract text. Filename: resume.docx"
        );
    }

    #[test]
    fn corrupt_pdf_gets_placeholder() {
        assert_eq!(
            resume_text("Resume.PDF", b"fake pdf content with react"),
            "Could not extract text. Filename: Resume.PDF"
        );
    }

    #[test]
    fn empty_bytes_get_placeholder() {
        assert_eq!(
            resume_text("resume.pdf", b""),
            "Could not extract text. Filename: resume.pdf"
        );
    }
}
