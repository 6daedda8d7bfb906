//! PDF serialization of a paginated document.
//!
//! The paginator decides where every chunk goes; this module only draws the
//! computed positions with printpdf's builtin Helvetica faces and collects
//! the bytes. Title in Helvetica-Bold on page 1, body in Helvetica.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use crate::errors::AppError;
use crate::export::paginator::PaginatedDocument;

const LAYER_NAME: &str = "Layer 1";

/// Serializes the document to PDF bytes ready for download.
pub fn render_pdf(document: &PaginatedDocument) -> Result<Vec<u8>, AppError> {
    let geometry = document.geometry();
    let width = Mm::from(Pt(geometry.width_pt));
    let height = Mm::from(Pt(geometry.height_pt));

    let (doc, first_page, first_layer) =
        PdfDocument::new(document.title(), width, height, LAYER_NAME);
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_error)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    for (index, page) in document.pages().iter().enumerate() {
        let layer = if index == 0 {
            let layer = doc.get_page(first_page).get_layer(first_layer);
            layer.use_text(
                document.title(),
                geometry.title_size_pt,
                Mm::from(Pt(geometry.margin_x_pt)),
                Mm::from(Pt(geometry.height_pt - geometry.title_offset_pt)),
                &title_font,
            );
            layer
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for chunk in page.chunks() {
            layer.use_text(
                chunk.text(),
                geometry.body_size_pt,
                Mm::from(Pt(geometry.margin_x_pt)),
                Mm::from(Pt(chunk.y_pt())),
                &body_font,
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

/// Deterministic download filename: lowercased destination, spaces replaced
/// with underscores, fixed suffix.
pub fn export_filename(destination: &str) -> String {
    format!(
        "{}_trip_plan.pdf",
        destination.trim().to_lowercase().replace(' ', "_")
    )
}

/// Document title: title-cased destination plus a fixed suffix.
pub fn itinerary_title(destination: &str) -> String {
    format!("{} Trip Itinerary", title_case(destination.trim()))
}

/// Uppercases the first letter of each whitespace-separated word and
/// lowercases the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pdf_error(e: printpdf::Error) -> AppError {
    AppError::Export(format!("PDF serialization failed: {e}"))
}
