// PDF Export
// Implements: fixed-geometry pagination of itinerary text and serialization
// of the paginated document to PDF bytes via printpdf's builtin Helvetica.

pub mod paginator;
pub mod pdf;

pub use paginator::{default_geometry, paginate, PageGeometry, PaginatedDocument};
