pub mod course_record;
pub mod request;
pub mod sheet;
pub mod spreadsheet;

pub use course_record::{CourseForm, CourseRecord};
pub use request::{GenerationRequest, GenerationRequestBuilder};
pub use sheet::{Sheet, SheetKind};
pub use spreadsheet::SpreadsheetRow;
