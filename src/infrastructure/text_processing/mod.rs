mod composite_file_loader;
mod docx_adapter;
mod pdf_adapter;
mod plain_text_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::{DocxAdapter, body_paragraphs};
pub use pdf_adapter::{PdfAdapter, join_pages};
pub use plain_text_adapter::PlainTextAdapter;
