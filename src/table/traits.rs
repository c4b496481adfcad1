mod reader;
pub use reader::TableReader;

mod writer;
pub use writer::TableWriter;
