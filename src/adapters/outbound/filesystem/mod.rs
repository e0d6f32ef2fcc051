/// Filesystem adapters for reading restore output and writing reports
mod assets_file;
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, ASSETS_FILE_NAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
