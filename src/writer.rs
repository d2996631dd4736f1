use std::{
    fs::{create_dir_all, OpenOptions},
    io::{stdout, BufWriter, ErrorKind, Write},
    path::Path,
};

use crate::error::*;

pub struct OutputWriter {}

impl OutputWriter {
    /// Opens the output sink: stdout when no path is given, the file otherwise.
    ///
    /// Missing parent directories are created. Unless `overwrite` is set, the
    /// file must not exist yet.
    ///
    /// # Errors
    /// * `OutputExists` - If the file exists and `overwrite` is false
    /// * `OutputWriteError` - If the file cannot be created
    pub fn open(path: Option<&Path>, overwrite: bool) -> Result<Box<dyn Write>> {
        match path {
            None => Ok(Box::new(BufWriter::new(stdout()))),
            Some(path) => OutputWriter::open_file(path, overwrite),
        }
    }

    fn open_file(path: &Path, overwrite: bool) -> Result<Box<dyn Write>> {
        let file_name = path.to_string_lossy().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent).map_err(|e| Error::OutputWriteError {
                file: file_name.clone(),
                cause: e.to_string(),
            })?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        match options.open(path) {
            Ok(file) => Ok(Box::new(BufWriter::new(file))),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::OutputExists(file_name)),
            Err(e) => Err(Error::OutputWriteError {
                file: file_name,
                cause: e.to_string(),
            }),
        }
    }

    /// Writes the whole text and flushes the sink
    pub fn write_all(output: &mut dyn Write, text: &str) -> Result<()> {
        output.write_all(text.as_bytes())?;
        output.flush()?;
        Ok(())
    }
}
