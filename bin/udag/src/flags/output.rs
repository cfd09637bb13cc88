//! Output flags.

use crate::error::{UdagError, UdagResult};
use clap::Parser;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Arguments selecting where output goes.
#[derive(Parser, Default, Clone, Debug)]
pub struct OutputArgs {
    /// Output file. Printed to stdout when omitted.
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Writes `contents` to the output.
    ///
    /// Files are written to a temporary sibling first and moved into place once complete,
    /// so a failed write never leaves a partial output file behind.
    pub fn write(&self, contents: &str) -> UdagResult<()> {
        let Some(path) = &self.output else {
            let mut stdout = std::io::stdout().lock();
            return stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| UdagError::UnwritableOutput { path: PathBuf::from("-"), source });
        };

        let unwritable = |source| UdagError::UnwritableOutput { path: path.clone(), source };
        let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(unwritable)?;
        file.write_all(contents.as_bytes()).map_err(unwritable)?;
        file.persist(path).map_err(|err| unwritable(err.error))?;

        info!(target: "udag", path = %path.display(), bytes = contents.len(), "Wrote output");
        Ok(())
    }
}
