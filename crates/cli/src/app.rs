use crate::generate::{write_toc, TocStats};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use toc_config::LoadedConfig;

/// Generate a markdown table of contents from the headings of a document.
///
/// Every heading of level 2 or deeper becomes an ordered list item linking to
/// its anchor. Lines starting with `#` that are not valid headings are
/// reported on stderr.
#[derive(Parser, Debug)]
#[clap(name = "mdtoc", version)]
pub struct Args {
    /// Markdown file to read, stdin is used if omitted or `-`.
    #[clap(index = 1)]
    pub input: Option<PathBuf>,

    /// Enable the logging system.
    #[clap(long)]
    pub log: Option<PathBuf>,

    /// Specify the path of the config file.
    #[clap(long)]
    pub config_file: Option<PathBuf>,
}

impl Args {
    /// Returns the input file, `None` means stdin.
    pub fn input_file(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Opens the input, returning the reader and the source name used in errors.
    fn open_input(&self) -> Result<(Box<dyn BufRead>, String)> {
        match self.input_file() {
            Some(path) => {
                tracing::debug!(?path, "Reading markdown file");
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
                Ok((reader, path.display().to_string()))
            }
            None => {
                tracing::debug!("Reading markdown from stdin");
                let reader: Box<dyn BufRead> = Box::new(std::io::stdin().lock());
                Ok((reader, "stdin".to_string()))
            }
        }
    }

    pub fn run(self) -> Result<()> {
        let LoadedConfig {
            config,
            file_path,
            maybe_error,
        } = toc_config::load_config(self.config_file.clone());

        let _guard = crate::logger::init(self.log.clone(), &config.log)?;

        if let Some(err) = maybe_error {
            tracing::error!(?file_path, "Invalid config file, using the defaults: {err}");
        }

        let stdout = std::io::stdout();
        let stderr = std::io::stderr();

        let (reader, source) = self.open_input()?;
        let stats = write_toc(reader, stdout.lock(), stderr.lock())
            .with_context(|| format!("failed to generate toc for {source}"))?;

        let TocStats {
            lines,
            entries,
            malformed,
        } = stats;
        tracing::debug!(lines, entries, malformed, "Table of contents generated");

        Ok(())
    }
}
