// Copyright 2020 by Michael Thies <mail@mhthies.de>
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with
// the License. You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

//! Error type of all path based operations of this crate.

use std::path::{Path, PathBuf};

/// An error while reading an input file or writing a report
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input file or directory does not exist
    #[error("'{}' does not exist", .path.display())]
    NotFound { path: PathBuf },
    /// The input file is no valid JSON or lacks an expected entry
    #[error("Could not parse '{}': {message}", .path.display())]
    Parse {
        path: PathBuf,
        /// Human readable description of the offending entry
        message: String,
    },
    /// Any other failure while reading or writing a file
    #[error("Could not access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Classify an error encountered while reading the input `path`
    pub(crate) fn reading(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_owned(),
            }
        } else {
            Error::Io {
                path: path.to_owned(),
                source,
            }
        }
    }

    /// Wrap an error encountered while writing the output `path`. A missing parent directory is no `NotFound`
    /// error, since that variant is reserved for inputs.
    pub(crate) fn writing(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: String) -> Self {
        Error::Parse {
            path: path.to_owned(),
            message,
        }
    }

    /// Process exit code to report this error with
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Error::NotFound { .. } => exitcode::NOINPUT,
            Error::Parse { .. } => exitcode::DATAERR,
            Error::Io { .. } => exitcode::IOERR,
        }
    }
}
