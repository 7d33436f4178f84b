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

//! Writing the enrollment report and the lecturer report.

use crate::io::{semester, students};
use crate::{Error, LecturerCourseMap, StudentDatabase};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use log::info;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Format the number of enrolled students per course into the enrollment report.
///
/// The output format will look like
/// ```text
/// "Algorithms" 3
/// "Databases" 2
/// ```
/// with one line per course, in ascending order of the course names.
pub fn format_enrollment(counts: &BTreeMap<&str, usize>) -> String {
    let mut result = String::new();
    for (course, count) in counts.iter() {
        write!(result, "\"{}\" {}{}", course, count, LINE_ENDING).unwrap();
    }
    result
}

/// Write the enrollment report of `database` to a Writer (e.g. an output file)
pub fn write_enrollment<W: std::io::Write>(
    mut writer: W,
    database: &StudentDatabase,
) -> std::io::Result<()> {
    let counts = crate::query::enrollment_counts(database);
    writer.write_all(format_enrollment(&counts).as_bytes())
}

/// Read the student database at `input_path` and write its enrollment report to `output_path`.
///
/// The output file is created or overwritten. An empty database results in an empty output file.
pub fn enrollment_numbers<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<(), Error> {
    let output_path = output_path.as_ref();
    let database = students::load(input_path)?;

    let mut buffer = Vec::new();
    write_enrollment(&mut buffer, &database).map_err(|err| Error::writing(output_path, err))?;
    std::fs::write(output_path, buffer).map_err(|err| Error::writing(output_path, err))?;
    info!("Wrote enrollment report to '{}'", output_path.display());
    Ok(())
}

/// Write the lecturer to courses mapping as a single JSON object to a Writer (e.g. an output file)
///
/// Failures of the writer are returned as I/O category `serde_json::Error`s, which convert back into the original
/// `std::io::Error`.
pub fn write_lecturers<W: std::io::Write>(
    writer: W,
    lecturers: &LecturerCourseMap,
) -> serde_json::Result<()> {
    serde_json::to_writer(writer, lecturers)
}

/// Merge all semester files in `json_directory_path` and write the resulting lecturer report to `output_path`.
///
/// The output file is created or overwritten. It is only touched after all semester files have been read
/// successfully.
pub fn courses_for_lecturers<P: AsRef<Path>, Q: AsRef<Path>>(
    json_directory_path: P,
    output_path: Q,
) -> Result<(), Error> {
    let output_path = output_path.as_ref();
    let lecturers = semester::scan_directory(json_directory_path)?;

    let file = std::fs::File::create(output_path).map_err(|err| Error::writing(output_path, err))?;
    let mut writer = std::io::BufWriter::new(file);
    write_lecturers(&mut writer, &lecturers).map_err(|err| Error::writing(output_path, err.into()))?;
    writer.flush().map_err(|err| Error::writing(output_path, err))?;
    info!(
        "Wrote courses of {} lecturers to '{}'",
        lecturers.len(),
        output_path.display()
    );
    Ok(())
}
