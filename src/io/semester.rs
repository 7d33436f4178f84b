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

//! IO functionality for semester files and the directory scan merging them into a [LecturerCourseMap].
//!
//! A semester file is a JSON object with course ids as keys. Each course entry carries the course's name and the
//! names of its lecturers:
//! ```json
//! {
//!     "c1": {"course_name": "Algorithms", "lecturers": ["Xaver Xylophon"]},
//!     "c2": {"course_name": "Databases", "lecturers": ["Xaver Xylophon", "Yvonne Yak"]}
//! }
//! ```
//! The course id is only used for error messages.

use crate::{CourseLecturerRecord, Error, LecturerCourseMap};
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

/// File name suffix of the semester files to be considered by [scan_directory]
pub const SEMESTER_FILE_SUFFIX: &str = ".json";

/// Read the course entries of one semester file from a Reader (e.g. an open file)
///
/// Returns the (course id, record) pairs in the order of the JSON document.
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if
/// * the data has invalid JSON syntax (the string representation of the serde_json error is returned)
/// * the top level JSON value is not an object
/// * any course entry has no string `course_name` or no `lecturers` list of strings
pub fn read<R: std::io::Read>(reader: R) -> Result<Vec<(String, CourseLecturerRecord)>, String> {
    let data: serde_json::Value = serde_json::from_reader(reader).map_err(|err| err.to_string())?;
    let courses_data = match data {
        serde_json::Value::Object(courses_data) => courses_data,
        _ => return Err("The semester data is not a JSON object.".to_owned()),
    };

    courses_data
        .into_iter()
        .map(|(course_id, course_data)| {
            let record = parse_course_record(&course_id, &course_data)?;
            Ok((course_id, record))
        })
        .collect()
}

/**
 * Extract the course name and lecturers from a course object of a semester file
 *
 * # Arguments
 * - `course_id` -- key of the course entry for error message output
 * - `course_data` -- The course object from the semester file
 */
fn parse_course_record(
    course_id: &str,
    course_data: &serde_json::Value,
) -> Result<CourseLecturerRecord, String> {
    let course_name = course_data
        .get("course_name")
        .and_then(|v| v.as_str())
        .ok_or(format!("No 'course_name' found for course {}", course_id))?;
    let lecturers = course_data
        .get("lecturers")
        .and_then(|v| v.as_array())
        .ok_or(format!("No 'lecturers' list found for course {}", course_id))?
        .iter()
        .map(|v| {
            v.as_str()
                .map(|s| s.to_owned())
                .ok_or(format!("Lecturer of course {} is not a string.", course_id))
        })
        .collect::<Result<Vec<String>, String>>()?;

    Ok(CourseLecturerRecord {
        course_name: course_name.to_owned(),
        lecturers,
    })
}

/// Load the course entries of the semester file at `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<(String, CourseLecturerRecord)>, Error> {
    let path = path.as_ref();
    let data = super::read_input(path)?;
    let records = read(&data[..]).map_err(|message| Error::parse(path, message))?;
    debug!("Read {} courses from '{}'", records.len(), path.display());
    Ok(records)
}

/// Build the lecturer to courses mapping of a single semester file
pub fn lecturers_to_courses<P: AsRef<Path>>(path: P) -> Result<LecturerCourseMap, Error> {
    let mut result = LecturerCourseMap::new();
    for (_course_id, record) in load(path)?.iter() {
        result.add_record(record);
    }
    Ok(result)
}

/// Merge all semester files of the directory `dir` into one lecturer to courses mapping
///
/// Only regular files (or symlinks to them) whose name ends with [SEMESTER_FILE_SUFFIX] are read, every other
/// directory entry is skipped without being inspected. Subdirectories are not descended into. The files are processed in order of their
/// names.
///
/// # Errors
///
/// * `Error::NotFound` if `dir` does not exist
/// * `Error::Parse` for the first semester file, which is no valid JSON or lacks an expected entry. The scan is
///   aborted in this case.
/// * `Error::Io` if the directory or one of the files cannot be read
pub fn scan_directory<P: AsRef<Path>>(dir: P) -> Result<LecturerCourseMap, Error> {
    let dir = dir.as_ref();
    let files = find_semester_files(dir)?;

    let mut result = LecturerCourseMap::new();
    for file in files.iter() {
        for (_course_id, record) in load(file)?.iter() {
            result.add_record(record);
        }
    }
    info!(
        "Merged {} semester files from '{}': {} lecturers",
        files.len(),
        dir.display(),
        result.len()
    );
    Ok(result)
}

/// Whether the file name of `path` marks it as a semester file
fn has_semester_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(SEMESTER_FILE_SUFFIX))
}

/// List the semester files directly inside `dir`, sorted by file name
///
/// Entries with other names are never inspected, so broken or unreadable ones don't interrupt the scan. Symlinks
/// are only resolved for semester file names.
fn find_semester_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_owned();
                if path != dir && !has_semester_suffix(&path) {
                    debug!("Skipping unreadable '{}'", path.display());
                    continue;
                }
                return Err(Error::reading(&path, err.into()));
            }
        };
        if !has_semester_suffix(entry.path()) {
            debug!("Skipping '{}'", entry.path().display());
            continue;
        }
        let metadata = std::fs::metadata(entry.path()).map_err(|err| Error::reading(entry.path(), err))?;
        if metadata.is_file() {
            files.push(entry.into_path());
        } else {
            debug!("Skipping '{}', which is no regular file", entry.path().display());
        }
    }
    Ok(files)
}
