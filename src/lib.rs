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

//! Aggregate reports over small JSON rosters of students, courses and lecturers.
//!
//! The student database maps student ids to a [StudentRecord]. The [query] module answers questions about a loaded
//! [StudentDatabase], while the [report] module writes the enrollment report (plain text) and the lecturer report
//! (JSON), which is merged from a directory of semester files by [io::semester::scan_directory].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub mod error;
pub mod io;
pub mod query;
pub mod report;

pub use error::Error;

/// Representation of a single student's data from the student database
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student's name, as it is printed in reports
    #[serde(rename = "student_name")]
    pub name: String,
    /// Names of the courses the student is registered for
    pub registered_courses: Vec<String>,
}

/// All students of a student database file, keyed by their student id
///
/// Iteration yields the students in the order of the source JSON document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDatabase {
    students: Vec<(String, StudentRecord)>,
}

impl StudentDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of students in the database
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Look up a student by its (opaque) student id
    pub fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.students
            .iter()
            .find(|(id, _)| id == student_id)
            .map(|(_, record)| record)
    }

    /// Iterate over (student id, record) pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.students
            .iter()
            .map(|(id, record)| (id.as_str(), record))
    }
}

impl std::iter::FromIterator<(String, StudentRecord)> for StudentDatabase {
    fn from_iter<I: IntoIterator<Item = (String, StudentRecord)>>(iter: I) -> Self {
        StudentDatabase {
            students: iter.into_iter().collect(),
        }
    }
}

/// One course entry of a semester file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLecturerRecord {
    pub course_name: String,
    pub lecturers: Vec<String>,
}

/// Mapping of lecturer names to the set of course names they teach, merged from any number of semester files.
///
/// Serializes as a JSON object of lecturer names to arrays of course names. The arrays are sorted, but consumers
/// should only rely on their contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LecturerCourseMap {
    courses_by_lecturer: BTreeMap<String, BTreeSet<String>>,
}

impl LecturerCourseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single (lecturer, course) pair. Returns false if the pair was already known.
    pub fn insert(&mut self, lecturer: &str, course_name: &str) -> bool {
        self.courses_by_lecturer
            .entry(lecturer.to_owned())
            .or_default()
            .insert(course_name.to_owned())
    }

    /// Add the course of `record` to each of its lecturers
    pub fn add_record(&mut self, record: &CourseLecturerRecord) {
        for lecturer in record.lecturers.iter() {
            self.insert(lecturer, &record.course_name);
        }
    }

    /// Courses taught by the given lecturer, if the lecturer is known at all
    pub fn courses_of(&self, lecturer: &str) -> Option<&BTreeSet<String>> {
        self.courses_by_lecturer.get(lecturer)
    }

    /// Number of distinct lecturers
    pub fn len(&self) -> usize {
        self.courses_by_lecturer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses_by_lecturer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.courses_by_lecturer
            .iter()
            .map(|(lecturer, courses)| (lecturer.as_str(), courses))
    }
}
