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

//! Queries on a loaded [StudentDatabase].
//!
//! Course names are compared by plain (case-sensitive) string equality.

use crate::{Error, StudentDatabase};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Names of all students registered for the course `course_name`, in the order of the database
///
/// An unknown course simply yields an empty list.
pub fn students_in_course<'a>(database: &'a StudentDatabase, course_name: &str) -> Vec<&'a str> {
    database
        .iter()
        .filter(|(_id, student)| student.registered_courses.iter().any(|c| c == course_name))
        .map(|(_id, student)| student.name.as_str())
        .collect()
}

/// Set of all courses any student is registered for
pub fn all_courses(database: &StudentDatabase) -> BTreeSet<&str> {
    database
        .iter()
        .flat_map(|(_id, student)| student.registered_courses.iter().map(|c| c.as_str()))
        .collect()
}

/// Number of registered students for each course, calculated in a single pass over the database.
///
/// For every course `c` in `all_courses(database)`, the count equals `students_in_course(database, c).len()`. Thus,
/// a student listing a course twice is only counted once.
pub fn enrollment_counts(database: &StudentDatabase) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for (_id, student) in database.iter() {
        let courses: BTreeSet<&str> = student.registered_courses.iter().map(|c| c.as_str()).collect();
        for course in courses {
            *counts.entry(course).or_insert(0) += 1;
        }
    }
    counts
}

/// Load the student database at `path` and return the names of the students registered for `course_name`
pub fn names_of_registered_students<P: AsRef<Path>>(
    path: P,
    course_name: &str,
) -> Result<Vec<String>, Error> {
    let database = crate::io::students::load(path)?;
    Ok(students_in_course(&database, course_name)
        .into_iter()
        .map(|name| name.to_owned())
        .collect())
}

/// Load the student database at `path` and return the set of all courses
pub fn get_all_courses<P: AsRef<Path>>(path: P) -> Result<BTreeSet<String>, Error> {
    let database = crate::io::students::load(path)?;
    Ok(all_courses(&database)
        .into_iter()
        .map(|course| course.to_owned())
        .collect())
}
