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

//! IO functionality for the student database JSON file.
//!
//! The file is a JSON object with student ids as keys and a record per student as value:
//! ```json
//! {
//!     "1": {"student_name": "Anton Armbruster", "registered_courses": ["Algorithms", "Databases"]},
//!     "2": {"student_name": "Bertalotta Beispiel", "registered_courses": ["Databases"]}
//! }
//! ```
//! Additional fields of the student records are ignored.

use crate::{Error, StudentDatabase, StudentRecord};
use std::path::Path;

use log::info;

/// Read the student database from a Reader (e.g. an open file)
///
/// # Errors
///
/// Fails with a string error message to be displayed to the user, if
/// * the data has invalid JSON syntax (the string representation of the serde_json error is returned)
/// * the top level JSON value is not an object
/// * any student record lacks the `student_name` or `registered_courses` field or they have the wrong type
pub fn read<R: std::io::Read>(reader: R) -> Result<StudentDatabase, String> {
    let data: serde_json::Value = serde_json::from_reader(reader).map_err(|err| err.to_string())?;
    let students_data = match data {
        serde_json::Value::Object(students_data) => students_data,
        _ => return Err("The student database is not a JSON object.".to_owned()),
    };

    students_data
        .into_iter()
        .map(|(student_id, student_data)| {
            let record = serde_json::from_value::<StudentRecord>(student_data)
                .map_err(|e| format!("Invalid record for student {}: {}", student_id, e))?;
            Ok((student_id, record))
        })
        .collect()
}

/// Load the student database from the JSON file at `path`
///
/// The database is read fresh on every call.
pub fn load<P: AsRef<Path>>(path: P) -> Result<StudentDatabase, Error> {
    let path = path.as_ref();
    let data = super::read_input(path)?;
    let database = read(&data[..]).map_err(|message| Error::parse(path, message))?;
    info!(
        "Read {} students from '{}'",
        database.len(),
        path.display()
    );
    Ok(database)
}

#[cfg(test)]
mod test {
    use crate::Error;
    use std::path::Path;

    #[test]
    fn parse_students_file() {
        let data = include_bytes!("test_ressources/students.json");
        let database = super::read(&data[..]).unwrap();

        assert_eq!(database.len(), 5);
        let ids: Vec<&str> = database.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["17", "3", "42", "8", "23"]);

        let charly = database.get("42").unwrap();
        assert_eq!(charly.name, "Charly Clown");
        assert_eq!(
            charly.registered_courses,
            vec!["Algorithms", "Operating Systems"]
        );
        assert!(database.get("8").unwrap().registered_courses.is_empty());
    }

    #[test]
    fn missing_field_is_reported() {
        let data = br#"{"1": {"student_name": "Al", "registered_courses": []}, "2": {"student_name": "Bo"}}"#;
        let err = super::read(&data[..]).unwrap_err();
        assert!(err.contains("student 2"), "{}", err);
        assert!(err.contains("registered_courses"), "{}", err);
    }

    #[test]
    fn wrongly_typed_field_is_reported() {
        let data = br#"{"1": {"student_name": "Al", "registered_courses": "CS1"}}"#;
        assert!(super::read(&data[..]).is_err());
    }

    #[test]
    fn top_level_array_is_rejected() {
        let data = br#"[{"student_name": "Al", "registered_courses": []}]"#;
        let err = super::read(&data[..]).unwrap_err();
        assert_eq!(err, "The student database is not a JSON object.");
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(super::read(&b"{\"1\": "[..]).is_err());
    }

    #[test]
    fn empty_object_is_empty_database() {
        let database = super::read(&b"{}"[..]).unwrap();
        assert!(database.is_empty());
    }

    #[test]
    fn load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match super::load(&path) {
            Err(Error::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        std::fs::write(&path, "not json").unwrap();
        match super::load(&path) {
            Err(Error::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn load_test_ressource() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/io/test_ressources/students.json");
        let database = super::load(path).unwrap();
        assert_eq!(database.len(), 5);
    }
}
