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


use std::ffi::OsStr;
use std::fs;
use std::process::{Command, Output};

const SIMPLE_DATABASE: &str = r#"{
    "1": {"student_name": "Al", "registered_courses": ["CS1"]},
    "2": {"student_name": "Bo", "registered_courses": ["CS1", "CS2"]}
}"#;

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_courseroster"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn students_command_prints_names() {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("students.json");
    fs::write(&database, SIMPLE_DATABASE).unwrap();

    let output = run(&[OsStr::new("students"), database.as_os_str(), OsStr::new("CS1")]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<&str>>(), vec!["Al", "Bo"]);
}

#[test]
fn courses_command_prints_sorted_courses() {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("students.json");
    fs::write(&database, SIMPLE_DATABASE).unwrap();

    let output = run(&[OsStr::new("courses"), database.as_os_str()]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<&str>>(), vec!["CS1", "CS2"]);
}

#[test]
fn enrollment_command_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("students.json");
    let report = dir.path().join("enrollment.txt");
    fs::write(&database, SIMPLE_DATABASE).unwrap();

    let output = run(&[OsStr::new("enrollment"), database.as_os_str(), report.as_os_str()]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let content = fs::read_to_string(&report).unwrap();
    assert_eq!(content.lines().collect::<Vec<&str>>(), vec!["\"CS1\" 2", "\"CS2\" 1"]);
}

#[test]
fn missing_database_exits_with_noinput() {
    let dir = tempfile::tempdir().unwrap();
    let database = dir.path().join("students.json");
    let report = dir.path().join("enrollment.txt");

    let output = run(&[OsStr::new("enrollment"), database.as_os_str(), report.as_os_str()]);
    assert_eq!(output.status.code(), Some(exitcode::NOINPUT));
    assert!(!report.exists());
}

#[test]
fn malformed_semester_file_exits_with_dataerr() {
    let dir = tempfile::tempdir().unwrap();
    let semesters = dir.path().join("semesters");
    fs::create_dir(&semesters).unwrap();
    fs::write(semesters.join("winter.json"), r#"{"c1": {"course_name": "Algo"}}"#).unwrap();
    let report = dir.path().join("lecturers.json");

    let output = run(&[OsStr::new("lecturers"), semesters.as_os_str(), report.as_os_str()]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No 'lecturers' list found for course c1"), "{}", stderr);
}

#[test]
fn unwritable_output_exits_with_ioerr() {
    let dir = tempfile::tempdir().unwrap();
    let semesters = dir.path().join("semesters");
    fs::create_dir(&semesters).unwrap();
    let report = dir.path().join("missing").join("lecturers.json");

    let output = run(&[OsStr::new("lecturers"), semesters.as_os_str(), report.as_os_str()]);
    assert_eq!(output.status.code(), Some(exitcode::IOERR));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
}
