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

use clap::{arg, command, value_parser, ArgMatches, Command};
use courseroster::{io, query, report, Error};
use std::path::PathBuf;

use log::{debug, error};

/// Command line interface definition
fn cli() -> Command {
    command!()
        .arg(arg!(-v --verbose ... "Print more log output (may be given twice)").global(true))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("students")
                .about("Print the names of all students registered for a course")
                .arg(arg!(<DATABASE> "Student database JSON file").value_parser(value_parser!(PathBuf)))
                .arg(arg!(<COURSE> "Name of the course")),
        )
        .subcommand(
            Command::new("courses")
                .about("Print all courses of the student database")
                .arg(arg!(<DATABASE> "Student database JSON file").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("enrollment")
                .about("Write the number of enrolled students per course to a text file")
                .arg(arg!(<DATABASE> "Student database JSON file").value_parser(value_parser!(PathBuf)))
                .arg(arg!(<OUTPUT> "Output text file").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("lecturers")
                .about("Merge a directory of semester files into a JSON mapping of lecturers to their courses")
                .arg(arg!(<DIRECTORY> "Directory with semester JSON files").value_parser(value_parser!(PathBuf)))
                .arg(arg!(<OUTPUT> "Output JSON file").value_parser(value_parser!(PathBuf))),
        )
}

fn main() {
    let args = cli().get_matches();

    let log_level = match args.get_count("verbose") {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match args.subcommand() {
        Some(("students", sub_args)) => print_students(sub_args),
        Some(("courses", sub_args)) => print_courses(sub_args),
        Some(("enrollment", sub_args)) => report::enrollment_numbers(
            path_arg(sub_args, "DATABASE"),
            path_arg(sub_args, "OUTPUT"),
        ),
        Some(("lecturers", sub_args)) => report::courses_for_lecturers(
            path_arg(sub_args, "DIRECTORY"),
            path_arg(sub_args, "OUTPUT"),
        ),
        _ => unreachable!("clap enforces a subcommand"),
    };

    match result {
        Ok(()) => {
            debug!("Done");
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn path_arg<'a>(args: &'a ArgMatches, id: &str) -> &'a PathBuf {
    args.get_one::<PathBuf>(id)
        .expect("required arguments are enforced by clap")
}

fn print_students(args: &ArgMatches) -> Result<(), Error> {
    let database = io::students::load(path_arg(args, "DATABASE"))?;
    let course = args
        .get_one::<String>("COURSE")
        .expect("required arguments are enforced by clap");
    for name in query::students_in_course(&database, course) {
        println!("{}", name);
    }
    Ok(())
}

fn print_courses(args: &ArgMatches) -> Result<(), Error> {
    let database = io::students::load(path_arg(args, "DATABASE"))?;
    for course in query::all_courses(&database) {
        println!("{}", course);
    }
    Ok(())
}
