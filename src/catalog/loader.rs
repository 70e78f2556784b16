//! Loading course catalogs from JSON definition files.
//!
//! A catalog file is a JSON array of course objects mirroring the
//! [`Course`](crate::catalog::Course) struct shape. Loading validates the
//! minimal invariants the search layer relies on: non-empty, unique course
//! ids.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashSet;

use crate::catalog::Course;
use crate::error::{CoursefindError, Result};

/// Load a catalog from a JSON file on disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Course>> {
    let file = File::open(path)?;
    load_catalog_from_reader(BufReader::new(file))
}

/// Load a catalog from any reader producing catalog JSON.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Vec<Course>> {
    let courses: Vec<Course> = serde_json::from_reader(reader)?;
    validate_catalog(&courses)?;
    Ok(courses)
}

/// Load a catalog from an in-memory JSON string.
pub fn load_catalog_from_str(json: &str) -> Result<Vec<Course>> {
    let courses: Vec<Course> = serde_json::from_str(json)?;
    validate_catalog(&courses)?;
    Ok(courses)
}

/// Check the invariants the search layer assumes about a catalog.
fn validate_catalog(courses: &[Course]) -> Result<()> {
    let mut seen_ids = AHashSet::new();

    for course in courses {
        if course.id.is_empty() {
            return Err(CoursefindError::catalog(format!(
                "course '{}' has an empty id",
                course.code
            )));
        }
        if !seen_ids.insert(course.id.as_str()) {
            return Err(CoursefindError::catalog(format!(
                "duplicate course id '{}'",
                course.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_from_str() {
        let json = r#"[
            {
                "id": "cs402",
                "code": "6CS402CC22",
                "name": "Data Structures and Algorithms",
                "description": "Core data structures",
                "syllabus": {
                    "units": [
                        {
                            "unit_number": 1,
                            "title": "Divide and Conquer",
                            "contents": "Binary search, Merge sort",
                            "topics": ["Binary Search", "Merge Sort"]
                        }
                    ],
                    "references": ["CLRS, Introduction to Algorithms"]
                }
            }
        ]"#;

        let courses = load_catalog_from_str(json).unwrap();
        assert_eq!(courses.len(), 1);

        let syllabus = courses[0].syllabus.as_ref().unwrap();
        assert_eq!(syllabus.units[0].unit_number, 1);
        assert!(syllabus.experiments.is_empty());
        assert!(syllabus.outcomes.is_empty());
    }

    #[test]
    fn test_duplicate_course_id_rejected() {
        let json = r#"[
            {"id": "c1", "code": "CS101", "name": "Programming Basics"},
            {"id": "c1", "code": "CS102", "name": "Programming Lab"}
        ]"#;

        let result = load_catalog_from_str(json);
        match result {
            Err(CoursefindError::Catalog(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("Expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_course_id_rejected() {
        let json = r#"[{"id": "", "code": "CS101", "name": "Programming Basics"}]"#;

        let result = load_catalog_from_str(json);
        assert!(matches!(result, Err(CoursefindError::Catalog(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let result = load_catalog_from_str("not json at all");
        assert!(matches!(result, Err(CoursefindError::Json(_))));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let courses = load_catalog_from_str("[]").unwrap();
        assert!(courses.is_empty());
    }
}
