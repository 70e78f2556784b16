//! Core catalog types: courses, syllabi, units, experiments, and outcomes.

use serde::{Deserialize, Serialize};

/// A single course in the catalog.
///
/// Courses are read-only reference data. The `syllabus` is optional: a course
/// without one is still searchable by its own code, name, and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Stable catalog identifier, unique across the catalog.
    pub id: String,
    /// Course code as printed in the university calendar (e.g. "6CS402CC22").
    pub code: String,
    /// Human-readable course name.
    pub name: String,
    /// Free-text course description.
    #[serde(default)]
    pub description: String,
    /// Detailed syllabus, if one has been published for this course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllabus: Option<Syllabus>,
}

impl Course {
    /// Create a new course without a syllabus.
    pub fn new<S: Into<String>>(id: S, code: S, name: S, description: S) -> Self {
        Course {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            description: description.into(),
            syllabus: None,
        }
    }

    /// Attach a syllabus to this course.
    pub fn with_syllabus(mut self, syllabus: Syllabus) -> Self {
        self.syllabus = Some(syllabus);
        self
    }
}

/// The published syllabus of a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Syllabus {
    /// Teaching units, in delivery order.
    #[serde(default)]
    pub units: Vec<Unit>,
    /// Laboratory experiments, in delivery order.
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    /// Reference books and other reading material.
    #[serde(default)]
    pub references: Vec<String>,
    /// Course learning outcomes.
    #[serde(default)]
    pub outcomes: Vec<LearningOutcome>,
}

impl Syllabus {
    /// Create an empty syllabus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Add an experiment.
    pub fn experiment(mut self, experiment: Experiment) -> Self {
        self.experiments.push(experiment);
        self
    }

    /// Add a reference string.
    pub fn reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.references.push(reference.into());
        self
    }

    /// Add a learning outcome.
    pub fn outcome(mut self, outcome: LearningOutcome) -> Self {
        self.outcomes.push(outcome);
        self
    }
}

/// A teaching unit inside a syllabus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Position of the unit within the course (1-based).
    pub unit_number: u32,
    /// Unit title.
    pub title: String,
    /// Free-text unit contents.
    #[serde(default)]
    pub contents: String,
    /// Individual topics covered by the unit.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Unit {
    /// Create a new unit.
    pub fn new<S: Into<String>>(unit_number: u32, title: S, contents: S) -> Self {
        Unit {
            unit_number,
            title: title.into(),
            contents: contents.into(),
            topics: Vec::new(),
        }
    }

    /// Set the unit's topic list.
    pub fn with_topics<S: Into<String>>(mut self, topics: Vec<S>) -> Self {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }
}

/// A laboratory experiment inside a syllabus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    /// Serial number of the experiment (1-based).
    pub sr_no: u32,
    /// Experiment name.
    pub name: String,
    /// Free-text experiment description.
    #[serde(default)]
    pub description: String,
    /// Individual topics exercised by the experiment.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Experiment {
    /// Create a new experiment.
    pub fn new<S: Into<String>>(sr_no: u32, name: S, description: S) -> Self {
        Experiment {
            sr_no,
            name: name.into(),
            description: description.into(),
            topics: Vec::new(),
        }
    }

    /// Set the experiment's topic list.
    pub fn with_topics<S: Into<String>>(mut self, topics: Vec<S>) -> Self {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }
}

/// A course learning outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    /// Outcome code (e.g. "CLO1").
    pub clo: String,
    /// What the student should be able to do.
    pub description: String,
    /// Bloom taxonomy level for the outcome (e.g. "Apply").
    #[serde(default)]
    pub bloom_level: String,
}

impl LearningOutcome {
    /// Create a new learning outcome.
    pub fn new<S: Into<String>>(clo: S, description: S, bloom_level: S) -> Self {
        LearningOutcome {
            clo: clo.into(),
            description: description.into(),
            bloom_level: bloom_level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("cs402", "6CS402CC22", "Data Structures", "Core CS course")
            .with_syllabus(
                Syllabus::new()
                    .unit(
                        Unit::new(1, "Divide and Conquer", "Binary search, Merge sort")
                            .with_topics(vec!["Binary Search", "Merge Sort"]),
                    )
                    .reference("CLRS, Introduction to Algorithms"),
            );

        assert_eq!(course.code, "6CS402CC22");
        let syllabus = course.syllabus.as_ref().unwrap();
        assert_eq!(syllabus.units.len(), 1);
        assert_eq!(syllabus.units[0].topics, vec!["Binary Search", "Merge Sort"]);
        assert_eq!(syllabus.references.len(), 1);
    }

    #[test]
    fn test_course_json_roundtrip() {
        let course = Course::new("c1", "CS101", "Programming Basics", "Introductory course");

        let json = serde_json::to_string(&course).unwrap();
        let decoded: Course = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, course);
        // Courses without a syllabus serialize without the field entirely
        assert!(!json.contains("syllabus"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id": "c1", "code": "CS101", "name": "Programming Basics"}"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.description, "");
        assert!(course.syllabus.is_none());
    }
}
