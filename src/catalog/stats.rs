//! Catalog statistics.

use serde::{Deserialize, Serialize};

use crate::catalog::Course;

/// Aggregate counts over a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub courses: usize,
    pub units: usize,
    pub experiments: usize,
    pub topics: usize,
    pub references: usize,
    pub outcomes: usize,
}

impl CatalogStats {
    /// Collect statistics from a catalog.
    pub fn collect(courses: &[Course]) -> Self {
        let mut stats = CatalogStats {
            courses: courses.len(),
            ..Default::default()
        };

        for course in courses {
            let Some(syllabus) = &course.syllabus else {
                continue;
            };

            stats.units += syllabus.units.len();
            stats.experiments += syllabus.experiments.len();
            stats.references += syllabus.references.len();
            stats.outcomes += syllabus.outcomes.len();

            for unit in &syllabus.units {
                stats.topics += unit.topics.len();
            }
            for experiment in &syllabus.experiments {
                stats.topics += experiment.topics.len();
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Experiment, Syllabus, Unit};

    #[test]
    fn test_collect_stats() {
        let courses = vec![
            Course::new("c1", "CS101", "Programming Basics", "Intro").with_syllabus(
                Syllabus::new()
                    .unit(Unit::new(1, "Control Flow", "Loops and branches").with_topics(vec![
                        "Loops", "Branches",
                    ]))
                    .experiment(
                        Experiment::new(1, "Hello World", "First program")
                            .with_topics(vec!["Compilation"]),
                    )
                    .reference("K&R, The C Programming Language"),
            ),
            Course::new("c2", "CS102", "Programming Lab", "Practice"),
        ];

        let stats = CatalogStats::collect(&courses);
        assert_eq!(
            stats,
            CatalogStats {
                courses: 2,
                units: 1,
                experiments: 1,
                topics: 3,
                references: 1,
                outcomes: 0,
            }
        );
    }
}
