//! Department routing tags

/// Tag sent when the user selects no department
pub const ANY_DEPARTMENT: &str = "any";

/// Maximum characters a tag chip shows before truncation
const TAG_DISPLAY_MAX: usize = 12;

/// Departments a grievance can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    PlacementCell,
    ExamCell,
    AdmissionOffice,
    StudentCell,
}

impl Department {
    /// All departments, in picker order
    pub const ALL: [Department; 4] = [
        Department::PlacementCell,
        Department::ExamCell,
        Department::AdmissionOffice,
        Department::StudentCell,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlacementCell => "Placement Cell",
            Self::ExamCell => "Exam Cell",
            Self::AdmissionOffice => "Admission Office",
            Self::StudentCell => "Student Cell",
        }
    }
}

/// Shorten a tag label for chip display.
///
/// Labels longer than 12 characters keep their first 10 characters and get
/// an ellipsis appended. The stored tag is never modified.
pub fn truncate_tag(label: &str) -> String {
    if label.chars().count() > TAG_DISPLAY_MAX {
        let head: String = label.chars().take(TAG_DISPLAY_MAX - 2).collect();
        format!("{head}...")
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_wire_values() {
        let labels: Vec<_> = Department::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec!["Placement Cell", "Exam Cell", "Admission Office", "Student Cell"]
        );
    }

    #[test]
    fn test_truncate_long_label() {
        assert_eq!(truncate_tag("Placement Cell"), "Placement ...");
        assert_eq!(truncate_tag("Admission Office"), "Admission ...");
    }

    #[test]
    fn test_truncate_keeps_short_labels() {
        assert_eq!(truncate_tag("Exam Cell"), "Exam Cell");
        assert_eq!(truncate_tag(ANY_DEPARTMENT), "any");
    }

    #[test]
    fn test_truncate_boundary_is_twelve_chars() {
        // "Student Cell" is exactly 12 characters
        assert_eq!(truncate_tag("Student Cell"), "Student Cell");
        assert_eq!(truncate_tag("Student Cells"), "Student Ce...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let label = "Départements";
        assert_eq!(label.chars().count(), 12);
        assert_eq!(truncate_tag(label), label);
    }
}
