// Static interest and keyword tables for the course catalog.
//
// An interest narrows a stream to courses whose name contains one of the
// interest's keywords. These tables are curated by hand; they are not
// derived from the catalog.

/// Interest option that disables keyword filtering.
pub const ALL_COURSES: &str = "All Courses";

const STREAM_INTERESTS: &[(&str, &[&str])] = &[
    (
        "Science",
        &["Engineering", "Medical", "Computer Science", "Basic Sciences"],
    ),
    (
        "Commerce",
        &["Accounting", "Business Management", "Economics"],
    ),
    (
        "Arts",
        &["Liberal Arts", "Design", "Law", "Media", "Social Work"],
    ),
    (
        "Generic",
        &["Hospitality", "Event Management", "Digital Skills"],
    ),
];

const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    ("Engineering", &["B.Tech", "M.Tech", "B.Arch"]),
    ("Medical", &["MBBS", "BDS", "BAMS", "BHMS"]),
    ("Computer Science", &["Computer", "IT", "Data Science", "BCA"]),
    ("Basic Sciences", &["B.Sc."]),
    ("Accounting", &["B.Com", "CA"]),
    ("Business Management", &["BBA", "BMS", "Management"]),
    ("Economics", &["Economics", "Statistics"]),
    ("Liberal Arts", &["B.A."]),
    ("Design", &["Design", "Fine Arts"]),
    ("Law", &["Law", "LLB"]),
    ("Media", &["Media", "Journalism"]),
    ("Social Work", &["Social Work", "Education"]),
    ("Hospitality", &["Hotel"]),
    ("Event Management", &["Event"]),
    ("Digital Skills", &["Digital"]),
];

/// Interest options for a stream, always ending with `All Courses`.
pub fn interests_for(stream: &str) -> Vec<&'static str> {
    let mut interests: Vec<&'static str> = STREAM_INTERESTS
        .iter()
        .find(|(s, _)| *s == stream)
        .map(|(_, interests)| interests.to_vec())
        .unwrap_or_default();
    interests.push(ALL_COURSES);
    interests
}

/// Course-name keywords for an interest, if it has any.
pub fn keywords_for(interest: &str) -> Option<&'static [&'static str]> {
    INTEREST_KEYWORDS
        .iter()
        .find(|(i, _)| *i == interest)
        .map(|(_, keywords)| *keywords)
}

/// Upper-case the first letter and lower-case the rest ("sCIENCE" → "Science").
pub fn normalize_stream(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interests_end_with_all_courses() {
        assert_eq!(
            interests_for("Commerce"),
            vec!["Accounting", "Business Management", "Economics", ALL_COURSES]
        );
        assert_eq!(interests_for("Unknown"), vec![ALL_COURSES]);
    }

    #[test]
    fn test_keywords_for() {
        assert_eq!(keywords_for("Law"), Some(&["Law", "LLB"][..]));
        assert_eq!(keywords_for(ALL_COURSES), None);
    }

    #[test]
    fn test_normalize_stream() {
        assert_eq!(normalize_stream("  sCIENCE "), "Science");
        assert_eq!(normalize_stream("arts"), "Arts");
        assert_eq!(normalize_stream(""), "");
    }
}
