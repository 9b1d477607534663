//! Course Filters

use super::Course;

/// Category/level choice that matches everything.
pub const ALL: &str = "全部";

/// Search box and dropdown state of the course list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Free-text query, matched against title, description and tags.
    pub query: String,

    /// Required category; `None` or [`ALL`] accepts any.
    pub category: Option<String>,

    /// Required level; `None` or [`ALL`] accepts any.
    pub level: Option<String>,
}

impl CourseFilter {
    /// Filter on a free-text query only.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restrict to `category`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to `level`.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Whether `course` passes every constraint.
    pub fn matches(&self, course: &Course) -> bool {
        self.matches_query(course)
            && accepts(self.category.as_deref(), &course.category)
            && accepts(self.level.as_deref(), &course.level)
    }

    fn matches_query(&self, course: &Course) -> bool {
        let query = self.query.trim().to_lowercase();

        query.is_empty()
            || course.title.to_lowercase().contains(&query)
            || course.description.to_lowercase().contains(&query)
            || course
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}

fn accepts(constraint: Option<&str>, value: &str) -> bool {
    match constraint {
        None | Some(ALL) => true,
        Some(required) => required == value,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::Catalog;

    use super::*;

    fn ids(catalog: &Catalog, filter: &CourseFilter) -> Vec<u32> {
        catalog.filter(filter).iter().map(|course| course.id).collect()
    }

    #[test]
    fn empty_filter_matches_everything() -> TestResult {
        let catalog = Catalog::demo()?;

        assert_eq!(ids(&catalog, &CourseFilter::default()).len(), catalog.len());

        Ok(())
    }

    #[test]
    fn query_matches_title_description_and_tags() -> TestResult {
        let catalog = Catalog::demo()?;

        assert_eq!(ids(&catalog, &CourseFilter::query("react")), vec![3, 5]);
        assert_eq!(ids(&catalog, &CourseFilter::query("智能合约")), vec![6]);
        assert_eq!(ids(&catalog, &CourseFilter::query("leetcode")), vec![4]);

        Ok(())
    }

    #[test]
    fn category_and_level_narrow_results() -> TestResult {
        let catalog = Catalog::demo()?;

        let python_intermediate = CourseFilter::query("python").with_level("中级");
        let ai = CourseFilter::default().with_category("人工智能");
        let everything = CourseFilter::default().with_category(ALL).with_level(ALL);

        assert_eq!(ids(&catalog, &python_intermediate), vec![1]);
        assert_eq!(ids(&catalog, &ai), vec![2]);
        assert_eq!(ids(&catalog, &everything).len(), 6);

        Ok(())
    }

    #[test]
    fn no_match_is_empty() -> TestResult {
        let catalog = Catalog::demo()?;

        assert!(catalog.filter(&CourseFilter::query("cobol")).is_empty());

        Ok(())
    }
}
