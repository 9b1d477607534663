//! Catalog
//!
//! Course catalog loaded from YAML. The bundled demo catalog stands in for a
//! backend.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::CartItem,
    prices::{PriceError, parse_price},
};

mod filter;

pub use filter::{ALL, CourseFilter};

const DEMO_CATALOG_YAML: &str = include_str!("../../../../fixtures/catalog/courses.yml");

/// Difficulty levels, easiest first.
pub const LEVELS: [&str; 3] = ["入门", "中级", "进阶"];

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing error
    #[error("Failed to parse catalog: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two courses share an id
    #[error("Duplicate course id: {0}")]
    DuplicateCourse(u32),

    /// A course has an unparseable price
    #[error("Invalid price for course {id}")]
    InvalidPrice {
        /// Course id
        id: u32,

        /// Parse failure
        #[source]
        source: PriceError,
    },
}

/// Course instructor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instructor {
    /// Name.
    pub name: String,

    /// Job title.
    pub title: String,

    /// Portrait URL.
    pub image: String,
}

/// A chapter of a course's curriculum.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    /// Position in the curriculum.
    pub id: u32,

    /// Title.
    pub title: String,

    /// Number of lessons.
    pub lessons: u32,

    /// Display duration.
    pub duration: String,
}

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    /// Catalog id.
    pub id: u32,

    /// Title.
    pub title: String,

    /// Short description.
    pub description: String,

    /// Difficulty, one of [`LEVELS`].
    pub level: String,

    /// Category.
    pub category: String,

    /// Cover image URL.
    pub image: String,

    /// Average rating out of 5.
    pub rating: f32,

    /// Enrolled students.
    pub students: u32,

    /// Display duration.
    pub duration: String,

    /// Topic tags.
    pub tags: SmallVec<[String; 4]>,

    /// Instructor.
    pub instructor: Instructor,

    /// Display price.
    pub price: String,

    /// Pre-discount display price.
    #[serde(default)]
    pub original_price: Option<String>,

    /// Chapters.
    #[serde(default)]
    pub curriculum: Vec<Chapter>,

    /// Selling points.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Course {
    /// The cart entry for this course.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price.clone(),
            original_price: self.original_price.clone(),
            image: self.image.clone(),
        }
    }

    /// Total lessons across all chapters.
    pub fn lesson_count(&self) -> u32 {
        self.curriculum.iter().map(|chapter| chapter.lessons).sum()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    courses: Vec<Course>,
}

/// Indexed course list.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    index: FxHashMap<u32, usize>,
}

impl Catalog {
    /// The bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_yaml(DEMO_CATALOG_YAML)
    }

    /// Parse a catalog fixture.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Yaml`]: the document doesn't parse.
    /// - [`CatalogError::DuplicateCourse`]: two courses share an id.
    /// - [`CatalogError::InvalidPrice`]: a course price can't be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        Self::new(fixture.courses)
    }

    /// Build a catalog from courses.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateCourse`]: two courses share an id.
    /// - [`CatalogError::InvalidPrice`]: a course price can't be parsed.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, course) in courses.iter().enumerate() {
            for price in std::iter::once(&course.price).chain(&course.original_price) {
                parse_price(price).map_err(|source| CatalogError::InvalidPrice {
                    id: course.id,
                    source,
                })?;
            }

            if index.insert(course.id, position).is_some() {
                return Err(CatalogError::DuplicateCourse(course.id));
            }
        }

        Ok(Self { courses, index })
    }

    /// Course with `id`.
    pub fn get(&self, id: u32) -> Option<&Course> {
        self.index
            .get(&id)
            .and_then(|position| self.courses.get(*position))
    }

    /// All courses in fixture order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses accepted by `filter`.
    pub fn filter<'c>(&'c self, filter: &CourseFilter) -> Vec<&'c Course> {
        self.courses
            .iter()
            .filter(|course| filter.matches(course))
            .collect()
    }

    /// Up to `count` courses, best rated first.
    pub fn featured(&self, count: usize) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.iter().collect();

        courses.sort_by(|left, right| right.rating.total_cmp(&left.rating));
        courses.truncate(count);

        courses
    }

    /// Category choices: [`ALL`] then each category in fixture order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL];

        for course in &self.courses {
            if !categories.contains(&course.category.as_str()) {
                categories.push(&course.category);
            }
        }

        categories
    }

    /// Level choices: [`ALL`] then [`LEVELS`].
    pub fn levels(&self) -> Vec<&'static str> {
        std::iter::once(ALL).chain(LEVELS).collect()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const TWO_COURSES: &str = r"
courses:
  - id: 1
    title: One
    description: First
    level: 入门
    category: 编程开发
    image: one.jpg
    rating: 4.1
    students: 10
    duration: 1小时
    tags: [a]
    instructor: { name: A, title: T, image: a.jpg }
    price: ¥10
  - id: 2
    title: Two
    description: Second
    level: 进阶
    category: 人工智能
    image: two.jpg
    rating: 4.9
    students: 20
    duration: 2小时
    tags: [b]
    instructor: { name: B, title: T, image: b.jpg }
    price: ¥20.50
    original_price: ¥30
";

    #[test]
    fn demo_catalog_loads() -> TestResult {
        let catalog = Catalog::demo()?;

        assert_eq!(catalog.len(), 6);

        let python = catalog.get(1).expect("course 1 should exist");

        assert_eq!(python.title, "Python 全栈开发实战");
        assert_eq!(python.price, "¥299");
        assert_eq!(python.original_price.as_deref(), Some("¥399"));
        assert_eq!(python.instructor.name, "李明");
        assert_eq!(python.lesson_count(), 54);

        Ok(())
    }

    #[test]
    fn get_unknown_id_is_none() -> TestResult {
        assert!(Catalog::demo()?.get(99).is_none());

        Ok(())
    }

    #[test]
    fn cart_item_copies_display_fields() -> TestResult {
        let catalog = Catalog::from_yaml(TWO_COURSES)?;
        let item = catalog.get(2).expect("course 2 should exist").to_cart_item();

        assert_eq!(
            item,
            CartItem {
                id: 2,
                title: "Two".to_string(),
                price: "¥20.50".to_string(),
                original_price: Some("¥30".to_string()),
                image: "two.jpg".to_string(),
            }
        );

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let yaml = TWO_COURSES.replace("id: 2", "id: 1");

        assert!(matches!(
            Catalog::from_yaml(&yaml),
            Err(CatalogError::DuplicateCourse(1))
        ));
    }

    #[test]
    fn bad_prices_are_rejected() {
        let yaml = TWO_COURSES.replace("¥20.50", "¥lots");

        assert!(matches!(
            Catalog::from_yaml(&yaml),
            Err(CatalogError::InvalidPrice { id: 2, .. })
        ));
    }

    #[test]
    fn categories_start_with_all() -> TestResult {
        let catalog = Catalog::from_yaml(TWO_COURSES)?;

        assert_eq!(catalog.categories(), vec![ALL, "编程开发", "人工智能"]);
        assert_eq!(catalog.levels(), vec![ALL, "入门", "中级", "进阶"]);

        Ok(())
    }

    #[test]
    fn featured_prefers_higher_ratings() -> TestResult {
        let catalog = Catalog::from_yaml(TWO_COURSES)?;

        let featured: Vec<u32> = catalog.featured(1).iter().map(|course| course.id).collect();

        assert_eq!(featured, vec![2]);

        Ok(())
    }
}
