//! Assessments
//!
//! The assessment centre and learning plans: the three assessment kinds
//! (coding marathon, project review, mock interview) with their mock content,
//! plus the learning plans linked from the workspace sidebar. Everything is
//! loaded from a YAML fixture; no submission leaves the process.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;

mod interview;
mod marathon;

pub use interview::{
    Certification, InterviewBank, InterviewFeedback, InterviewSession, InterviewStage, Seniority,
    TopicScore, Track, format_clock,
};
pub use marathon::{Example, Marathon, Problem, Verdict};

const DEMO_CENTER_YAML: &str = include_str!("../../../../fixtures/assessments/center.yml");

/// Assessment fixture errors
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// YAML parsing error
    #[error("Failed to parse assessments: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// An assessment kind has no description
    #[error("Assessment kind `{0}` is not described")]
    MissingKind(AssessmentKind),

    /// Two plans share an id
    #[error("Duplicate plan id: {0}")]
    DuplicatePlan(u32),

    /// A plan or plan course reports more than 100% progress
    #[error("Plan {plan} has progress {progress}%")]
    InvalidProgress {
        /// Plan id
        plan: u32,

        /// Offending value
        progress: u8,
    },

    /// The coding marathon has no problems
    #[error("The coding marathon has no problems")]
    NoProblems,
}

/// The kinds of assessment on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    /// Timed coding marathon judged online.
    Oj,

    /// Multi-day project with source and screen recording.
    Project,

    /// Topic-by-topic mock interview.
    Interview,
}

impl AssessmentKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 3] = [Self::Oj, Self::Project, Self::Interview];

    /// Path segment under `/ai-assessment`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Oj => "oj",
            Self::Project => "project",
            Self::Interview => "interview",
        }
    }

    /// Kind for a path segment.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

impl Display for AssessmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.slug())
    }
}

/// Card shown for an assessment kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssessmentInfo {
    /// Which assessment this describes.
    pub kind: AssessmentKind,

    /// Display title.
    pub title: String,

    /// One-paragraph summary.
    pub description: String,

    /// Expected time, e.g. `30-60分钟`.
    pub duration: String,

    /// What the learner gets out of it.
    pub benefits: SmallVec<[String; 3]>,
}

/// A project offered for review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectBrief {
    /// Project id.
    pub id: u32,

    /// Display title.
    pub title: String,

    /// Difficulty label.
    pub difficulty: String,

    /// Subject area.
    pub category: String,

    /// What the project is about.
    pub description: String,

    /// What to hand in.
    pub deliverables: Vec<String>,

    /// Functional requirements.
    pub requirements: Vec<String>,

    /// Weighted review criteria.
    pub criteria: Vec<String>,

    /// Expected effort, e.g. `5-7天`.
    pub expected_time: String,

    /// Skills exercised.
    pub skills: SmallVec<[String; 5]>,

    /// Points awarded on completion.
    pub points: u32,

    /// Certificate the project counts towards.
    pub certificate: String,
}

/// A course inside a learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanCourse {
    /// Course id within the workspace.
    pub id: u32,

    /// Display title.
    pub title: String,

    /// Percent complete.
    pub progress: u8,
}

impl PlanCourse {
    /// Whether the course is finished.
    pub const fn is_completed(&self) -> bool {
        self.progress >= 100
    }

    /// Encouragement shown when the course is expanded.
    pub const fn hint(&self) -> &'static str {
        if self.is_completed() {
            "您已完成该课程的学习！"
        } else if self.progress > 0 {
            "继续学习该课程，巩固您的知识。"
        } else {
            "开始学习这门课程，开启您的学习之旅。"
        }
    }

    /// Label of the study button.
    pub const fn action_label(&self) -> &'static str {
        if self.progress > 0 { "继续学习" } else { "开始学习" }
    }
}

/// A dated checkpoint in a learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    /// Milestone id.
    pub id: u32,

    /// What has to be achieved.
    pub title: String,

    /// Due date.
    pub deadline: Date,

    /// Whether it has been reached.
    #[serde(default)]
    pub completed: bool,
}

/// A learning plan: an ordered course list with milestones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LearningPlan {
    /// Plan id, as used in `/workspace/plan/:id`.
    pub id: u32,

    /// Display title.
    pub title: String,

    /// What the plan covers.
    pub description: String,

    /// Overall percent complete.
    pub progress: u8,

    /// When the plan started.
    pub start_date: Date,

    /// Expected completion.
    pub estimated_end_date: Date,

    /// Courses in study order.
    pub courses: Vec<PlanCourse>,

    /// Checkpoints in date order.
    pub milestones: Vec<Milestone>,
}

impl LearningPlan {
    /// Number of finished courses.
    pub fn completed_courses(&self) -> usize {
        self.courses
            .iter()
            .filter(|course| course.is_completed())
            .count()
    }

    /// First milestone not yet reached.
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|milestone| !milestone.completed)
    }
}

#[derive(Debug, Deserialize)]
struct CenterFixture {
    kinds: Vec<AssessmentInfo>,
    marathon: marathon::MarathonFixture,
    interview: InterviewBank,
    projects: Vec<ProjectBrief>,
    plans: Vec<LearningPlan>,
}

/// Assessment centre content and learning plans.
#[derive(Debug, Clone)]
pub struct AssessmentCenter {
    kinds: Vec<AssessmentInfo>,
    marathon: marathon::MarathonFixture,
    interview: InterviewBank,
    projects: Vec<ProjectBrief>,
    plans: Vec<LearningPlan>,
}

impl AssessmentCenter {
    /// The bundled demo content.
    ///
    /// # Errors
    ///
    /// Returns an [`AssessmentError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, AssessmentError> {
        Self::from_yaml(DEMO_CENTER_YAML)
    }

    /// Parse an assessment fixture.
    ///
    /// # Errors
    ///
    /// - [`AssessmentError::Yaml`]: the document doesn't parse.
    /// - [`AssessmentError::MissingKind`]: an assessment kind isn't described.
    /// - [`AssessmentError::NoProblems`]: the marathon has no problems.
    /// - [`AssessmentError::DuplicatePlan`]: two plans share an id.
    /// - [`AssessmentError::InvalidProgress`]: a progress value exceeds 100.
    pub fn from_yaml(yaml: &str) -> Result<Self, AssessmentError> {
        let fixture: CenterFixture = serde_norway::from_str(yaml)?;

        if let Some(kind) = AssessmentKind::ALL
            .into_iter()
            .find(|kind| !fixture.kinds.iter().any(|info| info.kind == *kind))
        {
            return Err(AssessmentError::MissingKind(kind));
        }

        if fixture.marathon.problems.is_empty() {
            return Err(AssessmentError::NoProblems);
        }

        let mut seen = FxHashSet::default();

        for plan in &fixture.plans {
            if !seen.insert(plan.id) {
                return Err(AssessmentError::DuplicatePlan(plan.id));
            }

            if let Some(progress) = std::iter::once(plan.progress)
                .chain(plan.courses.iter().map(|course| course.progress))
                .find(|progress| *progress > 100)
            {
                return Err(AssessmentError::InvalidProgress {
                    plan: plan.id,
                    progress,
                });
            }
        }

        Ok(Self {
            kinds: fixture.kinds,
            marathon: fixture.marathon,
            interview: fixture.interview,
            projects: fixture.projects,
            plans: fixture.plans,
        })
    }

    /// Assessment cards in fixture order.
    pub fn kinds(&self) -> &[AssessmentInfo] {
        &self.kinds
    }

    /// Card for `kind`.
    pub fn kind(&self, kind: AssessmentKind) -> Option<&AssessmentInfo> {
        self.kinds.iter().find(|info| info.kind == kind)
    }

    /// A fresh coding marathon.
    pub fn marathon(&self) -> Marathon {
        Marathon::new(&self.marathon)
    }

    /// Mock interview topics and certifications.
    pub fn interview(&self) -> &InterviewBank {
        &self.interview
    }

    /// Projects open for review.
    pub fn projects(&self) -> &[ProjectBrief] {
        &self.projects
    }

    /// Project with `id`.
    pub fn project(&self, id: u32) -> Option<&ProjectBrief> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Learning plans in fixture order.
    pub fn plans(&self) -> &[LearningPlan] {
        &self.plans
    }

    /// Plan with `id`.
    pub fn plan(&self, id: u32) -> Option<&LearningPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn demo_center_loads() -> TestResult {
        let center = AssessmentCenter::demo()?;

        assert_eq!(center.kinds().len(), 3);
        assert_eq!(center.projects().len(), 3);
        assert_eq!(center.plans().len(), 2);
        assert_eq!(
            center.kind(AssessmentKind::Interview).map(|info| info.title.as_str()),
            Some("AI模拟面试")
        );

        Ok(())
    }

    #[test]
    fn slugs_round_trip() {
        for kind in AssessmentKind::ALL {
            assert_eq!(AssessmentKind::from_slug(kind.slug()), Some(kind));
        }

        assert_eq!(AssessmentKind::from_slug("start"), None);
    }

    #[test]
    fn plans_summarise_progress() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let plan = center.plan(1).expect("plan 1 should exist");

        assert_eq!(plan.title, "Java 开发工程师");
        assert_eq!(plan.completed_courses(), 2);
        assert_eq!(plan.start_date, Date::constant(2023, 9, 15));
        assert_eq!(
            plan.next_milestone().map(|milestone| milestone.id),
            Some(2)
        );
        assert!(center.plan(3).is_none());

        Ok(())
    }

    #[test]
    fn course_hints_follow_progress() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let plan = center.plan(1).expect("plan 1 should exist");
        let hints: Vec<(&str, &str)> = plan
            .courses
            .iter()
            .map(|course| (course.hint(), course.action_label()))
            .collect();

        assert_eq!(hints.first(), Some(&("您已完成该课程的学习！", "继续学习")));
        assert_eq!(hints.get(2), Some(&("继续学习该课程，巩固您的知识。", "继续学习")));
        assert_eq!(hints.last(), Some(&("开始学习这门课程，开启您的学习之旅。", "开始学习")));

        Ok(())
    }

    #[test]
    fn every_kind_must_be_described() {
        let yaml = r"
kinds:
  - { kind: oj, title: t, description: d, duration: 1h, benefits: [] }
marathon: { total_problems: 1, solved: 0, time_limit: '01:00:00', verdict: { runtime: 1 ms, memory: 1 MB, passed: 1, total: 1, feedback: ok }, problems: [] }
interview: { seconds_per_topic: 60, tracks: [], feedback: { strengths: [], improvements: [], topic_scores: [] } }
projects: []
plans: []
";

        assert!(matches!(
            AssessmentCenter::from_yaml(yaml),
            Err(AssessmentError::MissingKind(AssessmentKind::Project))
        ));
    }

    #[test]
    fn plan_progress_is_capped() {
        let yaml = r"
kinds:
  - { kind: oj, title: t, description: d, duration: 1h, benefits: [] }
  - { kind: project, title: t, description: d, duration: 1h, benefits: [] }
  - { kind: interview, title: t, description: d, duration: 1h, benefits: [] }
marathon:
  total_problems: 1
  solved: 0
  time_limit: '01:00:00'
  verdict: { runtime: 1 ms, memory: 1 MB, passed: 1, total: 1, feedback: ok }
  problems:
    - { id: 1, title: t, difficulty: 简单, category: c, description: d, examples: [], constraints: [] }
interview: { seconds_per_topic: 60, tracks: [], feedback: { strengths: [], improvements: [], topic_scores: [] } }
projects: []
plans:
  - id: 4
    title: t
    description: d
    progress: 120
    start_date: 2024-01-01
    estimated_end_date: 2024-02-01
    courses: []
    milestones: []
";

        assert!(matches!(
            AssessmentCenter::from_yaml(yaml),
            Err(AssessmentError::InvalidProgress { plan: 4, progress: 120 })
        ));
    }
}
