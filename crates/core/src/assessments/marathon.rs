//! Coding marathon: a rotating problem set with a canned judge.

use serde::Deserialize;
use tracing::debug;

/// Sample input and output of a problem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Example {
    /// Input, as shown to the learner.
    pub input: String,

    /// Expected output.
    pub output: String,

    /// Why the output is correct.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A judged programming problem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Problem {
    /// Problem number.
    pub id: u32,

    /// Display title.
    pub title: String,

    /// `简单`, `中等` or `困难`.
    pub difficulty: String,

    /// Topic, e.g. `数组`.
    pub category: String,

    /// Statement.
    pub description: String,

    /// Worked examples.
    pub examples: Vec<Example>,

    /// Input bounds.
    pub constraints: Vec<String>,
}

impl Problem {
    /// Badge classes for the difficulty label.
    pub fn difficulty_class(&self) -> &'static str {
        match self.difficulty.as_str() {
            "简单" => "bg-green-100 text-green-800",
            "中等" => "bg-yellow-100 text-yellow-800",
            _ => "bg-red-100 text-red-800",
        }
    }
}

/// Judge result for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Verdict {
    /// Wall time.
    pub runtime: String,

    /// Peak memory.
    pub memory: String,

    /// Passed test cases.
    pub passed: u32,

    /// Total test cases.
    pub total: u32,

    /// Reviewer comment.
    pub feedback: String,
}

impl Verdict {
    /// Whether every test case passed.
    pub const fn is_accepted(&self) -> bool {
        self.passed == self.total
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct MarathonFixture {
    total_problems: u32,
    solved: u32,
    time_limit: String,
    verdict: Verdict,
    pub(super) problems: Vec<Problem>,
}

/// Progress through a coding marathon.
///
/// Problems rotate: moving past the last one starts the set again. Each move
/// counts the current problem as done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marathon {
    problems: Vec<Problem>,
    verdict: Verdict,
    time_limit: String,
    total: u32,
    remaining: u32,
    index: usize,
}

impl Marathon {
    pub(super) fn new(fixture: &MarathonFixture) -> Self {
        Self {
            problems: fixture.problems.clone(),
            verdict: fixture.verdict.clone(),
            time_limit: fixture.time_limit.clone(),
            total: fixture.total_problems,
            remaining: fixture.total_problems.saturating_sub(fixture.solved),
            index: 0,
        }
    }

    /// Problem being worked on.
    pub fn current(&self) -> Option<&Problem> {
        self.problems.get(self.index)
    }

    /// Judge `code` against the current problem. Blank code isn't submitted.
    pub fn submit(&self, code: &str) -> Option<Verdict> {
        if code.trim().is_empty() {
            return None;
        }

        debug!(problem = ?self.current().map(|problem| problem.id), "judging submission");

        Some(self.verdict.clone())
    }

    /// Move on to the next problem.
    pub fn advance(&mut self) {
        self.index = match self.index.checked_add(1) {
            Some(next) if next < self.problems.len() => next,
            _ => 0,
        };
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Problems still to solve.
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Problems solved so far.
    pub const fn solved(&self) -> u32 {
        self.total.saturating_sub(self.remaining)
    }

    /// Problems in the whole marathon.
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Solved share, in whole percent.
    pub fn percent_complete(&self) -> u32 {
        self.solved()
            .saturating_mul(100)
            .checked_div(self.total)
            .unwrap_or(0)
    }

    /// Time allowed, e.g. `02:45:00`.
    pub fn time_limit(&self) -> &str {
        &self.time_limit
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::assessments::AssessmentCenter;

    #[test]
    fn starts_part_way_through() -> TestResult {
        let marathon = AssessmentCenter::demo()?.marathon();

        assert_eq!(marathon.solved(), 2);
        assert_eq!(marathon.remaining(), 8);
        assert_eq!(marathon.percent_complete(), 20);
        assert_eq!(marathon.time_limit(), "02:45:00");
        assert_eq!(marathon.current().map(|problem| problem.title.as_str()), Some("两数之和"));

        Ok(())
    }

    #[test]
    fn problems_rotate_and_count_down() -> TestResult {
        let mut marathon = AssessmentCenter::demo()?.marathon();

        marathon.advance();
        assert_eq!(marathon.current().map(|problem| problem.id), Some(2));

        marathon.advance();
        assert_eq!(marathon.current().map(|problem| problem.id), Some(1));
        assert_eq!(marathon.remaining(), 6);

        for _ in 0..10 {
            marathon.advance();
        }

        assert_eq!(marathon.remaining(), 0);
        assert_eq!(marathon.percent_complete(), 100);

        Ok(())
    }

    #[test]
    fn blank_code_is_not_judged() -> TestResult {
        let marathon = AssessmentCenter::demo()?.marathon();

        assert!(marathon.submit("  \n").is_none());

        let verdict = marathon.submit("return [0, 1];").expect("code should be judged");

        assert!(verdict.is_accepted());
        assert_eq!(verdict.runtime, "56 ms");

        Ok(())
    }

    #[test]
    fn difficulty_badges() -> TestResult {
        let marathon = AssessmentCenter::demo()?.marathon();
        let problem = marathon.current().expect("marathon should have a problem");

        assert_eq!(problem.difficulty_class(), "bg-green-100 text-green-800");

        Ok(())
    }
}
