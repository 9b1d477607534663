//! Mock interview: topic lists per track and seniority, and the session that
//! walks through them.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Deserialize;
use tracing::debug;

/// Placeholder transcript recorded for each discussed topic.
pub const TRANSCRIPT_PLACEHOLDER: &str =
    "此处将显示您对该主题的讨论内容。在实际实现中，这将是AI对您的语音内容进行处理后的文本记录。";

/// Interview specialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Front-end engineering.
    Frontend,

    /// Back-end engineering.
    Backend,
}

impl Track {
    /// Every track.
    pub const ALL: [Self; 2] = [Self::Frontend, Self::Backend];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "前端开发",
            Self::Backend => "后端开发",
        }
    }
}

impl Display for Track {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Interview difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    /// Entry level.
    Junior,

    /// Mid level.
    Midlevel,

    /// Senior level.
    Senior,
}

impl Seniority {
    /// Every level, most junior first.
    pub const ALL: [Self; 3] = [Self::Junior, Self::Midlevel, Self::Senior];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "初级",
            Self::Midlevel => "中级",
            Self::Senior => "高级",
        }
    }
}

impl Display for Seniority {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Certificate a passed interview counts towards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Certification {
    /// Certificate name.
    pub name: String,

    /// Issuing body.
    pub organization: String,

    /// Validity, e.g. `3年`.
    pub valid_for: String,
}

/// Score and comment for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicScore {
    /// Out of 100.
    pub score: u32,

    /// Reviewer comment.
    pub comment: String,
}

/// Result of a finished interview.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterviewFeedback {
    /// What went well.
    pub strengths: Vec<String>,

    /// What to work on.
    pub improvements: Vec<String>,

    /// Per-topic scores, in topic order.
    pub topic_scores: Vec<TopicScore>,
}

impl InterviewFeedback {
    /// Mean topic score, rounded down. Zero without scores.
    pub fn overall_score(&self) -> u32 {
        let count = u32::try_from(self.topic_scores.len()).unwrap_or(u32::MAX);

        self.topic_scores
            .iter()
            .map(|topic| topic.score)
            .sum::<u32>()
            .checked_div(count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LevelTopics {
    level: Seniority,
    certification: Certification,
    topics: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackTopics {
    track: Track,
    levels: Vec<LevelTopics>,
}

/// Interview topics and certifications for every track and level.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewBank {
    seconds_per_topic: u32,
    feedback: InterviewFeedback,
    tracks: Vec<TrackTopics>,
}

impl InterviewBank {
    fn level(&self, track: Track, level: Seniority) -> Option<&LevelTopics> {
        self.tracks
            .iter()
            .find(|topics| topics.track == track)
            .and_then(|topics| topics.levels.iter().find(|topics| topics.level == level))
    }

    /// Topics discussed at `level` on `track`.
    pub fn topics(&self, track: Track, level: Seniority) -> &[String] {
        self.level(track, level)
            .map_or(&[], |topics| topics.topics.as_slice())
    }

    /// Certificate for `level` on `track`.
    pub fn certification(&self, track: Track, level: Seniority) -> Option<&Certification> {
        self.level(track, level)
            .map(|topics| &topics.certification)
    }

    /// Time allowed per topic.
    pub const fn seconds_per_topic(&self) -> u32 {
        self.seconds_per_topic
    }

    /// A new session, still in preparation.
    pub fn session(&self, track: Track, level: Seniority) -> InterviewSession {
        InterviewSession {
            track,
            level,
            topics: self.topics(track, level).to_vec(),
            feedback: self.feedback.clone(),
            stage: InterviewStage::Prep,
            responses: Vec::new(),
        }
    }
}

/// Where an interview session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewStage {
    /// Choosing track and level.
    Prep,

    /// Discussing the topic at this index.
    Ongoing(usize),

    /// All topics discussed.
    Feedback,
}

/// One run through the topics of a track and level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSession {
    track: Track,
    level: Seniority,
    topics: Vec<String>,
    feedback: InterviewFeedback,
    stage: InterviewStage,
    responses: Vec<String>,
}

impl InterviewSession {
    /// Begin with the first topic, discarding earlier responses. A session
    /// without topics goes straight to feedback.
    pub fn start(&mut self) {
        debug!(track = ?self.track, level = ?self.level, "starting interview");

        self.responses.clear();
        self.stage = if self.topics.is_empty() {
            InterviewStage::Feedback
        } else {
            InterviewStage::Ongoing(0)
        };
    }

    /// Record the transcript for the current topic and move on.
    pub fn next_topic(&mut self) -> InterviewStage {
        if let InterviewStage::Ongoing(topic) = self.stage {
            self.responses.push(TRANSCRIPT_PLACEHOLDER.to_string());

            self.stage = match topic.checked_add(1) {
                Some(next) if next < self.topics.len() => InterviewStage::Ongoing(next),
                _ => InterviewStage::Feedback,
            };
        }

        self.stage
    }

    /// Back to preparation.
    pub fn restart(&mut self) {
        self.stage = InterviewStage::Prep;
        self.responses.clear();
    }

    /// Current stage.
    pub const fn stage(&self) -> InterviewStage {
        self.stage
    }

    /// Topic under discussion.
    pub fn current_topic(&self) -> Option<&str> {
        match self.stage {
            InterviewStage::Ongoing(topic) => self.topics.get(topic).map(String::as_str),
            InterviewStage::Prep | InterviewStage::Feedback => None,
        }
    }

    /// All topics of the session.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Transcripts recorded so far.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Feedback, once every topic has been discussed.
    pub fn feedback(&self) -> Option<&InterviewFeedback> {
        matches!(self.stage, InterviewStage::Feedback).then_some(&self.feedback)
    }

    /// Track being interviewed for.
    pub const fn track(&self) -> Track {
        self.track
    }

    /// Level being interviewed for.
    pub const fn level(&self) -> Seniority {
        self.level
    }
}

/// Countdown display, e.g. `5:00` or `0:07`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::assessments::AssessmentCenter;

    use super::*;

    #[test]
    fn every_track_and_level_has_five_topics() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let bank = center.interview();

        for track in Track::ALL {
            for level in Seniority::ALL {
                assert_eq!(bank.topics(track, level).len(), 5, "{track} {level}");
                assert!(bank.certification(track, level).is_some(), "{track} {level}");
            }
        }

        assert_eq!(
            bank.certification(Track::Backend, Seniority::Senior)
                .map(|certification| certification.name.as_str()),
            Some("HCIE-后端高级架构师")
        );

        Ok(())
    }

    #[test]
    fn session_walks_every_topic_then_gives_feedback() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let mut session = center.interview().session(Track::Frontend, Seniority::Junior);

        assert_eq!(session.stage(), InterviewStage::Prep);
        assert!(session.feedback().is_none());

        session.start();
        assert_eq!(session.current_topic(), Some("前端开发的基础技术栈及其应用场景"));

        for expected in 1..5 {
            assert_eq!(session.next_topic(), InterviewStage::Ongoing(expected));
        }

        assert_eq!(session.next_topic(), InterviewStage::Feedback);
        assert_eq!(session.responses().len(), 5);
        assert_eq!(session.feedback().map(InterviewFeedback::overall_score), Some(85));

        // Further calls don't record more transcripts.
        assert_eq!(session.next_topic(), InterviewStage::Feedback);
        assert_eq!(session.responses().len(), 5);

        Ok(())
    }

    #[test]
    fn restart_discards_responses() -> TestResult {
        let center = AssessmentCenter::demo()?;
        let mut session = center.interview().session(Track::Backend, Seniority::Midlevel);

        session.start();
        session.next_topic();
        session.restart();

        assert_eq!(session.stage(), InterviewStage::Prep);
        assert!(session.responses().is_empty());
        assert!(session.current_topic().is_none());

        Ok(())
    }

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(300), "5:00");
        assert_eq!(format_clock(67), "1:07");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn overall_score_without_topics_is_zero() {
        let feedback = InterviewFeedback {
            strengths: Vec::new(),
            improvements: Vec::new(),
            topic_scores: Vec::new(),
        };

        assert_eq!(feedback.overall_score(), 0);
    }
}
