use std::io::Write;

use clap::{Args, Subcommand, ValueEnum};
use keepstudy::assessments::{AssessmentCenter, LearningPlan, Seniority, Track, format_clock};
use keepstudy_app::errors::AppError;

use super::render::table;

#[derive(Debug, Args)]
pub(crate) struct AssessmentsCommand {
    #[command(subcommand)]
    command: AssessmentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum AssessmentsSubcommand {
    /// List the assessment kinds on offer
    List,

    /// List projects open for review
    Projects,

    /// Show one project brief
    Project(IdArgs),

    /// List learning plans
    Plans,

    /// Show one learning plan
    Plan(IdArgs),

    /// Show mock interview topics
    Interview(InterviewArgs),
}

#[derive(Debug, Args)]
struct IdArgs {
    /// Id to show
    id: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrackArg {
    /// 前端开发
    Frontend,

    /// 后端开发
    Backend,
}

impl From<TrackArg> for Track {
    fn from(value: TrackArg) -> Self {
        match value {
            TrackArg::Frontend => Self::Frontend,
            TrackArg::Backend => Self::Backend,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// 初级
    Junior,

    /// 中级
    Midlevel,

    /// 高级
    Senior,
}

impl From<LevelArg> for Seniority {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Junior => Self::Junior,
            LevelArg::Midlevel => Self::Midlevel,
            LevelArg::Senior => Self::Senior,
        }
    }
}

#[derive(Debug, Args)]
struct InterviewArgs {
    /// Interview track
    #[arg(long, value_enum, default_value_t = TrackArg::Frontend)]
    track: TrackArg,

    /// Interview level
    #[arg(long, value_enum, default_value_t = LevelArg::Junior)]
    level: LevelArg,
}

pub(crate) fn run(command: AssessmentsCommand, out: &mut impl Write) -> Result<(), AppError> {
    let center = AssessmentCenter::demo()?;

    match command.command {
        AssessmentsSubcommand::List => {
            let rows = center.kinds().iter().map(|info| {
                [
                    info.kind.slug().to_string(),
                    info.title.clone(),
                    info.duration.clone(),
                ]
            });

            writeln!(out, "{}", table(["类型", "名称", "用时"], rows, &[]))?;
        }
        AssessmentsSubcommand::Projects => {
            let rows = center.projects().iter().map(|project| {
                [
                    project.id.to_string(),
                    project.title.clone(),
                    project.difficulty.clone(),
                    project.expected_time.clone(),
                    project.points.to_string(),
                ]
            });

            writeln!(out, "{}", table(["ID", "项目", "难度", "周期", "积分"], rows, &[4]))?;
        }
        AssessmentsSubcommand::Project(args) => {
            let project = center
                .project(args.id)
                .ok_or(AppError::UnknownProject(args.id))?;

            writeln!(out, "{} ({})", project.title, project.category)?;
            writeln!(out, "{}", project.description)?;
            writeln!(out, "技能: {}", project.skills.join(", "))?;

            for requirement in &project.requirements {
                writeln!(out, "- {requirement}")?;
            }

            writeln!(out, "完成可获得: {}", project.certificate)?;
        }
        AssessmentsSubcommand::Plans => {
            let rows = center.plans().iter().map(|plan| {
                [
                    plan.id.to_string(),
                    plan.title.clone(),
                    format!("{}%", plan.progress),
                    plan.estimated_end_date.to_string(),
                ]
            });

            writeln!(out, "{}", table(["ID", "计划", "进度", "预计完成"], rows, &[2]))?;
        }
        AssessmentsSubcommand::Plan(args) => {
            let plan = center.plan(args.id).ok_or(AppError::UnknownPlan(args.id))?;

            write_plan(plan, out)?;
        }
        AssessmentsSubcommand::Interview(args) => {
            let (track, level) = (Track::from(args.track), Seniority::from(args.level));
            let bank = center.interview();

            writeln!(
                out,
                "{track} · {level} · 每个主题 {}",
                format_clock(bank.seconds_per_topic())
            )?;

            if let Some(certification) = bank.certification(track, level) {
                writeln!(out, "认证: {} ({})", certification.name, certification.organization)?;
            }

            for (number, topic) in (1..).zip(bank.topics(track, level)) {
                writeln!(out, "{number}. {topic}")?;
            }
        }
    }

    Ok(())
}

fn write_plan(plan: &LearningPlan, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{} · {}%", plan.title, plan.progress)?;
    writeln!(out, "{} 至 {}", plan.start_date, plan.estimated_end_date)?;

    let rows = plan.courses.iter().map(|course| {
        [
            course.title.clone(),
            format!("{}%", course.progress),
            course.action_label().to_string(),
        ]
    });

    writeln!(out, "{}", table(["课程", "进度", ""], rows, &[1]))?;

    for milestone in &plan.milestones {
        let marker = if milestone.completed { "✓" } else { " " };

        writeln!(out, "[{marker}] {} ({})", milestone.title, milestone.deadline)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cli::test_helpers::output;

    use super::*;

    fn run_command(command: AssessmentsSubcommand) -> TestResult<String> {
        let mut buffer = Vec::new();

        run(AssessmentsCommand { command }, &mut buffer)?;

        output(buffer)
    }

    #[test]
    fn list_shows_every_kind() -> TestResult {
        let text = run_command(AssessmentsSubcommand::List)?;

        for slug in ["oj", "project", "interview"] {
            assert!(text.contains(slug), "{slug} missing from {text}");
        }

        Ok(())
    }

    #[test]
    fn plan_lists_courses_and_milestones() -> TestResult {
        let text = run_command(AssessmentsSubcommand::Plan(IdArgs { id: 1 }))?;

        assert!(text.starts_with("Java 开发工程师 · 35%\n2023-09-15 至 2023-12-31\n"), "{text}");
        assert!(text.contains("Spring Cloud微服务"), "{text}");
        assert!(text.contains("[✓] 掌握Java语言基础 (2023-10-15)"), "{text}");
        assert!(text.contains("[ ] 完成微服务项目实战 (2023-12-31)"), "{text}");

        Ok(())
    }

    #[test]
    fn interview_numbers_topics() -> TestResult {
        let text = run_command(AssessmentsSubcommand::Interview(InterviewArgs {
            track: TrackArg::Backend,
            level: LevelArg::Senior,
        }))?;

        assert!(text.starts_with("后端开发 · 高级 · 每个主题 5:00\n"), "{text}");
        assert!(text.contains("认证: HCIE-后端高级架构师 (华为技术认证)"), "{text}");
        assert!(text.contains("5. 团队技术栈演进与管理"), "{text}");

        Ok(())
    }

    #[test]
    fn unknown_plan_fails() {
        let result = run(
            AssessmentsCommand {
                command: AssessmentsSubcommand::Plan(IdArgs { id: 9 }),
            },
            &mut Vec::new(),
        );

        assert!(matches!(result, Err(AppError::UnknownPlan(9))));
    }

    #[test]
    fn project_shows_requirements() -> TestResult {
        let text = run_command(AssessmentsSubcommand::Project(IdArgs { id: 3 }))?;

        assert!(text.starts_with("个人博客系统 (全栈开发)\n"), "{text}");
        assert!(text.contains("- 支持Markdown编辑和预览"), "{text}");

        Ok(())
    }
}
