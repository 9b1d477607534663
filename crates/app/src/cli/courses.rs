use std::io::Write;

use clap::{Args, Subcommand};
use keepstudy::catalog::{Course, CourseFilter};
use keepstudy_app::{context::AppContext, errors::AppError, storefront::StorefrontError};

use super::render::table;

#[derive(Debug, Args)]
pub(crate) struct CoursesCommand {
    #[command(subcommand)]
    command: CoursesSubcommand,
}

#[derive(Debug, Subcommand)]
enum CoursesSubcommand {
    /// List courses, optionally filtered
    List(ListCoursesArgs),

    /// Show one course in detail
    Show(ShowCourseArgs),
}

#[derive(Debug, Args)]
struct ListCoursesArgs {
    /// Match title, description or tags
    #[arg(long, short, default_value = "")]
    query: String,

    /// Only this category
    #[arg(long)]
    category: Option<String>,

    /// Only this level (入门, 中级, 进阶)
    #[arg(long)]
    level: Option<String>,
}

#[derive(Debug, Args)]
struct ShowCourseArgs {
    /// Course id
    id: u32,
}

pub(crate) fn run(
    command: CoursesCommand,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), AppError> {
    match command.command {
        CoursesSubcommand::List(args) => list(args, context, out),
        CoursesSubcommand::Show(args) => show(&args, context, out),
    }
}

fn list(args: ListCoursesArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let filter = CourseFilter {
        query: args.query,
        category: args.category,
        level: args.level,
    };

    let courses = context.storefront.catalog().filter(&filter);

    if courses.is_empty() {
        writeln!(out, "没有找到匹配的课程")?;

        return Ok(());
    }

    let rows = courses.iter().map(|course| {
        [
            course.id.to_string(),
            course.title.clone(),
            course.category.clone(),
            course.level.clone(),
            format!("{:.1}", course.rating),
            course.price.clone(),
        ]
    });

    writeln!(
        out,
        "{}",
        table(["ID", "课程", "分类", "难度", "评分", "价格"], rows, &[4, 5])
    )?;

    Ok(())
}

fn show(args: &ShowCourseArgs, context: &AppContext, out: &mut impl Write) -> Result<(), AppError> {
    let course = context
        .storefront
        .catalog()
        .get(args.id)
        .ok_or(StorefrontError::UnknownCourse(args.id))?;

    write_course(course, out)
}

fn write_course(course: &Course, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{}", course.title)?;
    writeln!(out, "{}", course.description)?;
    writeln!(out)?;
    writeln!(
        out,
        "讲师: {} ({})",
        course.instructor.name, course.instructor.title
    )?;
    writeln!(
        out,
        "评分: {:.1}  学员: {}  时长: {}  难度: {}",
        course.rating, course.students, course.duration, course.level
    )?;

    match &course.original_price {
        Some(original) => writeln!(out, "价格: {} (原价 {original})", course.price)?,
        None => writeln!(out, "价格: {}", course.price)?,
    }

    writeln!(out, "标签: {}", course.tags.join(", "))?;
    writeln!(out)?;

    let chapters = course.curriculum.iter().map(|chapter| {
        [
            chapter.id.to_string(),
            chapter.title.clone(),
            chapter.lessons.to_string(),
            chapter.duration.clone(),
        ]
    });

    writeln!(
        out,
        "{}",
        table(["章节", "标题", "课时", "时长"], chapters, &[2])
    )?;

    for feature in &course.features {
        writeln!(out, "  ✓ {feature}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::cli::test_helpers::{context, output};

    use super::*;

    #[test]
    fn list_filters_by_query() -> TestResult {
        let context = context()?;
        let mut buffer = Vec::new();

        list(
            ListCoursesArgs {
                query: "react".to_string(),
                category: None,
                level: None,
            },
            &context,
            &mut buffer,
        )?;

        let text = output(buffer)?;

        assert!(text.contains("Web前端开发入门到精通"), "{text}");
        assert!(text.contains("移动应用开发 - React Native"), "{text}");
        assert!(!text.contains("区块链技术与应用"), "{text}");

        Ok(())
    }

    #[test]
    fn list_reports_no_matches() -> TestResult {
        let context = context()?;
        let mut buffer = Vec::new();

        list(
            ListCoursesArgs {
                query: "cobol".to_string(),
                category: None,
                level: None,
            },
            &context,
            &mut buffer,
        )?;

        assert_eq!(output(buffer)?, "没有找到匹配的课程\n");

        Ok(())
    }

    #[test]
    fn show_prints_prices_and_curriculum() -> TestResult {
        let context = context()?;
        let mut buffer = Vec::new();

        show(&ShowCourseArgs { id: 4 }, &context, &mut buffer)?;

        let text = output(buffer)?;

        assert!(text.contains("价格: ¥349 (原价 ¥449)"), "{text}");
        assert!(text.contains("动态规划"), "{text}");

        Ok(())
    }

    #[test]
    fn show_unknown_course_fails() -> TestResult {
        let context = context()?;

        let result = show(&ShowCourseArgs { id: 99 }, &context, &mut Vec::new());

        assert!(matches!(
            result,
            Err(AppError::Storefront(StorefrontError::UnknownCourse(99)))
        ));

        Ok(())
    }
}
