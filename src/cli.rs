use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Multiple-choice quiz practice with answer history and wrong-answer review
#[derive(Parser, Debug, Clone)]
#[command(name = "Quiz Practice")]
#[command(about = "Practice multiple-choice questions and review your mistakes", long_about = None)]
#[command(version)]
pub struct Args {
    /// Use in-memory store for testing
    #[arg(long, help = "Use in-memory store (nothing is saved)")]
    pub test: bool,

    /// Custom store file path
    #[arg(long, value_name = "PATH", help = "Use custom store file path")]
    pub db_path: Option<PathBuf>,

    /// JSON file holding the question corpus
    #[arg(
        long,
        value_name = "PATH",
        default_value = "ipas_questions_cleaned.json",
        help = "JSON file with the question corpus"
    )]
    pub questions: PathBuf,

    /// Override current date for answer timestamps (YYYY-MM-DD format)
    #[arg(
        long,
        value_name = "DATE",
        help = "Override current date (YYYY-MM-DD format)"
    )]
    pub override_date: Option<String>,

    /// Present questions in file order instead of shuffling
    #[arg(long, help = "Do not shuffle questions")]
    pub in_order: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the override_date argument if provided
    pub fn validate_override_date(&self) -> Result<Option<NaiveDate>, String> {
        match &self.override_date {
            Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| {
                    format!(
                        "Invalid date format for --override-date: '{}'. Expected YYYY-MM-DD",
                        date_str
                    )
                }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("quiz_practice").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_parse_no_args() {
        let args = parse(&[]);
        assert!(!args.test);
        assert!(!args.in_order);
        assert!(args.db_path.is_none());
        assert!(args.override_date.is_none());
        assert_eq!(args.questions, PathBuf::from("ipas_questions_cleaned.json"));
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "--test",
            "--in-order",
            "--db-path",
            "/tmp/quiz.db",
            "--questions",
            "data/questions.json",
            "--override-date",
            "2024-06-15",
        ]);
        assert!(args.test);
        assert!(args.in_order);
        assert_eq!(args.db_path, Some(PathBuf::from("/tmp/quiz.db")));
        assert_eq!(args.questions, PathBuf::from("data/questions.json"));
        assert_eq!(args.override_date, Some("2024-06-15".to_string()));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Args::try_parse_from(["quiz_practice", "--shuffle-seed", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_override_date_valid() {
        let args = parse(&["--override-date", "2024-01-15"]);
        assert_eq!(
            args.validate_override_date(),
            Ok(Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()))
        );
    }

    #[test]
    fn test_validate_override_date_invalid_format() {
        let args = parse(&["--override-date", "2024/01/15"]);
        let err = args.validate_override_date().unwrap_err();
        assert!(err.contains("Invalid date format"));
    }

    #[test]
    fn test_validate_override_date_invalid_date() {
        let args = parse(&["--override-date", "2024-13-01"]);
        assert!(args.validate_override_date().is_err());
    }

    #[test]
    fn test_validate_override_date_none() {
        let args = parse(&[]);
        assert_eq!(args.validate_override_date(), Ok(None));
    }
}
