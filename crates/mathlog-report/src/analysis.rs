//! The analysis pipeline
//!
//! Runs every report step against one immutable table. Each step reads the
//! table and produces a [`Section`]; nothing feeds back into the data.

use crate::chart::write_learning_curve;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::format;
use crate::report::{AnalysisReport, Section};
use crate::table::ReportTable;
use mathlog_io::{load_table, AttemptTable, Difficulty, Operation};
use mathlog_query::*;
use mathlog_stats::{
    indicators, ComparisonError, GroupStats, SessionTrend, SummaryStats, TwoSampleComparison,
    DESCRIBE_LABELS,
};
use tracing::{debug, info, warn};

/// Section titles, in report order
pub mod titles {
    pub const EXPLORATION: &str = "BASIC DATA EXPLORATION";
    pub const CORRECT: &str = "CORRECT ANSWERS";
    pub const SLOW: &str = "SLOWEST PROBLEMS";
    pub const MULTIPLICATION: &str = "MULTIPLICATION PROBLEMS";
    pub const HARD: &str = "HARD DIFFICULTY PROBLEMS";
    pub const WRONG_MULTIPLICATION: &str = "INCORRECT MULTIPLICATION";
    pub const QUICK_CORRECT: &str = "QUICK & CORRECT";
    pub const STRUGGLING: &str = "STRUGGLING WITH HARD PROBLEMS";
    pub const IMPROVEMENT: &str = "IMPROVEMENT OVER TIME";
    pub const EXTREMES: &str = "FASTEST AND SLOWEST PROBLEMS";
    pub const MOST_ATTEMPTS: &str = "PROBLEMS NEEDING MOST ATTEMPTS";
    pub const OPERATIONS: &str = "PERFORMANCE BY OPERATION";
    pub const COMPARISON: &str = "EARLY VS. LATE SESSIONS";
    pub const QUERIES: &str = "CUSTOM QUERIES";
    pub const TREND: &str = "LEARNING CURVE";

    pub const GROUP_STATISTICS: &str = "Table 1: Group Statistics";
    pub const SAMPLES_TEST: &str = "Table 2: Independent Samples Test";
}

/// One analysis run over a loaded table
pub struct Analysis<'a> {
    table: &'a AttemptTable,
    config: &'a AnalysisConfig,
}

impl<'a> Analysis<'a> {
    pub fn new(table: &'a AttemptTable, config: &'a AnalysisConfig) -> Self {
        Self { table, config }
    }

    /// Run every step and collect the report
    pub fn run(&self) -> Result<AnalysisReport> {
        info!(records = self.table.len(), "Starting analysis");

        let mut sections = vec![
            self.exploration(),
            self.correct_answers()?,
            self.slow_problems()?,
            self.by_label(titles::MULTIPLICATION, Field::Operation, Operation::Multiplication.as_str())?,
            self.by_label(titles::HARD, Field::DifficultyLevel, Difficulty::Hard.as_str())?,
            self.wrong_multiplication()?,
            self.quick_correct()?,
            self.struggling()?,
            self.improvement()?,
            self.fastest_slowest()?,
            self.most_attempts()?,
            self.operation_performance()?,
        ];

        let (comparison_section, comparison, findings) = self.comparison()?;
        sections.push(comparison_section);

        if !self.config.queries.is_empty() {
            sections.push(self.custom_queries()?);
        }

        let trend = self.trend();
        sections.push(trend_section(&trend));

        info!(sections = sections.len(), "Analysis complete");
        Ok(AnalysisReport {
            records: self.table.len(),
            sections,
            comparison,
            findings,
            trend,
            chart_path: None,
        })
    }

    fn preview(&self) -> usize {
        self.config.output.preview_rows
    }

    fn early_predicate(&self) -> Predicate {
        Predicate::between(
            Field::SessionNumber,
            1.0,
            self.config.groups.early_max_session as f64,
        )
    }

    fn late_predicate(&self) -> Predicate {
        Predicate::from(Comparison::field_ge(
            Field::SessionNumber,
            self.config.groups.late_min_session as f64,
        ))
    }

    fn early_label(&self) -> String {
        format!("Early Sessions (1-{})", self.config.groups.early_max_session)
    }

    fn late_label(&self) -> String {
        let late_min = self.config.groups.late_min_session;
        match max_value(self.table, Field::SessionNumber) {
            Ok(Some(last)) if (last as u32) > late_min => {
                format!("Late Sessions ({}-{})", late_min, last as u32)
            }
            _ => format!("Late Sessions ({}+)", late_min),
        }
    }

    /// Step 1: shape, columns, first rows and numeric summary
    fn exploration(&self) -> Section {
        let schema = self.table.schema();
        let (rows, cols) = schema.shape();

        let mut section = Section::new(titles::EXPLORATION);
        section.text(format!("Total records: {}", self.table.len()));
        section.text(format!("Shape: ({}, {})", rows, cols));
        section.text(format!("Columns: {}", schema.column_names().join(", ")));
        section.table(ReportTable::records(
            format!("First {} rows", self.preview().min(self.table.len())),
            self.table.head(self.preview()),
            &[],
        ));

        let numeric: Vec<Field> = Field::ALL.into_iter().filter(Field::is_numeric).collect();
        let summaries: Vec<SummaryStats> = numeric
            .iter()
            .map(|field| {
                let values: Vec<f64> = self
                    .table
                    .iter()
                    .filter_map(|r| r.field_value(*field).as_number())
                    .collect();
                SummaryStats::from_data(&values)
            })
            .collect();

        let mut describe = ReportTable::new(
            "Summary Statistics",
            std::iter::once("statistic").chain(numeric.iter().map(|f| f.name())),
        );
        let described: Vec<[f64; 8]> = summaries.iter().map(SummaryStats::describe_row).collect();
        for (i, label) in DESCRIBE_LABELS.iter().enumerate() {
            let decimals = if i == 0 { 0 } else { 4 };
            let mut row = vec![label.to_string()];
            row.extend(described.iter().map(|d| format::fixed(d[i], decimals)));
            describe.push_row(row);
        }
        section.table(describe);
        section
    }

    /// Count line plus the first rows of a subset
    fn listing(&self, section: &mut Section, label: &str, rows: &AttemptTable, limit: usize) {
        section.text(format!("{}: {}", label, rows.len()));
        if rows.is_empty() {
            section.text("No matching rows.");
        } else {
            section.table(ReportTable::records(
                format!("First {} rows", limit.min(rows.len())),
                rows.head(limit),
                &[],
            ));
        }
    }

    /// Step 2: correct answers
    fn correct_answers(&self) -> Result<Section> {
        let correct = filter(
            self.table,
            &Predicate::from(Comparison::flag_is(Field::IsCorrect, true)),
        )?;
        debug!(rows = correct.len(), "Filtered correct answers");

        let mut section = Section::new(titles::CORRECT);
        self.listing(&mut section, "Total correct answers", &correct, self.preview().min(5));
        Ok(section)
    }

    /// Step 2: slow problems, slowest first
    fn slow_problems(&self) -> Result<Section> {
        let threshold = self.config.thresholds.slow_seconds;
        let slow = filter(
            self.table,
            &Predicate::from(Comparison::field_gt(Field::TimeSpentSeconds, threshold)),
        )?;
        let slow = sort_by(&slow, Field::TimeSpentSeconds, SortOrder::Descending)?;
        debug!(rows = slow.len(), threshold, "Filtered slow problems");

        let mut section = Section::new(format!(
            "{} (>{} seconds)",
            titles::SLOW,
            format::measure(threshold)
        ));
        self.listing(&mut section, "Total slow problems", &slow, self.preview());
        Ok(section)
    }

    /// Step 2: one categorical value
    fn by_label(&self, title: &str, field: Field, label: &str) -> Result<Section> {
        let rows = filter(
            self.table,
            &Predicate::from(Comparison::label_is(field, label)),
        )?;
        debug!(rows = rows.len(), %field, label, "Filtered by label");

        let mut section = Section::new(title);
        self.listing(
            &mut section,
            &format!("Total {} problems", label.to_lowercase()),
            &rows,
            self.preview(),
        );
        Ok(section)
    }

    /// Step 3: multiplication answered wrong
    fn wrong_multiplication(&self) -> Result<Section> {
        let predicate = Predicate::all_of([
            Comparison::label_is(Field::Operation, Operation::Multiplication.as_str()),
            Comparison::flag_is(Field::IsCorrect, false),
        ]);
        let rows = filter(self.table, &predicate)?;
        debug!(rows = rows.len(), "Filtered incorrect multiplication");

        let mut section = Section::new(titles::WRONG_MULTIPLICATION);
        self.listing(
            &mut section,
            "Total incorrect multiplication problems",
            &rows,
            self.preview(),
        );
        Ok(section)
    }

    /// Step 3: correct and under the quick threshold, fastest first
    fn quick_correct(&self) -> Result<Section> {
        let threshold = self.config.thresholds.quick_seconds;
        let predicate = Predicate::all_of([
            Comparison::flag_is(Field::IsCorrect, true),
            Comparison::field_lt(Field::TimeSpentSeconds, threshold),
        ]);
        let rows = sort_by(
            &filter(self.table, &predicate)?,
            Field::TimeSpentSeconds,
            SortOrder::Ascending,
        )?;
        debug!(rows = rows.len(), threshold, "Filtered quick correct answers");

        let mut section = Section::new(format!(
            "{} (<{} seconds)",
            titles::QUICK_CORRECT,
            format::measure(threshold)
        ));
        self.listing(&mut section, "Total quick & correct", &rows, self.preview());
        Ok(section)
    }

    /// Step 3: hard, wrong, and many attempts
    fn struggling(&self) -> Result<Section> {
        let predicate = Predicate::all_of([
            Comparison::label_is(Field::DifficultyLevel, Difficulty::Hard.as_str()),
            Comparison::flag_is(Field::IsCorrect, false),
            Comparison::field_gt(
                Field::AttemptsNeeded,
                self.config.thresholds.struggle_attempts as f64,
            ),
        ]);
        let rows = filter(self.table, &predicate)?;
        debug!(rows = rows.len(), "Filtered struggling attempts");

        let mut section = Section::new(titles::STRUGGLING);
        self.listing(&mut section, "Total struggling attempts", &rows, self.preview());
        Ok(section)
    }

    /// Step 4: early vs. late success rates
    fn improvement(&self) -> Result<Section> {
        let early = filter(self.table, &self.early_predicate())?;
        let late = filter(self.table, &self.late_predicate())?;
        let early_rate = success_rate(&early);
        let late_rate = success_rate(&late);

        if early.is_empty() || late.is_empty() {
            warn!(early = early.len(), late = late.len(), "Empty session group");
        }

        let mut section = Section::new(titles::IMPROVEMENT);
        section.text(format!(
            "{}: {} problems, {} success rate",
            self.early_label(),
            early.len(),
            format::percent(early_rate)
        ));
        section.text(format!(
            "{}: {} problems, {} success rate",
            self.late_label(),
            late.len(),
            format::percent(late_rate)
        ));
        section.text(format!(
            "Improvement: {} percentage points",
            format::points(late_rate - early_rate)
        ));
        Ok(section)
    }

    /// Step 5: fastest and slowest rows, ties included
    fn fastest_slowest(&self) -> Result<Section> {
        let columns = [Field::StudentId, Field::Problem, Field::TimeSpentSeconds];
        let mut section = Section::new(titles::EXTREMES);

        for (label, which) in [("Fastest", Extreme::Min), ("Slowest", Extreme::Max)] {
            let value = match which {
                Extreme::Min => min_value(self.table, Field::TimeSpentSeconds)?,
                Extreme::Max => max_value(self.table, Field::TimeSpentSeconds)?,
            };
            let rows = extreme_rows(self.table, Field::TimeSpentSeconds, which)?;
            section.text(format!(
                "{} time: {} seconds ({} row(s))",
                label,
                format::optional(value),
                rows.len()
            ));
            if !rows.is_empty() {
                section.table(ReportTable::records(
                    format!("{} Problem", label),
                    &rows,
                    &columns,
                ));
            }
        }
        Ok(section)
    }

    /// Step 5: every row tied at the maximum attempts
    fn most_attempts(&self) -> Result<Section> {
        let max = max_value(self.table, Field::AttemptsNeeded)?;
        let rows = extreme_rows(self.table, Field::AttemptsNeeded, Extreme::Max)?;
        let max_text = max.map_or_else(|| format::UNDEFINED.to_string(), |m| format::fixed(m, 0));

        let mut section = Section::new(titles::MOST_ATTEMPTS);
        section.text(format!("Maximum attempts needed: {}", max_text));
        if !rows.is_empty() {
            section.table(ReportTable::records(
                format!("Problems requiring {} attempts", max_text),
                &rows,
                &[
                    Field::StudentId,
                    Field::Problem,
                    Field::AttemptsNeeded,
                    Field::Operation,
                ],
            ));
        }
        Ok(section)
    }

    /// Step 6: per-operation totals and rates
    fn operation_performance(&self) -> Result<Section> {
        let stats = group_by(
            self.table,
            Field::Operation,
            &[
                Aggregation::count("total_problems"),
                Aggregation::mean("avg_time", Field::TimeSpentSeconds),
                Aggregation::percentage("success_rate", Field::IsCorrect),
                Aggregation::mean("avg_attempts", Field::AttemptsNeeded),
            ],
        )?;

        let mut table = ReportTable::new(
            "Operation Performance Summary",
            ["Operation", "Problems", "Avg Time (s)", "Success Rate (%)", "Avg Attempts"],
        );
        for row in &stats.rows {
            table.push_row(vec![
                row.key.clone(),
                format::fixed(row.values[0], 0),
                format::fixed(row.values[1], 1),
                format::fixed(row.values[2], 1),
                format::fixed(row.values[3], 2),
            ]);
        }

        let mut section = Section::new(titles::OPERATIONS);
        section.table(table);
        Ok(section)
    }

    /// Steps 7-8: group statistics, Levene, t-test and interval
    fn comparison(&self) -> Result<(Section, Option<TwoSampleComparison>, Vec<String>)> {
        let early = filter(self.table, &self.early_predicate())?;
        let late = filter(self.table, &self.late_predicate())?;
        let early_values = indicators(early.iter().map(|r| r.is_correct));
        let late_values = indicators(late.iter().map(|r| r.is_correct));

        let early_stats = GroupStats::from_values(&early_values);
        let late_stats = GroupStats::from_values(&late_values);

        let mut section = Section::new(titles::COMPARISON);
        let mut groups = ReportTable::new(
            titles::GROUP_STATISTICS,
            [
                "Session Group",
                "N",
                "Mean (Success Rate)",
                "Std. Deviation",
                "Std. Error Mean",
            ],
        );
        for (label, stats) in [
            (self.early_label(), early_stats),
            (self.late_label(), late_stats),
        ] {
            groups.push_row(vec![
                label,
                stats.n.to_string(),
                format::stat(stats.mean),
                format::stat(stats.std_dev),
                format::stat(stats.std_error),
            ]);
        }
        section.table(groups);

        let confidence = self.config.test.confidence;
        let alpha = self.config.test.alpha;
        let ci_label = confidence_label(confidence);

        let mut findings = Vec::new();
        let comparison = match TwoSampleComparison::compute(&early_values, &late_values, confidence)
        {
            Ok(cmp) => cmp,
            Err(err @ ComparisonError::InsufficientData { .. }) => {
                warn!(%err, "Skipping two-sample comparison");
                section.table(ReportTable::key_values(
                    titles::SAMPLES_TEST,
                    ["Statistical Metric", "Value"],
                    vec![
                        ("Levene's Test (p-value)".to_string(), format::UNDEFINED.to_string()),
                        ("t-value".to_string(), format::UNDEFINED.to_string()),
                        ("Degrees of Freedom (df)".to_string(), format::UNDEFINED.to_string()),
                        ("Sig. (2-tailed / p-value)".to_string(), format::UNDEFINED.to_string()),
                        (
                            "Mean Difference".to_string(),
                            format::stat(late_stats.mean - early_stats.mean),
                        ),
                        (format!("{} CI Lower Bound", ci_label), format::UNDEFINED.to_string()),
                        (format!("{} CI Upper Bound", ci_label), format::UNDEFINED.to_string()),
                    ],
                ));
                let finding = format!("INSUFFICIENT DATA: {}", err);
                section.text(finding.clone());
                findings.push(finding);
                return Ok((section, None, findings));
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            t = comparison.t_test.statistic,
            p = comparison.t_test.p_value,
            df = comparison.df,
            "Two-sample comparison"
        );

        section.table(ReportTable::key_values(
            titles::SAMPLES_TEST,
            ["Statistical Metric", "Value"],
            vec![
                ("Levene's Test (p-value)".to_string(), format::stat(comparison.levene.p_value)),
                ("t-value".to_string(), format::stat(comparison.t_test.statistic)),
                ("Degrees of Freedom (df)".to_string(), comparison.df.to_string()),
                ("Sig. (2-tailed / p-value)".to_string(), format::stat(comparison.t_test.p_value)),
                ("Mean Difference".to_string(), format::stat(comparison.mean_difference)),
                (format!("{} CI Lower Bound", ci_label), format::stat(comparison.ci_low)),
                (format!("{} CI Upper Bound", ci_label), format::stat(comparison.ci_high)),
            ],
        ));

        let finding = if comparison.is_significant(alpha) {
            format!(
                "RESEARCH FINDING: Significant learning gains observed (p < {}). \
                 Average success rate increased by {}%.",
                alpha,
                format::points(comparison.improvement_points())
            )
        } else {
            format!(
                "RESEARCH FINDING: No significant difference between groups (p = {}, alpha = {}).",
                format::stat(comparison.t_test.p_value),
                alpha
            )
        };
        section.text(finding.clone());
        findings.push(finding);

        Ok((section, Some(comparison), findings))
    }

    /// Step 9: configured text queries
    fn custom_queries(&self) -> Result<Section> {
        let mut section = Section::new(titles::QUERIES);
        for query in &self.config.queries {
            let predicate = parse_predicate(&query.filter)?;
            let mut rows = filter(self.table, &predicate)?;
            if let Some(field) = query.sort_field()? {
                rows = sort_by(&rows, field, query.order)?;
            }
            debug!(name = %query.name, rows = rows.len(), "Ran custom query");

            section.text(format!("{} [{}]", query.name, predicate));
            self.listing(
                &mut section,
                "Matching rows",
                &rows,
                query.limit.unwrap_or(self.preview()),
            );
        }
        Ok(section)
    }

    /// Step 10: success rate per session
    fn trend(&self) -> SessionTrend {
        SessionTrend::from_outcomes(self.table.iter().map(|r| (r.session_number, r.is_correct)))
    }
}

fn trend_section(trend: &SessionTrend) -> Section {
    let mut table = ReportTable::new("Success Rate by Session", ["session_number", "success_rate"]);
    for point in &trend.points {
        table.push_row(vec![point.session.to_string(), format::percent(point.success_rate)]);
    }

    let mut section = Section::new(titles::TREND);
    section.table(table);
    section
}

/// `0.95` → `95%`, `0.975` → `97.5%`
fn confidence_label(confidence: f64) -> String {
    format!("{}%", (confidence * 1000.0).round() / 10.0)
}

/// Run the analysis over an already-loaded table
pub fn run_analysis(table: &AttemptTable, config: &AnalysisConfig) -> Result<AnalysisReport> {
    Analysis::new(table, config).run()
}

/// Load the configured dataset, analyse it and write the learning curve
pub fn run_pipeline(config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;
    let table = load_table(&config.data.path)?;

    let mut report = run_analysis(&table, config)?;
    write_learning_curve(&report.trend, &config.output.chart_path)?;
    report.chart_path = Some(config.output.chart_path.clone());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathlog_io::AttemptRecord;

    fn record(op: Operation, diff: Difficulty, correct: bool, time: f64, attempts: u32, session: u32) -> AttemptRecord {
        AttemptRecord {
            student_id: format!("S{:02}", session),
            problem: format!("{} ? {}", session, attempts),
            operation: op,
            difficulty_level: diff,
            is_correct: correct,
            time_spent_seconds: time,
            attempts_needed: attempts,
            session_number: session,
        }
    }

    fn table() -> AttemptTable {
        AttemptTable::new(vec![
            record(Operation::Addition, Difficulty::Easy, true, 4.0, 1, 1),
            record(Operation::Multiplication, Difficulty::Hard, false, 25.0, 4, 2),
            record(Operation::Multiplication, Difficulty::Hard, false, 31.0, 3, 3),
            record(Operation::Division, Difficulty::Medium, true, 8.0, 1, 7),
            record(Operation::Subtraction, Difficulty::Easy, true, 4.0, 4, 12),
            record(Operation::Multiplication, Difficulty::Medium, true, 9.0, 2, 13),
        ])
    }

    fn report() -> AnalysisReport {
        run_analysis(&table(), &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let report = report();
        assert_eq!(report.sections.first().unwrap().title, titles::EXPLORATION);
        assert_eq!(report.sections.last().unwrap().title, titles::TREND);
        assert!(report.section(titles::QUERIES).is_none());
        assert_eq!(report.records, 6);
    }

    #[test]
    fn test_exploration_describe() {
        let report = report();
        let section = report.section(titles::EXPLORATION).unwrap();
        assert!(section.lines().any(|l| l == "Shape: (6, 8)"));

        let describe = section.find_table("Summary Statistics").unwrap();
        assert_eq!(
            describe.columns,
            vec!["statistic", "time_spent_seconds", "attempts_needed", "session_number"]
        );
        assert_eq!(describe.rows[0], vec!["count", "6", "6", "6"]);
        assert_eq!(describe.rows[3][2], "1.0000");
    }

    #[test]
    fn test_struggling_and_wrong_multiplication() {
        let report = report();
        let struggling = report.section(titles::STRUGGLING).unwrap();
        assert!(struggling.lines().any(|l| l == "Total struggling attempts: 2"));

        let wrong = report.section(titles::WRONG_MULTIPLICATION).unwrap();
        let rows = wrong.tables().next().unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_improvement_lines() {
        let report = report();
        let lines: Vec<&str> = report.section(titles::IMPROVEMENT).unwrap().lines().collect();
        assert_eq!(lines[0], "Early Sessions (1-5): 3 problems, 33.3% success rate");
        assert_eq!(lines[1], "Late Sessions (11-13): 2 problems, 100.0% success rate");
        assert_eq!(lines[2], "Improvement: 66.7 percentage points");
    }

    #[test]
    fn test_extremes_keep_ties() {
        let report = report();
        let fastest = report
            .section(titles::EXTREMES)
            .unwrap()
            .find_table("Fastest Problem")
            .unwrap();
        assert_eq!(fastest.len(), 2);

        let most = report.section(titles::MOST_ATTEMPTS).unwrap();
        assert!(most.lines().any(|l| l == "Maximum attempts needed: 4"));
        assert_eq!(most.tables().next().unwrap().len(), 2);
    }

    #[test]
    fn test_operation_table() {
        let report = report();
        let table = report
            .section(titles::OPERATIONS)
            .unwrap()
            .tables()
            .next()
            .unwrap();
        assert_eq!(
            table.column("Operation").unwrap(),
            vec!["Addition", "Division", "Multiplication", "Subtraction"]
        );
        assert_eq!(table.rows[2], vec!["Multiplication", "3", "21.7", "33.3", "3.00"]);
    }

    #[test]
    fn test_slow_problems_sorted_descending() {
        let report = report();
        let section = report
            .sections
            .iter()
            .find(|s| s.title.starts_with(titles::SLOW))
            .unwrap();
        assert_eq!(section.title, "SLOWEST PROBLEMS (>20.0 seconds)");
        let times = section.tables().next().unwrap().column("time_spent_seconds").unwrap();
        assert_eq!(times, vec!["31.0", "25.0"]);
    }

    #[test]
    fn test_custom_query_with_sort_and_limit() {
        let mut config = AnalysisConfig::default();
        config.queries.push(crate::config::QueryConfig {
            name: "Correct, slowest first".to_string(),
            filter: "is_correct == true".to_string(),
            sort_by: Some("time_spent_seconds".to_string()),
            order: SortOrder::Descending,
            limit: Some(2),
        });

        let report = run_analysis(&table(), &config).unwrap();
        let section = report.section(titles::QUERIES).unwrap();
        assert!(section.lines().any(|l| l == "Matching rows: 4"));
        let listed = section.tables().next().unwrap();
        assert_eq!(listed.column("time_spent_seconds").unwrap(), vec!["9.0", "8.0"]);
    }

    #[test]
    fn test_confidence_label() {
        assert_eq!(confidence_label(0.95), "95%");
        assert_eq!(confidence_label(0.975), "97.5%");
    }
}
