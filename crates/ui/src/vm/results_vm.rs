use services::QuizReport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MistakeRowVm {
    pub meaning: String,
    pub expected_word: String,
    pub given_answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub percent_label: String,
    pub headline: &'static str,
    pub mistakes: Vec<MistakeRowVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn has_mistakes(&self) -> bool {
        !self.mistakes.is_empty()
    }
}

#[must_use]
pub fn map_results(report: &QuizReport) -> ResultsVm {
    let headline = if report.is_perfect() {
        "Perfect score!"
    } else if report.percent >= 80 {
        "Great job!"
    } else if report.percent >= 50 {
        "Good effort. Review the words below."
    } else {
        "Keep practicing. Review the words below."
    };

    let mistakes = report
        .mistakes
        .iter()
        .map(|mistake| {
            let given = mistake.given_answer.trim();
            MistakeRowVm {
                meaning: mistake.meaning.clone(),
                expected_word: mistake.expected_word.clone(),
                given_answer: if given.is_empty() {
                    "(blank)".to_string()
                } else {
                    given.to_string()
                },
            }
        })
        .collect();

    ResultsVm {
        score_label: format!("{} / {}", report.score, report.total),
        percent_label: format!("{}%", report.percent),
        headline,
        mistakes,
    }
}
