mod quiz_vm;
mod results_vm;

pub use quiz_vm::{QuizIntent, QuizScreen, QuizVm, restart_quiz, start_quiz};
pub use results_vm::{MistakeRowVm, ResultsVm, map_results};
