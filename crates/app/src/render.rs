//! Plain-text screens for each view.

use exam_core::Catalog;
use exam_core::session::{PassPolicy, QuizView, SessionState};

use crate::input::option_label;

#[must_use]
pub fn screen(state: &SessionState, catalog: &Catalog, policy: &PassPolicy) -> String {
    let lines = match state.view() {
        QuizView::Dashboard => dashboard(state, catalog),
        QuizView::Loading => loading(state),
        QuizView::Quiz => quiz(state),
        QuizView::Results => results(state, policy),
    };
    lines.join("\n")
}

fn dashboard(state: &SessionState, catalog: &Catalog) -> Vec<String> {
    let mut lines = vec![
        "IC38 मास्टर".to_string(),
        "बीमा एजेंट प्रमाणन परीक्षा की तैयारी".to_string(),
    ];
    if let Some(failure) = state.error() {
        lines.push(format!("! {}", failure.message()));
    }

    let mock = catalog.mock_chapter();
    lines.push(String::new());
    lines.push(format!("[m] {}", mock.title()));
    lines.push(format!("    {}", mock.description()));

    for group in catalog.sections() {
        lines.push(String::new());
        lines.push(group.section.heading().to_string());
        for chapter in group.chapters {
            lines.push(format!(
                "[{:>2}] अध्याय {}: {}",
                chapter.id().value(),
                chapter.id(),
                chapter.title()
            ));
        }
    }
    lines.push(String::new());
    lines.push("chapter number or m to start, q to quit".to_string());
    lines
}

fn loading(state: &SessionState) -> Vec<String> {
    let Some(chapter) = state.selected_chapter() else {
        return vec!["...".to_string()];
    };
    let mut lines = if chapter.is_mock() {
        vec!["परीक्षा तैयार हो रही है...".to_string()]
    } else {
        vec!["क्विज़ तैयार हो रहा है...".to_string()]
    };
    lines.push(format!(
        "कृपया प्रतीक्षा करें, हमारा AI \"{}\" के लिए प्रश्न तैयार कर रहा है।",
        chapter.title()
    ));
    if chapter.is_mock() {
        lines.push(
            "(इसमें सामान्य से थोड़ा अधिक समय लग सकता है क्योंकि हम पूरे पाठ्यक्रम को कवर कर रहे हैं)"
                .to_string(),
        );
    }
    lines.push("x to cancel".to_string());
    lines
}

fn quiz(state: &SessionState) -> Vec<String> {
    let Some(question) = state.current_question() else {
        return Vec::new();
    };
    let progress = state.progress();
    let heading = match state.selected_chapter() {
        Some(chapter) if chapter.is_mock() => format!("मॉक टेस्ट | {}", chapter.title()),
        Some(chapter) => format!("अध्याय {} | {}", chapter.id(), chapter.title()),
        None => String::new(),
    };

    let mut lines = vec![
        format!("{heading}    {} / {}", progress.position, progress.total),
        String::new(),
        question.text().to_string(),
    ];
    let selected = state.answer(question.id());
    for (index, option) in question.options().iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        lines.push(format!(" {marker} {}) {option}", option_label(index)));
    }

    lines.push(String::new());
    let mut controls = Vec::new();
    if !state.is_first() {
        controls.push("p = पिछला");
    }
    if state.is_last() {
        if state.all_answered() {
            controls.push("s = क्विज़ जमा करें");
        } else {
            controls.push("(answer every question to submit)");
        }
    } else {
        controls.push("n = अगला");
    }
    controls.push("x = बाहर निकलें");
    lines.push(format!(
        "{}    [{} answered]",
        controls.join("  "),
        progress.answered
    ));
    lines
}

fn results(state: &SessionState, policy: &PassPolicy) -> Vec<String> {
    let Some(report) = state.score_report(policy) else {
        return Vec::new();
    };
    let title = if state.selected_chapter().is_some_and(|c| c.is_mock()) {
        "मॉक टेस्ट परिणाम"
    } else {
        "क्विज़ परिणाम"
    };
    let verdict = if report.passed {
        "उत्तीर्ण (बहुत बढ़िया!)"
    } else {
        "सुधार की आवश्यकता है"
    };

    let mut lines = vec![
        title.to_string(),
        format!("{}/{}  ({}%)  {verdict}", report.score, report.total, report.percentage),
        String::new(),
        "विस्तृत उत्तर कुंजी".to_string(),
    ];

    for (number, review) in state.review().iter().enumerate() {
        let mark = if review.is_correct { '✓' } else { '✗' };
        lines.push(String::new());
        lines.push(format!("{mark} {}. {}", number + 1, review.question.text()));
        for (index, option) in review.question.options().iter().enumerate() {
            let tag = if review.question.is_correct(index) {
                "  <- सही उत्तर"
            } else if review.selected == Some(index) {
                "  <- आपका उत्तर"
            } else {
                ""
            };
            lines.push(format!("   {}) {option}{tag}", option_label(index)));
        }
        lines.push(format!("   व्याख्या: {}", review.question.explanation()));
    }

    lines.push(String::new());
    lines.push("r = पुनः प्रयास करें  x = डैशबोर्ड पर वापस जाएं".to_string());
    lines
}
