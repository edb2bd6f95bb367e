//! Maps typed commands to session events for the current view.

use exam_core::model::{ChapterId, OPTION_COUNT};
use exam_core::session::{QuizEvent, QuizView, SessionState};
use exam_core::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Event(QuizEvent),
    Help,
    Quit,
    Unknown,
}

#[must_use]
pub fn parse(line: &str, state: &SessionState, catalog: &Catalog) -> Input {
    let token = line.trim().to_lowercase();
    match token.as_str() {
        "q" | "quit" => return Input::Quit,
        "h" | "?" | "help" => return Input::Help,
        _ => {}
    }

    let event = match state.view() {
        QuizView::Dashboard => dashboard(&token, catalog),
        QuizView::Loading => (token == "x").then_some(QuizEvent::Exit),
        QuizView::Quiz => quiz(&token, state),
        QuizView::Results => match token.as_str() {
            "r" => Some(QuizEvent::Retry),
            "x" => Some(QuizEvent::Exit),
            _ => None,
        },
    };
    event.map_or(Input::Unknown, Input::Event)
}

fn dashboard(token: &str, catalog: &Catalog) -> Option<QuizEvent> {
    if token == "m" {
        return Some(QuizEvent::StartAttempt(catalog.mock_chapter().clone()));
    }
    let id: ChapterId = token.parse().ok()?;
    catalog
        .find(id)
        .map(|chapter| QuizEvent::StartAttempt(chapter.clone()))
}

fn quiz(token: &str, state: &SessionState) -> Option<QuizEvent> {
    match token {
        "n" => return Some(QuizEvent::Next),
        "p" => return Some(QuizEvent::Prev),
        "s" => return Some(QuizEvent::Submit),
        "x" => return Some(QuizEvent::Exit),
        _ => {}
    }
    let option = option_index(token)?;
    let question = state.current_question()?;
    Some(QuizEvent::SelectAnswer {
        question_id: question.id(),
        option,
    })
}

/// `a`-`d` or `1`-`4` to a 0-based option index.
fn option_index(token: &str) -> Option<usize> {
    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let index = match c {
        'a'..='z' => c as usize - 'a' as usize,
        '1'..='9' => c as usize - '1' as usize,
        _ => return None,
    };
    (index < OPTION_COUNT).then_some(index)
}

/// Letter shown next to an option.
#[must_use]
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}
