//! Plain-text screens for each session view.

use std::io::{self, Write};

use quizzer_engine::{QuizResult, SessionSnapshot, View};

const RULE: &str = "----------------------------------------";

pub fn render(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    writeln!(out)?;
    match snapshot.current_view {
        View::Menu => render_menu(out, snapshot),
        View::Quiz => render_question(out, snapshot),
        View::Results => render_results(out, snapshot),
    }
}

fn render_menu(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    writeln!(out, "Available quizzes")?;
    writeln!(out, "{RULE}")?;
    if snapshot.available_quizzes.is_empty() {
        writeln!(out, "No quizzes found.")?;
    }
    for (i, file) in snapshot.available_quizzes.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} questions)",
            i + 1,
            file.quiz.title(),
            file.quiz.len()
        )?;
        writeln!(out, "   {}", file.quiz.description())?;
    }
    writeln!(out, "{RULE}")?;
    write!(out, "Pick a quiz number, or q to quit: ")?;
    out.flush()
}

fn render_question(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    let (Some(quiz), Some(question), Some(progress)) = (
        snapshot.current_quiz.as_ref(),
        snapshot.current_question(),
        snapshot.progress(),
    ) else {
        return Ok(());
    };

    writeln!(out, "{}", quiz.title())?;
    writeln!(
        out,
        "Question {} of {}  |  Score: {}/{}",
        progress.question_number, progress.total_questions, progress.score, progress.answered
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", question.prompt())?;
    writeln!(out)?;

    for (i, option) in question.options().iter().enumerate() {
        let marker = if snapshot.selected_answer == Some(i) {
            '>'
        } else {
            ' '
        };
        writeln!(out, "{marker} {}. {option}", i + 1)?;
    }

    if snapshot.show_explanation {
        writeln!(out)?;
        let last = snapshot.user_answers.last();
        if last.is_some_and(|answer| answer.is_correct()) {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(
                out,
                "Incorrect. The correct answer is: {}",
                question.correct_option()
            )?;
        }
        writeln!(out, "{}", question.explanation())?;
        writeln!(out, "{RULE}")?;
        let next = if progress.question_number < progress.total_questions {
            "next question"
        } else {
            "see results"
        };
        write!(out, "Press Enter for {next} (m: menu, q: quit): ")?;
    } else {
        writeln!(out, "{RULE}")?;
        write!(out, "Answer with a number (r: restart, m: menu, q: quit): ")?;
    }
    out.flush()
}

fn render_results(out: &mut impl Write, snapshot: &SessionSnapshot) -> io::Result<()> {
    let Some(result) = snapshot.last_result.as_ref() else {
        return Ok(());
    };
    let summary = result.summary();

    writeln!(out, "Results: {}", result.quiz_title)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "You scored {} out of {} ({}%)",
        summary.score, summary.total, summary.percentage
    )?;
    writeln!(out, "{}", summary.message())?;
    writeln!(out)?;

    for (i, review) in snapshot.review().iter().enumerate() {
        let mark = if review.is_correct() { "[x]" } else { "[ ]" };
        writeln!(out, "{mark} {}. {}", i + 1, review.prompt())?;
        if let Some(wrong) = review.wrong_option() {
            writeln!(out, "      Your answer: {wrong}")?;
        }
        writeln!(out, "      Correct answer: {}", review.correct_option())?;
        writeln!(out, "      {}", review.explanation())?;
    }

    writeln!(out, "{RULE}")?;
    write!(out, "r: retry, m: menu, q: quit: ")?;
    out.flush()
}

/// One line of the history listing.
pub fn history_line(result: &QuizResult) -> String {
    format!(
        "{}  {}  {}/{} ({}%)",
        result.completed_at.format("%Y-%m-%d %H:%M"),
        result.quiz_title,
        result.correct_answers,
        result.total_questions,
        result.percentage
    )
}
