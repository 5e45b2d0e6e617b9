//! Interactive line-based play loop.

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use quizzer_engine::{App, QuizFile, SessionSnapshot, View};

use crate::render::render;

/// What a line of user input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    /// 1-based number as typed.
    Choose(usize),
    Continue,
    Retry,
    Menu,
    Quit,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Input::Continue,
        "q" | "quit" => Input::Quit,
        "m" | "menu" => Input::Menu,
        "r" | "retry" | "restart" => Input::Retry,
        other => match other.parse::<usize>() {
            Ok(n) if n > 0 => Input::Choose(n),
            _ => Input::Unknown,
        },
    }
}

/// Apply one input to the session. Returns `false` when the user quits.
fn apply(app: &mut App, view: View, input: Input) -> bool {
    match (view, input) {
        (_, Input::Quit) => return false,
        (View::Quiz | View::Results, Input::Menu) => app.back_to_menu(),
        (View::Quiz | View::Results, Input::Retry) => app.reset_quiz(),
        (View::Menu, Input::Choose(n)) => {
            if !app.start_available(n - 1) {
                tracing::debug!(choice = n, "No quiz at menu position");
            }
        }
        (View::Quiz, Input::Choose(n)) => {
            app.select_answer(n - 1);
            app.submit_answer();
        }
        (View::Quiz, Input::Continue) => app.next_question(),
        _ => {}
    }
    true
}

/// Load quizzes, optionally open `file`, and run until quit or end of input.
pub async fn run(app: &mut App, file: Option<&Path>) -> Result<()> {
    app.load_local_quizzes().await;

    if let Some(path) = file {
        let quiz = app
            .import_quiz(path)
            .await
            .with_context(|| format!("could not open {}", path.display()))?;
        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        app.add_quiz(QuizFile::new(filename, quiz));
    }

    let latest = Rc::new(RefCell::new(Some(app.state())));
    let sink = Rc::clone(&latest);
    let subscription = app.subscribe(move |snapshot: &SessionSnapshot| {
        *sink.borrow_mut() = Some(snapshot.clone());
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();
    let mut view = app.view();

    loop {
        // Redraw only after a committed change; otherwise just re-prompt.
        if let Some(snapshot) = latest.borrow_mut().take() {
            view = snapshot.current_view;
            render(&mut stdout, &snapshot)?;
        } else {
            write!(stdout, "? ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            writeln!(stdout)?;
            break;
        };
        if !apply(app, view, parse_input(&line)) {
            break;
        }
    }

    app.unsubscribe(subscription);
    Ok(())
}
