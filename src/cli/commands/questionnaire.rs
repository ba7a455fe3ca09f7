//! Questionnaire command handler
//!
//! Records the destination country and lifestyle answers in the session.

use super::{cost_table, prompt, session_store};
use crate::args::AnswerArgs;
use study_cost::config::Config;
use study_cost::models::{Question, QuestionnaireAnswers, QUESTIONS};
use study_cost::session::Session;
use study_cost::{info, verbose, warn};

/// Run the questionnaire command.
pub fn run(args: &AnswerArgs, show: bool, clear: bool, config: &Config) -> Result<(), String> {
    let store = session_store(config);
    let mut session = store
        .load()
        .map_err(|e| format!("✗ Failed to read session {}: {e}", store.path().display()))?;

    if show {
        print_answers(&session);
        return Ok(());
    }

    if clear {
        session.selected_country = None;
        session.questionnaire_answers = None;
    } else if args.is_empty() {
        ask_interactively(&mut session, config)?;
    } else {
        apply_flags(&mut session, args);
    }

    store
        .save(&session)
        .map_err(|e| format!("✗ Failed to save session {}: {e}", store.path().display()))?;
    info!("Session saved to {}", store.path().display());

    if clear {
        println!("✓ Questionnaire cleared");
    } else {
        println!(
            "✓ Saved {} of {} answers for {}",
            session.answers().answered_count(),
            QUESTIONS.len(),
            session.country()
        );
    }
    Ok(())
}

fn apply_flags(session: &mut Session, args: &AnswerArgs) {
    if let Some(country) = &args.country {
        session.selected_country = Some(country.clone());
    }
    let mut answers = session.answers();
    for (id, code) in args.given() {
        answers.set(id, code);
        if answers.label(id).is_none() {
            warn!("Unknown option '{code}' for {}; answer cleared", id.key());
        }
    }
    session.questionnaire_answers = Some(answers);
}

fn ask_interactively(session: &mut Session, config: &Config) -> Result<(), String> {
    if let Ok(table) = cost_table(config) {
        verbose!("Available countries: {}", table.countries().join(", "));
    }
    let country = prompt(&format!("Country [{}]", session.country()))?;
    if !country.is_empty() {
        session.selected_country = Some(country);
    }

    let mut answers = session.answers();
    for (step, question) in QUESTIONS.iter().enumerate() {
        println!("\n({}/{}) {}", step + 1, QUESTIONS.len(), question.title);
        ask_question(question, &mut answers)?;
    }
    session.questionnaire_answers = Some(answers);
    Ok(())
}

/// Ask one question until a valid choice or a blank line (keep current) is given
fn ask_question(question: &Question, answers: &mut QuestionnaireAnswers) -> Result<(), String> {
    let options = question.id.options();
    for (i, (_, label)) in options.iter().enumerate() {
        println!("  {}. {label}", i + 1);
    }
    let current = answers.label(question.id).unwrap_or("none");
    loop {
        let input = prompt(&format!("Choice [{current}]"))?;
        if input.is_empty() {
            return Ok(());
        }
        let picked = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i));
        match picked {
            Some((code, _)) => {
                answers.set(question.id, code);
                return Ok(());
            }
            None => println!("  Enter a number between 1 and {}", options.len()),
        }
    }
}

fn print_answers(session: &Session) {
    let answers = session.answers();
    println!("Country: {}", session.country());
    for question in &QUESTIONS {
        println!(
            "  {:<45} {}",
            question.title,
            answers.label(question.id).unwrap_or("-")
        );
    }
}
