use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use colored::Colorize;
use eyre::Result;
use log::{debug, info, trace, warn};

use super::shell;
use crate::api::{CandidateApi, JobsApi};
use crate::chat::draft::ValidationError;
use crate::chat::message::{Message, Role};
use crate::chat::{Chatbot, FlowError, Phase};
use crate::models::candidate::CvDocument;
use crate::utils::prompt;
use crate::utils::toast::{self, Toast};

fn print_message(message: &Message) {
    let time = message.sent_at.with_timezone(&Local).format("%H:%M");
    let time = time.to_string().dimmed();
    match message.role {
        Role::Bot => println!("{} {} {}", time, "🤖".cyan(), message.text.cyan()),
        Role::User => println!("{} {} {}", time, "🧑".green(), message.text),
    }
    trace!("message {}", message.id);
}

async fn load_cv(path: &Path) -> Option<CvDocument> {
    match CvDocument::from_path(path).await {
        Ok(document) => Some(document),
        Err(error) => {
            warn!("could not read {}: {}", path.display(), error);
            toast::show([Toast::error(format!(
                "No se pudo leer el archivo {}",
                path.display()
            ))]);
            None
        }
    }
}

/// Drives the application form and the interview in the terminal.
pub async fn run<C: CandidateApi, J: JobsApi>(
    candidates: &C,
    jobs: &J,
    vacancy_id: &str,
    cv: Option<PathBuf>,
    question_delay: Duration,
) -> Result<()> {
    let mut chatbot = Chatbot::mount(candidates, jobs, vacancy_id, question_delay).await;

    if let Some(detail) = chatbot.detail() {
        println!(
            "{}",
            shell::heading(
                &detail.vacancy.title,
                &format!("{} • {}", detail.company.name, detail.vacancy.city)
            )
        );
    }
    chatbot.messages().iter().for_each(print_message);
    toast::show(chatbot.take_toasts());
    chatbot.on_message(print_message);

    let mut cv_path = cv;
    loop {
        println!("\n{}", "Completa tus datos".bold());
        let draft = chatbot.draft_mut();
        for (label, field) in [
            ("Nombre completo", &mut draft.name),
            ("Email", &mut draft.email),
            ("Teléfono", &mut draft.phone),
            ("Ciudad", &mut draft.city),
            ("Años de experiencia", &mut draft.years_experience),
        ] {
            if !prompt::edit(label, field)? {
                return Ok(());
            }
        }

        let path = match cv_path.take() {
            Some(path) => Some(path),
            None => {
                let current = chatbot.draft().cv.as_ref().map(|cv| cv.file_name.clone());
                let label = match current {
                    Some(name) => format!("Ruta del CV (PDF) [{name}]"),
                    None => "Ruta del CV (PDF)".to_string(),
                };
                let Some(answer) = prompt::ask(&label)? else {
                    return Ok(());
                };
                let answer = answer.trim();
                (!answer.is_empty()).then(|| PathBuf::from(answer))
            }
        };
        if let Some(path) = path {
            if let Some(document) = load_cv(&path).await {
                if let Err(error) = chatbot.attach_cv(document) {
                    debug!("attachment rejected: {}", error);
                }
            }
        }
        toast::show(chatbot.take_toasts());

        println!("{}", "Analizando tu CV...".dimmed());
        match chatbot.submit_profile().await {
            Ok(()) => break,
            Err(FlowError::Validation(error)) => debug!("profile rejected: {}", error),
            Err(FlowError::Remote(error)) => debug!("application failed: {}", error),
            Err(other) => return Err(other.into()),
        }
        toast::show(chatbot.take_toasts());

        if !prompt::confirm("¿Intentar de nuevo?")? {
            return Ok(());
        }
    }

    if let Some(session) = chatbot.session() {
        debug!("interview started for application {}", session.application_id());
    }

    while chatbot.phase() == Phase::Questions {
        if chatbot.awaiting_scoring() {
            toast::show(chatbot.take_toasts());
            if !prompt::confirm("¿Reenviar tus respuestas?")? {
                break;
            }
            if let Err(error) = chatbot.resend_answers().await {
                debug!("answers not accepted: {}", error);
            }
            toast::show(chatbot.take_toasts());
            continue;
        }

        let label = match chatbot.session() {
            Some(session) => format!(
                "Tu respuesta ({}/{})",
                session.current_index() + 1,
                session.questions().len()
            ),
            None => "Tu respuesta".to_string(),
        };
        let Some(answer) = prompt::ask(&label)? else {
            break;
        };
        chatbot.set_input(answer);

        match chatbot.send().await {
            Ok(()) | Err(FlowError::Validation(ValidationError::EmptyAnswer)) => {}
            Err(FlowError::Remote(error)) => {
                debug!("answers not accepted: {}", error);
                println!("{}", "Puedes volver a enviar tu última respuesta.".yellow());
            }
            Err(other) => return Err(other.into()),
        }
        toast::show(chatbot.take_toasts());
    }

    toast::show(chatbot.take_toasts());
    if let Some(outcome) = chatbot.outcome() {
        info!("interview finished: {}", outcome.message);
        if outcome.email_sent {
            println!("{}", "Te enviamos un correo con la confirmación de tu postulación.".dimmed());
        }
    }
    Ok(())
}
