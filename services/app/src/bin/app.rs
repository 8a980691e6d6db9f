//! services/app/src/bin/app.rs

use std::io::Write as _;
use std::sync::Arc;

use app_lib::{
    adapters::{JsonFileStore, OpenAiAssistantAdapter},
    config::Config,
    error::AppError,
    session::{EmailCheck, Session},
};
use chrono::Local;
use codegenio_core::catalog;
use codegenio_core::domain::{ChatRole, SubscriptionTier};
use codegenio_core::machine::{Effect, Event, LESSON_XP_REWARD};
use codegenio_core::placement;
use codegenio_core::view::{format_issue_date, lesson_segments, LessonSegment, Screen};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting {}...", catalog::APP_NAME);

    // --- 2. Initialize Service Adapters ---
    let store = Arc::new(JsonFileStore::new(&config.storage_path));
    let assistant = Arc::new(OpenAiAssistantAdapter::new(
        config.openai_api_key.as_deref(),
        config.chat_model.clone(),
    ));

    // --- 3. Build the Session & Resume the Active Account ---
    let mut session = Session::new(store, assistant);
    session.resume().await;

    // --- 4. Run the Command Loop ---
    println!("{} — {}", catalog::APP_NAME, catalog::APP_SLOGAN);
    println!("Escribe 'help' para ver los comandos.");
    println!();
    render(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),

            "home" => apply(&mut session, Event::NavigateHome).await,
            "login" => apply(&mut session, Event::OpenLogin).await,
            "dashboard" => apply(&mut session, Event::NavigateToDashboard).await,
            "certificate" => apply(&mut session, Event::NavigateToCertificate).await,
            "test" => apply(&mut session, Event::StartTest).await,
            "back" => apply(&mut session, Event::BackToLessonList).await,
            "logout" => apply(&mut session, Event::Logout).await,

            "level" => {
                apply(
                    &mut session,
                    Event::SelectLevel {
                        level_id: rest.to_string(),
                    },
                )
                .await
            }
            "lesson" => {
                apply(
                    &mut session,
                    Event::SelectLesson {
                        lesson_id: rest.to_string(),
                    },
                )
                .await
            }

            "complete" => complete_current(&mut session).await,
            "submit" => submit_test(&mut session, rest).await,
            "email" => check_email(&mut session, rest).await,
            "register" => register(&mut session, rest).await,
            "ask" => ask(&mut session, rest).await,

            "switch" => match rest.parse::<Uuid>() {
                Ok(profile_id) => apply(&mut session, Event::SwitchProfile { profile_id }).await,
                Err(_) => println!("Uso: switch <id-de-perfil>"),
            },
            "profile" => {
                if rest.is_empty() {
                    println!("Introduce el nombre del nuevo perfil: profile <nombre>");
                } else {
                    apply(
                        &mut session,
                        Event::CreateProfile {
                            name: rest.to_string(),
                        },
                    )
                    .await;
                }
            }
            "logo" => {
                let logo = if rest.is_empty() || rest == "clear" {
                    None
                } else {
                    Some(rest.to_string())
                };
                apply(&mut session, Event::UpdateInstitutionLogo { logo }).await;
            }
            "export" => export_report(&session).await,

            _ => println!("Comando desconocido: '{command}'. Escribe 'help'."),
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Dispatches one event and re-renders. A scroll-reset effect clears the
/// terminal, the closest analog of jumping back to the top of the page.
async fn apply(session: &mut Session, event: Event) {
    let effects = session.dispatch(event).await;
    if effects.contains(&Effect::ResetScroll) {
        print!("\x1b[2J\x1b[H");
    }
    render(session);
}

async fn complete_current(session: &mut Session) {
    let state = session.state();
    let Some((level_id, lesson_id)) = state
        .selected_level
        .clone()
        .zip(state.selected_lesson.clone())
    else {
        println!("Abre una lección primero.");
        return;
    };

    session
        .dispatch(Event::CompleteLesson {
            lesson_id: lesson_id.clone(),
        })
        .await;

    if catalog::is_final_lesson(&level_id, &lesson_id) {
        println!("🚀 ¡Felicidades! ¡Has completado todas las lecciones! 🚀");
        println!("¡Eres oficialmente un Genio del Código!");
        apply(session, Event::NavigateToCertificate).await;
    } else if let Some(next) = catalog::next_lesson(&level_id, &lesson_id) {
        println!(
            "¡Lección Completada! Has ganado {} puntos de experiencia.",
            LESSON_XP_REWARD
        );
        apply(
            session,
            Event::SelectLesson {
                lesson_id: next.id.clone(),
            },
        )
        .await;
    } else {
        println!("✨ ¡Felicidades, Nivel Completado! ✨ Elige un nuevo desafío.");
        apply(session, Event::NavigateHome).await;
    }
}

async fn submit_test(session: &mut Session, rest: &str) {
    let questions = catalog::placement_questions();
    // One 1-based option number per question; anything unparsable counts as
    // an unanswered question.
    let answers: std::collections::HashMap<String, usize> = questions
        .iter()
        .zip(rest.split_whitespace())
        .filter_map(|(q, token)| {
            let selected = token.parse::<usize>().ok()?.checked_sub(1)?;
            Some((q.id.clone(), selected))
        })
        .collect();

    if answers.len() < questions.len() {
        println!("Por favor, selecciona una respuesta para cada pregunta.");
        println!("Uso: submit <n1> <n2> <n3> <n4> <n5> (número de opción de cada pregunta)");
        return;
    }

    let score = placement::score(&answers);
    println!(
        "Prueba completada. Puntuación: {} de {}.",
        score,
        questions.len()
    );
    apply(session, Event::CompleteTest { score }).await;
    if let Some(level_id) = session.state().selected_level.as_deref() {
        if let Some(level) = catalog::level(level_id) {
            println!(
                "Basado en tus resultados, te recomendamos empezar en el nivel: \"{}\".",
                level.title
            );
        }
    }
}

async fn check_email(session: &mut Session, email: &str) {
    match session.check_email(email).await {
        EmailCheck::Exists => {
            print!("\x1b[2J\x1b[H");
            println!("¡Bienvenido de nuevo!");
            render(session);
        }
        EmailCheck::NotRegistered => {
            println!("No encontramos una cuenta con el email {email}.");
            println!("Elige tu Aventura de Programación:");
            for plan in catalog::subscription_plans() {
                print_plan(plan);
            }
            println!();
            println!("Completa tu registro con: register {email} <individual|familiar|institucion> <nombre completo>");
        }
        EmailCheck::Invalid => println!("Por favor, introduce un email válido."),
    }
}

async fn register(session: &mut Session, rest: &str) {
    let mut parts = rest.split_whitespace();
    let (Some(email), Some(tier_token)) = (parts.next(), parts.next()) else {
        println!("Uso: register <email> <individual|familiar|institucion> <nombre completo>");
        return;
    };
    let name = parts.collect::<Vec<_>>().join(" ");
    if name.trim().is_empty() {
        println!("Por favor, introduce tu nombre.");
        return;
    }
    let Some(tier) = parse_tier(tier_token) else {
        println!("Por favor, selecciona un plan de suscripción: individual, familiar o institucion.");
        return;
    };

    // Mirror the two-step login flow: an existing account signs in instead
    // of being re-registered.
    match session.check_email(email).await {
        EmailCheck::Invalid => println!("Por favor, introduce un email válido."),
        EmailCheck::Exists => {
            println!("Esta cuenta ya existe. ¡Sesión iniciada!");
            render(session);
        }
        EmailCheck::NotRegistered => {
            apply(
                session,
                Event::Register {
                    name,
                    email: email.to_string(),
                    tier,
                },
            )
            .await;
            println!("¡Cuenta creada! Bienvenido a {}.", catalog::APP_NAME);
        }
    }
}

fn parse_tier(token: &str) -> Option<SubscriptionTier> {
    match token.to_lowercase().as_str() {
        "individual" => Some(SubscriptionTier::Individual),
        "familiar" | "familia" => Some(SubscriptionTier::Family),
        "institucion" | "institución" => Some(SubscriptionTier::Institution),
        _ => None,
    }
}

async fn ask(session: &mut Session, question: &str) {
    if question.is_empty() {
        println!("Por favor, escribe una pregunta para el asistente de IA.");
        return;
    }
    match session.ask_assistant(question).await {
        Some(reply) => println!("CodeGenio: {reply}"),
        None => println!("Abre una lección primero para chatear con CodeGenio."),
    }
}

async fn export_report(session: &Session) {
    let Some((file_name, body)) = session.export_report(Local::now().date_naive()) else {
        println!("Inicia sesión para exportar el reporte de progreso.");
        return;
    };
    match tokio::fs::write(&file_name, body).await {
        Ok(()) => println!("Reporte exportado: {file_name}"),
        Err(e) => println!("No se pudo escribir el reporte {file_name}: {e}"),
    }
}

//=========================================================================================
// Rendering
//=========================================================================================

fn render(session: &Session) {
    match session.screen() {
        Screen::Home {
            levels,
            plans,
            signed_in,
        } => {
            println!("=== {} — {} ===", catalog::APP_NAME, catalog::APP_SLOGAN);
            if let Some(profile) = session.state().app.active_profile() {
                println!("Perfil activo: {} ({} XP)", profile.name, profile.xp);
            }
            println!();
            println!("Elige tu Ruta de Aprendizaje:");
            for level in levels {
                println!(
                    "  [{}] {} — {} ({} lecciones)",
                    level.id,
                    level.title,
                    level.description,
                    level.lessons.len()
                );
            }
            if !signed_in {
                println!();
                println!("Elige tu Aventura de Programación:");
                for plan in plans {
                    print_plan(plan);
                }
                println!();
                println!("Usa 'login' para iniciar sesión o registrarte.");
            }
        }

        Screen::Login => {
            println!("=== Bienvenido a {} ===", catalog::APP_NAME);
            println!("Ingresa con tu email para continuar tu aventura: email <tu.email@ejemplo.com>");
        }

        Screen::LevelLessons { level } => {
            println!("=== {} ===", level.title);
            println!("{}", level.description);
            println!();
            let completed = session
                .state()
                .app
                .active_profile()
                .map(|p| p.completed_lessons.clone())
                .unwrap_or_default();
            for lesson in &level.lessons {
                let mark = if completed.contains(&lesson.id) {
                    "✓"
                } else {
                    " "
                };
                println!(
                    "  [{mark}] {} — {} ({})",
                    lesson.id, lesson.title, lesson.estimated_time
                );
                println!("       {}", lesson.description);
            }
            println!();
            println!("Abre una lección con: lesson <id>");
        }

        Screen::LessonContent {
            lesson, completed, ..
        } => {
            println!("=== {} ===", lesson.title);
            println!("Tiempo estimado: {}", lesson.estimated_time);
            if completed {
                println!("(Ya completaste esta lección)");
            }
            println!();
            for segment in lesson_segments(&lesson.content) {
                match segment {
                    LessonSegment::Paragraph(text) => println!("{text}"),
                    LessonSegment::Code(code) => {
                        println!("  ---- Ejemplo de Código ----");
                        for line in code.lines() {
                            println!("  | {line}");
                        }
                        println!("  ---------------------------");
                    }
                }
            }
            println!();
            println!(
                "¡Hola! Soy CodeGenio. ¿En qué puedo ayudarte con la lección '{}'?",
                lesson.title
            );
            for turn in session.chat_history() {
                match turn.role {
                    ChatRole::Student => println!("Tú: {}", turn.text),
                    ChatRole::Assistant => println!("CodeGenio: {}", turn.text),
                }
            }
            println!();
            println!("Comandos: ask <pregunta> · complete · back");
        }

        Screen::Dashboard {
            account,
            profiles,
            can_add_profile,
            is_educator,
            institution_logo,
        } => {
            if is_educator {
                println!("=== Panel de Control del Educador ===");
                println!("Gestiona tus clases, el progreso de los estudiantes y accede a recursos exclusivos.");
            } else {
                println!("=== Panel de Control Familiar ===");
                println!("Supervisa el progreso de aprendizaje de tu familia.");
            }
            println!(
                "Cuenta: {} <{}> — Plan {}",
                account.name,
                account.email,
                account.tier.display_name()
            );
            println!();
            println!("{}:", if is_educator { "Progreso de Estudiantes" } else { "Progreso Familiar" });
            for profile in &profiles {
                println!(
                    "  {} — {} XP, {} lecciones completadas ({})",
                    profile.name,
                    profile.xp,
                    profile.completed_lessons.len(),
                    profile.id
                );
            }
            println!();
            if is_educator {
                match institution_logo {
                    Some(_) => println!("Logo de la institución: configurado ('logo clear' para quitarlo)"),
                    None => println!("Logo de la institución: sin configurar ('logo <imagen>' para subirlo)"),
                }
            }
            if can_add_profile {
                println!("Añade un perfil con: profile <nombre>");
            }
            println!("Cambia de perfil con: switch <id> · Exporta el reporte con: export");
        }

        Screen::PlacementTest { questions } => {
            println!("=== Prueba de Nivel ===");
            for (number, question) in questions.iter().enumerate() {
                println!();
                println!(
                    "Pregunta {} de {}: {}",
                    number + 1,
                    questions.len(),
                    question.prompt
                );
                for (index, option) in question.options.iter().enumerate() {
                    println!("  {}: {}", index + 1, option);
                }
            }
            println!();
            println!("Responde con: submit <n1> <n2> <n3> <n4> <n5>");
        }

        Screen::Certificate(data) => {
            println!("==============================================");
            println!("        CERTIFICADO DE FINALIZACIÓN");
            println!("                {}", catalog::APP_NAME);
            if data.institution_logo.is_some() {
                println!("          [logo de la institución]");
            } else if data.show_logo_placeholder {
                println!("    (espacio para el logo de la institución)");
            }
            println!();
            println!("      certifica con orgullo que");
            println!("             {}", data.student_name);
            println!("  ha completado exitosamente todo el currículo de");
            println!("         {}", data.course_title);
            println!();
            println!(
                "  Fecha: {}            {}",
                format_issue_date(Local::now().date_naive()),
                data.issuer
            );
            println!("==============================================");
            println!("(Usa la impresión del navegador o 'home' para volver)");
        }

        Screen::Empty => {
            println!("Nada que mostrar aquí. Usa 'home' para volver al inicio.");
        }
    }
}

fn print_plan(plan: &codegenio_core::domain::SubscriptionPlan) {
    let highlight = if plan.highlight { " (Más Popular)" } else { "" };
    println!(
        "  {} — {}{}",
        plan.tier.display_name(),
        plan.price,
        highlight
    );
    if let Some(description) = &plan.description {
        println!("    {description}");
    }
    for feature in &plan.features {
        println!("    · {feature}");
    }
}

fn print_help() {
    println!("Comandos disponibles:");
    println!("  home | login | dashboard | certificate | logout | quit");
    println!("  email <dirección>                  — inicia sesión o comienza el registro");
    println!("  register <email> <plan> <nombre>   — crea la cuenta (plan: individual|familiar|institucion)");
    println!("  level <id> | lesson <id> | back    — navega por el catálogo");
    println!("  complete                           — marca la lección abierta como completada");
    println!("  test | submit <n1..n5>             — prueba de nivel");
    println!("  ask <pregunta>                     — chatea con CodeGenio sobre la lección");
    println!("  profile <nombre> | switch <id>     — gestiona los perfiles");
    println!("  logo <imagen|clear> | export       — herramientas del panel de control");
}
