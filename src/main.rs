//! Interactive driver and entry point.
//!
//! This module provides the thin integration layer between the Liftscan
//! library and the terminal: it wires configuration, tracing, the session
//! manager, and the flow state machine into a line-oriented loop. All
//! contracts live in the library; the driver only translates input lines to
//! events, executes the actions the handler returns, and renders the
//! resulting state as text.
//!
//! # Commands
//!
//! - `login <username> <password>`: authenticate against the service
//! - `serial <value>`: look up the latest inspection by serial number
//! - `tag <value>`: look up the latest inspection by tag number
//! - `scan <value>`: simulate an NFC tag read (consumed like `tag`)
//! - `back`: return from a result to the search screen
//! - `logout`: sign out and clear the persisted session
//! - `quit`: exit
//!
//! # Event Mapping
//!
//! Input lines are translated to library events (`serial X` →
//! `Event::Submit`, `scan X` → `Event::TagScanned`, ...). The one
//! asynchronous action, [`Action::DispatchSearch`], is awaited here and its
//! outcome fed back as `Event::SearchCompleted` — the single suspension
//! point per lookup.

use std::io::{BufRead, Write};

use liftscan::{
    handle_event, initialize, observability, Action, AppState, Config, Event, FailureKind,
    FlowState, InspectionRecord, SearchMethod, SearchOutcome, SessionManager,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    // Optional first argument: path to a TOML config file. Environment
    // variables overlay either source.
    let config = match std::env::args().nth(1) {
        Some(path) => match Config::from_file(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("liftscan: {e}");
                return std::process::ExitCode::FAILURE;
            }
        },
        None => Config::from_env(),
    };

    observability::init_tracing(&config);

    let (mut session, mut state) = match initialize(&config) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("liftscan: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Some(user) = session.user() {
        println!("signed in as {} (restored session)", user.username);
    } else {
        println!("not signed in; use: login <username> <password>");
    }

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("liftscan: {e}");
                break;
            }
        }

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Login { username, password }) => {
                run_login(&mut session, &mut state, &username, &password).await;
            }
            Some(Command::Logout) => {
                session.logout();
                let (changed, _) = handle_event(&mut state, &Event::SessionEnded);
                if changed {
                    println!("signed out");
                }
            }
            Some(Command::Event(event)) => {
                let (changed, actions) = handle_event(&mut state, &event);
                run_actions(&session, &mut state, actions).await;
                if changed {
                    render(&state);
                }
            }
            None => println!("unknown command; try: login, serial, tag, scan, back, logout, quit"),
        }
    }

    std::process::ExitCode::SUCCESS
}

/// A parsed input line.
enum Command {
    Login { username: String, password: String },
    Logout,
    Quit,
    Event(Event),
}

/// Translates an input line into a command, `None` when unrecognized.
fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match (parts.next()?, parts.next()) {
        ("login", Some(username)) => Command::Login {
            username: username.to_string(),
            password: parts.next().unwrap_or_default().to_string(),
        },
        ("serial", Some(value)) => Command::Event(Event::Submit {
            method: SearchMethod::Serial,
            value: value.to_string(),
        }),
        ("tag", Some(value)) => Command::Event(Event::Submit {
            method: SearchMethod::Tag,
            value: value.to_string(),
        }),
        ("scan", Some(value)) => Command::Event(Event::TagScanned {
            value: value.to_string(),
        }),
        ("back", None) => Command::Event(Event::Back),
        ("logout", None) => Command::Logout,
        ("quit" | "exit", None) => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Runs a login attempt and mirrors the session change into the flow.
async fn run_login(session: &mut SessionManager, state: &mut AppState, username: &str, password: &str) {
    match session.login(username, password).await {
        Ok(()) => {
            handle_event(state, &Event::SessionStarted);
            if let Some(user) = session.user() {
                println!("signed in as {}", user.username);
            }
        }
        Err(_) => {
            // The session manager records the display message.
            if let Some(message) = session.last_error() {
                println!("login failed: {message}");
            }
        }
    }
}

/// Executes handler actions, feeding lookup outcomes back as events.
async fn run_actions(session: &SessionManager, state: &mut AppState, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::DispatchSearch(query) => {
                let outcome = match session.search(query.method, &query.value).await {
                    Ok(record) => SearchOutcome::Found(record),
                    Err(e) => SearchOutcome::Failed((&e).into()),
                };
                handle_event(state, &Event::SearchCompleted(outcome));
            }
        }
    }
}

/// Renders the current flow state as text.
fn render(state: &AppState) {
    match &state.flow {
        FlowState::Search => {
            println!("search: enter `serial <value>`, `tag <value>`, or `scan <value>`");
        }
        FlowState::Loading { query } => {
            println!("searching {} {}...", query.method.label(), query.value);
        }
        FlowState::Result { query, outcome } => {
            println!("results for {} {}:", query.method.label(), query.value);
            match outcome {
                SearchOutcome::Found(record) => render_record(record),
                SearchOutcome::Failed(notice) => {
                    match notice.kind {
                        FailureKind::Network => println!("  {}", notice.message),
                        _ => println!("  error: {}", notice.message),
                    }
                    if let Some(method) = state.suggested_method() {
                        println!("  try searching by {} instead", method.label());
                    }
                }
            }
            println!("(`back` to search again)");
        }
    }
}

/// Prints the fields of an inspection record.
fn render_record(record: &InspectionRecord) {
    println!("  {} [{}]", record.equip_description, record.status);
    println!("  certificate:  {}", record.cert_number);
    println!("  serial no:    {}", record.serial_no);
    println!("  tag number:   {}", record.tag_number);
    println!("  tested:       {}  (valid until {})", record.test_date, record.valid_date);
    println!("  WWL:          {}", record.wwl);
    println!("  height/len:   {}", record.height_length);
    println!("  client:       {} / {} / {}", record.client, record.site, record.section);
    println!("  responsible:  {}", record.responsible);
    println!("  test:         #{} {}", record.test_id, record.test_type);
    if let Some(inspect_type) = &record.inspect_type {
        println!("  inspect type: {inspect_type}");
    }
    if !record.comments.is_empty() {
        println!("  comments:     {}", record.comments);
    }
}
