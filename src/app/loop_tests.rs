use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::persistence::{self, HistoryWriter};
use crate::app::state::{AppMode, AppState, Section};
use crate::domain::catalog::MockProcessorCatalog;
use crate::domain::models::{ProcessorDoc, ProcessorKind};
use crate::palette::ItemId;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn docs() -> Vec<ProcessorDoc> {
    serde_json::from_str(
        r#"[
            {"name": "stdin", "kind": "input", "doc_short": "Read lines from stdin"},
            {"name": "grok", "kind": "filter", "doc_short": "Parse text",
             "options": [{"name": "Match", "type": "hash", "required": true}]},
            {"name": "stdout", "kind": "output", "doc_short": "Print events"}
        ]"#,
    )
    .unwrap()
}

fn services(mock: MockProcessorCatalog, history_path: Option<std::path::PathBuf>) -> Services {
    Services {
        catalog: Arc::new(mock),
        history: HistoryWriter::spawn(history_path),
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_list()
        .returning(|| Err(anyhow::anyhow!("catalog exploded")));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::LoadCatalog, &services(mock, None), tx).unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::ErrorOccurred(message) = action {
        assert!(message.contains("catalog exploded"));
    } else {
        panic!("Expected Action::ErrorOccurred, got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_list().times(1).returning(|| Ok(docs()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(Command::LoadCatalog, &services(mock, None), tx).unwrap();

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CatalogLoaded(docs()));
}

#[tokio::test]
async fn test_save_history_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.toml");
    let (tx, _rx) = mpsc::channel(1);
    let services = services(MockProcessorCatalog::new(), Some(path.clone()));

    handle_command(Command::SaveHistory(vec![ItemId::from("quit")]), &services, tx).unwrap();
    services.history.flush().await;

    assert_eq!(persistence::load_history(&path), vec![ItemId::from("quit")]);
}

#[tokio::test]
async fn test_full_command_error_to_state() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_list()
        .returning(|| Err(anyhow::anyhow!("Invalid catalog /tmp/bad.json")));

    let (tx, mut rx) = mpsc::channel(2);
    let mut state = AppState::default();

    let commands = reducer::dispatch(&mut state, Action::OpenSectionProcessors);
    assert_eq!(commands, vec![Command::LoadCatalog]);
    assert!(state.is_loading_catalog);

    handle_command(Command::LoadCatalog, &services(mock, None), tx).unwrap();

    let action = rx.recv().await.unwrap();
    reducer::dispatch(&mut state, action);

    assert!(!state.is_loading_catalog);
    assert_eq!(state.mode, AppMode::Editing);
    let error = state.last_error.as_ref().unwrap();
    assert!(error.message.contains("Invalid catalog"));
    assert!(!error.suggestions.is_empty());
}

#[tokio::test]
async fn test_palette_session_inserts_blueprint() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_source_path().returning(|| None);
    mock.expect_list().returning(|| Ok(docs()));

    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.toml");

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let mut app_state = AppState::default();
    app_state.playground.active = Section::Filter;

    let (event_tx, event_rx) = mpsc::channel(100);
    let feeder = tokio::spawn(async move {
        // Let the initial catalog load land first
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        let mut events = vec![ctrl('o')];
        events.extend("grok".chars().map(|c| key(KeyCode::Char(c))));
        events.push(key(KeyCode::Enter));
        events.push(ctrl('q'));
        for event in events {
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(
            &mut terminal,
            app_state,
            services(mock, Some(history_path.clone())),
            event_rx,
        ),
    )
    .await;
    result.expect("loop timed out").unwrap();
    feeder.await.unwrap();

    // Saves are flushed before the loop returns
    assert_eq!(
        persistence::load_history(&history_path),
        vec![ItemId::from("filter/grok")]
    );
}

#[tokio::test]
async fn test_quit_from_palette_is_saved() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_source_path().returning(|| None);
    mock.expect_list().returning(|| Ok(docs()));

    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.toml");

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);
    let mut events = vec![ctrl('p')];
    events.extend("quit".chars().map(|c| key(KeyCode::Char(c))));
    events.push(key(KeyCode::Enter));
    for event in events {
        event_tx.send(Ok(event)).await.unwrap();
    }

    // The selected Quit command ends the loop on its own
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(
            &mut terminal,
            AppState::default(),
            services(mock, Some(history_path.clone())),
            event_rx,
        ),
    )
    .await;
    result.expect("loop timed out").unwrap();

    assert_eq!(
        persistence::load_history(&history_path),
        vec![ItemId::from("quit")]
    );
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockProcessorCatalog::new();
    mock.expect_source_path().returning(|| None);
    mock.expect_list().returning(|| Ok(docs()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=20 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                21..=25 => ctrl(if rng.gen_bool(0.5) { 'p' } else { 'o' }),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Send Quit
        let _ = event_tx.send(Ok(ctrl('q'))).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, services(mock, None), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

#[test]
fn test_processor_kinds_cover_sections() {
    for section in Section::ALL {
        assert!(ProcessorKind::all().contains(&section.kind()));
    }
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..6) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Up(MouseButton::Left),
        2 => MouseEventKind::Down(MouseButton::Right),
        3 => MouseEventKind::ScrollUp,
        4 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
