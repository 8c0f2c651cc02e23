mod animation;
mod fetch;
mod render;
mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use radiopharma_core::choropleth::WorldGeometry;
use radiopharma_core::AggregateDocument;
use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use crate::fetch::{fetch_text, InFlight, DATA_URL, GEO_URL};
use crate::state::{Command, DashboardState, Key};

type Shared<T> = Rc<RefCell<T>>;

/// Requests currently in flight; replacing one aborts the previous fetch.
#[derive(Debug, Default)]
struct Requests {
    document: Option<InFlight>,
    geometry: Option<InFlight>,
}

fn main() -> io::Result<()> {
    let state: Shared<DashboardState> = Rc::default();
    let requests: Shared<Requests> = Rc::default();

    load_document(&state, &requests);
    load_geometry(&state, &requests);

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = Rc::clone(&state);
        let requests = Rc::clone(&requests);
        move |event| {
            let key = match event.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Tab if event.shift => Key::BackTab,
                KeyCode::Tab => Key::Tab,
                KeyCode::Char(ch) => Key::Char(ch),
                _ => return,
            };
            let command = state.borrow_mut().handle_key(key);
            if command == Some(Command::Refresh) {
                load_document(&state, &requests);
            }
        }
    });

    terminal.draw_web(move |f| {
        let mut state = state.borrow_mut();
        state.tick(js_sys::Date::now() / 1000.0);
        render::dashboard(&mut state, f);
    });

    Ok(())
}

fn load_document(state: &Shared<DashboardState>, requests: &Shared<Requests>) {
    let generation = state.borrow_mut().begin_document_load();
    let signal = match InFlight::new() {
        Ok((request, signal)) => {
            requests.borrow_mut().document = Some(request);
            signal
        }
        Err(error) => {
            state.borrow_mut().finish_document(generation, Err(error));
            return;
        }
    };

    let state = Rc::clone(state);
    spawn_local(async move {
        let result = fetch_text(DATA_URL, &signal)
            .await
            .and_then(|body| AggregateDocument::from_slice(body.as_bytes()));
        if let Err(error) = &result {
            web_sys::console::error_1(&error.banner().into());
        }
        state.borrow_mut().finish_document(generation, result);
    });
}

fn load_geometry(state: &Shared<DashboardState>, requests: &Shared<Requests>) {
    let generation = state.borrow_mut().begin_geometry_load();
    let signal = match InFlight::new() {
        Ok((request, signal)) => {
            requests.borrow_mut().geometry = Some(request);
            signal
        }
        Err(error) => {
            state.borrow_mut().finish_geometry(generation, Err(error));
            return;
        }
    };

    let state = Rc::clone(state);
    spawn_local(async move {
        let result = fetch_text(GEO_URL, &signal)
            .await
            .and_then(|body| WorldGeometry::from_slice(body.as_bytes()));
        if let Err(error) = &result {
            web_sys::console::error_1(&format!("world map unavailable: {error}").into());
        }
        state.borrow_mut().finish_geometry(generation, result);
    });
}
