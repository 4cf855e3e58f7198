//! Test doubles shared by the unit tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::Notify;

use crate::api::{FetchError, Transport};
use crate::debounce::TimerDriver;
use crate::view::ViewState;

#[derive(Clone)]
enum Reply {
    Body(String),
    Error(FetchError),
    /// Body released only once the gate is notified
    Gated(Rc<Notify>, String),
}

/// Transport answering from a table keyed by the request path (`search.php?s=x`)
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<HashMap<String, Reply>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, path: &str, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .insert(path.to_string(), Reply::Body(body.to_string()));
        self
    }

    pub fn with_error(self, path: &str, error: FetchError) -> Self {
        self.replies
            .borrow_mut()
            .insert(path.to_string(), Reply::Error(error));
        self
    }

    pub fn with_gated_body(self, path: &str, gate: Rc<Notify>, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .insert(path.to_string(), Reply::Gated(gate, body.to_string()));
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let path = url.rsplit('/').next().unwrap_or(url).to_string();
        self.requests.borrow_mut().push(path.clone());
        let reply = self.replies.borrow().get(&path).cloned();
        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Error(e)) => Err(e),
            Some(Reply::Gated(gate, body)) => {
                gate.notified().await;
                Ok(body)
            }
            None => Err(FetchError::Network(format!("no route for {}", path))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Markup,
    Search,
    Contact,
}

/// View that records what the controllers did to it
#[derive(Default)]
pub struct RecordingView {
    loading: Cell<bool>,
    shows: Cell<usize>,
    content: RefCell<String>,
    results: RefCell<String>,
    page: Cell<Page>,
}

impl RecordingView {
    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// How many times the loading indicator was shown
    pub fn shows(&self) -> usize {
        self.shows.get()
    }

    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn results(&self) -> String {
        self.results.borrow().clone()
    }

    pub fn page(&self) -> Page {
        self.page.get()
    }
}

impl ViewState for RecordingView {
    fn show_loading(&self) {
        self.loading.set(true);
        self.shows.set(self.shows.get() + 1);
    }

    fn hide_loading(&self) {
        self.loading.set(false);
    }

    fn set_content(&self, markup: String) {
        self.page.set(Page::Markup);
        *self.content.borrow_mut() = markup;
    }

    fn append_content(&self, markup: &str) {
        self.content.borrow_mut().push_str(markup);
    }

    fn open_search(&self) {
        self.page.set(Page::Search);
        self.content.borrow_mut().clear();
        self.results.borrow_mut().clear();
    }

    fn set_results(&self, markup: String) {
        *self.results.borrow_mut() = markup;
    }

    fn open_contact(&self) {
        self.page.set(Page::Contact);
        self.content.borrow_mut().clear();
    }
}

struct PendingTimer {
    id: u64,
    deadline: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    timers: RefCell<Vec<PendingTimer>>,
}

/// Timer driver on a fake clock moved forward by `advance`
#[derive(Clone, Default)]
pub struct ManualDriver {
    state: Rc<ClockState>,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.state.timers.borrow().len()
    }

    /// Move the clock forward, firing due timers in deadline order
    pub fn advance(&self, by: Duration) {
        let now = self.state.now.get() + by;
        self.state.now.set(now);
        loop {
            let due = {
                let mut timers = self.state.timers.borrow_mut();
                let next = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.deadline <= now)
                    .min_by_key(|(_, t)| (t.deadline, t.id))
                    .map(|(i, _)| i);
                next.map(|i| timers.remove(i))
            };
            match due {
                // Run outside the borrow so the callback may schedule again
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
    }
}

impl TimerDriver for ManualDriver {
    type Handle = u64;

    fn start(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> u64 {
        let id = self.state.next_id.get() + 1;
        self.state.next_id.set(id);
        self.state.timers.borrow_mut().push(PendingTimer {
            id,
            deadline: self.state.now.get() + delay,
            callback,
        });
        id
    }

    fn cancel(&self, handle: u64) {
        self.state.timers.borrow_mut().retain(|t| t.id != handle);
    }
}
