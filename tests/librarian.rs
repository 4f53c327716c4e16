//! AI librarian fallback contract and prompt construction.

mod common;

use async_trait::async_trait;
use common::scenario_catalog;
use onestop::ai::{
    gemini::GeminiModel, AiLibrarian, TextModel, EMPTY_REPLY_MESSAGE, NO_KEY_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the mock model should do when asked to generate.
enum Reply {
    Text(&'static str),
    Fail,
}

/// Scripted [`TextModel`] that records every call and prompt.
struct MockModel {
    reply: Reply,
    calls: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    fn new(reply: Reply) -> (Self, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let model = Self {
            reply,
            calls: Arc::clone(&calls),
            prompts: Arc::clone(&prompts),
        };
        (model, calls, prompts)
    }
}

#[async_trait]
impl TextModel for MockModel {
    fn model_id(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> onestop::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail => Err(onestop::Error::model("mock", "simulated outage")),
        }
    }
}

#[tokio::test]
async fn disabled_librarian_returns_the_no_key_message() {
    let librarian = AiLibrarian::disabled();
    assert!(!librarian.is_enabled());

    let reply = librarian.recommend("anything", &scenario_catalog()).await;
    assert_eq!(reply, NO_KEY_MESSAGE);
}

#[tokio::test]
async fn successful_reply_passes_through_verbatim() {
    let (model, calls, _) = MockModel::new(Reply::Text("I recommend X because Y."));
    let librarian = AiLibrarian::new(model);

    let reply = librarian.recommend("action", &scenario_catalog()).await;

    assert_eq!(reply, "I recommend X because Y.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_reply_falls_back_to_the_top_rated_hint() {
    let (model, _, _) = MockModel::new(Reply::Text(""));
    let librarian = AiLibrarian::new(model);

    let reply = librarian.recommend("action", &scenario_catalog()).await;
    assert_eq!(reply, EMPTY_REPLY_MESSAGE);
}

#[tokio::test]
async fn service_failure_falls_back_without_raising() {
    let (model, calls, _) = MockModel::new(Reply::Fail);
    let librarian = AiLibrarian::new(model);

    let reply = librarian.recommend("action", &scenario_catalog()).await;

    assert_eq!(reply, UNAVAILABLE_MESSAGE);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn prompt_embeds_query_and_full_catalog_in_order() {
    let (model, _, prompts) = MockModel::new(Reply::Text("ok"));
    let librarian = AiLibrarian::new(model);
    let catalog = scenario_catalog();

    librarian.recommend("something spooky", &catalog).await;

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];

    assert!(prompt.contains("User Query: \"something spooky\""));
    assert!(prompt.contains("- Blade of Dawn (Fantasy, Action)"));
    assert!(prompt.contains("- Hollow Keep (Fantasy, Horror)"));

    // Bullet lines appear in catalog order with no truncation
    let mut last = 0;
    for manga in &catalog {
        let line = format!("- {} (", manga.title);
        let pos = prompt[last..]
            .find(&line)
            .unwrap_or_else(|| panic!("missing bullet for {}", manga.title));
        last += pos + line.len();
    }
}

#[tokio::test]
async fn summarize_echoes_description_when_disabled() {
    let librarian = AiLibrarian::disabled();

    let reply = librarian.summarize("Blade of Dawn", "A swordsman's tale.").await;
    assert_eq!(reply, "A swordsman's tale.");
}

#[tokio::test]
async fn summarize_echoes_description_on_failure_or_empty_reply() {
    let (model, _, _) = MockModel::new(Reply::Fail);
    let librarian = AiLibrarian::new(model);
    let reply = librarian.summarize("Blade of Dawn", "A swordsman's tale.").await;
    assert_eq!(reply, "A swordsman's tale.");

    let (model, _, _) = MockModel::new(Reply::Text(""));
    let librarian = AiLibrarian::new(model);
    let reply = librarian.summarize("Blade of Dawn", "A swordsman's tale.").await;
    assert_eq!(reply, "A swordsman's tale.");
}

#[tokio::test]
async fn summarize_returns_the_tagline_on_success() {
    let (model, _, prompts) = MockModel::new(Reply::Text("Rise, hunter: the tower awaits."));
    let librarian = AiLibrarian::new(model);

    let reply = librarian.summarize("Blade of Dawn", "A swordsman's tale.").await;
    assert_eq!(reply, "Rise, hunter: the tower awaits.");

    let prompts = prompts.lock().unwrap();
    assert!(prompts[0].contains("Title: Blade of Dawn"));
    assert!(prompts[0].contains("Description: A swordsman's tale."));
}

#[tokio::test]
async fn unreachable_endpoint_resolves_to_the_nap_fallback() {
    // Nothing listens on the discard port; the transport error must be
    // swallowed and converted to the fixed failure string.
    let model = GeminiModel::new("test-key").with_api_base("http://127.0.0.1:9");
    let librarian = AiLibrarian::new(model);

    let reply = librarian.recommend("anything", &scenario_catalog()).await;
    assert_eq!(reply, UNAVAILABLE_MESSAGE);
}
