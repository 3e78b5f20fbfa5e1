#![allow(dead_code)]

use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use search_answer_service::config::Config;

pub const CLASSIFIER_MARKER: &str = "Respond with only 'YES' or 'NO'";

/// Closed port: connections are refused immediately.
pub const UNREACHABLE_SEARCH: &str = "http://127.0.0.1:1/search";

#[derive(Clone)]
pub enum SearchBehaviour {
    Results(usize),
    Status(u16),
    Garbage,
}

#[derive(Clone)]
pub struct Stub {
    pub classifier_reply: &'static str,
    pub llm_fails: bool,
    pub search: SearchBehaviour,
}

impl Stub {
    pub fn new(classifier_reply: &'static str) -> Self {
        Self {
            classifier_reply,
            llm_fails: false,
            search: SearchBehaviour::Results(0),
        }
    }

    pub fn search(mut self, search: SearchBehaviour) -> Self {
        self.search = search;
        self
    }

    pub fn failing_llm(mut self) -> Self {
        self.llm_fails = true;
        self
    }
}

#[derive(Default)]
pub struct Recorded {
    pub prompts: Mutex<Vec<String>>,
    pub llm_headers: Mutex<Vec<(String, String)>>,
    pub search_calls: AtomicUsize,
    pub search_bodies: Mutex<Vec<Value>>,
    pub search_keys: Mutex<Vec<String>>,
}

impl Recorded {
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

fn header(req: &HttpRequest, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn messages(
    stub: web::Data<Stub>,
    recorded: web::Data<Recorded>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    let prompt = body["messages"][0]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    recorded.prompts.lock().unwrap().push(prompt.clone());
    recorded.llm_headers.lock().unwrap().push((
        header(&req, "x-api-key"),
        header(&req, "anthropic-version"),
    ));

    if stub.llm_fails {
        return HttpResponse::InternalServerError()
            .json(json!({"type": "error", "error": {"type": "api_error"}}));
    }

    let text = if prompt.contains(CLASSIFIER_MARKER) {
        stub.classifier_reply.to_string()
    } else if prompt.contains("Web Search Results:") {
        format!("\n  Answer using {} sources.  \n", prompt.matches("Title: ").count())
    } else {
        "  Direct answer.\n".to_string()
    };

    HttpResponse::Ok().json(json!({
        "id": "msg_stub",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
    }))
}

async fn serper(
    stub: web::Data<Stub>,
    recorded: web::Data<Recorded>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> HttpResponse {
    recorded.search_calls.fetch_add(1, Ordering::SeqCst);
    recorded.search_bodies.lock().unwrap().push(body.into_inner());
    recorded
        .search_keys
        .lock()
        .unwrap()
        .push(header(&req, "x-api-key"));

    match stub.search {
        SearchBehaviour::Results(n) => {
            let organic: Vec<Value> = (1..=n)
                .map(|i| {
                    json!({
                        "title": format!("Result {i}"),
                        "snippet": format!("Snippet {i}"),
                        "link": format!("https://example.com/{i}"),
                        "position": i,
                    })
                })
                .collect();
            HttpResponse::Ok().json(json!({"searchParameters": {}, "organic": organic}))
        }
        SearchBehaviour::Status(code) => {
            HttpResponse::build(StatusCode::from_u16(code).unwrap()).finish()
        }
        SearchBehaviour::Garbage => HttpResponse::Ok()
            .content_type("application/json")
            .body("{not json"),
    }
}

pub fn start(stub: Stub) -> (actix_test::TestServer, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let shared = recorded.clone();
    let srv = actix_test::start(move || {
        App::new()
            .app_data(web::Data::new(stub.clone()))
            .app_data(web::Data::from(shared.clone()))
            .route("/v1/messages", web::post().to(messages))
            .route("/search", web::post().to(serper))
    });
    (srv, recorded)
}

pub fn config_for(srv: &actix_test::TestServer, serper_key: Option<&str>) -> Config {
    let base = format!("http://{}", srv.addr());
    let mut config = Config::default();
    config.llm.api_key = Some("test-anthropic-key".to_string());
    config.llm.base_url = base.clone();
    config.llm.timeout_secs = 5;
    config.search.api_key = serper_key.map(str::to_string);
    config.search.endpoint = format!("{base}/search");
    config.search.timeout_secs = 5;
    config
}
