//! Shared fakes for client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokensoft_client::eth::AbiItem;
use tokensoft_client::{
    ClientConfig, ClientError, ClientOptions, ClientResult, Clock, Contract, ContractProvider,
    HttpRequest, TokensoftClient, Transport,
};

pub const API_URL: &str = "https://api.test/graphql";
pub const KEY_ID: &str = "key-1";
pub const SECRET: &str = "shh";

/// Answers `{ time }` probes with a fixed server time, records every signed
/// request and replays scripted replies in order.
pub struct FakeTransport {
    server_time: AtomicI64,
    probes: AtomicUsize,
    fail_probes: bool,
    replies: Mutex<VecDeque<ClientResult<Value>>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new(server_time: i64) -> Self {
        Self {
            server_time: AtomicI64::new(server_time),
            probes: AtomicUsize::new(0),
            fail_probes: false,
            replies: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_probes() -> Self {
        Self {
            fail_probes: true,
            ..Self::new(0)
        }
    }

    pub fn set_server_time(&self, ms: i64) {
        self.server_time.store(ms, Ordering::SeqCst);
    }

    pub fn reply(&self, value: Value) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(value));
        self
    }

    pub fn reply_err(&self, err: ClientError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Value {
        let sent = self.sent();
        let last = sent.last().expect("no signed request was sent");
        serde_json::from_str(&last.body).unwrap()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post(&self, _url: &str, request: HttpRequest) -> ClientResult<Value> {
        if request.body == r#"{"query":"{ time }"}"# {
            self.probes.fetch_add(1, Ordering::SeqCst);
            // let a concurrent caller run while this probe is in flight
            tokio::task::yield_now().await;
            if self.fail_probes {
                return Err(ClientError::Transport("connection refused".into()));
            }
            let now = self.server_time.load(Ordering::SeqCst);
            return Ok(json!({ "data": { "time": now.to_string() } }));
        }

        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "data": {} })))
    }
}

/// A hand-driven local clock.
#[derive(Default)]
pub struct FakeClock(AtomicI64);

impl FakeClock {
    pub fn at(ms: i64) -> Self {
        Self(AtomicI64::new(ms))
    }

    pub fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// A token contract with canned results per method.
#[derive(Default)]
pub struct FakeContract {
    results: HashMap<String, Result<Value, String>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl FakeContract {
    pub fn returning(mut self, method: &str, value: Value) -> Self {
        self.results.insert(method.to_string(), Ok(value));
        self
    }

    pub fn failing(mut self, method: &str, message: &str) -> Self {
        self.results.insert(method.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Contract for FakeContract {
    async fn call(&self, method: &str, args: Vec<Value>) -> ClientResult<Value> {
        self.calls.lock().unwrap().push((method.to_string(), args));
        match self.results.get(method) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(ClientError::Contract(message.clone())),
            None => Err(ClientError::Contract(format!("no such method: {method}"))),
        }
    }
}

/// Hands out the same contract for any address, remembering which was asked for.
pub struct FakeContracts {
    contract: Arc<FakeContract>,
    requested: Mutex<Vec<(String, usize)>>,
}

impl FakeContracts {
    pub fn new(contract: FakeContract) -> Self {
        Self {
            contract: Arc::new(contract),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn token(&self) -> &FakeContract {
        &self.contract
    }

    /// `(address, abi item count)` for every handle built.
    pub fn requested(&self) -> Vec<(String, usize)> {
        self.requested.lock().unwrap().clone()
    }
}

impl ContractProvider for FakeContracts {
    fn contract(&self, abi: &[AbiItem], address: &str) -> Arc<dyn Contract> {
        self.requested
            .lock()
            .unwrap()
            .push((address.to_string(), abi.len()));
        self.contract.clone()
    }
}

/// Routes client logs to the test output. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collects formatted log lines written on the current thread until the
/// guard is dropped.
pub fn capture_logs() -> (tracing::subscriber::DefaultGuard, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    (tracing::subscriber::set_default(subscriber), logs)
}

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(API_URL, KEY_ID, SECRET)
}

/// A client wired to `transport` and a clock starting at 1_000.
pub fn client_with(transport: Arc<FakeTransport>) -> TokensoftClient {
    init_tracing();
    let options = ClientOptions::default()
        .with_transport(transport)
        .with_clock(Arc::new(FakeClock::at(1_000)));
    TokensoftClient::with_options(config(), options).unwrap()
}
