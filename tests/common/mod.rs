#![allow(dead_code)]

pub mod spy {
    use routeboard::{IncomingRequest, Params, RecordedResponse};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Records every invocation of the handler it produces.
    #[derive(Clone, Default)]
    pub struct CallbackSpy {
        calls: Arc<Mutex<Vec<HashMap<String, String>>>>,
    }

    impl CallbackSpy {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn handler(
            &self,
        ) -> impl Fn(&IncomingRequest, &mut RecordedResponse, &Params) + Send + Sync + 'static
        {
            let calls = Arc::clone(&self.calls);
            move |_req, _res, params| {
                calls.lock().unwrap().push(params.to_map());
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn called_once(&self) -> bool {
            self.call_count() == 1
        }

        pub fn last_params(&self) -> Option<HashMap<String, String>> {
            self.calls.lock().unwrap().last().cloned()
        }

        pub fn all_params(&self) -> Vec<HashMap<String, String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

pub mod requests {
    use routeboard::{Dispatcher, IncomingRequest, RecordedResponse};

    pub type TestDispatcher = Dispatcher<IncomingRequest, RecordedResponse>;

    pub fn quiet_dispatcher() -> TestDispatcher {
        Dispatcher::with_config(routeboard::RouterConfig::quiet())
    }

    pub fn send(dispatcher: &TestDispatcher, method: &str, url: &str) -> RecordedResponse {
        let mut res = RecordedResponse::new();
        dispatcher.dispatch(&IncomingRequest::new(method, url), &mut res);
        res
    }
}

pub mod logs {
    use std::collections::HashMap;
    use std::fmt::Debug;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// One captured event: level, message text and the other fields.
    #[derive(Debug, Clone)]
    pub struct CapturedEvent {
        pub level: Level,
        pub message: String,
        pub fields: HashMap<String, String>,
    }

    #[derive(Default)]
    struct EventVisitor {
        message: String,
        fields: HashMap<String, String>,
    }

    impl Visit for EventVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.record(field, value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            self.record(field, format!("{value:?}"));
        }
    }

    impl EventVisitor {
        fn record(&mut self, field: &Field, value: String) {
            if field.name() == "message" {
                self.message = value;
            } else {
                self.fields.insert(field.name().to_string(), value);
            }
        }
    }

    /// Records events whose target starts with `prefix`.
    #[derive(Clone)]
    pub struct LogRecorder {
        prefix: &'static str,
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl<S: Subscriber> Layer<S> for LogRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if !event.metadata().target().starts_with(self.prefix) {
                return;
            }
            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message,
                fields: visitor.fields,
            });
        }
    }

    impl LogRecorder {
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn messages(&self) -> Vec<String> {
            self.events().into_iter().map(|e| e.message).collect()
        }
    }

    /// Run `f` with a thread-local subscriber and return what it logged
    /// under `prefix`.
    pub fn capture<F: FnOnce()>(prefix: &'static str, f: F) -> LogRecorder {
        let recorder = LogRecorder {
            prefix,
            events: Arc::default(),
        };
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        tracing::subscriber::with_default(subscriber, f);
        recorder
    }
}
