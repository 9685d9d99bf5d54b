//! # Mock Framework
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! | Use case | MockClient | Real actor |
//! |----------|------------|------------|
//! | Client wrapper logic | yes | possible |
//! | Actor hooks that call a dependency | dependency mocked | actor under test |
//! | Error injection | `return_err` | needs a real failing state |
//!
//! ```rust,ignore
//! let mut menu = MockClient::<MenuItem>::new();
//! menu.expect_get(MenuItemId(1)).return_ok(Some(item));
//! let client = MenuClient::new(menu.client());
//! // ... exercise code that uses `client` ...
//! menu.verify();
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong kind, wrong id, or an action rejected by its matcher) gets
//! no reply, so the caller sees [`FrameworkError::ActorDropped`]. The mismatch is
//! recorded and [`MockClient::verify`] panics listing it.
//!
//! For the lowest-level checks, [`create_mock_client`] returns the raw receiver
//! and the `expect_*` helpers pop one request off it.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

type ActionMatcher<T> = Box<dyn Fn(&<T as ActorEntity>::Action) -> bool + Send + Sync>;

/// One scripted answer.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        matcher: Option<ActionMatcher<T>>,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    mismatches: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &SharedScript<T>) -> MutexGuard<'_, Script<T>> {
    // A poisoned lock only means another test assertion already panicked.
    script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A client backed by scripted expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: SharedScript<T> = Arc::new(Mutex::new(Script {
            expectations: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let answering = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&answering).expectations.pop_front();
                answer(request, next, &answering);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client whose requests are answered by this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            script: self.script.clone(),
        }
    }

    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            script: self.script.clone(),
        }
    }

    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            matcher: None,
            script: self.script.clone(),
        }
    }

    /// Panics unless every expectation was consumed and every request matched.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", script.mismatches);
        }
        if !script.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.expectations.len()
            );
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// Answers one request from the next expectation, or records why it could not.
///
/// A mismatch is recorded before the request (and its reply channel) is dropped,
/// so a caller woken by `ActorDropped` always finds it in the script.
fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    next: Option<Expectation<T>>,
    script: &SharedScript<T>,
) {
    match (request, next) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
            if id == want =>
        {
            reply(respond_to, response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            reply(respond_to, response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) if id == want => {
            reply(respond_to, response);
        }
        (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
            if id == want =>
        {
            reply(respond_to, response);
        }
        (
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            Some(Expectation::Action {
                id: want,
                matcher,
                response,
            }),
        ) if id == want => {
            if matcher.is_some_and(|accepts| !accepts(&action)) {
                lock(script)
                    .mismatches
                    .push(format!("action {action:?} on {id} rejected by matcher"));
                drop(respond_to);
                return;
            }
            reply(respond_to, response);
        }
        (request, expected) => {
            let mismatch = format!(
                "{} (expected {})",
                describe_request(&request),
                expected.as_ref().map_or("nothing", describe_expectation)
            );
            lock(script).mismatches.push(mismatch);
            drop(request);
        }
    }
}

fn describe_request<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("get {id}"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Update { id, .. } => format!("update {id}"),
        ResourceRequest::Delete { id, .. } => format!("delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("action {action:?} on {id}"),
    }
}

fn describe_expectation<T: ActorEntity>(expectation: &Expectation<T>) -> &'static str {
    match expectation {
        Expectation::Get { .. } => "get",
        Expectation::List { .. } => "list",
        Expectation::Create { .. } => "create",
        Expectation::Update { .. } => "update",
        Expectation::Delete { .. } => "delete",
        Expectation::Action { .. } => "action",
    }
}

fn push<T: ActorEntity>(script: &SharedScript<T>, expectation: Expectation<T>) {
    lock(script).expectations.push_back(expectation);
}

pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: SharedScript<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.script, Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.script, Expectation::Get { id: self.id, response: Err(error) });
    }
}

pub struct ListExpectationBuilder<T: ActorEntity> {
    script: SharedScript<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, values: Vec<T>) {
        push(&self.script, Expectation::List { response: Ok(values) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.script, Expectation::List { response: Err(error) });
    }
}

pub struct CreateExpectationBuilder<T: ActorEntity> {
    script: SharedScript<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.script, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.script, Expectation::Create { response: Err(error) });
    }
}

pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: SharedScript<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        push(&self.script, Expectation::Update { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.script, Expectation::Update { id: self.id, response: Err(error) });
    }
}

pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: SharedScript<T>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        push(&self.script, Expectation::Delete { id: self.id, response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.script, Expectation::Delete { id: self.id, response: Err(error) });
    }
}

pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    matcher: Option<ActionMatcher<T>>,
    script: SharedScript<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Only accept actions for which `matcher` returns true.
    pub fn with(mut self, matcher: impl Fn(&T::Action) -> bool + Send + Sync + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    pub fn return_ok(self, result: T::ActionResult) {
        push(
            &self.script,
            Expectation::Action {
                id: self.id,
                matcher: self.matcher,
                response: Ok(result),
            },
        );
    }

    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.script,
            Expectation::Action {
                id: self.id,
                matcher: self.matcher,
                response: Err(error),
            },
        );
    }
}

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pops the next request if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, MenuItemId, RestaurantId};
    use rust_decimal::Decimal;

    fn soup() -> MenuItem {
        MenuItem::new(MenuItemId(1), RestaurantId(1), "Soup", Decimal::new(450, 2), "Starters")
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_request() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(4);
        let task = tokio::spawn(async move { client.get(MenuItemId(1)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, MenuItemId(1));
        responder.send(Ok(Some(soup()))).unwrap();

        let fetched = task.await.unwrap().unwrap();
        assert_eq!(fetched.map(|item| item.name), Some("Soup".to_string()));
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_get(MenuItemId(1)).return_ok(Some(soup()));
        mock.expect_list().return_ok(vec![soup()]);
        mock.expect_delete(MenuItemId(1)).return_err(FrameworkError::NotFound("item_1".into()));
        let client = mock.client();

        assert!(client.get(MenuItemId(1)).await.unwrap().is_some());
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(matches!(
            client.delete(MenuItemId(1)).await,
            Err(FrameworkError::NotFound(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected requests")]
    async fn test_wrong_id_is_reported() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_get(MenuItemId(1)).return_ok(None);
        let client = mock.client();

        let result = client.get(MenuItemId(2)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
        mock.verify();
    }
}
