#![allow(dead_code)]

pub mod stubs {
    use segrouter::{ActionController, ControllerHandle, Flavor, Router, RouterError};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    pub const PREFIX: &str = "stubs\\Controller";
    pub const TEST_CONTROLLER: &str = "stubs\\Controller\\TestController";
    pub const INDEX_CONTROLLER: &str = "stubs\\Controller\\IndexController";

    fn reply(class: &'static str, action: &'static str, args: &[String]) -> Result<Value, RouterError> {
        Ok(json!({ "controller": class, "action": action, "args": args }))
    }

    pub fn test_controller() -> ControllerHandle {
        ActionController::new(TEST_CONTROLLER)
            .with_action("indexAction", |args| reply(TEST_CONTROLLER, "indexAction", args))
            .with_action("testAction", |args| reply(TEST_CONTROLLER, "testAction", args))
            .with_action("lolAction", |args| reply(TEST_CONTROLLER, "lolAction", args))
            .with_action("get", |args| reply(TEST_CONTROLLER, "get", args))
            .with_action("put", |args| reply(TEST_CONTROLLER, "put", args))
            .with_action("failAction", |_| {
                Err(RouterError::action_failed(TEST_CONTROLLER, "failAction", "boom"))
            })
            .into_handle()
    }

    pub fn index_controller() -> ControllerHandle {
        ActionController::new(INDEX_CONTROLLER)
            .with_action("indexAction", |args| reply(INDEX_CONTROLLER, "indexAction", args))
            .with_action("get", |args| reply(INDEX_CONTROLLER, "get", args))
            .into_handle()
    }

    /// Router with the two stub controllers registered under [`PREFIX`]
    pub fn router(flavor: Flavor) -> Router {
        Router::new(flavor)
            .with_controller_prefix(PREFIX)
            .with_controller(TEST_CONTROLLER, test_controller)
            .with_controller(INDEX_CONTROLLER, index_controller)
    }

    /// Shared event trail for lifecycle-order assertions
    pub type Trail = Arc<Mutex<Vec<String>>>;

    pub fn trail() -> Trail {
        Arc::new(Mutex::new(Vec::new()))
    }
}
