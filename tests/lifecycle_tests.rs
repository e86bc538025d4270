#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::stubs::{self, Trail};
use segrouter::events::{ComponentEvents, ControllerEvents};
use segrouter::{Flavor, Router};
use std::sync::Arc;

fn record_controller_phases(router: &mut Router, trail: &Trail) {
    let t = Arc::clone(trail);
    router.on(ControllerEvents::CREATING, move |_r, e| {
        t.lock().unwrap().push(format!("controller.creating:{}", e.name()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ControllerEvents::CREATE, move |_r, e| {
        t.lock().unwrap().push(format!("controller.create:{}", e.class()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ControllerEvents::CREATED, move |_r, e| {
        t.lock().unwrap().push(format!("controller.created:{}", e.controller().class()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ControllerEvents::DISPATCHING, move |_r, e| {
        t.lock()
            .unwrap()
            .push(format!("controller.dispatching:{}", e.action().unwrap_or("-")));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ControllerEvents::DISPATCH, move |_r, e| {
        t.lock()
            .unwrap()
            .push(format!("controller.dispatch:{}", e.result().is_some()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ControllerEvents::DISPATCHED, move |_r, e| {
        t.lock()
            .unwrap()
            .push(format!("controller.dispatched:{}", e.url().join("/")));
        Ok(())
    });
}

fn record_component_phases(router: &mut Router, trail: &Trail) {
    let t = Arc::clone(trail);
    router.on(ComponentEvents::CREATING, move |_r, e| {
        t.lock().unwrap().push(format!("component.creating:{}", e.name()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ComponentEvents::CREATE, move |_r, e| {
        t.lock().unwrap().push(format!("component.create:{}", e.has_instance()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ComponentEvents::CREATED, move |_r, _e| {
        t.lock().unwrap().push("component.created".to_string());
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ComponentEvents::DISPATCHING, move |_r, e| {
        t.lock()
            .unwrap()
            .push(format!("component.dispatching:{}", e.url().join("/")));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ComponentEvents::DISPATCH, move |_r, e| {
        t.lock()
            .unwrap()
            .push(format!("component.dispatch:{}", e.result().is_some()));
        Ok(())
    });
    let t = Arc::clone(trail);
    router.on(ComponentEvents::DISPATCHED, move |_r, _e| {
        t.lock().unwrap().push("component.dispatched".to_string());
        Ok(())
    });
}

#[test]
fn test_blank_route_fires_all_controller_listeners() {
    let trail = stubs::trail();
    let mut router = stubs::router(Flavor::Mvc);
    record_controller_phases(&mut router, &trail);

    router.dispatch("/").unwrap();
    assert_eq!(
        *trail.lock().unwrap(),
        [
            "controller.creating:index",
            "controller.create:stubs\\Controller\\IndexController",
            "controller.created:stubs\\Controller\\IndexController",
            "controller.dispatching:indexAction",
            "controller.dispatch:true",
            "controller.dispatched:",
        ]
    );
}

#[test]
fn test_route_fires_all_controller_listeners() {
    let trail = stubs::trail();
    let mut router = stubs::router(Flavor::Mvc);
    record_controller_phases(&mut router, &trail);

    router.dispatch("/test/lol/a/b").unwrap();
    assert_eq!(
        *trail.lock().unwrap(),
        [
            "controller.creating:test",
            "controller.create:stubs\\Controller\\TestController",
            "controller.created:stubs\\Controller\\TestController",
            "controller.dispatching:lolAction",
            "controller.dispatch:true",
            "controller.dispatched:a/b",
        ]
    );
}

#[test]
fn test_component_fires_all_component_listeners() {
    let trail = stubs::trail();
    let mut router = Router::mvc().with_components([("comp", "stubs\\Component\\TestComponent")]);
    router.register_component_factory("stubs\\Component\\TestComponent", || {
        Arc::new(stubs::router(Flavor::Mvc))
    });
    record_component_phases(&mut router, &trail);

    router.dispatch("/comp/test/lol").unwrap();
    assert_eq!(
        *trail.lock().unwrap(),
        [
            "component.creating:stubs\\Component\\TestComponent",
            "component.create:true",
            "component.created",
            "component.dispatching:test/lol",
            "component.dispatch:true",
            "component.dispatched",
        ]
    );
}

#[test]
fn test_failed_resolution_fires_nothing_after_creating() {
    let trail = stubs::trail();
    let mut router = stubs::router(Flavor::Mvc);
    record_controller_phases(&mut router, &trail);

    let err = router.dispatch("/nope/x").unwrap_err();
    assert_eq!(err.to_string(), "Could not find stubs\\Controller\\NopeController");
    assert!(trail.lock().unwrap().is_empty());
}

#[test]
fn test_failed_action_stops_before_dispatch() {
    let trail = stubs::trail();
    let mut router = stubs::router(Flavor::Mvc);
    record_controller_phases(&mut router, &trail);

    assert!(router.dispatch("/test/wot").is_err());
    assert_eq!(
        *trail.lock().unwrap(),
        [
            "controller.creating:test",
            "controller.create:stubs\\Controller\\TestController",
            "controller.created:stubs\\Controller\\TestController",
        ]
    );
}

#[test]
fn test_action_failure_propagates() {
    let router = stubs::router(Flavor::Mvc);
    let err = router.dispatch("/test/fail").unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert!(!err.is_not_found());
}

#[test]
fn test_component_key_wins_over_existing_controller() {
    let trail = stubs::trail();
    let mut router = stubs::router(Flavor::Mvc)
        .with_components([("test", stubs::router(Flavor::Mvc))]);
    record_controller_phases(&mut router, &trail);
    record_component_phases(&mut router, &trail);

    let result = router.dispatch("/test/test/lol").unwrap();
    assert_eq!(result["action"], "lolAction");
    assert_eq!(
        *trail.lock().unwrap(),
        [
            "component.creating:test",
            "component.create:true",
            "component.created",
            "component.dispatching:test/lol",
            "component.dispatch:true",
            "component.dispatched",
        ]
    );
}
