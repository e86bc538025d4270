//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use crate::router::Flavor;
use clap::Parser;
use std::io::Write;

const CONFIG: &str = r#"
controller_prefix: "X"
controllers:
  "X\\TestController": [indexAction, lolAction]
components:
  shop: shop_router
routers:
  shop_router:
    flavor: rest
    controllers:
      "App\\Controller\\CartController": [get]
"#;

fn config_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();
    file
}

#[test]
fn test_dispatch_command_parses() {
    let cli = Cli::try_parse_from([
        "segrouter",
        "dispatch",
        "--config",
        "router.yaml",
        "--verb",
        "PUT",
        "/users/1",
    ])
    .unwrap();

    match cli.command {
        Commands::Dispatch {
            config,
            flavor,
            verb,
            path,
        } => {
            assert_eq!(config.unwrap().to_string_lossy(), "router.yaml");
            assert_eq!(flavor, Flavor::Mvc);
            assert_eq!(verb, "PUT");
            assert_eq!(path, "/users/1");
        }
        _ => panic!("Expected Dispatch command"),
    }
}

#[test]
fn test_flavor_flag_parses() {
    let cli = Cli::try_parse_from(["segrouter", "resolve", "--flavor", "rest", "/x"]).unwrap();
    match cli.command {
        Commands::Resolve { flavor, .. } => assert_eq!(flavor, Flavor::Rest),
        _ => panic!("Expected Resolve command"),
    }
    assert!(Cli::try_parse_from(["segrouter", "resolve", "--flavor", "soap", "/x"]).is_err());
}

#[test]
fn test_tokenize_output() {
    let output = execute(&Commands::Tokenize {
        path: "/a//b?x=1".to_string(),
    })
    .unwrap();
    let segments: Vec<String> = serde_json::from_str(&output).unwrap();
    assert_eq!(segments, ["a", "b"]);
}

#[test]
fn test_resolve_controller_and_component() {
    let file = config_file();

    let output = execute(&Commands::Resolve {
        config: Some(file.path().to_path_buf()),
        flavor: Flavor::Mvc,
        path: "/test/lol".to_string(),
    })
    .unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["kind"], "controller");
    assert_eq!(report["target"], "X\\TestController");

    let output = execute(&Commands::Resolve {
        config: Some(file.path().to_path_buf()),
        flavor: Flavor::Mvc,
        path: "/shop/cart".to_string(),
    })
    .unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["kind"], "component");
    assert_eq!(report["target"], "shop_router");
}

#[test]
fn test_dispatch_through_component() {
    let file = config_file();
    let output = execute(&Commands::Dispatch {
        config: Some(file.path().to_path_buf()),
        flavor: Flavor::Mvc,
        verb: "get".to_string(),
        path: "/shop/cart/7".to_string(),
    })
    .unwrap();
    let result: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(result["action"], "get");
    assert_eq!(result["args"], serde_json::json!(["7"]));
}

#[test]
fn test_dispatch_without_config_is_not_found() {
    let err = execute(&Commands::Dispatch {
        config: None,
        flavor: Flavor::Mvc,
        verb: "get".to_string(),
        path: "/".to_string(),
    })
    .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Could not find App\\Controller\\IndexController"
    );
}
