#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use clap::Parser;
use common::fixtures::{Workspace, BLOG_SPEC, POST_MAPPING, USER_MAPPING};
use jsonapi_links::cli::{run, run_with_env, Cli};
use jsonapi_links::mapping::Mapping;
use std::process::Command;

fn run_to_string(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_routes_lists_every_route() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);

    let output = run_to_string(&["jsonapi-links", "routes", "--spec", spec.to_str().unwrap()]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "list_post_comments -> GET /api/posts/{id}/comments");
    assert!(lines.contains(&"post_show -> GET /api/posts/{id}"));
}

#[test]
fn test_materialize_json_output() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    ws.write("mappings/post.yml", POST_MAPPING);
    ws.write("mappings/user.yml", USER_MAPPING);
    let mappings = ws.path("mappings");

    let output = run_to_string(&[
        "jsonapi-links",
        "materialize",
        "--spec",
        spec.to_str().unwrap(),
        "--mappings",
        mappings.to_str().unwrap(),
        "--base-url",
        "https://api.test",
        "--format",
        "json",
    ])
    .unwrap();

    let resolved: Vec<Mapping> = serde_json::from_str(&output).unwrap();
    assert_eq!(resolved.len(), 2);
    let post = resolved
        .iter()
        .find(|m| m.class_name() == r"Acme\Domain\Post")
        .unwrap();
    assert_eq!(post.self_url(), "https://api.test/api/posts/{id}");
    assert_eq!(
        post.relationship_self_url()["author"]["related"],
        "https://api.test/api/users/{id}"
    );
}

#[test]
fn test_materialize_yaml_output_with_host() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let mapping = ws.write("user.yml", USER_MAPPING);

    let output = run_to_string(&[
        "jsonapi-links",
        "materialize",
        "--spec",
        spec.to_str().unwrap(),
        "--mappings",
        mapping.to_str().unwrap(),
        "--host",
        "http://localhost:8080",
    ])
    .unwrap();

    let resolved: Vec<Mapping> = serde_yaml::from_str(&output).unwrap();
    assert_eq!(resolved[0].self_url(), "http://localhost:8080/api/users/{id}");
}

#[test]
fn test_materialize_undefined_route_fails() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let mapping = ws.write(
        "broken.yml",
        "mapping:\n  class: Broken\n  urls:\n    self: not_a_route\n",
    );

    let err = run_to_string(&[
        "jsonapi-links",
        "materialize",
        "--spec",
        spec.to_str().unwrap(),
        "--mappings",
        mapping.to_str().unwrap(),
    ])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Route 'not_a_route' has not been defined as a route."
    );
}

#[test]
fn test_materialize_rejects_bad_base_url() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let mapping = ws.write("user.yml", USER_MAPPING);

    let result = run_to_string(&[
        "jsonapi-links",
        "materialize",
        "--spec",
        spec.to_str().unwrap(),
        "--mappings",
        mapping.to_str().unwrap(),
        "--base-url",
        "https://api.test/v1",
    ]);
    assert!(result.is_err());
}

fn run_with_vars(args: &[&str], vars: &[(&str, &str)]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run_with_env(&cli, &mut out, |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_routes_ignores_link_configuration() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let vars = [("JSONAPI_LINKS_BASE_URL", "ftp://not-http")];

    let output = run_with_vars(
        &["jsonapi-links", "routes", "--spec", spec.to_str().unwrap()],
        &vars,
    )
    .unwrap();
    assert_eq!(output.lines().count(), 5);
}

#[test]
fn test_materialize_reads_link_configuration() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let mapping = ws.write("user.yml", USER_MAPPING);
    let args = [
        "jsonapi-links",
        "materialize",
        "--spec",
        spec.to_str().unwrap(),
        "--mappings",
        mapping.to_str().unwrap(),
    ];

    let output = run_with_vars(&args, &[("JSONAPI_LINKS_BASE_URL", "https://api.test")]).unwrap();
    let resolved: Vec<Mapping> = serde_yaml::from_str(&output).unwrap();
    assert_eq!(resolved[0].self_url(), "https://api.test/api/users/{id}");

    let err = run_with_vars(&args, &[("JSONAPI_LINKS_BASE_URL", "ftp://not-http")]).unwrap_err();
    assert!(
        err.to_string().contains("invalid link configuration"),
        "error: {err:#}"
    );
}

#[test]
fn test_binary_exits_non_zero_on_undefined_route() {
    let ws = Workspace::new();
    let spec = ws.write("openapi.yaml", BLOG_SPEC);
    let mapping = ws.write(
        "broken.yml",
        "mapping:\n  class: Broken\n  urls:\n    self: not_a_route\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_jsonapi-links"))
        .arg("materialize")
        .arg("--spec")
        .arg(&spec)
        .arg("--mappings")
        .arg(&mapping)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not_a_route"));
}
