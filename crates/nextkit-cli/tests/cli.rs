//! End-to-end tests for the nextkit CLI. Every prompt is pre-answered by flags.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A throwaway Next.js workspace
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("package.json"), "{}").expect("package.json");
    dir
}

fn nextkit(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nextkit"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run nextkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn component_is_created_in_target_dir() {
    let ws = workspace();
    fs::create_dir_all(ws.path().join("src/components")).unwrap();

    let output = nextkit(ws.path(), &["component", "src/components", "--name", "user card"]);
    assert!(output.status.success(), "{:?}", output);

    let folder = ws.path().join("src/components/user-card");
    assert!(folder.join("components").is_dir());
    let content = fs::read_to_string(folder.join("index.tsx")).unwrap();
    assert!(content.contains("UserCard"));
    assert!(stdout(&output).contains("index.tsx"));
}

#[test]
fn existing_component_needs_force() {
    let ws = workspace();
    let args = ["component", ".", "--name", "button"];
    assert!(nextkit(ws.path(), &args).status.success());

    let again = nextkit(ws.path(), &args);
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("already exists"));

    let forced = nextkit(ws.path(), &["component", ".", "--name", "button", "--force"]);
    assert!(forced.status.success(), "{:?}", forced);
}

#[test]
fn page_with_metadata_flags() {
    let ws = workspace();
    let output = nextkit(
        ws.path(),
        &[
            "page",
            "app",
            "--name",
            "blog post",
            "--title",
            "Blog",
            "--description",
            "Posts",
        ],
    );
    assert!(output.status.success(), "{:?}", output);

    let content = fs::read_to_string(ws.path().join("app/blog-post/page.tsx")).unwrap();
    assert!(content.contains("BlogPostPageProps"));
    assert!(content.contains("title: 'Blog',"));
    assert!(content.contains("description: 'Posts',"));
}

#[test]
fn route_then_nothing_left_to_add() {
    let ws = workspace();
    let route = ws.path().join("src/app/api/users");

    let first = nextkit(
        ws.path(),
        &["route", "src/app/api/users", "--name", "users", "--methods", "GET,POST"],
    );
    assert!(first.status.success(), "{:?}", first);
    assert!(ws.path().join("src/utils/nextApiUtils.ts").is_file());
    assert!(route.join("methods/GET.ts").is_file());
    assert!(route.join("methods/POST.ts").is_file());

    // the name is recovered from the files written above
    let second = nextkit(
        ws.path(),
        &["route", "src/app/api/users/methods", "--methods", "put,patch,delete"],
    );
    assert!(second.status.success(), "{:?}", second);
    let put = fs::read_to_string(route.join("methods/PUT.ts")).unwrap();
    assert!(put.contains("UsersRouteParams"));
    let route_file = fs::read_to_string(route.join("route.ts")).unwrap();
    assert!(route_file.contains("export { GET, POST, PUT, PATCH, DELETE };"));

    let third = nextkit(ws.path(), &["route", "src/app/api/users"]);
    assert!(third.status.success(), "{:?}", third);
    assert!(stdout(&third).contains("All methods already exist."));
}

#[test]
fn dry_run_writes_nothing() {
    let ws = workspace();
    let output = nextkit(
        ws.path(),
        &["--dry-run", "route", "api/items", "--name", "items", "--methods", "GET"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert!(stdout(&output).contains("Would write"));
    assert!(!ws.path().join("api").exists());
    assert!(!ws.path().join("src").exists());
}

#[test]
fn init_config_writes_defaults_once() {
    let ws = workspace();
    let output = nextkit(ws.path(), &["init-config"]);
    assert!(output.status.success(), "{:?}", output);

    let content = fs::read_to_string(ws.path().join("nextkit.yaml")).unwrap();
    assert!(content.contains("component_extension: tsx"));

    assert!(!nextkit(ws.path(), &["init-config"]).status.success());
}

#[test]
fn config_file_changes_extensions() {
    let ws = workspace();
    fs::write(
        ws.path().join("nextkit.toml"),
        "component_extension = \"jsx\"\n",
    )
    .unwrap();

    let output = nextkit(ws.path(), &["component", ".", "--name", "card"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(ws.path().join("card/index.jsx").is_file());
}
