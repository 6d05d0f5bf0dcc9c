use assert_cmd::prelude::*;
use assert_fs::{fixture::PathChild, TempDir};
use std::{
    io::{Read, Write},
    net::TcpListener,
    process::Command,
    thread,
};

const DUNE_JSON: &str = include_str!("../crates/bookpost/tests/data/google_books_dune.json");

// We check the --help output in order to confirm that the clap cli is setup correctly.
// Any arguments that are incorrectly will cause clap to panic regardless of the arguments or
// options provided.
#[test]
fn check_clap_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bookpost")?;

    cmd.arg("--help");
    cmd.assert().success();

    Ok(())
}

/// Answers the first request made to the returned URL with `body` as JSON.
///
/// The listener thread is left detached, a command that fails before sending a request would
/// otherwise block the test forever.
fn serve_once(status: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Cannot bind a local port for test");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}/books/v1/volumes")
}

fn bookpost(api_url: &str, outdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bookpost").expect("bookpost binary should be built");
    cmd.arg("--api-url")
        .arg(api_url)
        .arg("--outdir")
        .arg(outdir)
        .env("NO_PROXY", "127.0.0.1")
        .env("no_proxy", "127.0.0.1");
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn dune_page_is_written() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let outdir = dir.child("content").child("books");
    let url = serve_once("200 OK", DUNE_JSON.to_owned());

    let output = bookpost(&url, outdir.path()).arg("Dune").output()?;
    assert!(output.status.success(), "{output:?}");

    let page_path = outdir.path().join("dune.md");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&page_path.display().to_string()), "{stdout}");

    let page = std::fs::read_to_string(&page_path)?;
    assert!(page.starts_with("---\ntitle: \"Dune\"\n"), "{page}");
    assert!(page.contains("author: \"Frank Herbert\"\n"), "{page}");
    assert!(page.contains("isbn: \"9780441013593\"\n"), "{page}");
    assert!(page.contains("draft: true\n---\n"), "{page}");

    Ok(())
}

#[test]
fn slug_and_title_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let url = serve_once("200 OK", DUNE_JSON.to_owned());

    bookpost(&url, dir.path())
        .args(["--isbn", "9780441013593", "--slug", "custom-name", "--title", "My Dune"])
        .assert()
        .success();

    assert!(!dir.path().join("dune.md").exists());
    let page = std::fs::read_to_string(dir.path().join("custom-name.md"))?;
    assert!(page.starts_with("---\ntitle: \"My Dune\"\n"), "{page}");

    Ok(())
}

#[test]
fn no_items_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let outdir = dir.child("books");
    let body = serde_json::json!({ "kind": "books#volumes", "totalItems": 0 }).to_string();
    let url = serve_once("200 OK", body);

    let output = bookpost(&url, outdir.path()).arg("No such book").output()?;

    assert_eq!(Some(2), output.status.code(), "{output:?}");
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("No books found"), "{stderr}");
    assert!(!outdir.path().exists());

    Ok(())
}

#[test]
fn error_status_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let url = serve_once("503 Service Unavailable", "{}".to_owned());

    bookpost(&url, dir.path()).arg("Dune").assert().failure().code(2);
    assert!(!dir.path().join("dune.md").exists());

    Ok(())
}

#[test]
fn unreachable_api_fails_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let outdir = dir.child("books");

    // bind then drop to get a port nothing is listening on
    let addr = TcpListener::bind("127.0.0.1:0")?.local_addr()?;
    let url = format!("http://{addr}/books/v1/volumes");

    bookpost(&url, outdir.path()).arg("Dune").assert().failure().code(2);
    assert!(!outdir.path().exists());

    Ok(())
}
