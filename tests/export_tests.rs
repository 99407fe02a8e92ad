//! End-to-end export tests against a stub GitHub API

mod support;

use repodump::commands::{Command, CommandContext, ExportCommand};
use repodump::config::{ConfigFile, SettingsBuilder};
use repodump::export::{ExportPlan, ExportScope, ExportSummary, Exporter};
use repodump::records::{COMMIT_HEADERS, CommitMapper, REPOSITORY_HEADERS};
use repodump_github::GitHubClient;
use serde_json::json;
use std::path::Path;
use support::{TOKEN, USER, commit_json, repository_json};
use tempfile::TempDir;
use wiremock::matchers::{basic_auth, bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap()
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn exporter(server: &MockServer) -> Exporter {
    let client = GitHubClient::new(USER, TOKEN).with_base_url(server.uri());
    let mapper = CommitMapper::new(&server.uri(), USER).unwrap();
    Exporter::new(client, mapper)
}

fn plan(dir: &TempDir, scope: ExportScope) -> ExportPlan {
    ExportPlan {
        scope,
        repo_output: dir.path().join("repo_data.csv"),
        commit_output: dir.path().join("commit_data.csv"),
    }
}

async fn mount_repositories(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(basic_auth(USER, TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_commit_page(
    server: &MockServer,
    repo: &str,
    page: u32,
    body: serde_json::Value,
    expected: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/commits", USER, repo)))
        .and(query_param("page", page.to_string()))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_export_writes_both_tables() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_repositories(
        &server,
        json!([repository_json(1, "alpha"), repository_json(2, "beta")]),
    )
    .await;
    mount_commit_page(
        &server,
        "alpha",
        1,
        json!([
            commit_json(&base, "alpha", "a2", Some("a1")),
            commit_json(&base, "alpha", "a1", None)
        ]),
        1,
    )
    .await;
    mount_commit_page(&server, "alpha", 2, json!([]), 1).await;
    mount_commit_page(
        &server,
        "beta",
        1,
        json!([commit_json(&base, "beta", "b1", None)]),
        1,
    )
    .await;
    mount_commit_page(&server, "beta", 2, json!([]), 1).await;

    let dir = TempDir::new().unwrap();
    let plan = plan(&dir, ExportScope::All);
    let summary = exporter(&server).run(&plan).await.unwrap();

    assert_eq!(
        summary,
        ExportSummary {
            repositories: 2,
            commits: 3
        }
    );

    let repos = read_csv(&plan.repo_output);
    assert_eq!(repos.len(), 3);
    assert_eq!(repos[0], REPOSITORY_HEADERS);
    assert_eq!(repos[1][1], "alpha");
    assert_eq!(repos[2][1], "beta");
    assert_eq!(repos[1][6], "The alpha project, with \"quotes\", commas");

    let commits = read_csv(&plan.commit_output);
    assert_eq!(commits.len(), 4);
    assert_eq!(commits[0], COMMIT_HEADERS);
    let order: Vec<(&str, &str)> = commits[1..]
        .iter()
        .map(|row| (row[0].as_str(), row[1].as_str()))
        .collect();
    assert_eq!(order, [("alpha", "a2"), ("alpha", "a1"), ("beta", "b1")]);
    assert_eq!(commits[1][17], "a1");
    assert_eq!(commits[2][17..], ["", "", ""]);
    assert_eq!(commits[3][8], "Change b1\n\nDetails, with a comma and \"quotes\"");
}

#[tokio::test]
async fn test_repositories_scope_skips_commits() {
    let server = MockServer::start().await;
    mount_repositories(&server, json!([repository_json(1, "alpha")])).await;
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/alpha/commits", USER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let plan = plan(&dir, ExportScope::Repositories);
    let summary = exporter(&server).run(&plan).await.unwrap();

    assert_eq!(summary.repositories, 1);
    assert_eq!(summary.commits, 0);
    assert!(plan.repo_output.exists());
    assert!(!plan.commit_output.exists());
}

#[tokio::test]
async fn test_commits_scope_skips_repository_table() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_repositories(&server, json!([repository_json(1, "alpha")])).await;
    mount_commit_page(
        &server,
        "alpha",
        1,
        json!([commit_json(&base, "alpha", "a1", None)]),
        1,
    )
    .await;
    mount_commit_page(&server, "alpha", 2, json!([]), 1).await;

    let dir = TempDir::new().unwrap();
    let plan = plan(&dir, ExportScope::Commits);
    let summary = exporter(&server).run(&plan).await.unwrap();

    assert_eq!(summary.commits, 1);
    assert!(!plan.repo_output.exists());
    assert_eq!(read_csv(&plan.commit_output).len(), 2);
}

#[tokio::test]
async fn test_repository_without_owner_aborts_before_writing() {
    let server = MockServer::start().await;
    let mut broken = repository_json(2, "broken");
    broken.as_object_mut().unwrap().remove("owner");
    mount_repositories(&server, json!([repository_json(1, "alpha"), broken])).await;

    let dir = TempDir::new().unwrap();
    let plan = plan(&dir, ExportScope::All);
    let err = exporter(&server).run(&plan).await.unwrap_err();

    assert!(err.to_string().contains("owner"));
    assert!(!plan.repo_output.exists());
    assert!(!plan.commit_output.exists());
}

#[tokio::test]
async fn test_foreign_commit_url_aborts_commit_table() {
    let server = MockServer::start().await;
    mount_repositories(&server, json!([repository_json(1, "alpha")])).await;
    let mut foreign = commit_json(&server.uri(), "alpha", "a1", None);
    foreign["url"] = json!("https://example.com/not/a/commit");
    mount_commit_page(&server, "alpha", 1, json!([foreign]), 1).await;
    mount_commit_page(&server, "alpha", 2, json!([]), 1).await;

    let dir = TempDir::new().unwrap();
    let plan = plan(&dir, ExportScope::All);
    let err = exporter(&server).run(&plan).await.unwrap_err();

    assert!(err.to_string().contains("https://example.com/not/a/commit"));
    assert!(plan.repo_output.exists());
    assert!(!plan.commit_output.exists());
}

#[tokio::test]
async fn test_export_command_reads_token_file() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_repositories(&server, json!([repository_json(1, "alpha")])).await;
    mount_commit_page(
        &server,
        "alpha",
        1,
        json!([commit_json(&base, "alpha", "a1", None)]),
        1,
    )
    .await;
    mount_commit_page(&server, "alpha", 2, json!([]), 1).await;

    let dir = TempDir::new().unwrap();
    let token_file = dir.path().join("token.txt");
    std::fs::write(&token_file, format!("{}\n", TOKEN)).unwrap();

    let settings = SettingsBuilder::new()
        .with_home(dir.path().to_path_buf())
        .with_overrides(ConfigFile {
            user: Some(USER.to_string()),
            token_file: Some(token_file.display().to_string()),
            repo_output: Some(dir.path().join("r.csv").display().to_string()),
            commit_output: Some(dir.path().join("c.csv").display().to_string()),
            api_base: Some(base.clone()),
            committer_source: None,
        })
        .build()
        .unwrap();

    ExportCommand {
        scope: ExportScope::All,
    }
    .execute(&CommandContext { settings })
    .await
    .unwrap();

    assert_eq!(read_csv(&dir.path().join("r.csv")).len(), 2);
    assert_eq!(read_csv(&dir.path().join("c.csv")).len(), 2);
}

#[tokio::test]
async fn test_export_command_missing_token_file() {
    let dir = TempDir::new().unwrap();
    let settings = SettingsBuilder::new()
        .with_home(dir.path().to_path_buf())
        .with_overrides(ConfigFile {
            user: Some(USER.to_string()),
            ..Default::default()
        })
        .build()
        .unwrap();

    let err = ExportCommand {
        scope: ExportScope::All,
    }
    .execute(&CommandContext { settings })
    .await
    .unwrap_err();

    assert!(err.to_string().contains("github_personal_token.txt"));
}
