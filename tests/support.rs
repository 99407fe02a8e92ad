//! Common test support utilities and fixtures
//!
//! Raw GitHub payloads shaped like the real API responses, shared by the
//! record and export tests.
#![allow(dead_code)]

use serde_json::{Value, json};

pub const USER: &str = "alice";
pub const TOKEN: &str = "ghp_testtoken";

/// A repository payload with every exported field set
pub fn repository_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "node_id": "R_kgDOA",
        "name": name,
        "full_name": format!("{}/{}", USER, name),
        "private": false,
        "owner": {
            "login": USER,
            "id": 4242,
            "type": "User"
        },
        "html_url": format!("https://github.com/{}/{}", USER, name),
        "description": format!("The {} project, with \"quotes\", commas", name),
        "fork": false,
        "url": format!("https://api.github.com/repos/{}/{}", USER, name),
        "created_at": "2023-01-02T03:04:05Z",
        "updated_at": "2023-02-03T04:05:06Z",
        "pushed_at": "2023-03-04T05:06:07Z",
        "ssh_url": format!("git@github.com:{}/{}.git", USER, name),
        "stargazers_count": 12,
        "watchers_count": 12,
        "language": "Rust",
        "forks_count": 3,
        "topics": []
    })
}

/// A commit payload listed under `api_base`
pub fn commit_json(api_base: &str, repo: &str, sha: &str, parent: Option<&str>) -> Value {
    let parents: Vec<Value> = parent
        .map(|p| {
            vec![json!({
                "sha": p,
                "url": format!("{}/repos/{}/{}/commits/{}", api_base, USER, repo, p),
                "html_url": format!("https://github.com/{}/{}/commit/{}", USER, repo, p)
            })]
        })
        .unwrap_or_default();

    json!({
        "sha": sha,
        "node_id": "C_kwDOA",
        "commit": {
            "author": {
                "name": "Alice Example",
                "email": "alice@example.com",
                "date": "2023-05-06T07:08:09Z"
            },
            "committer": {
                "name": "GitHub",
                "email": "noreply@github.com",
                "date": "2023-05-06T07:09:00Z"
            },
            "message": format!("Change {}\n\nDetails, with a comma and \"quotes\"", sha),
            "tree": {
                "sha": format!("tree-{}", sha),
                "url": format!("{}/repos/{}/{}/git/trees/tree-{}", api_base, USER, repo, sha)
            },
            "url": format!("{}/repos/{}/{}/git/commits/{}", api_base, USER, repo, sha),
            "comment_count": 0,
            "verification": {"verified": false}
        },
        "url": format!("{}/repos/{}/{}/commits/{}", api_base, USER, repo, sha),
        "html_url": format!("https://github.com/{}/{}/commit/{}", USER, repo, sha),
        "comments_url": format!("{}/repos/{}/{}/commits/{}/comments", api_base, USER, repo, sha),
        "author": {"login": USER, "id": 4242},
        "committer": null,
        "parents": parents
    })
}
