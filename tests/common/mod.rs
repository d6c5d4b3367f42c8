#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A complete tweet record. `i` varies every projected field.
pub fn tweet(i: u32, text: &str) -> Value {
    json!({
        "created_at": "Wed Oct 10 20:19:24 +0000 2018",
        "full_text": text,
        "source": "<a href=\"http://twitter.com/download/android\">Twitter for Android</a>",
        "lang": "en",
        "favorite_count": i,
        "retweet_count": 10 * i,
        "possibly_sensitive": i % 2 == 0,
        "entities": {
            "hashtags": [{"text": format!("tag{i}"), "indices": [0, 5]}],
            "user_mentions": [{"screen_name": "alice", "id": 42}]
        },
        "user": {
            "screen_name": format!("user{i}"),
            "statuses_count": 1000 + i,
            "followers_count": 100 * i,
            "friends_count": 3 * i,
            "location": format!("City {i}")
        }
    })
}

/// The three-record corpus used by the end-to-end tests.
pub fn three_tweets() -> Vec<Value> {
    vec![
        tweet(1, "RT @alice: what a great day! http://x.co #sunny"),
        tweet(2, "This is a terrible, awful idea"),
        tweet(3, "Numbers only: 1 2 3"),
    ]
}

/// Write records as JSON lines into a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_input(records: &[Value]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tweets.jsonl");
    let mut f = File::create(&path).unwrap();
    for r in records {
        writeln!(&mut f, "{}", r).unwrap();
    }
    (dir, path)
}

pub fn write_raw(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

/// Read a CSV file into (header, rows).
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path).unwrap();
    let headers = rdr.headers().unwrap().iter().map(str::to_string).collect();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}
