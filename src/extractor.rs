//! Per-field projections over the loaded tweet records.
//!
//! Every `find_*` walks the records in order and yields exactly one value per
//! record. Required fields fail fast with the record index and key path;
//! `is_sensitive` and `find_location` recover with defaults.

use crate::date::created_at_rfc3339;
use crate::json_utils::{lookup, require, require_array, require_i64, require_str};
use anyhow::{anyhow, Result};
use serde_json::Value;

pub struct TweetExtractor<'a> {
    tweets: &'a [Value],
}

impl<'a> TweetExtractor<'a> {
    pub fn new(tweets: &'a [Value]) -> Self {
        Self { tweets }
    }

    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }

    fn project<T>(&self, f: impl Fn(&Value, usize) -> Result<T>) -> Result<Vec<T>> {
        self.tweets.iter().enumerate().map(|(i, t)| f(t, i)).collect()
    }

    pub fn find_statuses_count(&self) -> Result<Vec<i64>> {
        self.project(|t, i| require_i64(t, &["user", "statuses_count"], i))
    }

    pub fn find_full_text(&self) -> Result<Vec<String>> {
        self.project(|t, i| require_str(t, &["full_text"], i))
    }

    pub fn find_created_time(&self) -> Result<Vec<String>> {
        self.project(|t, i| require_str(t, &["created_at"], i))
    }

    /// `created_at` rendered as RFC 3339 where it parses.
    pub fn find_created_time_rfc3339(&self) -> Result<Vec<String>> {
        Ok(self.find_created_time()?.iter().map(|s| created_at_rfc3339(s)).collect())
    }

    pub fn find_source(&self) -> Result<Vec<String>> {
        self.project(|t, i| require_str(t, &["source"], i))
    }

    pub fn find_screen_name(&self) -> Result<Vec<String>> {
        self.project(|t, i| require_str(t, &["user", "screen_name"], i))
    }

    pub fn find_followers_count(&self) -> Result<Vec<i64>> {
        self.project(|t, i| require_i64(t, &["user", "followers_count"], i))
    }

    pub fn find_friends_count(&self) -> Result<Vec<i64>> {
        self.project(|t, i| require_i64(t, &["user", "friends_count"], i))
    }

    /// `possibly_sensitive` per record. If any record lacks the key or holds
    /// `null`, the whole column falls back to `false`.
    pub fn is_sensitive(&self) -> Result<Vec<bool>> {
        let missing = |t: &Value| t.get("possibly_sensitive").map_or(true, Value::is_null);
        if let Some(i) = self.tweets.iter().position(missing) {
            tracing::warn!(
                first_missing = i,
                "possibly_sensitive absent; sensitivity column defaults to false"
            );
            return Ok(vec![false; self.tweets.len()]);
        }
        self.project(|t, i| {
            require(t, &["possibly_sensitive"], i)?
                .as_bool()
                .ok_or_else(|| anyhow!("record {i}: `possibly_sensitive` is not a boolean"))
        })
    }

    pub fn find_favourite_count(&self) -> Result<Vec<i64>> {
        self.project(|t, i| require_i64(t, &["favorite_count"], i))
    }

    pub fn find_retweet_count(&self) -> Result<Vec<i64>> {
        self.project(|t, i| require_i64(t, &["retweet_count"], i))
    }

    pub fn find_hashtags(&self) -> Result<Vec<Vec<Value>>> {
        self.project(|t, i| require_array(t, &["entities", "hashtags"], i))
    }

    pub fn find_mentions(&self) -> Result<Vec<Vec<Value>>> {
        self.project(|t, i| require_array(t, &["entities", "user_mentions"], i))
    }

    /// `user.location` per record; absent or null becomes `""`.
    pub fn find_location(&self) -> Vec<String> {
        self.tweets
            .iter()
            .map(|t| {
                lookup(t, &["user", "location"])
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    pub fn find_lang(&self) -> Result<Vec<String>> {
        self.project(|t, i| require_str(t, &["lang"], i))
    }
}
