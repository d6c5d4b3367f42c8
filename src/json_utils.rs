use anyhow::{anyhow, Result};
use serde_json::Value;

/// Walk `path` through nested objects. `None` if any key is absent.
pub fn lookup<'a>(v: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(v, |cur, key| cur.get(*key))
}

/// Like [`lookup`] but a missing key is an error naming the record and key path.
pub fn require<'a>(v: &'a Value, path: &[&str], idx: usize) -> Result<&'a Value> {
    lookup(v, path).ok_or_else(|| anyhow!("record {idx}: missing key `{}`", path.join(".")))
}

pub fn require_str(v: &Value, path: &[&str], idx: usize) -> Result<String> {
    require(v, path, idx)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("record {idx}: `{}` is not a string", path.join(".")))
}

pub fn require_i64(v: &Value, path: &[&str], idx: usize) -> Result<i64> {
    require(v, path, idx)?
        .as_i64()
        .ok_or_else(|| anyhow!("record {idx}: `{}` is not an integer", path.join(".")))
}

pub fn require_array(v: &Value, path: &[&str], idx: usize) -> Result<Vec<Value>> {
    require(v, path, idx)?
        .as_array()
        .cloned()
        .ok_or_else(|| anyhow!("record {idx}: `{}` is not an array", path.join(".")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_lookup_and_errors() {
        let v = json!({"user": {"screen_name": "amy", "followers_count": 12}});
        assert_eq!(require_str(&v, &["user", "screen_name"], 0).unwrap(), "amy");
        assert_eq!(require_i64(&v, &["user", "followers_count"], 0).unwrap(), 12);

        let err = require(&v, &["user", "location"], 4).unwrap_err().to_string();
        assert_eq!(err, "record 4: missing key `user.location`");

        let err = require_i64(&v, &["user", "screen_name"], 1).unwrap_err().to_string();
        assert!(err.contains("not an integer"));
    }
}
