//! Platform timestamp handling (`Wed Oct 10 20:19:24 +0000 2018`).

use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TWEET_TS: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]"
);

pub fn parse_created_at(s: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(s.trim(), TWEET_TS).ok()
}

/// RFC 3339 rendering of a `created_at` value, or the input unchanged when it
/// does not parse.
pub fn created_at_rfc3339(s: &str) -> String {
    match parse_created_at(s).and_then(|dt| dt.format(&Rfc3339).ok()) {
        Some(out) => out,
        None => {
            tracing::debug!(created_at = s, "created_at not in platform format; kept verbatim");
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_format_to_rfc3339() {
        assert_eq!(created_at_rfc3339("Wed Oct 10 20:19:24 +0000 2018"), "2018-10-10T20:19:24Z");
        assert_eq!(created_at_rfc3339("Fri Apr 22 08:05:01 +0200 2022"), "2022-04-22T08:05:01+02:00");
    }

    #[test]
    fn unparseable_kept_verbatim() {
        assert_eq!(created_at_rfc3339("2018-10-10"), "2018-10-10");
        assert!(parse_created_at("").is_none());
    }
}
