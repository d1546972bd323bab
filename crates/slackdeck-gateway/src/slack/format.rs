//! Slack message markup and timestamp handling
//!
//! Slack encodes mentions, channel links and URLs as `<...>` tokens and
//! escapes `&`, `<` and `>` as HTML entities. The panel shows plain text.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};

/// Matches a single `<...>` markup token. The inner text is captured.
static MARKUP_TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^<>]+)>").expect("Slack markup regex pattern is valid"));

/// Convert Slack message markup to plain text.
///
/// - `<@U123>` becomes `@U123`, `<@U123|ada>` becomes `@ada`
/// - `<#C123|general>` becomes `#general`
/// - `<!here>` becomes `@here`
/// - `<https://x.y|label>` becomes `label`, `<https://x.y>` becomes the URL
///
/// Entities are decoded after the tokens so an escaped `&lt;` never turns
/// into a token.
pub fn render_slack_text(raw: &str) -> String {
    let replaced = MARKUP_TOKEN_PATTERN.replace_all(raw, |caps: &Captures| render_token(&caps[1]));
    decode_entities(&replaced).into_owned()
}

fn render_token(token: &str) -> String {
    let (target, label) = match token.split_once('|') {
        Some((target, label)) => (target, Some(label)),
        None => (token, None),
    };

    if let Some(user) = target.strip_prefix('@') {
        return format!("@{}", label.unwrap_or(user));
    }
    if let Some(channel) = target.strip_prefix('#') {
        return format!("#{}", label.unwrap_or(channel));
    }
    if let Some(special) = target.strip_prefix('!') {
        return match label {
            Some(label) => label.to_string(),
            None => format!("@{special}"),
        };
    }

    label.unwrap_or(target).to_string()
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    // &amp; last, otherwise "&amp;lt;" would decode twice
    Cow::Owned(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Parse a Slack `ts` value (`"<seconds>.<micros>"`) into UTC.
///
/// Malformed values fall back to the Unix epoch rather than failing the
/// whole fetch.
pub fn parse_slack_timestamp(ts: &str) -> DateTime<Utc> {
    parse_parts(ts.trim()).unwrap_or(DateTime::UNIX_EPOCH)
}

fn parse_parts(ts: &str) -> Option<DateTime<Utc>> {
    let (secs, fraction) = match ts.split_once('.') {
        Some((secs, fraction)) => (secs, fraction),
        None => (ts, ""),
    };
    let secs: i64 = secs.parse().ok()?;

    let nanos = if fraction.is_empty() {
        0
    } else {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits: String = fraction.chars().chain(std::iter::repeat('0')).take(9).collect();
        digits.parse::<u32>().ok()?
    };

    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render_slack_text("deploy finished"), "deploy finished");
    }

    #[test]
    fn test_user_mentions() {
        assert_eq!(render_slack_text("ping <@U024BE7LH>"), "ping @U024BE7LH");
        assert_eq!(render_slack_text("<@U024BE7LH|ada> hi"), "@ada hi");
    }

    #[test]
    fn test_channel_links() {
        assert_eq!(render_slack_text("see <#C024BE7LR|general>"), "see #general");
        assert_eq!(render_slack_text("see <#C024BE7LR>"), "see #C024BE7LR");
    }

    #[test]
    fn test_special_mentions() {
        assert_eq!(render_slack_text("<!here> standup"), "@here standup");
        assert_eq!(render_slack_text("<!subteam^S1|@oncall> look"), "@oncall look");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            render_slack_text("docs: <https://example.com|the docs>"),
            "docs: the docs"
        );
        assert_eq!(
            render_slack_text("<https://example.com/a?b=1>"),
            "https://example.com/a?b=1"
        );
    }

    #[test]
    fn test_entities_decoded_after_tokens() {
        assert_eq!(render_slack_text("a &lt;b&gt; &amp; c"), "a <b> & c");
        assert_eq!(render_slack_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_parse_timestamp_with_micros() {
        let ts = parse_slack_timestamp("1700000000.000200");
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.nanosecond(), 200_000);
    }

    #[test]
    fn test_parse_timestamp_without_fraction() {
        assert_eq!(parse_slack_timestamp("1700000000").timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_malformed_timestamp_falls_back_to_epoch() {
        assert_eq!(parse_slack_timestamp("not-a-ts"), DateTime::UNIX_EPOCH);
        assert_eq!(parse_slack_timestamp("12.ab"), DateTime::UNIX_EPOCH);
        assert_eq!(parse_slack_timestamp(""), DateTime::UNIX_EPOCH);
    }
}
