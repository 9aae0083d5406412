use chrono::{DateTime, SecondsFormat, Utc};

/// Current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a millisecond Unix timestamp as RFC 3339 (UTC).
///
/// Out-of-range values fall back to the Unix epoch.
pub fn millis_to_rfc3339(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_to_rfc3339() {
        // テスト項目: ミリ秒タイムスタンプが RFC 3339 形式に変換される
        // when (操作):
        let formatted = millis_to_rfc3339(1_672_498_800_000);

        // then (期待する結果):
        assert_eq!(formatted, "2022-12-31T15:00:00.000Z");
    }

    #[test]
    fn test_now_millis_is_positive() {
        // テスト項目: 現在時刻が正のミリ秒値で取得できる
        assert!(now_millis() > 0);
    }
}
