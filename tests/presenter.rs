#[cfg(test)]
mod tests {
    use challenge_board::libs::presenter::{DurationKind, DurationText, PresentOptions, Presenter};
    use challenge_board::libs::record::{Record, Status};
    use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
    use serde_json::json;

    fn presenter(show_failure_reason: bool) -> Presenter<FixedOffset> {
        Presenter::new(FixedOffset::east_opt(9 * 3600).unwrap(), PresentOptions { show_failure_reason })
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
    }

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(&value).unwrap()
    }

    #[test]
    fn test_completed_record_total_duration() {
        let start = t0().timestamp_millis();
        let presented = presenter(true).present(&record(json!({ "start": start, "end": start + 3_661_000, "failed": false })), t0());

        assert_eq!(presented.status, Status::Completed);
        assert_eq!(presented.duration, Some(DurationText::total("1시간 1분 1초".to_string())));
        assert_eq!(presented.start_text.as_deref(), Some("2024년 1월 15일 (월) 오전 09:00"));
        assert_eq!(presented.end_text.as_deref(), Some("2024년 1월 15일 (월) 오전 10:01"));
    }

    #[test]
    fn test_active_record_elapsed_duration() {
        let now = t0() + Duration::days(3) + Duration::minutes(2);
        let presented = presenter(true).present(&record(json!({ "title": "매일 코딩", "start": "2024-01-15T00:00:00Z" })), now);

        assert_eq!(presented.status, Status::Active);
        let duration = presented.duration.unwrap();
        assert_eq!(duration.kind, DurationKind::Elapsed);
        assert_eq!(duration.text, "3일 2분");
        assert_eq!(duration.to_string(), "진행 3일 2분");
        assert_eq!(presented.end_text, None);
    }

    #[test]
    fn test_active_record_starting_in_future_has_no_duration() {
        let presented = presenter(true).present(&record(json!({ "start": "2024-01-16T00:00:00Z" })), t0());
        assert_eq!(presented.status, Status::Active);
        assert_eq!(presented.duration, None);
        assert!(presented.start_text.is_some());
    }

    #[test]
    fn test_end_before_start_is_suppressed() {
        let presented = presenter(true).present(&record(json!({ "start": "2024-01-15T00:00:00Z", "end": "2024-01-14T00:00:00Z" })), t0());
        assert_eq!(presented.status, Status::Completed);
        assert_eq!(presented.duration, None);
        assert!(presented.start_text.is_some());
        assert!(presented.end_text.is_some());
    }

    #[test]
    fn test_unparsable_end_omits_end_and_duration() {
        let presented = presenter(true).present(&record(json!({ "start": "2024-01-10T00:00:00Z", "end": "soon" })), t0());
        assert_eq!(presented.status, Status::Completed);
        assert_eq!(presented.end_text, None);
        assert_eq!(presented.duration, None);
        assert!(presented.start_text.is_some());
    }

    #[test]
    fn test_invalid_start_is_omitted() {
        let presented = presenter(true).present(&record(json!({ "start": "whenever", "end": "2024-01-14T00:00:00Z" })), t0());
        assert_eq!(presented.start_text, None);
        assert_eq!(presented.duration, None);
        assert!(presented.end_text.is_some());

        let presented = presenter(true).present(&record(json!({ "start": "whenever" })), t0());
        assert_eq!(presented.start_text, None);
        assert_eq!(presented.duration, None);
    }

    #[test]
    fn test_failed_record_without_end_has_no_duration() {
        let presented = presenter(true).present(&record(json!({ "start": "2024-01-01T00:00:00Z", "failed": true })), t0());
        assert_eq!(presented.status, Status::Failed);
        assert_eq!(presented.duration, None);
    }

    #[test]
    fn test_failed_record_with_end_has_total_duration() {
        let presented = presenter(true).present(
            &record(json!({ "start": "2024-01-01T00:00:00Z", "end": "2024-01-08T00:00:00Z", "failed": true })),
            t0(),
        );
        assert_eq!(presented.status, Status::Failed);
        assert_eq!(presented.duration, Some(DurationText::total("7일".to_string())));
    }

    #[test]
    fn test_blank_failure_reason_is_omitted() {
        let presented = presenter(true).present(&record(json!({ "start": "2024-01-01T00:00:00Z", "failed": true, "failureReason": "  " })), t0());
        assert_eq!(presented.status, Status::Failed);
        assert_eq!(presented.failure_reason, None);
    }

    #[test]
    fn test_failure_reason_is_trimmed() {
        let presented = presenter(true).present(&record(json!({ "failed": true, "failureReason": "  야근  " })), t0());
        assert_eq!(presented.failure_reason.as_deref(), Some("야근"));
    }

    #[test]
    fn test_failure_reason_hidden_when_not_requested() {
        let presented = presenter(false).present(&record(json!({ "failed": true, "failureReason": "야근" })), t0());
        assert_eq!(presented.failure_reason, None);
    }

    #[test]
    fn test_failure_reason_only_for_failed_records() {
        let presented = presenter(true).present(&record(json!({ "end": "2024-01-14", "failureReason": "야근" })), t0());
        assert_eq!(presented.status, Status::Completed);
        assert_eq!(presented.failure_reason, None);
    }

    #[test]
    fn test_title_placeholder_and_description() {
        let presented = presenter(true).present(&record(json!({ "description": "" })), t0());
        assert_eq!(presented.title, "이름 없는 도전");
        assert_eq!(presented.description, None);

        let presented = presenter(true).present(&record(json!({ "title": "", "description": "하루 만 보" })), t0());
        assert_eq!(presented.title, "");
        assert_eq!(presented.description.as_deref(), Some("하루 만 보"));
    }

    #[test]
    fn test_falsy_description_hidden_but_falsy_title_kept() {
        let presented = presenter(true).present(&record(json!({ "title": 0, "description": false })), t0());
        assert_eq!(presented.title, "0");
        assert_eq!(presented.description, None);

        let presented = presenter(true).present(&record(json!({ "description": 0 })), t0());
        assert_eq!(presented.description, None);

        let presented = presenter(true).present(&record(json!({ "description": 42 })), t0());
        assert_eq!(presented.description.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_everything_degrades_to_omission() {
        let presented = presenter(true).present(&Record::default(), t0());
        assert_eq!(presented.status, Status::Active);
        assert_eq!(presented.start_text, None);
        assert_eq!(presented.end_text, None);
        assert_eq!(presented.duration, None);
        assert_eq!(presented.failure_reason, None);
    }

    #[test]
    fn test_present_all_samples_clock_per_record() {
        let records = [record(json!({ "start": "2024-01-15T00:00:00Z" })), record(json!({ "start": "2024-01-15T00:00:00Z" }))];
        let refs: Vec<&Record> = records.iter().collect();
        let mut calls = 0;
        let mut clock = || {
            calls += 1;
            t0() + Duration::seconds(calls)
        };

        let presented = presenter(true).present_all(&refs, &mut clock);
        assert_eq!(calls, 2);
        assert_eq!(presented[0].duration.as_ref().unwrap().text, "1초");
        assert_eq!(presented[1].duration.as_ref().unwrap().text, "2초");
    }

    #[test]
    fn test_serialized_output_omits_absent_fields() {
        let presented = presenter(true).present(&record(json!({ "title": "명상", "start": "nope" })), t0());
        let value = serde_json::to_value(&presented).unwrap();
        assert_eq!(value, json!({ "title": "명상", "status": "active" }));
    }
}
