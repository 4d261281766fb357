use etl_tracker::domain::JobStatus;

#[test]
fn given_each_status_when_displayed_then_uses_lowercase_wire_name() {
    assert_eq!(JobStatus::Pending.to_string(), "pending");
    assert_eq!(JobStatus::Running.to_string(), "running");
    assert_eq!(JobStatus::Completed.to_string(), "completed");
    assert_eq!(JobStatus::Failed.to_string(), "failed");
}

#[test]
fn given_mixed_case_name_when_parsing_then_returns_status() {
    assert_eq!("Running".parse::<JobStatus>(), Ok(JobStatus::Running));
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    assert!("queued".parse::<JobStatus>().is_err());
}

#[test]
fn given_statuses_when_checking_message_retention_then_only_failed_keeps_it() {
    assert!(JobStatus::Failed.keeps_error_message());
    assert!(!JobStatus::Pending.keeps_error_message());
    assert!(!JobStatus::Running.keeps_error_message());
    assert!(!JobStatus::Completed.keeps_error_message());
}
