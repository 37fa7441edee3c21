#[derive(Debug, Clone)]
pub enum Message {
    // === STATUS LABELS ===
    StatusActive,
    StatusCompleted,
    StatusFailed,

    // === RECORD FIELDS ===
    UntitledChallenge,
    UnknownDate,
    StartedAt(String),
    EndedAt(String),
    ElapsedDuration(String),
    FailureReason(String),

    // === BOARD ===
    CurrentRecordsHeader,
    PastRecordsHeader,
    CurrentRecordsEmpty,
    PastRecordsEmpty,
    ColumnTitle,
    ColumnStatus,
    ColumnSchedule,
    ColumnDuration,
    ColumnNotes,

    // === LOADING ===
    LoadingRecords(String),
    RecordsLoaded(usize),
    RecordEntrySkipped(usize),
    RecordsLoadFailed(String),
    RecordsSourceEmpty,

    // === CONFIGURATION ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigReadFailed(String),
    ConfigInvalidUtcOffset(i32),
    PromptRecordsSource,
    PromptShowFailureReason,
    PromptUtcOffset,
}
