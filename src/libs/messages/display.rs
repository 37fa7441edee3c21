//! Display implementation for challenge-board messages.
//!
//! Every user-facing string of the application is produced here, so the
//! board, the configuration wizard and the logs all share one source of
//! Korean text. Parameterised variants interpolate their payload directly.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` enum variant into human-readable text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use challenge_board::libs::messages::Message;
    ///
    /// assert_eq!(Message::StatusFailed.to_string(), "실패");
    /// assert_eq!(Message::ElapsedDuration("3일".into()).to_string(), "진행 3일");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STATUS LABELS ===
            Message::StatusActive => "진행 중".to_string(),
            Message::StatusCompleted => "완료".to_string(),
            Message::StatusFailed => "실패".to_string(),

            // === RECORD FIELDS ===
            Message::UntitledChallenge => "이름 없는 도전".to_string(),
            Message::UnknownDate => "알 수 없음".to_string(),
            Message::StartedAt(date) => format!("시작: {}", date),
            Message::EndedAt(date) => format!("완료: {}", date),
            Message::ElapsedDuration(duration) => format!("진행 {}", duration),
            Message::FailureReason(reason) => format!("실패 사유: {}", reason),

            // === BOARD ===
            Message::CurrentRecordsHeader => "🔥 진행 중인 도전".to_string(),
            Message::PastRecordsHeader => "📜 지난 도전".to_string(),
            Message::CurrentRecordsEmpty => "현재 진행 중인 도전이 없어요. records.json 파일에서 새로운 도전을 추가해보세요.".to_string(),
            Message::PastRecordsEmpty => "아직 실패한 도전 기록이 없어요.".to_string(),
            Message::ColumnTitle => "도전".to_string(),
            Message::ColumnStatus => "상태".to_string(),
            Message::ColumnSchedule => "일정".to_string(),
            Message::ColumnDuration => "기간".to_string(),
            Message::ColumnNotes => "메모".to_string(),

            // === LOADING ===
            Message::LoadingRecords(source) => format!("Loading records from {}", source),
            Message::RecordsLoaded(count) => format!("Loaded {} records", count),
            Message::RecordEntrySkipped(index) => format!("Skipping records[{}]: not a JSON object", index),
            Message::RecordsLoadFailed(error) => format!("기록을 불러오지 못했습니다: {}", error),
            Message::RecordsSourceEmpty => "기록 문서 경로가 비어 있습니다".to_string(),

            // === CONFIGURATION ===
            Message::ConfigSaved => "설정이 저장되었습니다".to_string(),
            Message::ConfigDeleted => "설정이 삭제되었습니다".to_string(),
            Message::ConfigNotFound => "삭제할 설정 파일이 없습니다".to_string(),
            Message::ConfigReadFailed(error) => format!("설정을 읽지 못해 기본값을 사용합니다: {}", error),
            Message::ConfigInvalidUtcOffset(minutes) => format!("UTC 오프셋 {}분은 사용할 수 없어 로컬 시간대를 사용합니다", minutes),
            Message::PromptRecordsSource => "기록 문서 경로 또는 URL".to_string(),
            Message::PromptShowFailureReason => "지난 도전에 실패 사유를 표시할까요?".to_string(),
            Message::PromptUtcOffset => "표시 시간대 (UTC 기준 분, 비우면 로컬 시간)".to_string(),
        };

        write!(f, "{}", text)
    }
}
