// ==========================================
// 스쿼드 플래닝 대시보드 - 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================
// 원칙: 도메인 값의 결손은 에러가 아니라 기본값으로 흡수한다.
//       구조적으로 사용할 수 없는 입력만 에러로 반환한다.
// ==========================================

use thiserror::Error;

/// 코어 파이프라인 에러 타입
#[derive(Error, Debug)]
pub enum PlannerError {
    // ===== 구조 오류 =====
    #[error("표 구조 오류: {0}")]
    MalformedTable(String),

    #[error("행 길이 불일치: row={row_number}, expected={expected}, actual={actual}")]
    RaggedRow {
        row_number: usize,
        expected: usize,
        actual: usize,
    },

    // ===== 업로드 파일 오류 =====
    #[error("파일 읽기 실패 ({path}): {message}")]
    UploadRead { path: String, message: String },

    #[error("지원하지 않는 파일 형식: {0}")]
    UnsupportedFormat(String),

    // ===== 시트 저장소 오류 =====
    #[error("시트 조회 실패: doc={doc_id}, worksheet={worksheet}")]
    WorksheetNotFound { doc_id: String, worksheet: String },

    #[error("시트 저장소 오류: {0}")]
    SheetStore(String),

    // ===== 공통 오류 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 타입 별칭
pub type PlannerResult<T> = Result<T, PlannerError>;
