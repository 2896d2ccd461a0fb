// ==========================================
// 스쿼드 플래닝 대시보드 - 업로드 임포터
// ==========================================
// 책임: 업로드 파일(.xlsx/.xls/.csv)을 RawTable 로 읽기
// 읽기만 실패로 처리하고 내용 검증은 정규화 단계의 몫이다.
// ==========================================

use crate::domain::RawTable;
use crate::error::{PlannerError, PlannerResult};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

// ==========================================
// UploadImporter (확장자로 포맷 자동 선택)
// ==========================================
pub struct UploadImporter;

impl UploadImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> PlannerResult<RawTable> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let table = match ext.as_str() {
            "csv" => self.read_csv(path)?,
            "xlsx" | "xls" => self.read_excel(path)?,
            _ => return Err(PlannerError::UnsupportedFormat(ext)),
        };

        info!(
            path = %path.display(),
            rows = table.row_count(),
            "업로드 파일 읽기 완료"
        );
        Ok(table)
    }

    // ==========================================
    // CSV
    // ==========================================
    fn read_csv(&self, path: &Path) -> PlannerResult<RawTable> {
        let file = File::open(path).map_err(|e| PlannerError::UploadRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 행 길이 불일치 허용 후 아래에서 패딩
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PlannerError::UploadRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| PlannerError::UploadRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let mut row: Vec<String> =
                record.iter().map(|v| v.trim().to_string()).collect();
            // 짧은 행은 헤더 폭까지 빈 칸으로 채운다
            row.resize(headers.len(), String::new());
            row.truncate(headers.len());
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(RawTable::new(headers, rows))
    }

    // ==========================================
    // Excel
    // ==========================================
    fn read_excel(&self, path: &Path) -> PlannerResult<RawTable> {
        let mut workbook =
            open_workbook_auto(path).map_err(|e| PlannerError::UploadRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let sheet_names = workbook.sheet_names();
        let first = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| PlannerError::UploadRead {
                path: path.display().to_string(),
                message: "워크시트가 없습니다".to_string(),
            })?;

        let range = workbook
            .worksheet_range(&first)
            .map_err(|e| PlannerError::UploadRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut cells = range.rows();
        let header_row = cells.next().ok_or_else(|| PlannerError::UploadRead {
            path: path.display().to_string(),
            message: "데이터 행이 없습니다".to_string(),
        })?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|c| cell_to_string(c).trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in cells {
            let mut row: Vec<String> = data_row
                .iter()
                .map(|c| cell_to_string(c).trim().to_string())
                .collect();
            row.resize(headers.len(), String::new());
            row.truncate(headers.len());
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(RawTable::new(headers, rows))
    }
}

impl Default for UploadImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 셀 값 → 문자열
///
/// 정수 값 실수는 소수점 없이, 날짜 셀은 ISO 문자열로
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => format!("{f}"),
        Data::Int(i) => format!("{i}"),
        Data::Bool(b) => format!("{b}"),
        Data::DateTime(dt) => serial_to_date(dt.as_f64())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) => s.chars().take(10).collect(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

/// Excel 시리얼 날짜 → NaiveDate (1900 윤년 버그 보정 기준일 1899-12-30)
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial as i64))
}
