use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("research produced no rows for any sheet")]
    NoData,
}
