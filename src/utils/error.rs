use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input dataset error: {message}")]
    InputError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::InputError { .. } | EtlError::SerializationError(_) => ErrorCategory::Input,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
            EtlError::ZipError(_) | EtlError::CsvError(_) => ErrorCategory::Output,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ConfigError { .. } | EtlError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and required sections"
            }
            EtlError::InvalidConfigValueError { .. } => {
                "Correct the highlighted value and run again"
            }
            EtlError::MissingConfigError { .. } => "Provide the missing configuration field",
            EtlError::InputError { .. } | EtlError::SerializationError(_) => {
                "Make sure the input file is a JSON array of city objects"
            }
            EtlError::ProcessingError { .. } => "Re-run with --verbose to inspect the failing stage",
            EtlError::CsvError(_) | EtlError::ZipError(_) => {
                "Check that the output directory is writable and has free space"
            }
            EtlError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("配置錯誤: {}", self),
            ErrorCategory::Input => format!("輸入資料無法讀取: {}", self),
            ErrorCategory::Processing => format!("處理失敗: {}", self),
            ErrorCategory::Output => format!("輸出失敗: {}", self),
            ErrorCategory::System => format!("系統錯誤: {}", self),
        }
    }
}

/// 單筆城市記錄的錯誤，只影響該筆，不中斷批次
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("record is not a valid city object: {0}")]
    Malformed(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
