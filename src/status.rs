//! Display text for the submission status codes written by the checker.

/// A submission status as stored in `submission_statuses.title`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Unknown,
    PendingCheck,
    Accepted,
    ExecutionError,
    RestrictionViolated,
    IncorrectColumnCount,
    IncorrectColumnNames,
    IncorrectContent,
    IncorrectOrder,
}

impl Status {
    pub const ALL: [Status; 9] = [
        Status::Unknown,
        Status::PendingCheck,
        Status::Accepted,
        Status::ExecutionError,
        Status::RestrictionViolated,
        Status::IncorrectColumnCount,
        Status::IncorrectColumnNames,
        Status::IncorrectContent,
        Status::IncorrectOrder,
    ];

    /// Parse an internal status code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    /// Internal code of the status
    pub fn code(self) -> &'static str {
        match self {
            Status::Unknown => "UNKNOWN",
            Status::PendingCheck => "PENDING_CHECK",
            Status::Accepted => "ACCEPTED",
            Status::ExecutionError => "EXECUTION_ERROR",
            Status::RestrictionViolated => "RESTRICTION_VIOLATED",
            Status::IncorrectColumnCount => "INCORRECT_COLUMN_COUNT",
            Status::IncorrectColumnNames => "INCORRECT_COLUMN_NAMES",
            Status::IncorrectContent => "INCORRECT_CONTENT",
            Status::IncorrectOrder => "INCORRECT_ORDER",
        }
    }

    /// Human-readable title shown to users
    pub fn title(self) -> &'static str {
        match self {
            Status::Unknown => "Статус неизвестен",
            Status::PendingCheck => "Ожидает проверки",
            Status::Accepted => "Решение принято",
            Status::ExecutionError => "Ошибка исполнения",
            Status::RestrictionViolated => "Нарушено ограничение",
            Status::IncorrectColumnCount => "Неверное число столбцов",
            Status::IncorrectColumnNames => "Неверные названия столбцов",
            Status::IncorrectContent => "Неверное содержимое результата",
            Status::IncorrectOrder => "Неверный порядок строк результата",
        }
    }
}

/// Title for a raw status code, empty if the code is not recognized
pub fn describe(code: &str) -> &'static str {
    match Status::from_code(code) {
        Some(status) => status.title(),
        None => "",
    }
}
