#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === VALIDATION MESSAGES ===
    FieldEmpty(String),        // field name
    DateInvalidFormat(String), // value
    PriorityInvalid(String),   // value
    StatusInvalid(String),     // value

    // === STORAGE MESSAGES ===
    TasksLoaded(usize),                  // count
    TasksFileNotFound(String),           // path
    TasksFileCorrupted(String, String),  // path, error
    TasksFileReadFailed(String, String), // path, error
    TasksSaved(String),                  // path
    TasksSaveFailed(String, String),     // path, error
    NextIdAdjusted(u32),                 // new next id

    // === TASK MESSAGES ===
    TaskCreated(u32),
    TaskUpdated(u32),
    TaskDeleted(u32),
    TaskNotFoundWithId(u32),
    TaskIdsExhausted,
    NoChangesRequested(u32),
    TasksDeletedInCategory(String, usize), // category, count
    TasksNotFoundInCategory(String),
    NoDeleteTarget,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    TasksNotFound,
    NoTasksToDisplay,
    CategoryHeader(String),
    SearchResultsHeader(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // tasks file path
}
