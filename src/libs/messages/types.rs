#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK API MESSAGES ===
    InvalidTaskId,
    TaskNotFound,
    RouteNotFound,
    InvalidRequestBody,
    RequestBodyTooLarge,
    InvalidQueryString,
    MethodNotAllowed,
    InvalidStatusFilter(String), // raw filter value
    ValidationFailed(String),    // joined field messages
    TasksFetchFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,

    // === VALIDATION MESSAGES ===
    TitleRequired,
    TitleNotString,
    TitleTooLong(usize),       // max characters
    DescriptionNotString,
    DescriptionTooLong(usize), // max characters
    CompletedNotBoolean,
    FieldNotUpdatable(String), // field name

    // === SERVER MESSAGES ===
    ServerStarted(String), // address
    ServerShuttingDown,
    ServerStopped,
    ShutdownSignalFailed(String), // error
    StorageOpened(String),        // backend description
    MemoryStorageVolatile,
    SampleTasksSeeded(usize),
    SampleTasksSkipped,

    // === CLI TASK MESSAGES ===
    TasksHeader(String), // filter
    TasksNotFound,
    SqliteBackendRequired,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleStorage,
    ConfigModuleSampleData,
    ConfigEnvOverrideInvalid(String, String), // variable, value
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptStorageBackend,
    PromptDatabasePath,
    PromptSeedSampleTasks,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    DatabaseFileMissing(String), // path
    MigrationHistory,
}
