use thiserror::Error;

/// Result type alias using the structured error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by gigbook is classified by one of these kinds.
/// Each kind maps to a stable error code usable by tests and by the CLI.
///
/// A lookup that finds nothing is not an error for read operations: those
/// return `Option`, `bool` or an empty `Vec`. `NotFound` only appears when a
/// caller insists that an id must resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup/Validation
    NotFound,
    ConstraintViolation,

    // Storage lifecycle
    /// A table or index the schema wants to create already exists
    SchemaConflict,
    /// The backing store could not be opened
    ConnectionFailure,
    Persistence,

    // Output
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::SchemaConflict => "ERR_SCHEMA_CONFLICT",
            ExErrorKind::ConnectionFailure => "ERR_CONNECTION_FAILURE",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus optional context for
/// humans reading the message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised when a caller-supplied reference must resolve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GigbookError {
    /// No band row with this id
    #[error("Band not found: {band_id}")]
    BandNotFound { band_id: i64 },

    /// No venue row with this id
    #[error("Venue not found: {venue_id}")]
    VenueNotFound { venue_id: i64 },

    /// No venue row with this title
    #[error("Venue '{title}' not found.")]
    VenueTitleNotFound { title: String },

    /// No concert row with this id
    #[error("Concert not found: {concert_id}")]
    ConcertNotFound { concert_id: i64 },

    /// A concert references a band or venue row that does not exist
    #[error("Concert {concert_id} references a missing {missing}")]
    DanglingConcert {
        concert_id: i64,
        missing: &'static str,
    },
}

impl From<GigbookError> for ExError {
    fn from(err: GigbookError) -> Self {
        let message = err.to_string();
        match err {
            GigbookError::BandNotFound { band_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(band_id)
                .with_message(message),

            GigbookError::VenueNotFound { venue_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(venue_id)
                .with_message(message),

            GigbookError::VenueTitleNotFound { .. } => ExError::new(ExErrorKind::NotFound)
                .with_op("find_venue_by_title")
                .with_message(message),

            GigbookError::ConcertNotFound { concert_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(concert_id)
                .with_message(message),

            GigbookError::DanglingConcert { concert_id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(concert_id)
                    .with_message(message)
            }
        }
    }
}
