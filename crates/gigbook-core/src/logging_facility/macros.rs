//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Callers need `tracing` and `gigbook_core_types` in their dependency set.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use gigbook_core::log_op_start;
/// log_op_start!("band_create");
/// log_op_start!("band_create", name = "Metallica");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use gigbook_core::log_op_end;
/// log_op_end!("band_create", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use gigbook_core::{log_op_error, errors::GigbookError};
/// let err = GigbookError::BandNotFound { band_id: 1 };
/// log_op_error!("band_get", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Log a lookup that matched nothing
///
/// Used when an operation resolves a row by a human-supplied key (a venue
/// title, say) and carries on without it. Emits a warning whose message is
/// the user-facing `"<Entity> '<key>' not found."` line, with the entity and
/// key as fields.
///
/// # Example
///
/// ```
/// # use gigbook_core::log_op_miss;
/// log_op_miss!("band_schedule", "Venue", "Wembley");
/// ```
#[macro_export]
macro_rules! log_op_miss {
    ($op:expr, $entity:expr, $key:expr) => {{
        let entity: &str = $entity;
        let key: &str = $key;
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = gigbook_core_types::schema::EVENT_MISS,
            entity = entity,
            lookup_key = key,
            "{} '{}' not found.",
            entity,
            key
        );
    }};
}
