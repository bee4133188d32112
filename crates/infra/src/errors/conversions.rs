//! Conversions from external infrastructure errors into domain errors.

use instaloan_domain::InstaLoanError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub InstaLoanError);

impl From<InfraError> for InstaLoanError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<InstaLoanError> for InfraError {
    fn from(value: InstaLoanError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → InstaLoanError */
/* -------------------------------------------------------------------------- */

impl From<SqlError> for InfraError {
    fn from(err: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let mapped = match err {
            SqlError::SqliteFailure(code, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match code.code {
                    ErrorCode::DatabaseBusy => InstaLoanError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        InstaLoanError::Storage("database is locked".into())
                    }
                    _ => InstaLoanError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        code.code, code.extended_code, message
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                InstaLoanError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                InstaLoanError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                InstaLoanError::Storage(format!("invalid column type: {ty}"))
            }
            SqlError::Utf8Error(_) => {
                InstaLoanError::Storage("invalid UTF-8 returned from sqlite".into())
            }
            other => InstaLoanError::Storage(other.to_string()),
        };
        InfraError(mapped)
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → InstaLoanError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(err: r2d2::Error) -> Self {
        InfraError(InstaLoanError::Storage(format!("connection pool error: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → InstaLoanError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(InstaLoanError::Storage(format!("stored record is not valid JSON: {err}")))
    }
}

/* -------------------------------------------------------------------------- */
/* tokio JoinError → InstaLoanError */
/* -------------------------------------------------------------------------- */

impl From<tokio::task::JoinError> for InfraError {
    fn from(err: tokio::task::JoinError) -> Self {
        let mapped = if err.is_cancelled() {
            InstaLoanError::Internal("blocking task cancelled".into())
        } else {
            InstaLoanError::Internal(format!("blocking task failed: {err}"))
        };
        InfraError(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rows_maps_to_not_found() {
        let err: InstaLoanError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(err, InstaLoanError::NotFound(_)));
    }

    #[test]
    fn json_error_maps_to_storage() {
        let parse_err =
            serde_json::from_str::<serde_json::Value>("{not json").expect_err("invalid JSON");
        let err: InstaLoanError = InfraError::from(parse_err).into();
        assert!(matches!(err, InstaLoanError::Storage(_)));
    }
}
