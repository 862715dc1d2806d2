use business::domain::errors::RepositoryError;

/// Maps sqlx failures onto the repository vocabulary of the business layer.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::Conflict,
        _ => {
            tracing::error!("Database query failed: {}", err);
            RepositoryError::DatabaseError
        }
    }
}

/// `UPDATE`/`DELETE` touching no row of the tenant means the record is absent.
pub fn ensure_affected(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_row_to_not_found() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            RepositoryError::NotFound
        ));
    }

    #[test]
    fn should_map_pool_exhaustion_to_database_error() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }

    #[test]
    fn should_report_not_found_when_nothing_was_touched() {
        assert!(matches!(ensure_affected(0), Err(RepositoryError::NotFound)));
        assert!(ensure_affected(1).is_ok());
    }
}
