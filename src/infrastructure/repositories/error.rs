use crate::domain::errors::DomainError;

const CNT_ACTIVITY_KIND_CHECK: &str = "activities_kind_format_chk";
const CNT_ACTIVITY_CONTACT_CHECK: &str = "activities_contact_pair_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ACTIVITY_KIND_CHECK => {
                        DomainError::Validation("kind has an invalid format".into())
                    }
                    CNT_ACTIVITY_CONTACT_CHECK => DomainError::Validation(
                        "contact isd code and phone must be stored together".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
