use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "blog_posts_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_POST_SLUG) {
                return DomainError::Conflict("blog post with this slug already exists".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "22001" => {
                        return DomainError::Validation("value too long for column".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::post_not_found(),
        _ => DomainError::Persistence(err.to_string()),
    }
}
