use crate::domain::errors::DomainError;

pub fn map_json(err: serde_json::Error) -> DomainError {
    if err.is_data() || err.is_syntax() || err.is_eof() {
        DomainError::Validation(format!(
            "malformed post data at line {} column {}: {err}",
            err.line(),
            err.column()
        ))
    } else {
        DomainError::Persistence(err.to_string())
    }
}

pub fn map_io(err: &std::io::Error, path: &std::path::Path) -> DomainError {
    match err.kind() {
        std::io::ErrorKind::NotFound => {
            DomainError::NotFound(format!("post file {} does not exist", path.display()))
        }
        _ => DomainError::Persistence(format!("reading {}: {err}", path.display())),
    }
}
