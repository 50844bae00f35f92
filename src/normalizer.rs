use crate::model::RequestError;

/// Trims and upper-cases a user-entered symbol; empty input is rejected.
pub fn normalize_symbol(raw: &str) -> Result<String, RequestError> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(RequestError::EmptySymbol);
    }
    Ok(symbol)
}
