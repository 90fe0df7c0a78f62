use crate::{MAX_ENTITY_NAME_LEN, MAX_MEMBER_NAME_LEN};

/// Ensure a member identifier is non-empty, ASCII, and within bounds.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("identifier is empty".to_string());
    }
    if ident.len() > MAX_MEMBER_NAME_LEN {
        return Err(format!(
            "identifier '{ident}' exceeds max length {MAX_MEMBER_NAME_LEN}"
        ));
    }
    if !ident.is_ascii() {
        return Err(format!("identifier '{ident}' must be ASCII"));
    }

    Ok(())
}

/// Ensure entity names are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("entity name is empty".to_string());
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }
    if !name.is_ascii() {
        return Err(format!("entity name '{name}' must be ASCII"));
    }

    Ok(())
}
