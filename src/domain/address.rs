use crate::domain::errors::ActionError;

const ADDRESS_HEX_LEN: usize = 40;

// Validate a 0x-prefixed, 20-byte hex chain address and return it owned.
pub fn validate_eth_address(value: &str) -> Result<String, ActionError> {
    let hex = value.strip_prefix("0x").ok_or(ActionError::InvalidAddress)?;
    if hex.len() != ADDRESS_HEX_LEN {
        return Err(ActionError::InvalidAddress);
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ActionError::InvalidAddress);
    }
    Ok(value.to_string())
}
