use ndc_model::{NdcCode, NdcError};

/// Characters accepted (and discarded) as segment separators.
const SEPARATORS: [char; 4] = ['-', ' ', '\t', '.'];

/// Strip separators from a raw code and validate the remaining digits.
///
/// Only the characters in [`SEPARATORS`] are stripped; any other non-digit
/// fails with [`NdcError::InvalidCharacter`] carrying its position in the raw
/// input. A digit count other than 10 or 11 fails with
/// [`NdcError::InvalidLength`]. Pure and idempotent on success.
pub fn normalize(raw: &str) -> Result<NdcCode, NdcError> {
    let mut digits = String::with_capacity(raw.len());
    for (position, character) in raw.chars().enumerate() {
        if character.is_ascii_digit() {
            digits.push(character);
        } else if !SEPARATORS.contains(&character) {
            return Err(NdcError::InvalidCharacter {
                character,
                position,
            });
        }
    }
    if digits.len() != 10 && digits.len() != 11 {
        return Err(NdcError::InvalidLength(digits.len()));
    }
    NdcCode::new(digits)
}
