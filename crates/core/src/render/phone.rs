//! `tel:` links

use crate::record::{Detection, Payload};

use super::{markdown_link, RenderError};

/// `[890-123-4567](tel:8901234567)`
///
/// A phone record without a display or `tel:` target can only come from a
/// broken detector, so it is reported instead of echoed back.
pub fn render(detection: &Detection) -> Result<String, RenderError> {
    let Payload::Phone(phone) = &detection.payload else {
        return Ok(detection.original_input.clone());
    };
    if phone.formatted_display.is_empty() {
        return Err(RenderError::IncompletePhoneRecord("formatted display"));
    }
    if phone.tel_url.is_empty() {
        return Err(RenderError::IncompletePhoneRecord("tel URL"));
    }
    Ok(markdown_link(
        &phone.formatted_display,
        &format!("tel:{}", phone.tel_url),
    ))
}
