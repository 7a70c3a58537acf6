use crate::error::{Result, VitaError};

/// Open a URL in the default browser. Platform command selection is
/// delegated to the `open` crate.
pub fn open_url(url: &str) -> Result<()> {
    open::that(url).map_err(VitaError::Browser)
}
