use docflow::error::DocflowError;
use docflow::session::SessionStore;

/// [`SessionStore`] backed by `window.localStorage`.
pub(super) struct BrowserSessionStore;

fn local_storage() -> Result<web_sys::Storage, DocflowError> {
    let window = web_sys::window().ok_or_else(|| DocflowError::Storage("no window".into()))?;
    window
        .local_storage()
        .map_err(|_| DocflowError::Storage("local_storage() threw".into()))?
        .ok_or_else(|| DocflowError::Storage("localStorage unavailable".into()))
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, DocflowError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| DocflowError::Storage("get_item() threw".into()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DocflowError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| DocflowError::Storage("set_item() threw".into()))
    }

    fn remove(&mut self, key: &str) -> Result<(), DocflowError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| DocflowError::Storage("remove_item() threw".into()))
    }
}
