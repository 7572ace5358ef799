use docflow::document::IncomingFile;
use wasm_bindgen::JsCast;

/// Name and reported media type of every file chosen in a file input.
pub(super) fn incoming_files(ev: &web_sys::Event) -> Vec<IncomingFile> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| IncomingFile::new(file.name(), file.type_()))
        .collect()
}

/// Starts a browser download of `url` through a temporary anchor.
pub(super) fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let document = window.document().ok_or("no document".to_string())?;

    let a = document
        .create_element("a")
        .map_err(|_| "document: create_element failed".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "document: anchor cast failed".to_string())?;

    a.set_href(url);
    a.set_download(filename);
    a.click();
    Ok(())
}

/// Fire-and-forget; a rejected clipboard promise is ignored.
pub(super) fn write_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}
