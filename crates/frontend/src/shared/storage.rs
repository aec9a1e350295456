use web_sys::window;

const SIDEBAR_COLLAPSED_KEY: &str = "sidebar_collapsed";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save sidebar collapse flag to localStorage
pub fn save_sidebar_collapsed(collapsed: bool) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" });
    }
}

/// Get sidebar collapse flag from localStorage (expanded when unset)
pub fn get_sidebar_collapsed() -> bool {
    get_local_storage()
        .and_then(|s| s.get_item(SIDEBAR_COLLAPSED_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

const LIST_SETTINGS_KEY: &str = "list_settings";

/// TOML override of list page sizes, if one was saved in localStorage
pub fn get_list_settings_override() -> Option<String> {
    get_local_storage()?
        .get_item(LIST_SETTINGS_KEY)
        .ok()
        .flatten()
        .filter(|v| !v.trim().is_empty())
}
