use gloo_storage::{LocalStorage, Storage};

// Raw string access: the token is stored unquoted, so serde-based
// LocalStorage::get/set would not round-trip with existing sessions.

pub fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn write_raw(key: &str, value: &str) -> Result<(), String> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|_| format!("Could not write '{}' to localStorage", key))
}

pub fn remove(key: &str) {
    LocalStorage::delete(key);
}
