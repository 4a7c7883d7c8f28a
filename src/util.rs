// Console logging helper
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
