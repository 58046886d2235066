//! Default value functions for serde deserialization.

pub fn length() -> f64 {
    10.0
}

pub fn resolution() -> f64 {
    0.05
}

pub fn frame_id() -> String {
    "map".to_string()
}

pub fn layer_names() -> Vec<String> {
    vec!["elevation".to_string(), "variance".to_string()]
}

pub fn basic_layers() -> Vec<String> {
    vec!["elevation".to_string()]
}
