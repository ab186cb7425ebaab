//! JSON output for render targets that draw the scene themselves.

use crate::scene::Scene;

/// Serialize the scene as pretty-printed JSON.
pub fn to_json(scene: &Scene) -> serde_json::Result<String> {
    serde_json::to_string_pretty(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use hari_core::{ClockConfig, TimeSample};
    use serde_json::Value;

    #[test]
    fn test_scene_json_shape() {
        let scene = compose(&ClockConfig::default(), &TimeSample::new(3, 0, 0));
        let value: Value = serde_json::from_str(&to_json(&scene).unwrap()).unwrap();

        assert_eq!(value["size"], 300.0);
        assert_eq!(value["face"]["stroke"], Value::Null);
        assert_eq!(value["marks"].as_array().map(Vec::len), Some(60));
        assert_eq!(value["numerals"][0]["value"], 1);
        assert_eq!(value["numerals"][0]["fontWeight"], 300);
        assert_eq!(value["numerals"][0]["fontFamily"], "'Inter', sans-serif");
        assert_eq!(value["marks"][0]["isHour"], true);
        assert_eq!(value["marks"][0]["start"]["y"], 24.0);
        assert_eq!(value["hands"][0]["kind"], "hour");
        assert_eq!(value["hands"][0]["angleDeg"], 90.0);
        assert_eq!(value["hands"][0]["cap"], "round");
        assert_eq!(value["backgroundColor"], "#ffffff");
        assert_eq!(value["shadow"]["offsetY"], 20.0);
        assert_eq!(value["shadow"]["blur"], 40.0);
    }
}
